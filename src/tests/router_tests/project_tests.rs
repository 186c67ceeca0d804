// src/tests/router_tests/project_tests.rs

use crate::state::map::MapConfig;
use crate::tests::utils::{body_string, get, send, test_site};

#[test]
fn detail_page_hero_uses_the_project_record() {
    let (site, _) = test_site();
    let mut resp = send(&site, get("/projects/3"));
    assert_eq!(resp.status(), 200);

    let html = body_string(&mut resp);
    assert!(html.contains("<title>Adani Embrace Shantigram | The Real Estate Universe</title>"));
    assert!(html.contains("Shantigram"));
    assert!(html.contains("₹ 1.29–2.67 Cr"));
    assert!(html.contains("3 BHK Apartments"));
    assert!(html.contains("TOP PROJECT IN AHM"));

    for heading in [
        "Key Highlights",
        "Gallery",
        "Location &amp; Advantages",
        "Proximity Highlights",
        "Featured Development",
        "Inquire Now",
        "Related Projects",
    ] {
        assert!(html.contains(heading), "{heading} missing");
    }
}

#[test]
fn unknown_project_is_404_without_partial_page() {
    let (site, _) = test_site();
    for uri in ["/projects/does-not-exist", "/projects/5", "/projects/"] {
        let mut resp = send(&site, get(uri));
        assert_eq!(resp.status(), 404, "{uri}");
        let html = body_string(&mut resp);
        assert!(!html.contains("Key Highlights"));
        assert!(!html.contains("site-header"));
    }
}

#[test]
fn map_without_credential_shows_error_and_page_survives() {
    let (site, _) = test_site();
    let html = body_string(&mut send(&site, get("/projects/1")));
    assert!(html.contains("Failed to load map. Please try again later."));
    assert!(html.contains("Proximity Highlights"));
    assert!(html.contains("The Skyline Residences"));
}

#[test]
fn map_with_credential_embeds_client_config() {
    let (mut site, _) = test_site();
    site.config.map = MapConfig {
        api_key: Some("test-key".into()),
        ..MapConfig::default()
    };
    let html = body_string(&mut send(&site, get("/projects/1")));
    assert!(html.contains("Loading map..."));
    assert!(html.contains("id=\"map-config\""));
    assert!(html.contains("data:image/svg+xml;base64,"));
    assert!(!html.contains("Failed to load map"));
}

#[test]
fn tab_query_selects_the_gallery_tab() {
    let (site, _) = test_site();
    let html = body_string(&mut send(&site, get("/projects/2?tab=videos")));
    assert!(html.contains("data-tab=\"videos\""));

    let html = body_string(&mut send(&site, get("/projects/2?tab=bogus")));
    assert!(html.contains("data-tab=\"photos\""));
}
