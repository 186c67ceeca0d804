// src/tests/router_tests/fragment_tests.rs

use crate::tests::utils::{body_string, get, send, test_site};

#[test]
fn scroll_below_threshold_is_no_content() {
    let (site, _) = test_site();
    for y in [0, 5, 8, 10] {
        let resp = send(&site, get(&format!("/fragments/nav?scrolled=0&menu=0&event=scroll&y={y}")));
        assert_eq!(resp.status(), 204, "y={y}");
    }
}

#[test]
fn crossing_the_threshold_rerenders_the_header() {
    let (site, _) = test_site();

    let mut resp = send(&site, get("/fragments/nav?scrolled=0&menu=0&event=scroll&y=11"));
    assert_eq!(resp.status(), 200);
    let html = body_string(&mut resp);
    assert!(html.contains("data-scrolled=\"1\""));
    // Next request carries the new state.
    assert!(html.contains("scrolled=1&amp;menu=0&amp;event=scroll"));

    // Still past the threshold: nothing to do.
    let resp = send(&site, get("/fragments/nav?scrolled=1&menu=0&event=scroll&y=400"));
    assert_eq!(resp.status(), 204);

    let html = body_string(&mut send(&site, get("/fragments/nav?scrolled=1&menu=0&event=scroll&y=9")));
    assert!(html.contains("data-scrolled=\"0\""));
}

#[test]
fn toggle_opens_and_closes_with_scroll_lock() {
    let (site, _) = test_site();

    let open = body_string(&mut send(&site, get("/fragments/nav?scrolled=0&menu=0&event=toggle")));
    assert!(open.contains("data-menu=\"1\""));
    assert!(open.contains("body{overflow:hidden}"));

    let closed = body_string(&mut send(&site, get("/fragments/nav?scrolled=0&menu=1&event=toggle")));
    assert!(closed.contains("data-menu=\"0\""));
    assert!(!closed.contains("overflow:hidden"));
}

#[test]
fn following_a_link_closes_the_menu_and_redirects() {
    let (site, _) = test_site();

    let mut resp = send(&site, get("/fragments/nav?scrolled=0&menu=1&event=link&to=%2Fland"));
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("HX-Redirect").unwrap(), "/land");
    let html = body_string(&mut resp);
    assert!(html.contains("data-menu=\"0\""));
    assert!(!html.contains("overflow:hidden"));

    // Menu already closed: nothing to re-render.
    let resp = send(&site, get("/fragments/nav?scrolled=0&menu=0&event=link"));
    assert_eq!(resp.status(), 204);

    // Off-site targets are ignored.
    let resp = send(&site, get("/fragments/nav?scrolled=0&menu=1&event=link&to=%2F%2Fevil.example"));
    assert!(resp.headers().get("HX-Redirect").is_none());
}

#[test]
fn malformed_nav_requests_are_400() {
    let (site, _) = test_site();
    for uri in [
        "/fragments/nav?scrolled=0&menu=0",
        "/fragments/nav?scrolled=0&menu=0&event=explode",
        "/fragments/nav?scrolled=yes&menu=0&event=toggle",
        "/fragments/nav?scrolled=0&menu=0&event=scroll",
        "/fragments/nav?scrolled=0&menu=0&event=scroll&y=far",
    ] {
        assert_eq!(send(&site, get(uri)).status(), 400, "{uri}");
    }
}

#[test]
fn gallery_fragment_switches_tab() {
    let (site, _) = test_site();

    let mut resp = send(&site, get("/projects/1/gallery?tab=videos"));
    assert_eq!(resp.status(), 200);
    let html = body_string(&mut resp);
    assert!(html.starts_with("<section id=\"project-gallery\""));
    assert!(html.contains("data-tab=\"videos\""));
    assert!(!html.contains("<html"));

    assert_eq!(send(&site, get("/projects/nope/gallery")).status(), 404);
}

#[test]
fn map_info_opens_and_closes() {
    let (site, _) = test_site();

    let open = body_string(&mut send(&site, get("/projects/1/map/info?open=1")));
    assert!(open.contains("The Sovereign"));
    assert!(open.contains("Ahmedabad, Gujarat"));
    assert!(open.contains("/projects/1/map/info?open=0"));

    let closed = body_string(&mut send(&site, get("/projects/1/map/info?open=0")));
    assert_eq!(closed, "<div id=\"map-info\"></div>");

    assert_eq!(send(&site, get("/projects/9/map/info")).status(), 404);
}
