// src/tests/router_tests/static_tests.rs

use crate::tests::utils::{body_string, get, send, test_site};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_static_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "estate_static_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(dir.join("css")).unwrap();
    std::fs::write(dir.join("css/site.css"), "body{color:red}").unwrap();
    dir
}

#[test]
fn serves_files_with_content_type() {
    let (mut site, _) = test_site();
    site.config.static_dir = temp_static_dir();

    let mut resp = send(&site, get("/static/css/site.css"));
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css; charset=utf-8");
    assert_eq!(body_string(&mut resp), "body{color:red}");
}

#[test]
fn missing_file_is_404_and_traversal_is_400() {
    let (mut site, _) = test_site();
    site.config.static_dir = temp_static_dir();

    assert_eq!(send(&site, get("/static/css/nope.css")).status(), 404);
    assert_eq!(send(&site, get("/static/css")).status(), 404);
    assert_eq!(send(&site, get("/static/../Cargo.toml")).status(), 400);
    assert_eq!(send(&site, get("/static/css/%2e%2e/x")).status(), 404);
}

/// Every `/static/` asset a rendered page links to, in document order.
fn linked_assets(html: &str) -> Vec<String> {
    html.match_indices("\"/static/")
        .filter_map(|(at, _)| {
            let rest = &html[at + 1..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

#[test]
fn assets_linked_from_pages_are_served_from_the_default_dir() {
    let (mut site, _) = test_site();
    site.config.map.api_key = Some("test-key".into());

    let mut linked = Vec::new();
    for page in ["/", "/projects/1"] {
        let mut resp = send(&site, get(page));
        assert_eq!(resp.status(), 200);
        linked.extend(linked_assets(&body_string(&mut resp)));
    }
    assert!(linked.iter().any(|a| a == "/static/main.css"));
    assert!(linked.iter().any(|a| a == "/static/map.js"));

    for asset in linked {
        let resp = send(&site, get(&asset));
        assert_eq!(resp.status(), 200, "{asset} is linked but not served");
    }
}
