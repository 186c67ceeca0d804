// src/tests/router_tests/landing_tests.rs

use crate::catalog::listings::{COMMERCIAL_SPACES, FEATURED_PROJECTS, RESIDENTIAL_SPACES};
use crate::tests::utils::{body_string, get, send, test_site};

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| html.find(n).unwrap_or_else(|| panic!("{n} not rendered")))
        .collect()
}

fn ascending(v: &[usize]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn landing_page_renders_every_section_in_order() {
    let (site, _) = test_site();
    let mut resp = send(&site, get("/"));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let html = body_string(&mut resp);
    let sections = positions(
        &html,
        &[
            "site-header",
            "The Skyline<br>Residences",
            "Featured Projects",
            "Residential Spaces",
            "Commercial Spaces",
            "Location-wise Collections",
            "Top 10 Trending Projects This Week",
            "Top 10 Trending Articles This Week",
            "<footer",
        ],
    );
    assert!(ascending(&sections));
}

#[test]
fn featured_cards_follow_catalog_order_and_link_to_details() {
    let (site, _) = test_site();
    let html = body_string(&mut send(&site, get("/")));

    let titles: Vec<&str> = FEATURED_PROJECTS.iter().map(|p| p.title).collect();
    assert!(ascending(&positions(&html, &titles)));

    for project in FEATURED_PROJECTS {
        assert!(html.contains(&format!("href=\"/projects/{}\"", project.id)));
    }
}

#[test]
fn every_listing_gets_exactly_one_card() {
    let (site, _) = test_site();
    let html = body_string(&mut send(&site, get("/")));

    let cards = html.matches("class=\"listing-card").count();
    assert_eq!(
        cards,
        FEATURED_PROJECTS.len() + RESIDENTIAL_SPACES.len() + COMMERCIAL_SPACES.len()
    );

    // Commercial cards show size where residential ones show bhk.
    assert!(html.contains("10,000 - 100,000 sq ft"));
    assert!(html.contains("4/5/6-BHK villas"));
    assert!(html.contains("12 Sep 2024"));
}

#[test]
fn see_all_controls_are_present_but_inert() {
    let (site, _) = test_site();
    let html = body_string(&mut send(&site, get("/")));
    assert!(html.matches("See All").count() >= 6);
    assert!(html.matches("aria-disabled=\"true\"").count() >= 6);
}

#[test]
fn unknown_route_is_404() {
    let (site, _) = test_site();
    let mut resp = send(&site, get("/residential"));
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Back to home"));
}
