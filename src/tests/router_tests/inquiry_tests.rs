// src/tests/router_tests/inquiry_tests.rs

use crate::config::SiteConfig;
use crate::inquiry::Interest;
use crate::site::Site;
use crate::templates::components::inquiry_form::{FORM_ID, SUBMIT_FAILED_TEXT};
use crate::tests::utils::{body_string, htmx, post_form, send, test_site, RecordingSink};

const JANE: &str =
    "fullName=Jane+Doe&email=jane%40example.com&phone=5551234567&interest=2bhk&agree=on";

#[test]
fn complete_inquiry_reaches_the_sink_exactly_once() {
    let (site, sink) = test_site();

    let mut resp = send(&site, post_form("/projects/1/inquiry", JANE));
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Thank you, Jane Doe!"));

    let received = sink.received();
    assert_eq!(received.len(), 1);
    let inquiry = &received[0];
    assert_eq!(inquiry.full_name, "Jane Doe");
    assert_eq!(inquiry.email, "jane@example.com");
    assert_eq!(inquiry.phone, "5551234567");
    assert_eq!(inquiry.interest, Interest::TwoBhk);
    assert!(inquiry.agree);
}

#[test]
fn missing_field_is_422_and_never_submitted() {
    let (site, sink) = test_site();

    let form = "fullName=Jane+Doe&email=&phone=5551234567&interest=2bhk&agree=on";
    let mut resp = send(&site, post_form("/projects/1/inquiry", form));
    assert_eq!(resp.status(), 422);

    let html = body_string(&mut resp);
    assert!(html.contains("Email address is required"));
    assert!(html.contains("value=\"Jane Doe\""));
    assert!(sink.received().is_empty());
}

#[test]
fn unchecked_consent_is_rejected() {
    let (site, sink) = test_site();

    let form = "fullName=Jane+Doe&email=jane%40example.com&phone=5551234567&interest=2bhk";
    let mut resp = send(&site, post_form("/projects/1/inquiry", form));
    assert_eq!(resp.status(), 422);
    assert!(body_string(&mut resp).contains("Consent is required"));
    assert!(sink.received().is_empty());
}

#[test]
fn inquiry_for_unknown_project_is_404() {
    let (site, sink) = test_site();
    let resp = send(&site, post_form("/projects/does-not-exist/inquiry", JANE));
    assert_eq!(resp.status(), 404);
    assert!(sink.received().is_empty());
}

#[test]
fn sink_failure_is_500() {
    let sink = RecordingSink::failing();
    let site = Site::new(SiteConfig::default()).with_inquiry_sink(sink.clone());

    let resp = send(&site, post_form("/projects/2/inquiry", JANE));
    assert_eq!(resp.status(), 500);
    assert_eq!(sink.received().len(), 1);
}

#[test]
fn htmx_gets_the_rejected_form_as_a_swappable_200() {
    let (site, sink) = test_site();

    // Whitespace passes the browser's `required` check but not validation.
    let form = "fullName=+++&email=jane%40example.com&phone=5551234567&interest=2bhk&agree=on";
    let mut resp = send(&site, htmx(post_form("/projects/1/inquiry", form)));
    assert_eq!(resp.status(), 200);

    let html = body_string(&mut resp);
    assert!(html.starts_with(&format!("<form id=\"{FORM_ID}\"")));
    assert!(html.contains("Full name is required"));
    assert!(html.contains("value=\"jane@example.com\""));
    assert!(sink.received().is_empty());
}

#[test]
fn htmx_sink_failure_keeps_the_form_with_a_message() {
    let sink = RecordingSink::failing();
    let site = Site::new(SiteConfig::default()).with_inquiry_sink(sink.clone());

    let mut resp = send(&site, htmx(post_form("/projects/2/inquiry", JANE)));
    assert_eq!(resp.status(), 200);

    let html = body_string(&mut resp);
    assert!(html.contains(SUBMIT_FAILED_TEXT));
    assert!(html.contains("value=\"Jane Doe\""));
    assert!(!html.contains("Thank you"));
    assert_eq!(sink.received().len(), 1);
}
