// src/tests/utils.rs

use crate::config::SiteConfig;
use crate::inquiry::form::Inquiry;
use crate::inquiry::sink::SubmitError;
use crate::inquiry::InquirySink;
use crate::router::handle;
use crate::site::Site;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Records every inquiry it is handed. Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub received: Arc<Mutex<Vec<Inquiry>>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        RecordingSink {
            fail: true,
            ..Default::default()
        }
    }

    pub fn received(&self) -> Vec<Inquiry> {
        self.received.lock().unwrap().clone()
    }
}

impl InquirySink for RecordingSink {
    fn submit(&self, inquiry: &Inquiry) -> Result<(), SubmitError> {
        self.received.lock().unwrap().push(inquiry.clone());
        if self.fail {
            return Err(SubmitError::Unavailable("test backend down".into()));
        }
        Ok(())
    }
}

/// Default config, no maps key, plus a recording sink the test can inspect.
pub fn test_site() -> (Site, RecordingSink) {
    let sink = RecordingSink::default();
    let site = Site::new(SiteConfig::default()).with_inquiry_sink(sink.clone());
    (site, sink)
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, form: &str) -> Request {
    let mut req = Request::new(Body::from(form.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

/// Mark a request as issued by htmx.
pub fn htmx(mut req: Request) -> Request {
    req.headers_mut().insert("HX-Request", "true".parse().unwrap());
    req
}

/// Run a request through the router, converting errors the way `main` does.
pub fn send(site: &Site, req: Request) -> Response {
    match handle(req, site) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    }
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
