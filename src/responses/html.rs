use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

fn build(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

pub fn html_response(markup: Markup) -> ResultResp {
    build(200, markup)
}

/// An htmx swap target. Same as a page response, named for call sites.
pub fn html_fragment(markup: Markup) -> ResultResp {
    build(200, markup)
}

/// HTML with a non-200 status, e.g. a form re-rendered with 422.
pub fn with_status(status: u16, markup: Markup) -> ResultResp {
    build(status, markup)
}

/// 204: htmx leaves the current DOM as it is.
pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
