use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};
use tracing::error;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::Io(msg) => {
            error!("io error while serving: {msg}");
            render_error(500, "Internal Server Error")
        }

        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body{font-family:system-ui,sans-serif;max-width:720px;margin:4rem auto;padding:1rem;background:#1A1A1A;color:#fff}"
                    "h1{font-size:2rem;margin-bottom:1rem}"
                    "p{font-size:1.1rem;color:#ccc}"
                    "a{color:#E50914}"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn body_of(mut resp: Response) -> String {
        let mut s = String::new();
        resp.body_mut().reader().read_to_string(&mut s).unwrap();
        s
    }

    #[test]
    fn statuses_follow_the_variant() {
        assert_eq!(html_error_response(ServerError::NotFound).status(), 404);
        assert_eq!(html_error_response(ServerError::BadRequest("x".into())).status(), 400);
        assert_eq!(html_error_response(ServerError::Io("disk".into())).status(), 500);
        assert_eq!(html_error_response(ServerError::InternalError).status(), 500);
    }

    #[test]
    fn internal_details_are_not_shown() {
        let body = body_of(html_error_response(ServerError::Io("/etc/secret".into())));
        assert!(!body.contains("/etc/secret"));
        assert!(body.contains("Back to home"));
    }

    #[test]
    fn message_is_escaped() {
        let body = body_of(html_error_response(ServerError::BadRequest("<script>".into())));
        assert!(body.contains("&lt;script&gt;"));
    }
}
