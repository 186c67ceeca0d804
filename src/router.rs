use crate::catalog::chrome::NAVIGATION;
use crate::catalog::project_page::MAP_LOCATION_REGION;
use crate::errors::ServerError;
use crate::inquiry::InquiryDraft;
use crate::responses::{html_fragment, html_response, no_content, static_file, with_status, ResultResp};
use crate::site::Site;
use crate::state::header::{self, HeaderEvent, HeaderState};
use crate::state::{GalleryTab, MapSelection};
use crate::templates;
use crate::templates::components::inquiry_form::SUBMIT_FAILED_TEXT;
use crate::templates::components::{inquiry_form, inquiry_thanks, map_info, navigation};
use crate::templates::sections::project::{gallery, map_info_path};
use astra::Request;
use http::HeaderValue;
use std::collections::HashMap;
use std::io::Read;
use tracing::{info, warn};
use url::form_urlencoded;

/// Upper bound on an inquiry body; the form is four short fields.
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(mut req: Request, site: &Site) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = parse_query(req.uri().query());
    // htmx only swaps 2xx responses into the page.
    let from_htmx = req.headers().contains_key("HX-Request");

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => html_response(templates::landing_page(site)),

        ("GET", ["projects", id]) => {
            let tab = GalleryTab::from_query(query.get("tab").map(String::as_str));
            html_response(templates::project_page(site, id, tab)?)
        }

        ("GET", ["projects", id, "gallery"]) => {
            let listing = site.catalog.find_project(id).ok_or(ServerError::NotFound)?;
            let tab = GalleryTab::from_query(query.get("tab").map(String::as_str));
            html_fragment(gallery(listing.id, site.catalog.gallery(), tab))
        }

        ("GET", ["projects", id, "map", "info"]) => {
            let listing = site.catalog.find_project(id).ok_or(ServerError::NotFound)?;
            let mut selection = MapSelection::default();
            if flag(&query, "open", true)? {
                selection.activate_marker(site.config.map.center);
            } else {
                selection.close();
            }
            html_fragment(map_info(
                selection,
                listing.title,
                MAP_LOCATION_REGION,
                &map_info_path(listing.id),
            ))
        }

        ("POST", ["projects", id, "inquiry"]) => {
            let listing = site.catalog.find_project(id).ok_or(ServerError::NotFound)?;

            let mut body = Vec::new();
            req.body_mut()
                .reader()
                .take(MAX_FORM_BYTES)
                .read_to_end(&mut body)
                .map_err(|e| ServerError::Io(format!("reading inquiry body: {e}")))?;

            let draft = InquiryDraft::from_form(&body);
            let inquiry = match draft.validate() {
                Ok(inquiry) => inquiry,
                Err(e) => {
                    let status = if from_htmx { 200 } else { 422 };
                    return with_status(status, inquiry_form(listing.id, &draft, Some(&e.to_string())));
                }
            };

            if let Err(e) = site.inquiries.submit(&inquiry) {
                warn!(project = listing.id, "inquiry not delivered: {e}");
                if from_htmx {
                    return html_fragment(inquiry_form(listing.id, &draft, Some(SUBMIT_FAILED_TEXT)));
                }
                return Err(ServerError::InternalError);
            }
            info!(project = listing.id, "inquiry accepted");
            html_fragment(inquiry_thanks(&inquiry.full_name))
        }

        ("GET", ["fragments", "nav"]) => nav_fragment(&query),

        ("GET", ["static", rest @ ..]) if !rest.is_empty() => {
            static_file(&site.config.static_dir, &rest.join("/"))
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Re-render the header for one client event, or 204 when nothing changed.
fn nav_fragment(query: &HashMap<String, String>) -> ResultResp {
    let state = HeaderState {
        scrolled: flag(query, "scrolled", false)?,
        menu_open: flag(query, "menu", false)?,
    };

    let event = match query.get("event").map(String::as_str) {
        Some("scroll") => {
            let y = query
                .get("y")
                .ok_or_else(|| ServerError::BadRequest("missing scroll offset".into()))?;
            // Overscroll can report negative offsets.
            let y: i64 = y
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid scroll offset {y:?}")))?;
            HeaderEvent::Scroll(y.clamp(0, u32::MAX as i64) as u32)
        }
        Some("toggle") => HeaderEvent::ToggleMenu,
        Some("link") => HeaderEvent::FollowLink,
        other => {
            return Err(ServerError::BadRequest(format!(
                "unknown header event {:?}",
                other.unwrap_or("")
            )))
        }
    };

    let mut resp = match header::apply(state, event) {
        Some(update) => html_fragment(navigation(&NAVIGATION, update.state, update.scroll_locked))?,
        None => no_content()?,
    };

    // Following a menu link: the header is closed above, then htmx navigates.
    if event == HeaderEvent::FollowLink {
        if let Some(to) = query.get("to").filter(|to| is_local_path(to)) {
            let value = HeaderValue::from_str(to)
                .map_err(|_| ServerError::BadRequest(format!("invalid link target {to:?}")))?;
            resp.headers_mut().insert("HX-Redirect", value);
        }
    }

    Ok(resp)
}

fn is_local_path(to: &str) -> bool {
    to.starts_with('/') && !to.starts_with("//")
}

/// A "0"/"1" query flag. Absent means `default`.
fn flag(query: &HashMap<String, String>, key: &str, default: bool) -> Result<bool, ServerError> {
    match query.get(key).map(String::as_str) {
        None => Ok(default),
        Some("1") => Ok(true),
        Some("0") => Ok(false),
        Some(other) => Err(ServerError::BadRequest(format!("invalid {key} flag {other:?}"))),
    }
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
