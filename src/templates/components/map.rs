// src/templates/components/map.rs

use crate::state::map::{ClientConfig, MapConfig, MapError, MapSelection, MapView};
use maud::{html, Markup, PreEscaped};
use tracing::warn;
use url::form_urlencoded;

pub const MAP_ERROR_TEXT: &str = "Failed to load map. Please try again later.";
const MAPS_SCRIPT: &str = "https://maps.googleapis.com/maps/api/js";

fn maps_script_src(api_key: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("key", api_key)
        .append_pair("callback", "initProjectMap")
        .finish();
    format!("{MAPS_SCRIPT}?{query}")
}

fn client_json(config: &ClientConfig) -> Result<String, serde_json::Error> {
    // Keep the payload from closing its own <script> element.
    Ok(serde_json::to_string(config)?.replace("</", "<\\/"))
}

fn map_failed() -> Markup {
    html! {
        div class="map-error w-full h-full flex items-center justify-center bg-[#0A0A0A] text-gray-400 text-sm" {
            (MAP_ERROR_TEXT)
        }
    }
}

/// The map canvas for one project. A missing credential renders the error
/// text in place of the canvas; nothing retries.
pub fn map_widget(cfg: &MapConfig, info_path: &str) -> Markup {
    let view = match MapView::initialise(cfg) {
        Ok(view) => view,
        Err(MapError::MissingCredential) => {
            warn!("map disabled: MAPS_API_KEY is not set");
            return map_failed();
        }
    };

    let config = ClientConfig {
        info_path: Some(info_path),
        ..view.client_config()
    };
    let json = match client_json(&config) {
        Ok(json) => json,
        Err(e) => {
            warn!("could not encode map config: {e}");
            return map_failed();
        }
    };

    html! {
        div id="project-map" class="relative w-full h-full" {
            div class="map-loading absolute inset-0 flex items-center justify-center bg-[#0A0A0A] text-gray-400 text-sm" {
                "Loading map..."
            }
            div id="map-info" {}
        }
        script type="application/json" id="map-config" { (PreEscaped(json)) }
        script src="/static/map.js" defer {}
        script src=(maps_script_src(view.api_key())) async defer {}
    }
}

/// Info popup for the single marker. Closed renders an empty slot the
/// marker can load into again.
pub fn map_info(selection: MapSelection, title: &str, region: &str, info_path: &str) -> Markup {
    html! {
        div id="map-info" {
            @if selection.is_open() {
                div class="absolute left-1/2 top-1/3 -translate-x-1/2 bg-white text-black rounded-lg shadow-lg p-4 min-w-[200px]" {
                    button type="button" class="absolute top-1 right-2 text-gray-500"
                        aria-label="Close"
                        hx-get={ (info_path) "?open=0" }
                        hx-target="#map-info"
                        hx-swap="outerHTML" { "×" }
                    h3 class="font-semibold" { (title) }
                    p class="text-sm text-gray-600" { (region) }
                }
            }
        }
    }
}
