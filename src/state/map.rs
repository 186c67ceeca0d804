// src/state/map.rs
//
// Adapter state for the third-party map widget. Bounds fitting and the final
// zoom are computed by the mapping library in the browser; this side only
// prepares the configuration it is handed and tracks the info-popup
// selection. The one-shot clamp into `IDEAL_ZOOM` runs in static/map.js on
// the widget's first idle event.

use base64::Engine;
use serde::Serialize;
use thiserror::Error;

/// Degrees added on each side of the centre when fitting bounds.
pub const BOUNDS_PADDING_DEG: f64 = 0.01;
/// Zoom levels at which the single marker stays readable.
pub const IDEAL_ZOOM: (u8, u8) = (12, 15);
pub const MIN_ZOOM: u8 = 10;
pub const MAX_ZOOM: u8 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub api_key: Option<String>,
    pub center: LatLng,
    pub default_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Thaltej, Ahmedabad
        Self {
            api_key: None,
            center: LatLng {
                lat: 23.0504,
                lng: 72.5178,
            },
            default_zoom: 14,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("no maps API credential configured")]
    MissingCredential,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Square box of `padding` degrees around `center`.
    pub fn around(center: LatLng, padding: f64) -> Self {
        Bounds {
            south: center.lat - padding,
            west: center.lng - padding,
            north: center.lat + padding,
            east: center.lng + padding,
        }
    }
}

/// An initialised map: the credential is present and the viewport is fixed.
#[derive(Debug, Clone)]
pub struct MapView {
    api_key: String,
    center: LatLng,
    default_zoom: u8,
    bounds: Bounds,
}

impl MapView {
    pub fn initialise(cfg: &MapConfig) -> Result<Self, MapError> {
        let api_key = cfg
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(MapError::MissingCredential)?
            .to_string();

        Ok(MapView {
            api_key,
            center: cfg.center,
            default_zoom: cfg.default_zoom,
            bounds: Bounds::around(cfg.center, BOUNDS_PADDING_DEG),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// JSON handed to the client-side widget.
    pub fn client_config(&self) -> ClientConfig<'_> {
        ClientConfig {
            center: self.center,
            zoom: self.default_zoom,
            bounds: self.bounds,
            ideal_zoom: IDEAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            marker: MarkerConfig {
                icon: marker_icon_uri(),
                width: 40,
                height: 54,
                anchor: (20, 54),
            },
            info_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig {
    pub icon: String,
    pub width: u32,
    pub height: u32,
    pub anchor: (u32, u32),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig<'a> {
    pub center: LatLng,
    pub zoom: u8,
    pub bounds: Bounds,
    pub ideal_zoom: (u8, u8),
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub marker: MarkerConfig,
    /// Fragment URL the marker click loads the info popup from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_path: Option<&'a str>,
}

const MARKER_SVG: &str = concat!(
    r##"<svg width="40" height="54" viewBox="0 0 40 54" fill="none" xmlns="http://www.w3.org/2000/svg">"##,
    r##"<circle cx="20" cy="20" r="18" fill="rgba(255,0,0,0.2)"/>"##,
    r##"<ellipse cx="20" cy="48" rx="8" ry="2" fill="rgba(0,0,0,0.2)"/>"##,
    r##"<path d="M20 0C9 0 0 9 0 20C0 35 20 54 20 54C20 54 40 35 40 20C40 9 31 0 20 0Z" fill="#FF0000"/>"##,
    r##"<path d="M20 4C11.2 4 4 11.2 4 20C4 28.8 20 46 20 46C20 46 36 28.8 36 20C36 11.2 28.8 4 20 4Z" fill="#FF3333"/>"##,
    r##"<circle cx="20" cy="20" r="6" fill="white"/>"##,
    "</svg>",
);

/// The custom marker as a data URI.
pub fn marker_icon_uri() -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(MARKER_SVG)
    )
}

/// Info popup selection. `None` means the popup is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapSelection(Option<LatLng>);

impl MapSelection {
    /// Marker click: the popup opens on the marker's position.
    pub fn activate_marker(&mut self, marker: LatLng) {
        self.0 = Some(marker);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}
