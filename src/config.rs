// src/config.rs

use std::fmt::Display;
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::state::map::{LatLng, MapConfig, MAX_ZOOM, MIN_ZOOM};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
    pub map: MapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            static_dir: PathBuf::from("static"),
            map: MapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Build from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = SiteConfig::default();

        let center = LatLng {
            lat: within(
                "MAP_CENTER_LAT",
                parse_or(&get, "MAP_CENTER_LAT", defaults.map.center.lat)?,
                -90.0..=90.0,
            )?,
            lng: within(
                "MAP_CENTER_LNG",
                parse_or(&get, "MAP_CENTER_LNG", defaults.map.center.lng)?,
                -180.0..=180.0,
            )?,
        };

        Ok(SiteConfig {
            bind_addr: parse_or(&get, "SITE_ADDR", defaults.bind_addr)?,
            max_workers: within(
                "SITE_WORKERS",
                parse_or(&get, "SITE_WORKERS", defaults.max_workers)?,
                1..=usize::MAX,
            )?,
            static_dir: get("SITE_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            map: MapConfig {
                api_key: get("MAPS_API_KEY"),
                center,
                default_zoom: within(
                    "MAP_DEFAULT_ZOOM",
                    parse_or(&get, "MAP_DEFAULT_ZOOM", defaults.map.default_zoom)?,
                    MIN_ZOOM..=MAX_ZOOM,
                )?,
            },
        })
    }
}

/// Reject parsed values the server cannot run with.
fn within<T>(key: &'static str, value: T, range: RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
        assert!(cfg.map.api_key.is_none());
        assert_eq!(cfg.map.default_zoom, 14);
    }

    #[test]
    fn values_override_defaults() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_ADDR", "0.0.0.0:8080"),
            ("SITE_WORKERS", "2"),
            ("MAPS_API_KEY", "abc123"),
            ("MAP_CENTER_LAT", "51.5"),
            ("MAP_DEFAULT_ZOOM", "13"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_workers, 2);
        assert_eq!(cfg.map.api_key.as_deref(), Some("abc123"));
        assert_eq!(cfg.map.center.lat, 51.5);
        assert_eq!(cfg.map.default_zoom, 13);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cfg = SiteConfig::from_lookup(lookup(&[("MAPS_API_KEY", "   ")])).unwrap();
        assert!(cfg.map.api_key.is_none());
    }

    #[test]
    fn unparseable_value_names_the_key() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_WORKERS", "many")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"many\" for SITE_WORKERS");
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_WORKERS", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"0\" for SITE_WORKERS");

        let err = SiteConfig::from_lookup(lookup(&[("MAP_DEFAULT_ZOOM", "40")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"40\" for MAP_DEFAULT_ZOOM");

        assert!(SiteConfig::from_lookup(lookup(&[("MAP_DEFAULT_ZOOM", "9")])).is_err());
        assert!(SiteConfig::from_lookup(lookup(&[("MAP_CENTER_LAT", "91")])).is_err());

        let edge = SiteConfig::from_lookup(lookup(&[("SITE_WORKERS", "1"), ("MAP_DEFAULT_ZOOM", "18")]))
            .unwrap();
        assert_eq!(edge.max_workers, 1);
        assert_eq!(edge.map.default_zoom, 18);
    }
}
