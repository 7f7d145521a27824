//! Snapper configuration: routing endpoint, snap radius, projection and
//! optional extra query parameters.

use std::fmt;
use std::fs;
use std::path::Path;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::projection::Projection;

/// Default snap radius in metres.
pub const DEFAULT_RADIUS_M: f64 = 10_000.0;

const ROUTE_SERVICE_PATH: &str = "/route/v1/driving";

/// Well-known routing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingPreset {
    /// Public OSRM demo server (car profile).
    OsrmDemo,
    /// routing.osm.ch pedestrian instance covering Switzerland.
    OsmChFoot,
}

impl RoutingPreset {
    /// Profile prefix of the service, without the route service path.
    pub fn profile_url(self) -> &'static str {
        match self {
            RoutingPreset::OsrmDemo => "https://router.project-osrm.org",
            RoutingPreset::OsmChFoot => "https://routing.osm.ch/routed-foot",
        }
    }

    /// Base URL of the route service, ready for a coordinate path to be appended.
    pub fn route_url(self) -> String {
        format!("{}{}", self.profile_url(), ROUTE_SERVICE_PATH)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    InvalidFormat(String),
    MissingUrl,
    InvalidUrl(String),
    InvalidRadius(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(message) => write!(f, "{message}"),
            ConfigError::InvalidFormat(message) => write!(f, "{message}"),
            ConfigError::MissingUrl => write!(f, "config names neither a url nor a preset"),
            ConfigError::InvalidUrl(message) => write!(f, "invalid routing url: {message}"),
            ConfigError::InvalidRadius(radius) => {
                write!(f, "snap radius must be finite and non-negative, got {radius}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for a [`SegmentSnapper`](crate::SegmentSnapper).
///
/// `url` is the route service base; coordinates are appended as a path segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapperConfig {
    pub url: String,
    /// Search radius around each input point, in metres.
    pub radius_m: f64,
    pub projection: Projection,
    /// Raw query string appended to every request, e.g. `access_token=abc`.
    pub extra_params: Option<String>,
}

impl Default for SnapperConfig {
    fn default() -> Self {
        Self::from_preset(RoutingPreset::OsrmDemo)
    }
}

impl SnapperConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            radius_m: DEFAULT_RADIUS_M,
            projection: Projection::default(),
            extra_params: None,
        }
    }

    pub fn from_preset(preset: RoutingPreset) -> Self {
        Self::new(preset.route_url())
    }

    pub fn with_radius_m(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_extra_params(mut self, extra_params: impl Into<String>) -> Self {
        self.extra_params = Some(extra_params.into());
        self
    }

    /// Load a config from a JSON file.
    ///
    /// The file may name a `preset` instead of a `url`; an explicit `url` wins.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            ConfigError::Io(format!("failed to read {}: {error}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(raw)
            .map_err(|error| ConfigError::InvalidFormat(format!("malformed config: {error}")))?;

        let url = match (file.url, file.preset) {
            (Some(url), _) => url,
            (None, Some(preset)) => preset.route_url(),
            (None, None) => return Err(ConfigError::MissingUrl),
        };

        let config = SnapperConfig {
            url,
            radius_m: file.radius_m.unwrap_or(DEFAULT_RADIUS_M),
            projection: file.projection.unwrap_or_default(),
            extra_params: file.extra_params,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.url)
            .map_err(|error| ConfigError::InvalidUrl(format!("{}: {error}", self.url)))?;
        if !self.radius_m.is_finite() || self.radius_m < 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius_m));
        }
        Ok(())
    }

    /// Extra parameters with separators stripped; blank strings count as absent.
    pub(crate) fn extra_query(&self) -> Option<&str> {
        self.extra_params
            .as_deref()
            .map(|params| params.trim().trim_start_matches(['?', '&']))
            .filter(|params| !params.is_empty())
    }
}

/// On-disk shape of a config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    url: Option<String>,
    preset: Option<RoutingPreset>,
    radius_m: Option<f64>,
    projection: Option<Projection>,
    extra_params: Option<String>,
}
