use std::fmt;

use crate::config::ConfigError;

/// Errors encountered while snapping a segment.
#[derive(Debug)]
pub enum SnapError {
    Http(reqwest::Error),
    Json(reqwest::Error),
    /// The service answered, but not with exactly one usable route.
    RoutingFailed {
        code: String,
        route_count: usize,
        message: Option<String>,
    },
    EmptyGeometry,
    InvalidCoordinates(String),
    Config(ConfigError),
}

impl fmt::Display for SnapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapError::Http(err) => write!(f, "routing request failed: {err}"),
            SnapError::Json(err) => write!(f, "malformed routing response: {err}"),
            SnapError::RoutingFailed {
                code,
                route_count,
                message,
            } => {
                write!(f, "routing failed with code {code} ({route_count} routes)")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            SnapError::EmptyGeometry => write!(f, "route geometry has no coordinates"),
            SnapError::InvalidCoordinates(message) => write!(f, "invalid coordinates: {message}"),
            SnapError::Config(err) => write!(f, "invalid snapper config: {err}"),
        }
    }
}

impl std::error::Error for SnapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapError::Http(err) | SnapError::Json(err) => Some(err),
            SnapError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SnapError {
    fn from(err: reqwest::Error) -> Self {
        SnapError::Http(err)
    }
}

impl From<ConfigError> for SnapError {
    fn from(err: ConfigError) -> Self {
        SnapError::Config(err)
    }
}
