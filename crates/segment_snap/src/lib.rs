//! Snap two-point map segments onto routes from an OSRM-compatible service.
//!
//! A [`SegmentSnapper`] takes a line feature and its two endpoint features,
//! asks the routing service for a route between the endpoints and rewrites the
//! three geometries with the returned path:
//!
//! - **`config`**: [`SnapperConfig`] and the well-known [`RoutingPreset`] endpoints.
//! - **`feature`**: traits the host map entities implement, plus plain
//!   [`RoutingEndpoint`] / [`Segment`] types.
//! - **`projection`**: conversion between map units and longitude/latitude.
//! - **`snapper`**: the HTTP client and the snap operation itself.
//!
//! Entities are only touched once the whole response has been validated, so a
//! failed snap leaves them exactly as they were.

pub mod config;
pub mod feature;
pub mod projection;
pub mod snapper;

pub use config::{ConfigError, RoutingPreset, SnapperConfig, DEFAULT_RADIUS_M};
pub use feature::{LineFeature, PointFeature, RoutingEndpoint, Segment};
pub use projection::{CoordinateTransform, Projection};
pub use snapper::{SegmentSnapper, SnapError};
