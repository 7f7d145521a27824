//! Snaps a segment onto the route an OSRM `/route` service returns for its
//! two endpoints.
//!
//! The request is a single GET; the response is validated in full before any
//! of the three features is written, so callers either see the whole snap or
//! nothing at all.

mod error;
mod parser;
mod request;
mod response;


use std::sync::Arc;

use geo_types::Coord;
use log::{debug, warn};
use reqwest::Client;

pub use self::error::SnapError;
use self::parser::parse_route_response;
use self::request::build_route_url;
use self::response::OsrmRouteResponse;
use crate::config::{RoutingPreset, SnapperConfig};
use crate::feature::{LineFeature, PointFeature};
use crate::projection::CoordinateTransform;

/// Routing-service client that rewrites segments with routed geometry.
#[derive(Clone)]
pub struct SegmentSnapper {
    client: Client,
    config: SnapperConfig,
    transform: Arc<dyn CoordinateTransform>,
}

impl SegmentSnapper {
    /// Create a snapper with its own HTTP client.
    pub fn new(config: SnapperConfig) -> Result<Self, SnapError> {
        let client = Client::builder().build().map_err(SnapError::Http)?;
        Self::with_client(config, client)
    }

    /// Create a snapper that shares an existing HTTP client.
    pub fn with_client(config: SnapperConfig, client: Client) -> Result<Self, SnapError> {
        config.validate()?;
        let transform: Arc<dyn CoordinateTransform> = Arc::new(config.projection);
        Ok(Self {
            client,
            config,
            transform,
        })
    }

    pub fn from_preset(preset: RoutingPreset) -> Result<Self, SnapError> {
        Self::new(SnapperConfig::from_preset(preset))
    }

    /// Replace the configured projection with a host-supplied transform.
    pub fn with_transform(mut self, transform: Arc<dyn CoordinateTransform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn config(&self) -> &SnapperConfig {
        &self.config
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Point subsequent requests at a different route service.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.config.url = url.into();
    }

    pub fn radius_m(&self) -> f64 {
        self.config.radius_m
    }

    pub fn extra_params(&self) -> Option<&str> {
        self.config.extra_params.as_deref()
    }

    /// The URL `snap_segment` would request for these endpoints.
    pub fn request_url(
        &self,
        point_from: &impl PointFeature,
        point_to: &impl PointFeature,
    ) -> Result<String, SnapError> {
        let lon_lats = [
            self.endpoint_lon_lat(point_from, "start")?,
            self.endpoint_lon_lat(point_to, "end")?,
        ];
        Ok(build_route_url(
            &self.config.url,
            &lon_lats,
            self.config.radius_m,
            self.config.extra_query(),
        ))
    }

    /// Route between the two endpoints and rewrite all three features with the result.
    ///
    /// On success the segment holds the routed path, the endpoints sit on its
    /// first and last vertex and every feature is flagged as snapped. On error
    /// the features are left untouched.
    pub async fn snap_segment(
        &self,
        segment: &mut impl LineFeature,
        point_from: &mut impl PointFeature,
        point_to: &mut impl PointFeature,
    ) -> Result<(), SnapError> {
        let url = self.request_url(&*point_from, &*point_to)?;
        debug!("Requesting route: {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(SnapError::Http)?;
        let parsed: OsrmRouteResponse = response.json().await.map_err(SnapError::Json)?;

        let coordinates = parse_route_response(parsed, self.transform.as_ref())
            .inspect_err(|err| warn!("Routing service rejected segment: {}", err))?;
        let (Some(&first), Some(&last)) = (coordinates.first(), coordinates.last()) else {
            return Err(SnapError::EmptyGeometry);
        };
        debug!("Snapped segment onto route with {} vertices", coordinates.len());

        segment.set_coordinates(coordinates);
        segment.set_snapped(true);

        point_from.set_coordinates(first);
        point_to.set_coordinates(last);
        point_from.set_snapped(true);
        point_to.set_snapped(true);

        Ok(())
    }

    fn endpoint_lon_lat(
        &self,
        point: &impl PointFeature,
        which: &str,
    ) -> Result<Coord<f64>, SnapError> {
        let (x, y) = match point.coordinates() {
            [x, y, ..] => (*x, *y),
            other => {
                return Err(SnapError::InvalidCoordinates(format!(
                    "{which} point needs at least two components, got {}",
                    other.len()
                )))
            }
        };

        let lon_lat = self.transform.unproject(Coord { x, y });
        if !lon_lat.x.is_finite() || !lon_lat.y.is_finite() {
            return Err(SnapError::InvalidCoordinates(format!(
                "{which} point ({x}, {y}) has no longitude/latitude"
            )));
        }
        Ok(lon_lat)
    }
}

impl std::fmt::Debug for SegmentSnapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentSnapper")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
