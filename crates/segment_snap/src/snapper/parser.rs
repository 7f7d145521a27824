use geo_types::Coord;

use super::error::SnapError;
use super::response::OsrmRouteResponse;
use crate::projection::CoordinateTransform;

/// Validate a route response and convert its geometry into map units.
///
/// Nothing is returned unless the whole geometry converted cleanly.
pub(super) fn parse_route_response(
    resp: OsrmRouteResponse,
    transform: &dyn CoordinateTransform,
) -> Result<Vec<Coord<f64>>, SnapError> {
    if resp.code != "Ok" || resp.routes.len() != 1 {
        return Err(SnapError::RoutingFailed {
            code: resp.code,
            route_count: resp.routes.len(),
            message: resp.message,
        });
    }

    let route = resp
        .routes
        .into_iter()
        .next()
        .ok_or(SnapError::EmptyGeometry)?;
    if route.geometry.coordinates.is_empty() {
        return Err(SnapError::EmptyGeometry);
    }

    route
        .geometry
        .coordinates
        .iter()
        .enumerate()
        .map(|(idx, position)| match position.as_slice() {
            [lon, lat, ..] if lon.is_finite() && lat.is_finite() => {
                Ok(transform.project(Coord { x: *lon, y: *lat }))
            }
            _ => Err(SnapError::InvalidCoordinates(format!(
                "route position {idx} is not a [lon, lat] pair: {position:?}"
            ))),
        })
        .collect()
}
