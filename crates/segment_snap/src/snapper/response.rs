#[derive(serde::Deserialize)]
pub(super) struct OsrmRouteResponse {
    pub(super) code: String,
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) routes: Vec<OsrmRoute>,
}

#[derive(serde::Deserialize)]
pub(super) struct OsrmRoute {
    pub(super) geometry: OsrmGeometry,
}

/// GeoJSON LineString; positions are `[lon, lat]` with optional extra components.
#[derive(serde::Deserialize)]
pub(super) struct OsrmGeometry {
    pub(super) coordinates: Vec<Vec<f64>>,
}
