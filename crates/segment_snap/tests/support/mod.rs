#![allow(dead_code)]

pub mod osrm_server;

use segment_snap::{Projection, RoutingEndpoint, Segment, SegmentSnapper, SnapperConfig};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Snapper talking straight to the loopback mock, bypassing any system proxy.
pub fn local_snapper(config: SnapperConfig) -> SegmentSnapper {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build");
    SegmentSnapper::with_client(config, client).expect("snapper should build")
}

/// Snapper with identity projection so map units are lon/lat degrees.
pub fn identity_snapper(url: &str) -> SegmentSnapper {
    local_snapper(SnapperConfig::new(url).with_projection(Projection::Identity))
}

/// Unsnapped segment plus endpoints between two map positions.
pub fn straight_segment(
    from: (f64, f64),
    to: (f64, f64),
) -> (Segment, RoutingEndpoint, RoutingEndpoint) {
    let start = RoutingEndpoint::new(from.0, from.1);
    let end = RoutingEndpoint::new(to.0, to.1);
    let segment = Segment::between(
        geo_types::Coord { x: from.0, y: from.1 },
        geo_types::Coord { x: to.0, y: to.1 },
    );
    (segment, start, end)
}

/// OSRM `/route` body with a single route along `coordinates`.
pub fn ok_route_body(coordinates: &[[f64; 2]]) -> String {
    serde_json::json!({
        "code": "Ok",
        "routes": [{
            "geometry": { "type": "LineString", "coordinates": coordinates },
            "distance": 1234.5,
            "duration": 321.0,
            "legs": []
        }],
        "waypoints": []
    })
    .to_string()
}
