//! Map entities the snapper reads from and writes back into.
//!
//! The host map owns its features; the snapper only needs the accessors in
//! [`PointFeature`] and [`LineFeature`]. [`RoutingEndpoint`] and [`Segment`]
//! are plain implementations for hosts without a feature model of their own.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

/// A point feature with coordinates in map units.
pub trait PointFeature {
    /// Raw coordinate components; the first two are x and y, any rest (Z, M) is ignored.
    fn coordinates(&self) -> &[f64];
    fn set_coordinates(&mut self, coordinate: Coord<f64>);
    fn is_snapped(&self) -> bool;
    fn set_snapped(&mut self, snapped: bool);
}

/// A line feature with an ordered coordinate sequence in map units.
pub trait LineFeature {
    fn coordinates(&self) -> &[Coord<f64>];
    fn set_coordinates(&mut self, coordinates: Vec<Coord<f64>>);
    fn is_snapped(&self) -> bool;
    fn set_snapped(&mut self, snapped: bool);
}

/// Endpoint marker of a segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingEndpoint {
    pub coordinates: Vec<f64>,
    #[serde(default)]
    pub snapped: bool,
}

impl RoutingEndpoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coordinates: vec![x, y],
            snapped: false,
        }
    }

    /// The x/y part of the coordinates, if there are at least two components.
    pub fn xy(&self) -> Option<Coord<f64>> {
        match self.coordinates.as_slice() {
            [x, y, ..] => Some(Coord { x: *x, y: *y }),
            _ => None,
        }
    }
}

impl PointFeature for RoutingEndpoint {
    fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    fn set_coordinates(&mut self, coordinate: Coord<f64>) {
        self.coordinates = vec![coordinate.x, coordinate.y];
    }

    fn is_snapped(&self) -> bool {
        self.snapped
    }

    fn set_snapped(&mut self, snapped: bool) {
        self.snapped = snapped;
    }
}

/// Line drawn between two endpoints; replaced by the routed path once snapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub coordinates: Vec<Coord<f64>>,
    #[serde(default)]
    pub snapped: bool,
}

impl Segment {
    /// Straight segment between two endpoints.
    pub fn between(from: Coord<f64>, to: Coord<f64>) -> Self {
        Self {
            coordinates: vec![from, to],
            snapped: false,
        }
    }
}

impl LineFeature for Segment {
    fn coordinates(&self) -> &[Coord<f64>] {
        &self.coordinates
    }

    fn set_coordinates(&mut self, coordinates: Vec<Coord<f64>>) {
        self.coordinates = coordinates;
    }

    fn is_snapped(&self) -> bool {
        self.snapped
    }

    fn set_snapped(&mut self, snapped: bool) {
        self.snapped = snapped;
    }
}
