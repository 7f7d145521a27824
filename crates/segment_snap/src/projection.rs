//! Conversion between map units and longitude/latitude.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

use geo_types::Coord;
use serde::{Deserialize, Serialize};

/// Sphere radius used by EPSG:3857, in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude bound beyond which Web Mercator is not defined.
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Transform pair between the map projection and lon/lat degrees.
///
/// Implement this for host projections the built-in [`Projection`] does not cover.
pub trait CoordinateTransform: Send + Sync {
    /// Lon/lat (x = longitude, y = latitude) to map units.
    fn project(&self, lon_lat: Coord<f64>) -> Coord<f64>;
    /// Map units to lon/lat.
    fn unproject(&self, map: Coord<f64>) -> Coord<f64>;
}

/// Built-in map projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Plain longitude/latitude; map units are degrees.
    #[serde(rename = "EPSG:4326")]
    Identity,
    /// Spherical Web Mercator, the usual web-map default.
    #[default]
    #[serde(rename = "EPSG:3857")]
    WebMercator,
}

impl Projection {
    pub fn code(self) -> &'static str {
        match self {
            Projection::Identity => "EPSG:4326",
            Projection::WebMercator => "EPSG:3857",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_uppercase().as_str() {
            "EPSG:4326" => Ok(Projection::Identity),
            "EPSG:3857" | "EPSG:900913" => Ok(Projection::WebMercator),
            other => Err(format!("unsupported projection {other}")),
        }
    }
}

impl CoordinateTransform for Projection {
    fn project(&self, lon_lat: Coord<f64>) -> Coord<f64> {
        match self {
            Projection::Identity => lon_lat,
            Projection::WebMercator => {
                let lat = lon_lat.y.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
                Coord {
                    x: EARTH_RADIUS_M * lon_lat.x.to_radians(),
                    y: EARTH_RADIUS_M * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln(),
                }
            }
        }
    }

    fn unproject(&self, map: Coord<f64>) -> Coord<f64> {
        match self {
            Projection::Identity => map,
            Projection::WebMercator => Coord {
                x: (map.x / EARTH_RADIUS_M).to_degrees(),
                y: (2.0 * (map.y / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees(),
            },
        }
    }
}
