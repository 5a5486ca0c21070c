use serde::{Deserialize, Serialize};

/// A single coordinate of a route geometry.
///
/// Latitude and longitude are WGS84 degrees, the altitude is in meters
/// above sea level. Coordinates are not validated.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl RoutePoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

impl From<geo_types::Point> for RoutePoint {
    fn from(point: geo_types::Point) -> Self {
        RoutePoint::new(point.y(), point.x())
    }
}

impl From<&RoutePoint> for geo_types::Point {
    fn from(point: &RoutePoint) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}
