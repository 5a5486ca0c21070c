use geo_types::Point;

/// An area delimited by its north-west and south-east corners.
///
/// Corner points use the geo convention, x = longitude and y = latitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub north_west: Point,
    pub south_east: Point,
}

impl BoundingBox {
    /// Builds a bounding box from a `[min_lon, min_lat, max_lon, max_lat]`
    /// degrees array. Any other length yields `None`.
    pub fn from_degrees(degrees: &[f64]) -> Option<Self> {
        match degrees {
            [min_lon, min_lat, max_lon, max_lat] => Some(Self {
                north_west: Point::new(*min_lon, *min_lat),
                south_east: Point::new(*max_lon, *max_lat),
            }),
            _ => None,
        }
    }
}
