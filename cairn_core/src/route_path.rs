use crate::bounding_box::BoundingBox;
use crate::instruction::Instruction;
use crate::point::RoutePoint;

/// A path the user can follow to visit a series of waypoints.
///
/// Built once from a routing response and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    /// The coordinates of the path.
    pub points: Vec<RoutePoint>,

    /// The input waypoints, snapped to the road network.
    pub snapped_waypoints: Vec<RoutePoint>,

    /// Turn-by-turn instructions, when requested.
    pub instructions: Vec<Instruction>,

    /// The bounding box of the route.
    pub bbox: Option<BoundingBox>,

    /// Total distance of the route, in meters.
    pub distance: f64,

    /// Total time of the route, in milliseconds.
    pub time: u64,

    /// Total uphill of the route, in meters.
    pub ascend: f64,

    /// Total downhill of the route, in meters.
    pub descend: f64,

    /// Order in which the input waypoints are visited. Only filled when
    /// the request asked to optimize the waypoint order.
    pub points_order: Vec<usize>,

    pub transfers: u32,

    pub weight: f64,
}
