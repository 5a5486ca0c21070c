use cairn_core::point::RoutePoint;

use crate::algorithm::RouteAlgorithm;
use crate::error::RoutingError;
use crate::vehicle::VehicleType;
use crate::weighting::RouteWeighting;

/// User-defined options for a single routing request.
///
/// Consumed once per request; the resulting paths do not keep a
/// reference back to it.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    points: Vec<RoutePoint>,

    /// If `true` the response coordinates come as an encoded polyline
    /// string, leading to less bandwidth usage.
    pub encode_points: bool,

    /// Locale of the turn instructions, e.g. `pt_PT` or `de`.
    pub locale: String,

    pub vehicle: VehicleType,

    /// If `true` the response points carry a third dimension, the
    /// elevation.
    pub elevation: bool,

    /// Whether turn instructions should be calculated and returned.
    pub instructions: bool,

    /// If `false` the response only carries distance and time, no
    /// geometry.
    pub calc_points: bool,

    /// If `true` the waypoints are reordered to minimize the overall
    /// time, e.g. for sightseeing tours or a traveling salesman.
    pub optimize: bool,

    pub debug: bool,

    /// Flexible-mode settings. Setting these disables contraction
    /// hierarchies on the server.
    pub flexible: Option<FlexibleOptions>,
}

/// Options that require the flexible routing mode: a custom weighting,
/// an explicit algorithm, and heading preferences.
#[derive(Debug, Clone)]
pub struct FlexibleOptions {
    pub weighting: RouteWeighting,

    pub algorithm: RouteAlgorithm,

    /// If `true`, u-turns at via points are avoided with regard to the
    /// heading penalty.
    pub pass_through: Option<bool>,

    /// Favoured heading per point, as north-based clockwise degrees in
    /// 0..360. Give either one heading for the start point or one per
    /// waypoint.
    pub heading: Option<Vec<f64>>,

    /// Accepted time delay in seconds compared to the route without a
    /// heading.
    pub heading_penalty: Option<u32>,
}

impl Default for FlexibleOptions {
    fn default() -> Self {
        Self {
            weighting: RouteWeighting::Fastest,
            algorithm: RouteAlgorithm::AstarBi,
            pass_through: None,
            heading: None,
            heading_penalty: None,
        }
    }
}

impl RouteOptions {
    /// Creates options for a route visiting the given waypoints in
    /// order. At least two waypoints are required.
    pub fn new<P>(points: impl IntoIterator<Item = P>) -> Result<Self, RoutingError>
    where
        P: Into<RoutePoint>,
    {
        let points: Vec<RoutePoint> = points.into_iter().map(Into::into).collect();
        if points.len() < 2 {
            return Err(RoutingError::InvalidArgument(
                "specify at least two points".to_string(),
            ));
        }

        Ok(Self {
            points,
            encode_points: true,
            locale: "en".to_string(),
            vehicle: VehicleType::Car,
            elevation: false,
            instructions: true,
            calc_points: true,
            optimize: false,
            debug: false,
            flexible: None,
        })
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// The ordered query parameters for this request, without the
    /// access token.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        for point in &self.points {
            params.push((
                "point".to_string(),
                format!("{},{}", point.latitude, point.longitude),
            ));
        }
        params.push(("type".to_string(), "application/json".to_string()));
        params.push(("points_encoded".to_string(), self.encode_points.to_string()));
        params.push(("instructions".to_string(), self.instructions.to_string()));
        params.push(("calc_points".to_string(), self.calc_points.to_string()));
        params.push(("optimize".to_string(), self.optimize.to_string()));
        params.push(("vehicle".to_string(), self.vehicle.to_string()));
        params.push(("debug".to_string(), self.debug.to_string()));
        params.push(("elevation".to_string(), self.elevation.to_string()));
        params.push(("locale".to_string(), self.locale.clone()));

        if let Some(flexible) = &self.flexible {
            params.push(("ch.disable".to_string(), "true".to_string()));
            params.push(("weighting".to_string(), flexible.weighting.to_string()));
            params.extend(flexible.algorithm.as_params());

            if let Some(pass_through) = flexible.pass_through {
                params.push(("pass_through".to_string(), pass_through.to_string()));
            }
            if let Some(heading) = &flexible.heading {
                params.push((
                    "heading".to_string(),
                    heading
                        .iter()
                        .map(f64::to_string)
                        .collect::<Vec<_>>()
                        .join(","),
                ));
            }
            if let Some(heading_penalty) = flexible.heading_penalty {
                params.push(("heading_penalty".to_string(), heading_penalty.to_string()));
            }
        }

        params
    }
}
