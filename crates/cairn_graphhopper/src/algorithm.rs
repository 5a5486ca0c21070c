use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The algorithm used to calculate the route.
///
/// The parameterized variants only work with contraction hierarchies
/// disabled, which [`crate::options::FlexibleOptions`] takes care of.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    Dijkstra,
    DijkstraBi,
    Astar,
    AstarBi,
    AlternativeRoute {
        max_paths: u32,
        max_weight_factor: f32,
        max_share_factor: f32,
    },
    RoundTrip {
        /// Approximate length of the round trip, in meters.
        distance: u32,
        seed: u64,
    },
}

impl RouteAlgorithm {
    /// The query parameters selecting and configuring this algorithm.
    pub fn as_params(&self) -> Vec<(String, String)> {
        match self {
            RouteAlgorithm::Dijkstra => vec![("algorithm".to_string(), "dijkstra".to_string())],
            RouteAlgorithm::DijkstraBi => vec![("algorithm".to_string(), "dijkstrabi".to_string())],
            RouteAlgorithm::Astar => vec![("algorithm".to_string(), "astar".to_string())],
            RouteAlgorithm::AstarBi => vec![("algorithm".to_string(), "astarbi".to_string())],
            RouteAlgorithm::AlternativeRoute {
                max_paths,
                max_weight_factor,
                max_share_factor,
            } => vec![
                ("algorithm".to_string(), "alternative_route".to_string()),
                ("max_paths".to_string(), max_paths.to_string()),
                ("max_weight_factor".to_string(), max_weight_factor.to_string()),
                ("max_share_factor".to_string(), max_share_factor.to_string()),
            ],
            RouteAlgorithm::RoundTrip { distance, seed } => vec![
                ("algorithm".to_string(), "round_trip".to_string()),
                ("distance".to_string(), distance.to_string()),
                ("seed".to_string(), seed.to_string()),
            ],
        }
    }
}
