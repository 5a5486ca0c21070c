use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which kind of "best" route calculation is needed.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Copy, Clone, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteWeighting {
    Fastest,
    Shortest,
    ShortFastest,
    Curvature,
}

impl Display for RouteWeighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RouteWeighting::Fastest => "fastest",
                RouteWeighting::Shortest => "shortest",
                RouteWeighting::ShortFastest => "short_fastest",
                RouteWeighting::Curvature => "curvature",
            }
        )
    }
}
