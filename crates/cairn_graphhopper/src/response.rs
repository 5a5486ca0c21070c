use serde::Deserialize;
use serde_json::Value;

/// Top-level body of a routing response. A `message` marks an
/// application-level error, even on a 2xx status.
#[derive(Deserialize)]
pub(crate) struct RouteResponse {
    #[serde(default)]
    pub paths: Vec<Value>,

    pub message: Option<String>,
}

/// One element of `paths`. Everything the server may omit defaults
/// here so that a sparse path still deserializes.
#[derive(Deserialize)]
pub(crate) struct RawPath {
    pub points: Option<PointsField>,

    pub snapped_waypoints: Option<PointsField>,

    #[serde(default)]
    pub instructions: Vec<RawInstruction>,

    #[serde(default)]
    pub bbox: Vec<f64>,

    #[serde(default)]
    pub time: u64,

    #[serde(default)]
    pub distance: f64,

    #[serde(default)]
    pub ascend: f64,

    #[serde(default)]
    pub descend: f64,

    #[serde(default)]
    pub points_order: Vec<usize>,

    #[serde(default)]
    pub transfers: u32,

    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    f64::INFINITY
}

/// A route geometry arrives either as an encoded polyline string or as
/// a GeoJSON line string, depending on `points_encoded`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PointsField {
    Encoded(String),
    GeoJson { coordinates: Vec<Vec<f64>> },
}

#[derive(Deserialize)]
pub(crate) struct RawInstruction {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub street_name: String,

    #[serde(default)]
    pub distance: f64,

    #[serde(default)]
    pub time: u64,

    #[serde(default)]
    pub interval: Vec<usize>,

    pub sign: Option<i64>,

    pub exit_number: Option<i64>,

    pub turn_angle: Option<f64>,
}
