use cairn_core::bounding_box::BoundingBox;
use cairn_core::instruction::{Instruction, InstructionSign};
use cairn_core::point::RoutePoint;
use cairn_core::polyline;
use cairn_core::route_path::RoutePath;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::RoutingError;
use crate::options::RouteOptions;
use crate::response::{PointsField, RawInstruction, RawPath, RouteResponse};

/// Maps a parsed response body into route paths.
///
/// A body carrying a top-level `message` is an application-level error,
/// even when it arrived with a 2xx status. A path element that does not
/// deserialize or whose geometry does not decode is skipped with a
/// warning; the remaining paths stay usable.
pub fn map_response(body: &Value, options: &RouteOptions) -> Result<Vec<RoutePath>, RoutingError> {
    let response = RouteResponse::deserialize(body)?;
    if let Some(message) = response.message {
        return Err(RoutingError::Application(message));
    }

    let mut paths = Vec::with_capacity(response.paths.len());
    for (index, raw) in response.paths.into_iter().enumerate() {
        match map_path(raw, options) {
            Ok(path) => paths.push(path),
            Err(err) => warn!("RoutingApi: Skipping unmappable path {}: {}", index, err),
        }
    }

    Ok(paths)
}

fn map_path(raw: Value, options: &RouteOptions) -> Result<RoutePath, RoutingError> {
    let raw = RawPath::deserialize(raw)?;

    Ok(RoutePath {
        points: map_points(raw.points, options)?,
        snapped_waypoints: map_points(raw.snapped_waypoints, options)?,
        instructions: raw.instructions.into_iter().map(map_instruction).collect(),
        bbox: BoundingBox::from_degrees(&raw.bbox),
        distance: raw.distance,
        time: raw.time,
        ascend: raw.ascend,
        descend: raw.descend,
        points_order: raw.points_order,
        transfers: raw.transfers,
        weight: raw.weight,
    })
}

/// Branches on the representation the options asked for. A field whose
/// shape does not match the request, like an unexpected GeoJSON object
/// when encoded points were requested, maps to no points at all.
fn map_points(
    field: Option<PointsField>,
    options: &RouteOptions,
) -> Result<Vec<RoutePoint>, RoutingError> {
    match (field, options.encode_points) {
        (Some(PointsField::Encoded(encoded)), true) => {
            Ok(polyline::decode(&encoded, options.elevation)?)
        }
        (Some(PointsField::GeoJson { coordinates }), false) => Ok(coordinates
            .iter()
            .map(|coordinate| geojson_point(coordinate))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

// GeoJSON order: [lon, lat, alt?]. Short arrays default to 0.
fn geojson_point(coordinate: &[f64]) -> RoutePoint {
    RoutePoint::with_altitude(
        coordinate.get(1).copied().unwrap_or(0.0),
        coordinate.get(0).copied().unwrap_or(0.0),
        coordinate.get(2).copied().unwrap_or(0.0),
    )
}

fn map_instruction(raw: RawInstruction) -> Instruction {
    Instruction {
        text: raw.text,
        street_name: raw.street_name,
        distance: raw.distance,
        time: raw.time,
        interval: raw.interval,
        sign: raw.sign.and_then(InstructionSign::from_code),
        exit_number: raw.exit_number,
        turn_angle: raw.turn_angle,
    }
}

#[cfg(test)]
mod tests {
    use cairn_core::polyline;
    use serde_json::json;

    use super::*;

    fn options() -> RouteOptions {
        RouteOptions::new(vec![
            RoutePoint::new(52.54567, 13.35937),
            RoutePoint::new(52.54316, 13.39989),
        ])
        .unwrap()
    }

    #[test]
    fn maps_a_response_with_encoded_points() {
        let expected = vec![
            RoutePoint::new(52.54567, 13.35937),
            RoutePoint::new(52.54316, 13.39989),
        ];
        let body = json!({
            "paths": [{
                "points": polyline::encode(&expected, false),
                "snapped_waypoints": polyline::encode(&expected, false),
                "distance": 3235.8,
                "time": 504612,
                "bbox": [13.35937, 52.54316, 13.39989, 52.54567],
            }]
        });

        let paths = map_response(&body, &options()).unwrap();
        assert_eq!(paths.len(), 1);

        let path = &paths[0];
        assert_eq!(path.points, expected);
        assert_eq!(path.snapped_waypoints, expected);
        assert_eq!(path.distance, 3235.8);
        assert_eq!(path.time, 504612);
        assert_eq!(path.ascend, 0.0);
        assert_eq!(path.descend, 0.0);
        assert_eq!(path.transfers, 0);
        assert_eq!(path.weight, f64::INFINITY);
        assert!(path.points_order.is_empty());

        let bbox = path.bbox.unwrap();
        assert_eq!(bbox.north_west.y(), 52.54316);
        assert_eq!(bbox.north_west.x(), 13.35937);
    }

    #[test]
    fn maps_a_geojson_response_when_encoding_is_off() {
        let mut options = options();
        options.encode_points = false;

        let body = json!({
            "paths": [{
                "points": {
                    "type": "LineString",
                    "coordinates": [[13.35937, 52.54567], [13.39989, 52.54316, 40.5]],
                },
            }]
        });

        let paths = map_response(&body, &options).unwrap();
        assert_eq!(
            paths[0].points,
            vec![
                RoutePoint::new(52.54567, 13.35937),
                RoutePoint::with_altitude(52.54316, 13.39989, 40.5),
            ]
        );
    }

    #[test]
    fn tolerates_short_geojson_coordinate_arrays() {
        let mut options = options();
        options.encode_points = false;

        let body = json!({
            "paths": [{
                "points": { "coordinates": [[], [13.4], [13.4, 52.5]] },
            }]
        });

        let paths = map_response(&body, &options).unwrap();
        assert_eq!(
            paths[0].points,
            vec![
                RoutePoint::new(0.0, 0.0),
                RoutePoint::new(0.0, 13.4),
                RoutePoint::new(52.5, 13.4),
            ]
        );
    }

    #[test]
    fn decodes_elevation_when_requested() {
        let mut options = options();
        options.elevation = true;

        let expected = vec![
            RoutePoint::with_altitude(47.3769, 8.5417, 408.2),
            RoutePoint::with_altitude(47.3768, 8.5512, 411.0),
        ];
        let body = json!({
            "paths": [{ "points": polyline::encode(&expected, true) }]
        });

        let paths = map_response(&body, &options).unwrap();
        assert_eq!(paths[0].points, expected);
    }

    #[test]
    fn missing_point_fields_map_to_empty_sequences() {
        let body = json!({ "paths": [{ "distance": 100.0 }] });

        let paths = map_response(&body, &options()).unwrap();
        assert!(paths[0].points.is_empty());
        assert!(paths[0].snapped_waypoints.is_empty());
        assert!(paths[0].bbox.is_none());
    }

    #[test]
    fn a_bbox_without_exactly_four_values_is_absent() {
        let body = json!({
            "paths": [{ "bbox": [13.0, 52.0, 14.0] }]
        });

        let paths = map_response(&body, &options()).unwrap();
        assert!(paths[0].bbox.is_none());
    }

    #[test]
    fn maps_instructions_with_defaults_and_unknown_signs() {
        let body = json!({
            "paths": [{
                "instructions": [
                    {
                        "text": "Turn right onto Torstraße",
                        "street_name": "Torstraße",
                        "distance": 635.4,
                        "time": 76248,
                        "interval": [0, 10],
                        "sign": 2,
                    },
                    { "sign": 99 },
                    {
                        "text": "At the roundabout, take the 2nd exit",
                        "sign": 6,
                        "exit_number": 2,
                        "turn_angle": 1.57,
                    },
                ]
            }]
        });

        let paths = map_response(&body, &options()).unwrap();
        let instructions = &paths[0].instructions;
        assert_eq!(instructions.len(), 3);

        assert_eq!(instructions[0].text, "Turn right onto Torstraße");
        assert_eq!(instructions[0].street_name, "Torstraße");
        assert_eq!(instructions[0].interval, vec![0, 10]);
        assert_eq!(instructions[0].sign, Some(InstructionSign::TurnRight));
        assert_eq!(instructions[0].exit_number, None);

        assert_eq!(instructions[1].sign, None);
        assert_eq!(instructions[1].text, "");
        assert_eq!(instructions[1].distance, 0.0);

        assert_eq!(instructions[2].sign, Some(InstructionSign::UseRoundabout));
        assert_eq!(instructions[2].exit_number, Some(2));
        assert_eq!(instructions[2].turn_angle, Some(1.57));
    }

    #[test]
    fn skips_paths_that_fail_to_map() {
        let good = polyline::encode(&[RoutePoint::new(52.5, 13.3), RoutePoint::new(52.6, 13.4)], false);
        let body = json!({
            "paths": [
                { "points": "_", "distance": 1.0 },
                { "distance": "not a number" },
                { "points": good, "distance": 2.0 },
            ]
        });

        let paths = map_response(&body, &options()).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].distance, 2.0);
    }

    #[test]
    fn maps_the_optimized_points_order() {
        let body = json!({
            "paths": [{ "points_order": [0, 2, 1, 3] }]
        });

        let paths = map_response(&body, &options()).unwrap();
        assert_eq!(paths[0].points_order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn an_empty_body_maps_to_no_paths() {
        let paths = map_response(&json!({}), &options()).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn a_message_is_an_application_error_even_with_paths() {
        let body = json!({
            "message": "Too many points",
            "paths": [],
        });

        assert!(matches!(
            map_response(&body, &options()),
            Err(RoutingError::Application(message)) if message == "Too many points"
        ));
    }
}
