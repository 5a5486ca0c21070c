use thiserror::Error;

use crate::point::RoutePoint;

// 5 decimal digits for coordinates, 2 for the elevation.
const COORDINATE_SCALE: f64 = 1e5;
const ALTITUDE_SCALE: f64 = 1e2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("encoded polyline ends mid-coordinate after {0} characters")]
    UnexpectedEnd(usize),
}

/// Decodes a delta-encoded polyline string into a point sequence.
///
/// Each point is stored as signed deltas against the previous point,
/// one variable-length chunk per axis in the order latitude, longitude
/// and, when `include_altitude` is set, altitude. Coordinates carry
/// five decimal digits, altitudes two.
pub fn decode(encoded: &str, include_altitude: bool) -> Result<Vec<RoutePoint>, DecodeError> {
    let mut chars = encoded.chars();
    let mut read = 0usize;
    let mut points = Vec::new();

    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut alt = 0i64;

    loop {
        // The stream may end cleanly only at a point boundary.
        let Some(delta) = next_delta(&mut chars, &mut read)? else {
            break;
        };
        lat += delta;

        lng += next_delta(&mut chars, &mut read)?.ok_or(DecodeError::UnexpectedEnd(read))?;

        if include_altitude {
            alt += next_delta(&mut chars, &mut read)?.ok_or(DecodeError::UnexpectedEnd(read))?;
        }

        points.push(RoutePoint::with_altitude(
            lat as f64 / COORDINATE_SCALE,
            lng as f64 / COORDINATE_SCALE,
            alt as f64 / ALTITUDE_SCALE,
        ));
    }

    Ok(points)
}

/// Encodes a point sequence into the compact polyline representation.
///
/// Inverse of [`decode`] up to the quantization of the scale factors.
pub fn encode(points: &[RoutePoint], include_altitude: bool) -> String {
    let mut encoded = String::new();

    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;
    let mut prev_alt = 0i64;

    for point in points {
        let lat = (point.latitude * COORDINATE_SCALE).round() as i64;
        let lng = (point.longitude * COORDINATE_SCALE).round() as i64;

        write_delta(lat - prev_lat, &mut encoded);
        write_delta(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;

        if include_altitude {
            let alt = (point.altitude * ALTITUDE_SCALE).round() as i64;
            write_delta(alt - prev_alt, &mut encoded);
            prev_alt = alt;
        }
    }

    encoded
}

/// Reads one signed delta. Returns `None` when the stream is already
/// exhausted, an error when it runs out mid-chunk.
fn next_delta(chars: &mut std::str::Chars<'_>, read: &mut usize) -> Result<Option<i64>, DecodeError> {
    let mut shift = 0u32;
    let mut result = 0i64;

    loop {
        let Some(c) = chars.next() else {
            return if shift == 0 {
                Ok(None)
            } else {
                Err(DecodeError::UnexpectedEnd(*read))
            };
        };
        *read += 1;

        let b = c as i64 - 63;
        result |= (b & 0x1f) << shift;
        shift += 5;

        if b < 0x20 {
            break;
        }
    }

    // The low bit folds the sign.
    Ok(Some(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    }))
}

fn write_delta(delta: i64, encoded: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= 0x20 {
        encoded.push((((0x20 | (value & 0x1f)) + 63) as u8) as char);
        value >>= 5;
    }
    encoded.push(((value + 63) as u8) as char);
}
