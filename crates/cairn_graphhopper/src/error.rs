use std::str::FromStr;

use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Decode(#[from] cairn_core::polyline::DecodeError),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request rejected ({status}): {message}")]
    Http {
        kind: HttpErrorKind,
        status: u16,
        message: String,
    },

    #[error("API error: {0}")]
    Application(String),

    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON response, got content type \"{0}\"")]
    UnexpectedContentType(String),
}

/// Classification of a non-2xx routing response.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpErrorKind {
    InvalidRequest,
    Unauthorized,
    ParametersTooLarge,
    RateLimited,
    ServerError,
    UnsupportedVehicle,
    Unknown,
}

impl HttpErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => HttpErrorKind::InvalidRequest,
            401 => HttpErrorKind::Unauthorized,
            413 => HttpErrorKind::ParametersTooLarge,
            429 => HttpErrorKind::RateLimited,
            500 => HttpErrorKind::ServerError,
            501 => HttpErrorKind::UnsupportedVehicle,
            _ => HttpErrorKind::Unknown,
        }
    }
}

/// Rate-limit diagnostics carried by the `X-RateLimit-*` response headers.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RateLimitStatus {
    /// Request ceiling of the access token.
    pub limit: Option<u64>,

    /// Requests left before the ceiling is hit.
    pub remaining: Option<u64>,

    /// Seconds until the ceiling resets.
    pub reset_secs: Option<u64>,

    /// Credit cost of the request.
    pub credits: Option<f64>,
}

impl RateLimitStatus {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_value(headers, "x-ratelimit-limit"),
            remaining: header_value(headers, "x-ratelimit-remaining"),
            reset_secs: header_value(headers, "x-ratelimit-reset"),
            credits: header_value(headers, "x-ratelimit-credits"),
        }
    }

    /// A human-readable account of the exhausted limit, when the headers
    /// carried enough to describe it.
    pub fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(limit) = self.limit {
            parts.push(format!(
                "More than {limit} requests have been made with this access token."
            ));
        }
        if let Some(reset_secs) = self.reset_secs {
            parts.push(format!(
                "Wait {} before retrying.",
                format_interval(reset_secs)
            ));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn format_interval(secs: u64) -> String {
    fn count(value: u64, unit: &str) -> String {
        if value == 1 {
            format!("{value} {unit}")
        } else {
            format!("{value} {unit}s")
        }
    }

    if secs >= 3600 && secs % 3600 == 0 {
        count(secs / 3600, "hour")
    } else if secs >= 60 && secs % 60 == 0 {
        count(secs / 60, "minute")
    } else {
        count(secs, "second")
    }
}

/// Classifies a non-2xx response into the error taxonomy. The body, when
/// it is a JSON object with a `message`, contributes the description;
/// rate-limited responses are described from their headers instead.
pub(crate) fn classify_status(status: u16, headers: &HeaderMap, body: &str) -> RoutingError {
    let kind = HttpErrorKind::from_status(status);

    let body_message = serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let message = match kind {
        HttpErrorKind::RateLimited => RateLimitStatus::from_headers(headers)
            .describe()
            .or(body_message),
        _ => body_message,
    }
    .unwrap_or_else(|| "no error description in response".to_string());

    RoutingError::Http {
        kind,
        status,
        message,
    }
}
