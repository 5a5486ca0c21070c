use cairn_core::route_path::RoutePath;
use serde_json::Value;
use tracing::debug;

use crate::error::{RoutingError, classify_status};
use crate::mapper;
use crate::options::RouteOptions;

pub const ROUTING_API_URL: &str = "https://graphhopper.com/api";
pub const DEFAULT_API_VERSION: &str = "1";

pub struct RoutingClientParams {
    pub access_token: String,

    /// Overrides the API version segment of the route URL.
    pub api_version: Option<String>,

    /// Base URL of the routing service, for self-hosted instances.
    pub base_url: Option<String>,
}

impl RoutingClientParams {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_version: None,
            base_url: None,
        }
    }
}

pub struct RoutingClient {
    params: RoutingClientParams,
    client: reqwest::Client,
}

impl RoutingClient {
    pub fn new(params: RoutingClientParams) -> Result<Self, RoutingError> {
        Self::with_client(params, reqwest::Client::new())
    }

    /// Uses a preconfigured HTTP client, e.g. one with custom timeouts
    /// or proxy settings.
    pub fn with_client(
        params: RoutingClientParams,
        client: reqwest::Client,
    ) -> Result<Self, RoutingError> {
        if params.access_token.is_empty() {
            return Err(RoutingError::InvalidArgument(
                "an access token is required to use the routing API".to_string(),
            ));
        }

        Ok(Self { params, client })
    }

    pub fn route_url(&self) -> String {
        let base_url = self.params.base_url.as_deref().unwrap_or(ROUTING_API_URL);
        let version = self
            .params
            .api_version
            .as_deref()
            .unwrap_or(DEFAULT_API_VERSION);
        format!("{base_url}/{version}/route")
    }

    /// Calculates the route(s) between the waypoints of `options` and
    /// returns the resulting paths.
    ///
    /// Concurrent calls are independent; the client performs no retries
    /// of its own.
    pub async fn calculate(&self, options: &RouteOptions) -> Result<Vec<RoutePath>, RoutingError> {
        let mut query = options.to_params();
        query.push(("key".to_string(), self.params.access_token.clone()));

        debug!(
            "RoutingApi: Requesting route for {} waypoints",
            options.points().len()
        );

        let response = self
            .client
            .get(self.route_url())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), &headers, &body));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("application/json") {
            return Err(RoutingError::UnexpectedContentType(content_type));
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        mapper::map_response(&body, options)
    }
}
