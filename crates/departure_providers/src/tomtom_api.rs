use tracing::debug;

use crate::{
    waypoint_optimization::{RouteRequest, RouteResult},
    waypoint_optimizer::{OptimizerError, WaypointOptimizer},
};

pub const TOMTOM_API_URL: &str = "https://api.tomtom.com";
pub const TOMTOM_WAYPOINT_OPTIMIZATION_PATH: &str = "/routing/waypointoptimization/1";

pub struct TomTomClientParams {
    pub api_key: String,
    pub base_url: String,
}

impl TomTomClientParams {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: String::from(TOMTOM_API_URL),
        }
    }
}

/// Client for the TomTom waypoint optimization API.
pub struct TomTomClient {
    params: TomTomClientParams,
    client: reqwest::Client,
}

impl TomTomClient {
    pub fn new(params: TomTomClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    fn waypoint_optimization_url(&self) -> String {
        format!(
            "{}{}",
            self.params.base_url.trim_end_matches('/'),
            TOMTOM_WAYPOINT_OPTIMIZATION_PATH
        )
    }

    pub async fn optimize_waypoints(
        &self,
        request: &RouteRequest,
    ) -> Result<RouteResult, OptimizerError> {
        debug!(
            "TomTomApi: Posting waypoint optimization ({} waypoints, departAt={})",
            request.waypoints.len(),
            request.depart_at()
        );

        let response = self
            .client
            .post(self.waypoint_optimization_url())
            .query(&[("key", &self.params.api_key)])
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<RouteResult, OptimizerError> {
        if response.status().is_success() {
            let body = response.text().await?;
            let result: RouteResult = serde_json::from_str(&body)?;
            Ok(result)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(OptimizerError::Api { status, message })
        }
    }
}

impl WaypointOptimizer for TomTomClient {
    async fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, OptimizerError> {
        self.optimize_waypoints(request).await
    }
}
