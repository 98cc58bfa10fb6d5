use thiserror::Error;

use crate::waypoint_optimization::{RouteRequest, RouteResult};

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid result: missing or malformed `{field}`")]
    InvalidResult { field: &'static str },
}

/// Evaluates a route for a given departure time.
///
/// One call is one round trip: implementations must not retry or cache.
pub trait WaypointOptimizer {
    fn optimize(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = Result<RouteResult, OptimizerError>> + Send;
}

impl<T> WaypointOptimizer for &T
where
    T: WaypointOptimizer + Sync,
{
    fn optimize(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = Result<RouteResult, OptimizerError>> + Send {
        (**self).optimize(request)
    }
}
