use departure_providers::waypoint_optimizer::OptimizerError;
use thiserror::Error;

use crate::clustering::point_reducer::ClusteringError;

#[derive(Debug, Error)]
pub enum DepartureError {
    #[error("Geodata must not be empty")]
    EmptyInput,

    #[error(
        "Invalid departure window {start}..{end}: start hour must be >= 8, end hour must be <= 22, and start hour must be less than end hour"
    )]
    InvalidWindow { start: i8, end: i8 },

    #[error(transparent)]
    Clustering(#[from] ClusteringError),

    #[error(transparent)]
    Optimizer(#[from] OptimizerError),

    #[error("Time conversion failed: {0}")]
    Time(#[from] jiff::Error),
}
