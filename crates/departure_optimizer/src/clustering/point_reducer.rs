use thiserror::Error;

use crate::geo_point::GeoPoint;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusteringError {
    #[error("Cannot cluster an empty set of points")]
    EmptyInput,

    #[error("Number of clusters must be at least 1")]
    ZeroClusters,

    #[error("Cannot build {clusters} clusters out of {points} points")]
    NotEnoughPoints { points: usize, clusters: usize },

    #[error("Clustering failed: {0}")]
    Fit(String),
}

/// Reduces a point set to `clusters` representative points.
///
/// The order of the returned points carries no meaning.
pub trait PointReducer {
    fn reduce(&self, points: &[GeoPoint], clusters: usize)
    -> Result<Vec<GeoPoint>, ClusteringError>;
}

pub(crate) fn validate_input(points: &[GeoPoint], clusters: usize) -> Result<(), ClusteringError> {
    if points.is_empty() {
        return Err(ClusteringError::EmptyInput);
    }

    if clusters == 0 {
        return Err(ClusteringError::ZeroClusters);
    }

    if points.len() < clusters {
        return Err(ClusteringError::NotEnoughPoints {
            points: points.len(),
            clusters,
        });
    }

    Ok(())
}
