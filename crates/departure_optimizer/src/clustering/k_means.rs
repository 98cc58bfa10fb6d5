use linfa::{DatasetBase, prelude::*};
use linfa_clustering::{KMeans as LinfaKMeans, KMeansInit};
use ndarray::Array2;
use rand_xoshiro::{Xoshiro256Plus, rand_core::SeedableRng};
use tracing::debug;

use crate::geo_point::GeoPoint;

use super::point_reducer::{ClusteringError, PointReducer, validate_input};

#[derive(Clone, Debug)]
pub struct KMeansParams {
    /// Independent runs, the one with the lowest inertia wins.
    pub n_init: usize,
    pub max_iter: u64,
    pub tolerance: f64,
    pub seed: u64,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            n_init: 10,
            max_iter: 300,
            tolerance: 1e-4,
            seed: 42,
        }
    }
}

/// K-means with random initialization, seeded so that reductions are
/// reproducible.
#[derive(Default)]
pub struct KMeans {
    params: KMeansParams,
}

impl KMeans {
    pub fn new(params: KMeansParams) -> Self {
        Self { params }
    }
}

impl PointReducer for KMeans {
    fn reduce(
        &self,
        points: &[GeoPoint],
        clusters: usize,
    ) -> Result<Vec<GeoPoint>, ClusteringError> {
        validate_input(points, clusters)?;

        let observations = Array2::from_shape_vec(
            (points.len(), 2),
            points.iter().flat_map(GeoPoint::coordinates).collect(),
        )
        .map_err(|err| ClusteringError::Fit(err.to_string()))?;
        let dataset = DatasetBase::from(observations);

        let rng = Xoshiro256Plus::seed_from_u64(self.params.seed);
        let model = LinfaKMeans::params_with_rng(clusters, rng)
            .init_method(KMeansInit::Random)
            .n_runs(self.params.n_init)
            .max_n_iterations(self.params.max_iter)
            .tolerance(self.params.tolerance)
            .fit(&dataset)
            .map_err(|err| ClusteringError::Fit(err.to_string()))?;

        let centroids = model
            .centroids()
            .rows()
            .into_iter()
            .map(|row| GeoPoint::from_centroid([row[0], row[1]]))
            .collect::<Vec<_>>();

        debug!(
            "KMeans: reduced {} points to {} clusters",
            points.len(),
            centroids.len()
        );

        Ok(centroids)
    }
}
