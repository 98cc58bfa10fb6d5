use departure_providers::{waypoint_optimization::DepartAt, waypoint_optimizer::WaypointOptimizer};
use jiff::civil::Date;
use tracing::info;

use crate::{
    clustering::point_reducer::PointReducer,
    departure::{
        departure_search::{DepartureSearch, DepartureSearchOutcome, DepartureSearchParams},
        hour_window::HourWindow,
    },
    error::DepartureError,
    geo_point::GeoPoint,
    route_params::RouteParams,
};

/// Number of representative stops submitted to the optimizer, picked with
/// the elbow method on the reference data set.
pub const DEFAULT_CLUSTERS: usize = 4;

/// Reduces the raw stops, then asks the optimizer about the reduced route.
pub struct RoutePlanner<R, O> {
    reducer: R,
    optimizer: O,
    route: RouteParams,
    clusters: usize,
}

impl<R, O> RoutePlanner<R, O>
where
    R: PointReducer,
    O: WaypointOptimizer,
{
    pub fn new(reducer: R, optimizer: O, route: RouteParams, clusters: usize) -> Self {
        Self {
            reducer,
            optimizer,
            route,
            clusters,
        }
    }

    pub fn route(&self) -> &RouteParams {
        &self.route
    }

    /// Representative waypoints, origin not included.
    pub fn reduce(&self, points: &[GeoPoint]) -> Result<Vec<GeoPoint>, DepartureError> {
        if points.is_empty() {
            return Err(DepartureError::EmptyInput);
        }

        let reduced = self.reducer.reduce(points, self.clusters)?;
        info!("Reduced {} stops to {} waypoints", points.len(), reduced.len());

        Ok(reduced)
    }

    pub async fn best_departure(
        &self,
        points: &[GeoPoint],
        window: HourWindow,
        date: Date,
        params: &DepartureSearchParams,
    ) -> Result<DepartureSearchOutcome, DepartureError> {
        let waypoints = self.reduce(points)?;

        DepartureSearch::new(&self.optimizer, &self.route, params)
            .search(&waypoints, window, date)
            .await
    }

    /// Origin followed by the reduced waypoints in the order the optimizer
    /// would visit them when leaving now.
    pub async fn optimize_order(&self, points: &[GeoPoint]) -> Result<Vec<GeoPoint>, DepartureError> {
        let waypoints = self.reduce(points)?;

        let request = self.route.request(&waypoints, DepartAt::Now);
        let result = self.optimizer.optimize(&request).await?;

        let stops = std::iter::once(self.route.origin)
            .chain(waypoints)
            .collect::<Vec<_>>();
        let order = result.optimized_order(stops.len())?;

        Ok(order.iter().map(|&index| stops[index]).collect())
    }
}
