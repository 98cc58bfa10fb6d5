use std::time::Duration;

use departure_providers::{
    waypoint_optimization::DepartAt, waypoint_optimizer::WaypointOptimizer,
};
use jiff::{civil::Date, tz::TimeZone};
use tracing::info;

use crate::{error::DepartureError, geo_point::GeoPoint, route_params::RouteParams};

use super::{
    departure_time::{departure_time_zone, departure_timestamp, format_departure},
    hour_window::HourWindow,
    search_state::{BestDeparture, CandidateEvaluation, SearchState},
};

pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct DepartureSearchParams {
    pub time_zone: TimeZone,
    /// Fixed pause before every optimizer call, keeps us under the rate limit.
    pub request_delay: Duration,
}

impl DepartureSearchParams {
    pub fn new() -> Result<Self, DepartureError> {
        Ok(Self {
            time_zone: departure_time_zone()?,
            request_delay: DEFAULT_REQUEST_DELAY,
        })
    }
}

#[derive(Debug)]
pub struct DepartureSearchOutcome {
    pub best: Option<BestDeparture>,
    pub evaluations: Vec<CandidateEvaluation>,
}

/// Evaluates every hour of a window, one request at a time, and keeps the
/// departure with the lowest travel plus service time.
pub struct DepartureSearch<'a, O> {
    optimizer: &'a O,
    route: &'a RouteParams,
    params: &'a DepartureSearchParams,
}

impl<'a, O> DepartureSearch<'a, O>
where
    O: WaypointOptimizer,
{
    pub fn new(optimizer: &'a O, route: &'a RouteParams, params: &'a DepartureSearchParams) -> Self {
        Self {
            optimizer,
            route,
            params,
        }
    }

    /// Any failing candidate aborts the whole search.
    pub async fn search(
        &self,
        waypoints: &[GeoPoint],
        window: HourWindow,
        date: Date,
    ) -> Result<DepartureSearchOutcome, DepartureError> {
        info!(
            "Searching best departure on {} between {:02}:00 and {:02}:00 ({} waypoints)",
            date,
            window.start(),
            window.end(),
            waypoints.len()
        );

        let mut state = SearchState::new();
        let mut evaluations = Vec::with_capacity(window.hours().len());

        for hour in window.hours() {
            tokio::time::sleep(self.params.request_delay).await;

            let departure = departure_timestamp(date, hour, &self.params.time_zone)?;
            let depart_at = format_departure(&departure);

            let request = self
                .route
                .request(waypoints, DepartAt::At(depart_at.clone()));
            let result = self.optimizer.optimize(&request).await?;
            let summary = result.route_summary()?;

            let evaluation = CandidateEvaluation {
                hour,
                depart_at,
                summary,
            };

            info!(
                "Departure {:02}:00: travel {}s + service {}s = {}s",
                hour,
                summary.travel_time_in_seconds,
                summary.service_time_in_seconds,
                evaluation.total_time_in_seconds()
            );

            if state.consider(&evaluation) {
                info!("New best departure {:02}:00", hour);
            }

            evaluations.push(evaluation);
        }

        Ok(DepartureSearchOutcome {
            best: state.into_best(),
            evaluations,
        })
    }
}
