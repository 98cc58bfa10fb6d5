use departure_providers::waypoint_optimization::RouteSummary;
use jiff::tz::TimeZone;

use super::departure_time::departure_hour;

/// One evaluated candidate hour.
#[derive(Debug, Clone)]
pub struct CandidateEvaluation {
    pub hour: i8,
    pub depart_at: String,
    pub summary: RouteSummary,
}

impl CandidateEvaluation {
    pub fn total_time_in_seconds(&self) -> f64 {
        self.summary.total_time_in_seconds()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestDeparture {
    pub hour: i8,
    pub depart_at: String,
    pub total_time_in_seconds: f64,
}

impl BestDeparture {
    /// `HH:MM` of the departure in `time_zone`.
    pub fn local_time(&self, time_zone: &TimeZone) -> Result<String, jiff::Error> {
        departure_hour(&self.depart_at, time_zone)
    }

    pub fn total_time_in_minutes(&self) -> f64 {
        self.total_time_in_seconds / 60.0
    }
}

/// Running minimum of a departure search. Only a strictly smaller total
/// replaces the current best, so the earliest hour wins ties.
#[derive(Debug)]
pub struct SearchState {
    minimum_total_time: f64,
    best: Option<BestDeparture>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            minimum_total_time: f64::INFINITY,
            best: None,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum_total_time(&self) -> f64 {
        self.minimum_total_time
    }

    pub fn best(&self) -> Option<&BestDeparture> {
        self.best.as_ref()
    }

    /// Returns whether `evaluation` became the new best.
    pub fn consider(&mut self, evaluation: &CandidateEvaluation) -> bool {
        let total = evaluation.total_time_in_seconds();

        if total < self.minimum_total_time {
            self.minimum_total_time = total;
            self.best = Some(BestDeparture {
                hour: evaluation.hour,
                depart_at: evaluation.depart_at.clone(),
                total_time_in_seconds: total,
            });
            true
        } else {
            false
        }
    }

    pub fn into_best(self) -> Option<BestDeparture> {
        self.best
    }
}
