use std::collections::VecDeque;

use departure_providers::{
    waypoint_optimization::{RouteRequest, RouteResult},
    waypoint_optimizer::{OptimizerError, WaypointOptimizer},
};
use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::geo_point::GeoPoint;

pub enum FakeResponse {
    Json(Value),
    Status(u16),
}

/// Replays scripted responses in call order and records every request.
pub struct FakeOptimizer {
    responses: Mutex<VecDeque<FakeResponse>>,
    requests: Mutex<Vec<RouteRequest>>,
}

impl FakeOptimizer {
    pub fn new(responses: Vec<FakeResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// One summary response per `(travel, service)` pair.
    pub fn with_summaries(summaries: &[(f64, f64)]) -> Self {
        Self::new(
            summaries
                .iter()
                .map(|&(travel, service)| FakeResponse::Json(summary(travel, service)))
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<RouteRequest> {
        self.requests.lock().clone()
    }

    pub fn departures(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|request| request.depart_at().to_string())
            .collect()
    }
}

impl WaypointOptimizer for FakeOptimizer {
    async fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, OptimizerError> {
        self.requests.lock().push(request.clone());

        let response = self
            .responses
            .lock()
            .pop_front()
            .expect("optimizer called more often than scripted");

        match response {
            FakeResponse::Json(value) => Ok(serde_json::from_value(value)?),
            FakeResponse::Status(status) => Err(OptimizerError::Api {
                status,
                message: String::from("scripted failure"),
            }),
        }
    }
}

pub fn summary(travel: f64, service: f64) -> Value {
    json!({
        "summary": {
            "routeSummary": {
                "travelTimeInSeconds": travel,
                "serviceTimeInSeconds": service
            }
        }
    })
}

pub fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).unwrap()
}

/// Ten stops spread over Kyiv.
pub fn kyiv_points() -> Vec<GeoPoint> {
    vec![
        point(50.5155, 30.6042),
        point(50.4547, 30.5998),
        point(50.4187, 30.6154),
        point(50.4931, 30.6014),
        point(50.5284, 30.4536),
        point(50.3940, 30.6410),
        point(50.4107, 30.6340),
        point(50.5208, 30.4650),
        point(50.4416, 30.3524),
        point(50.4866, 30.3830),
    ]
}
