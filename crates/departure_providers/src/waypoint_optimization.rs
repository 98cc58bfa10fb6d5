use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::waypoint_optimizer::OptimizerError;

/// Dwell time applied to every stop, origin included.
pub const DEFAULT_SERVICE_TIME_IN_SECONDS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaypointPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<geo_types::Point> for WaypointPoint {
    fn from(point: geo_types::Point) -> Self {
        WaypointPoint {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

impl From<&WaypointPoint> for geo_types::Point {
    fn from(point: &WaypointPoint) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub point: WaypointPoint,
    pub service_time_in_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Car,
    Truck,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Car => "car",
                TravelMode::Truck => "truck",
            }
        )
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(TravelMode::Car),
            "truck" => Ok(TravelMode::Truck),
            _ => Err(format!("Unknown travel mode '{s}', expected 'car' or 'truck'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputExtension {
    TravelTimes,
}

/// Departure time sent as `departAt`.
///
/// `At` is passed through untouched, the caller is responsible for producing
/// an RFC 3339 timestamp with a colon-delimited offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartAt {
    #[default]
    Now,
    At(String),
}

impl Display for DepartAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepartAt::Now => write!(f, "now"),
            DepartAt::At(timestamp) => write!(f, "{timestamp}"),
        }
    }
}

impl Serialize for DepartAt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DepartAt::Now => serializer.serialize_str("now"),
            DepartAt::At(timestamp) => serializer.serialize_str(timestamp),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointConstraints {
    pub origin_index: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequestOptions {
    pub waypoint_constraints: WaypointConstraints,
    pub travel_mode: TravelMode,
    pub depart_at: DepartAt,
    pub output_extensions: Vec<OutputExtension>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteRequest {
    pub waypoints: Vec<Waypoint>,
    pub options: RouteRequestOptions,
}

impl RouteRequest {
    pub fn origin(&self) -> &Waypoint {
        &self.waypoints[self.options.waypoint_constraints.origin_index]
    }

    pub fn depart_at(&self) -> &DepartAt {
        &self.options.depart_at
    }
}

/// Builds a [`RouteRequest`] with the origin always at index 0.
pub struct RouteRequestBuilder {
    origin: geo_types::Point,
    waypoints: Vec<geo_types::Point>,
    service_time_in_seconds: Option<u32>,
    travel_mode: Option<TravelMode>,
    depart_at: Option<DepartAt>,
}

impl RouteRequestBuilder {
    pub fn new<P>(origin: &P) -> Self
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        Self {
            origin: origin.into(),
            waypoints: Vec::new(),
            service_time_in_seconds: None,
            travel_mode: None,
            depart_at: None,
        }
    }

    pub fn set_waypoints<P>(&mut self, waypoints: &[P]) -> &mut RouteRequestBuilder
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        self.waypoints = waypoints.iter().map(|waypoint| waypoint.into()).collect();
        self
    }

    pub fn set_service_time(&mut self, service_time_in_seconds: u32) -> &mut RouteRequestBuilder {
        self.service_time_in_seconds = Some(service_time_in_seconds);
        self
    }

    pub fn set_travel_mode(&mut self, travel_mode: TravelMode) -> &mut RouteRequestBuilder {
        self.travel_mode = Some(travel_mode);
        self
    }

    pub fn set_depart_at(&mut self, depart_at: DepartAt) -> &mut RouteRequestBuilder {
        self.depart_at = Some(depart_at);
        self
    }

    pub fn build(self) -> RouteRequest {
        let service_time_in_seconds = self
            .service_time_in_seconds
            .unwrap_or(DEFAULT_SERVICE_TIME_IN_SECONDS);

        let waypoints = std::iter::once(self.origin)
            .chain(self.waypoints)
            .map(|point| Waypoint {
                point: point.into(),
                service_time_in_seconds,
            })
            .collect();

        RouteRequest {
            waypoints,
            options: RouteRequestOptions {
                waypoint_constraints: WaypointConstraints { origin_index: 0 },
                travel_mode: self.travel_mode.unwrap_or_default(),
                depart_at: self.depart_at.unwrap_or_default(),
                output_extensions: vec![OutputExtension::TravelTimes],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub travel_time_in_seconds: f64,
    pub service_time_in_seconds: f64,
    #[serde(default)]
    pub length_in_meters: Option<f64>,
}

impl RouteSummary {
    pub fn total_time_in_seconds(&self) -> f64 {
        self.travel_time_in_seconds + self.service_time_in_seconds
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteResultSummary {
    route_summary: RouteSummary,
}

/// Response of the waypoint optimization endpoint.
///
/// Fields are kept raw and decoded on access, so a malformed field only
/// fails the caller that reads it, with [`OptimizerError::InvalidResult`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    #[serde(default)]
    optimized_order: Option<Value>,
    #[serde(default)]
    summary: Option<Value>,
}

impl RouteResult {
    pub fn route_summary(&self) -> Result<RouteSummary, OptimizerError> {
        let invalid = OptimizerError::InvalidResult { field: "summary" };

        let Some(summary) = &self.summary else {
            return Err(invalid);
        };

        RouteResultSummary::deserialize(summary)
            .map(|summary| summary.route_summary)
            .map_err(|_| invalid)
    }

    /// Visit order, checked to be a permutation of `0..waypoint_count`.
    pub fn optimized_order(&self, waypoint_count: usize) -> Result<Vec<usize>, OptimizerError> {
        let invalid = || OptimizerError::InvalidResult {
            field: "optimizedOrder",
        };

        let order = self
            .optimized_order
            .as_ref()
            .and_then(|order| Vec::<usize>::deserialize(order).ok())
            .ok_or_else(invalid)?;

        if order.len() != waypoint_count {
            return Err(invalid());
        }

        let mut seen = vec![false; waypoint_count];
        for &index in &order {
            if index >= waypoint_count || seen[index] {
                return Err(invalid());
            }
            seen[index] = true;
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn point(latitude: f64, longitude: f64) -> WaypointPoint {
        WaypointPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_builder_prepends_origin() {
        let origin = point(50.454444, 30.516667);
        let waypoints = vec![point(50.5, 30.4), point(50.4, 30.6)];

        let mut builder = RouteRequestBuilder::new(&origin);
        builder.set_waypoints(&waypoints);
        let request = builder.build();

        assert_eq!(request.waypoints.len(), 3);
        assert_eq!(request.options.waypoint_constraints.origin_index, 0);
        assert_eq!(
            request.origin().point,
            WaypointPoint {
                latitude: 50.454444,
                longitude: 30.516667
            }
        );
        assert_eq!(request.waypoints[1].point.latitude, 50.5);
        assert_eq!(request.waypoints[2].point.longitude, 30.6);
    }

    #[test]
    fn test_builder_keeps_origin_first_for_any_waypoint_order() {
        let origin = point(1.0, 1.0);
        let mut waypoints = vec![point(3.0, 3.0), point(2.0, 2.0), point(4.0, 4.0)];

        for _ in 0..3 {
            waypoints.rotate_left(1);
            let mut builder = RouteRequestBuilder::new(&origin);
            builder.set_waypoints(&waypoints);
            let request = builder.build();

            assert_eq!(request.options.waypoint_constraints.origin_index, 0);
            assert_eq!(request.waypoints[0].point.latitude, 1.0);
            assert_eq!(
                request
                    .waypoints
                    .iter()
                    .filter(|waypoint| waypoint.point.latitude == 1.0)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_request_wire_format() {
        let origin = point(50.454444, 30.516667);
        let waypoints = vec![point(50.5, 30.4)];

        let mut builder = RouteRequestBuilder::new(&origin);
        builder
            .set_waypoints(&waypoints)
            .set_depart_at(DepartAt::At(String::from("2024-06-15T09:00:00+03:00")));
        let request = builder.build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "waypoints": [
                    {
                        "point": { "latitude": 50.454444, "longitude": 30.516667 },
                        "serviceTimeInSeconds": 600
                    },
                    {
                        "point": { "latitude": 50.5, "longitude": 30.4 },
                        "serviceTimeInSeconds": 600
                    }
                ],
                "options": {
                    "waypointConstraints": { "originIndex": 0 },
                    "travelMode": "car",
                    "departAt": "2024-06-15T09:00:00+03:00",
                    "outputExtensions": ["travelTimes"]
                }
            })
        );
    }

    #[test]
    fn test_travel_mode() {
        assert_eq!("truck".parse::<TravelMode>(), Ok(TravelMode::Truck));
        assert_eq!("car".parse::<TravelMode>(), Ok(TravelMode::Car));
        assert!("bicycle".parse::<TravelMode>().is_err());

        let origin = point(0.0, 0.0);
        let mut builder = RouteRequestBuilder::new(&origin);
        builder.set_travel_mode(TravelMode::Truck);
        let value = serde_json::to_value(builder.build()).unwrap();
        assert_eq!(value["options"]["travelMode"], json!("truck"));
    }

    #[test]
    fn test_depart_at_defaults_to_now() {
        let origin = point(0.0, 0.0);
        let request = RouteRequestBuilder::new(&origin).build();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["options"]["departAt"], json!("now"));
        assert_eq!(request.waypoints.len(), 1);
    }

    #[test]
    fn test_route_summary_missing() {
        let result: RouteResult =
            serde_json::from_value(json!({ "optimizedOrder": [0, 1] })).unwrap();

        assert!(matches!(
            result.route_summary(),
            Err(OptimizerError::InvalidResult { field: "summary" })
        ));
    }

    #[test]
    fn test_route_summary_total() {
        let result: RouteResult = serde_json::from_value(json!({
            "summary": {
                "routeSummary": {
                    "travelTimeInSeconds": 1800,
                    "serviceTimeInSeconds": 3000,
                    "lengthInMeters": 25000
                }
            }
        }))
        .unwrap();

        let summary = result.route_summary().unwrap();
        assert_eq!(summary.total_time_in_seconds(), 4800.0);
        assert_eq!(summary.length_in_meters, Some(25000.0));
    }

    #[test]
    fn test_malformed_summary_is_invalid_result() {
        let bodies = [
            json!({ "summary": {} }),
            json!({ "summary": { "routeSummary": { "lengthInMeters": 100 } } }),
            json!({ "summary": { "routeSummary": { "travelTimeInSeconds": "soon" } } }),
            json!({ "summary": [] }),
        ];

        for body in bodies {
            let result: RouteResult = serde_json::from_value(body.clone()).unwrap();
            assert!(
                matches!(
                    result.route_summary(),
                    Err(OptimizerError::InvalidResult { field: "summary" })
                ),
                "{body}"
            );
        }
    }

    #[test]
    fn test_optimized_order_ignores_malformed_summary() {
        let result: RouteResult = serde_json::from_value(json!({
            "optimizedOrder": [0, 2, 1],
            "summary": { "routeSummary": { "lengthInMeters": 100 } }
        }))
        .unwrap();

        assert_eq!(result.optimized_order(3).unwrap(), vec![0, 2, 1]);
        assert!(result.route_summary().is_err());
    }

    #[test]
    fn test_malformed_optimized_order_is_invalid_result() {
        let result: RouteResult = serde_json::from_value(json!({
            "optimizedOrder": "0,1,2",
            "summary": {
                "routeSummary": { "travelTimeInSeconds": 60, "serviceTimeInSeconds": 0 }
            }
        }))
        .unwrap();

        assert!(matches!(
            result.optimized_order(3),
            Err(OptimizerError::InvalidResult {
                field: "optimizedOrder"
            })
        ));
        assert_eq!(result.route_summary().unwrap().total_time_in_seconds(), 60.0);
    }

    #[test]
    fn test_optimized_order_permutation() {
        let result: RouteResult =
            serde_json::from_value(json!({ "optimizedOrder": [0, 2, 1] })).unwrap();

        assert_eq!(result.optimized_order(3).unwrap(), vec![0, 2, 1]);
        assert!(result.optimized_order(4).is_err());
    }

    #[test]
    fn test_optimized_order_rejects_duplicates_and_out_of_range() {
        let duplicated: RouteResult =
            serde_json::from_value(json!({ "optimizedOrder": [0, 1, 1] })).unwrap();
        let out_of_range: RouteResult =
            serde_json::from_value(json!({ "optimizedOrder": [0, 1, 3] })).unwrap();
        let missing: RouteResult = serde_json::from_value(json!({})).unwrap();

        assert!(duplicated.optimized_order(3).is_err());
        assert!(out_of_range.optimized_order(3).is_err());
        assert!(matches!(
            missing.optimized_order(3),
            Err(OptimizerError::InvalidResult {
                field: "optimizedOrder"
            })
        ));
    }
}
