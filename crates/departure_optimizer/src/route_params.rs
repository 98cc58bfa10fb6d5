use departure_providers::waypoint_optimization::{
    DEFAULT_SERVICE_TIME_IN_SECONDS, DepartAt, RouteRequest, RouteRequestBuilder, TravelMode,
};

use crate::geo_point::{GeoPoint, KYIV_SOUTH_STATION};

/// What every request of a planning session shares.
#[derive(Debug, Clone)]
pub struct RouteParams {
    pub origin: GeoPoint,
    pub service_time_in_seconds: u32,
    pub travel_mode: TravelMode,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            origin: KYIV_SOUTH_STATION,
            service_time_in_seconds: DEFAULT_SERVICE_TIME_IN_SECONDS,
            travel_mode: TravelMode::Car,
        }
    }
}

impl RouteParams {
    pub fn request(&self, waypoints: &[GeoPoint], depart_at: DepartAt) -> RouteRequest {
        let mut builder = RouteRequestBuilder::new(&self.origin);
        builder
            .set_waypoints(waypoints)
            .set_service_time(self.service_time_in_seconds)
            .set_travel_mode(self.travel_mode)
            .set_depart_at(depart_at);

        builder.build()
    }
}
