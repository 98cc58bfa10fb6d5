use std::path::{Path, PathBuf};

use clap::Args;
use departure_optimizer::{
    geo_point::{GeoPoint, KYIV_SOUTH_STATION},
    planner::DEFAULT_CLUSTERS,
    route_params::RouteParams,
};
use departure_providers::{
    google_geocoding_api::GoogleGeocodingClient,
    waypoint_optimization::{DEFAULT_SERVICE_TIME_IN_SECONDS, TravelMode},
};
use tracing::info;

use crate::{config::Config, parsers};

#[derive(Args)]
pub struct StopsArgs {
    /// Addresses of the stops to visit
    addresses: Vec<String>,

    /// File with one address per line, `#` starts a comment
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stop given as `lat,lon`, skips geocoding
    #[arg(short, long = "point", value_parser = parsers::parse_point)]
    points: Vec<GeoPoint>,

    /// Depot every route starts from, as `lat,lon`
    #[arg(long, value_parser = parsers::parse_point)]
    origin: Option<GeoPoint>,

    /// Number of representative waypoints sent to the optimizer
    #[arg(short = 'k', long, default_value_t = DEFAULT_CLUSTERS)]
    pub clusters: usize,

    /// Dwell time at each stop in seconds
    #[arg(long, default_value_t = DEFAULT_SERVICE_TIME_IN_SECONDS)]
    service_time: u32,

    /// Vehicle profile used by the optimizer: `car` or `truck`
    #[arg(long, default_value = "car")]
    travel_mode: TravelMode,
}

impl StopsArgs {
    pub fn route_params(&self) -> RouteParams {
        RouteParams {
            origin: self.origin.unwrap_or(KYIV_SOUTH_STATION),
            service_time_in_seconds: self.service_time,
            travel_mode: self.travel_mode,
        }
    }
}

pub fn parse_addresses(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

pub fn read_addresses(path: &Path) -> Result<Vec<String>, std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_addresses(&content))
}

/// Explicit points first, then every address that could be geocoded.
pub async fn collect_points(args: &StopsArgs, config: &Config) -> anyhow::Result<Vec<GeoPoint>> {
    let mut addresses = args.addresses.clone();
    if let Some(input) = &args.input {
        addresses.extend(read_addresses(input)?);
    }

    let mut points = args.points.clone();

    if !addresses.is_empty() {
        let geocoder = GoogleGeocodingClient::new(config.geocoding_params());
        let geocoded = geocoder.geocode_all(&addresses).await?;

        info!("Geocoded {}/{} addresses", geocoded.len(), addresses.len());

        for point in geocoded {
            points.push(GeoPoint::try_from(point)?);
        }
    }

    Ok(points)
}
