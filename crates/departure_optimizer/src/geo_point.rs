use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeoPointError {
    #[error("Latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    Longitude(f64),

    #[error("Invalid coordinates '{0}', expected 'lat,lon'")]
    Format(String),
}

/// A WGS84 coordinate. Always finite and within range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// Kyiv South railway station, the depot every route starts from.
pub const KYIV_SOUTH_STATION: GeoPoint = GeoPoint {
    lat: 50.454444,
    lng: 30.516667,
};

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoPointError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoPointError::Latitude(lat));
        }

        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoPointError::Longitude(lng));
        }

        Ok(Self { lat, lng })
    }

    /// Mean of valid points is itself valid, so centroids skip validation.
    pub(crate) fn from_centroid([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub(crate) fn coordinates(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

impl FromStr for GeoPoint {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoPointError::Format(s.to_string()))?;

        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| GeoPointError::Format(s.to_string()))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| GeoPointError::Format(s.to_string()))?;

        GeoPoint::new(lat, lng)
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl TryFrom<geo_types::Point> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(point: geo_types::Point) -> Result<Self, Self::Error> {
        GeoPoint::new(point.y(), point.x())
    }
}
