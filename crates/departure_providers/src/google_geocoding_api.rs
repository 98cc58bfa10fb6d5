use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub const GOOGLE_GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Geocoding failed with status {status}: {message}")]
    Provider { status: String, message: String },
}

#[derive(Deserialize)]
struct GeocodingLocation {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct GeocodingGeometry {
    location: GeocodingLocation,
}

#[derive(Deserialize)]
struct GeocodingResult {
    geometry: GeocodingGeometry,
}

#[derive(Deserialize)]
struct GeocodingResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodingResult>,
    #[serde(default)]
    error_message: Option<String>,
}

pub struct GoogleGeocodingClientParams {
    pub api_key: String,
    pub url: String,
}

impl GoogleGeocodingClientParams {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            url: String::from(GOOGLE_GEOCODING_API_URL),
        }
    }
}

pub struct GoogleGeocodingClient {
    params: GoogleGeocodingClientParams,
    client: reqwest::Client,
}

impl GoogleGeocodingClient {
    pub fn new(params: GoogleGeocodingClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Best match for `address`, `None` when the provider has no result.
    pub async fn geocode(&self, address: &str) -> Result<Option<geo_types::Point>, GeocodingError> {
        debug!("GoogleGeocodingApi: Geocoding '{}'", address);

        let response = self
            .client
            .get(&self.params.url)
            .query(&[("address", address), ("key", self.params.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api { status, message });
        }

        let body = response.text().await?;
        let geocoding: GeocodingResponse = serde_json::from_str(&body)?;

        match geocoding.status.as_str() {
            "OK" => Ok(geocoding.results.first().map(|result| {
                let location = &result.geometry.location;
                geo_types::Point::new(location.lng, location.lat)
            })),
            "ZERO_RESULTS" => Ok(None),
            _ => Err(GeocodingError::Provider {
                status: geocoding.status,
                message: geocoding.error_message.unwrap_or_default(),
            }),
        }
    }

    /// Geocodes every address in order, skipping the ones that have no match
    /// or that the provider rejects. Transport failures abort the batch.
    pub async fn geocode_all<S>(
        &self,
        addresses: &[S],
    ) -> Result<Vec<geo_types::Point>, GeocodingError>
    where
        S: AsRef<str>,
    {
        let mut points = Vec::with_capacity(addresses.len());

        for address in addresses {
            let address = address.as_ref();
            match self.geocode(address).await {
                Ok(Some(point)) => points.push(point),
                Ok(None) => warn!("No geocoding results found for '{}'", address),
                Err(err @ GeocodingError::Provider { .. }) => {
                    warn!("Error geocoding '{}': {}", address, err)
                }
                Err(err) => return Err(err),
            }
        }

        Ok(points)
    }
}
