use departure_providers::{
    google_geocoding_api::{GOOGLE_GEOCODING_API_URL, GoogleGeocodingClientParams},
    tomtom_api::{TOMTOM_API_URL, TomTomClientParams},
};
use tracing::warn;

pub const TOMTOM_API_KEY_ENV_VAR: &str = "TOMTOM";
pub const GMAPS_API_KEY_ENV_VAR: &str = "GMAPS";
pub const TOMTOM_BASE_URL_ENV_VAR: &str = "TOMTOM_BASE_URL";
pub const GOOGLE_GEOCODING_URL_ENV_VAR: &str = "GOOGLE_GEOCODING_URL";

/// Credentials and endpoints, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub tomtom_api_key: String,
    pub gmaps_api_key: String,
    pub tomtom_base_url: String,
    pub google_geocoding_url: String,
}

impl Config {
    /// Missing keys are not fatal here, the providers reject the calls.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |name: &str| {
            var(name).unwrap_or_else(|| {
                warn!("{} is not set", name);
                String::new()
            })
        };

        Self {
            tomtom_api_key: key(TOMTOM_API_KEY_ENV_VAR),
            gmaps_api_key: key(GMAPS_API_KEY_ENV_VAR),
            tomtom_base_url: var(TOMTOM_BASE_URL_ENV_VAR)
                .unwrap_or_else(|| String::from(TOMTOM_API_URL)),
            google_geocoding_url: var(GOOGLE_GEOCODING_URL_ENV_VAR)
                .unwrap_or_else(|| String::from(GOOGLE_GEOCODING_API_URL)),
        }
    }

    pub fn tomtom_params(&self) -> TomTomClientParams {
        TomTomClientParams {
            api_key: self.tomtom_api_key.clone(),
            base_url: self.tomtom_base_url.clone(),
        }
    }

    pub fn geocoding_params(&self) -> GoogleGeocodingClientParams {
        GoogleGeocodingClientParams {
            api_key: self.gmaps_api_key.clone(),
            url: self.google_geocoding_url.clone(),
        }
    }
}
