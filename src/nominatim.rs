//! Nominatim HTTP adapter for address lookup.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::traits::Geocoder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Comma-separated ISO 3166-1 codes limiting the search. Empty = worldwide.
    pub country_codes: String,
    /// Nominatim's usage policy requires an identifying agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            country_codes: "ru".to_string(),
            user_agent: concat!("access-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    fn query_params<'a>(&'a self, address: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("q", address), ("format", "json"), ("limit", "1")];
        if !self.config.country_codes.is_empty() {
            params.push(("countrycodes", self.config.country_codes.as_str()));
        }
        params
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, address: &str) -> Result<(f64, f64), ProviderError> {
        if address.trim().is_empty() {
            return Err(ProviderError::InvalidRequest("empty address".to_string()));
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        debug!(%url, %address, "geocoding");

        let places = self
            .client
            .get(url)
            .query(&self.query_params(address))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>())?;

        first_location(places)
    }
}

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn first_location(places: Vec<NominatimPlace>) -> Result<(f64, f64), ProviderError> {
    let place = places.into_iter().next().ok_or(ProviderError::NotFound)?;
    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|err| ProviderError::InvalidResponse(format!("lat '{}': {}", place.lat, err)))?;
    let lon = place
        .lon
        .parse::<f64>()
        .map_err(|err| ProviderError::InvalidResponse(format!("lon '{}': {}", place.lon, err)))?;
    Ok((lat, lon))
}
