//! OSRM HTTP adapter for pedestrian routes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::model::RouteQuote;
use crate::polyline::Polyline;
use crate::traits::Router;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://routing.openstreetmap.de/routed-foot".to_string(),
            profile: "foot".to_string(),
            timeout_secs: 25,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("access-planner/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, waypoints: &[(f64, f64)]) -> String {
        let coords = waypoints
            .iter()
            .map(|(lat, lng)| format!("{:.6},{:.6}", lng, lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl Router for OsrmClient {
    fn route(&self, waypoints: &[(f64, f64)]) -> Result<RouteQuote, ProviderError> {
        if waypoints.len() < 2 {
            return Err(ProviderError::InvalidRequest(format!(
                "route needs at least 2 waypoints, got {}",
                waypoints.len()
            )));
        }

        let url = self.route_url(waypoints);
        debug!(%url, "requesting OSRM route");

        // OSRM reports NoRoute and friends with a 400 and a JSON body, so the
        // body is parsed before the status is checked.
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;
        match serde_json::from_str::<OsrmRouteResponse>(&body) {
            Ok(parsed) => parsed.into_quote(),
            Err(err) if status.is_success() => Err(ProviderError::InvalidResponse(err.to_string())),
            Err(_) => Err(ProviderError::NoRoute(format!("OSRM returned status {}", status))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order: [lon, lat].
    coordinates: Vec<[f64; 2]>,
}

impl OsrmRouteResponse {
    fn into_quote(self) -> Result<RouteQuote, ProviderError> {
        if self.code != "Ok" {
            let detail = self.message.unwrap_or_default();
            return Err(ProviderError::NoRoute(format!("{}: {}", self.code, detail)));
        }
        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NoRoute("response contained no routes".to_string()))?;

        let points = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| (lat, lng))
            .collect();

        Ok(RouteQuote {
            distance_m: route.distance,
            duration_s: route.duration,
            polyline: Polyline::new(points),
        })
    }
}
