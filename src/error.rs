//! Error types for providers, route building, configuration and catalogs.

use std::io;

use thiserror::Error;

/// Failure reported by an external collaborator (geocoder or router).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("address not found")]
    NotFound,
    #[error("no route found: {0}")]
    NoRoute(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Terminal failure of a route request.
///
/// A failed multi-stop request is not represented here; it falls back to the
/// base route instead.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("could not resolve address '{address}': {source}")]
    Geocode {
        address: String,
        #[source]
        source: ProviderError,
    },
    #[error("could not build route: {source}")]
    Route {
        #[source]
        source: ProviderError,
    },
}

impl RouteError {
    /// Stable machine-readable tag.
    pub fn reason(&self) -> &'static str {
        match self {
            RouteError::Geocode { .. } => "geocode_failed",
            RouteError::Route { .. } => "route_failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("feature '{description}' has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates {
        description: String,
        lat: f64,
        lon: f64,
    },
}
