//! Collaborator contracts consumed by the route composer.
//!
//! Concrete deployments implement these for their own providers and stores;
//! the crate ships HTTP adapters (`osrm`, `nominatim`), an offline router
//! (`haversine`) and an in-memory catalog (`catalog`).

use crate::error::ProviderError;
use crate::model::{AccessibilityFeature, Category, FeatureId, NewFeature, RouteQuote};

/// Resolves free-text addresses to coordinates.
pub trait Geocoder {
    /// Location coordinates (lat, lng) of the best match.
    fn geocode(&self, address: &str) -> Result<(f64, f64), ProviderError>;
}

/// Computes pedestrian routes.
pub trait Router {
    /// Route through `waypoints` (lat, lng) in order. Must accept two or more
    /// waypoints in a single call.
    fn route(&self, waypoints: &[(f64, f64)]) -> Result<RouteQuote, ProviderError>;
}

/// Keyed store of accessibility features with a bounding-box query.
///
/// Implementations must allow concurrent readers through `&self`.
pub trait FeatureCatalog {
    /// Features inside `bbox` (inclusive) whose category is in `categories`.
    fn query_bbox(&self, bbox: &BoundingBox, categories: &[Category]) -> Vec<AccessibilityFeature>;

    /// Store a new feature and return its assigned id.
    fn insert(&self, feature: NewFeature) -> FeatureId;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Axis-aligned box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Flat box centred on `center` (lat, lon). No longitude correction.
    pub fn around(center: (f64, f64), half_lat_deg: f64, half_lon_deg: f64) -> Self {
        Self {
            min_lat: center.0 - half_lat_deg,
            max_lat: center.0 + half_lat_deg,
            min_lon: center.1 - half_lon_deg,
            max_lon: center.1 + half_lon_deg,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, address: &str) -> Result<(f64, f64), ProviderError> {
        (**self).geocode(address)
    }
}

impl<T: Router + ?Sized> Router for &T {
    fn route(&self, waypoints: &[(f64, f64)]) -> Result<RouteQuote, ProviderError> {
        (**self).route(waypoints)
    }
}

impl<T: FeatureCatalog + ?Sized> FeatureCatalog for &T {
    fn query_bbox(&self, bbox: &BoundingBox, categories: &[Category]) -> Vec<AccessibilityFeature> {
        (**self).query_bbox(bbox, categories)
    }

    fn insert(&self, feature: NewFeature) -> FeatureId {
        (**self).insert(feature)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
