//! Scripted collaborators that record their calls.

use std::collections::HashMap;
use std::sync::Mutex;

use access_planner::error::ProviderError;
use access_planner::haversine::HaversineRouter;
use access_planner::model::RouteQuote;
use access_planner::traits::{Geocoder, Router};

use super::tula_locations::LANDMARKS;

/// Geocoder backed by a fixed address table.
#[derive(Debug, Default)]
pub struct MapGeocoder {
    places: HashMap<String, (f64, f64)>,
    calls: Mutex<Vec<String>>,
}

impl MapGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every Tula landmark, keyed by its name.
    pub fn landmarks() -> Self {
        LANDMARKS
            .iter()
            .fold(Self::new(), |geocoder, location| geocoder.with(location.name, location.coords()))
    }

    pub fn with(mut self, address: &str, location: (f64, f64)) -> Self {
        self.places.insert(address.to_string(), location);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Geocoder for MapGeocoder {
    fn geocode(&self, address: &str) -> Result<(f64, f64), ProviderError> {
        self.calls.lock().unwrap().push(address.to_string());
        self.places.get(address).copied().ok_or(ProviderError::NotFound)
    }
}

/// Scripted outcome for one kind of routing request.
#[derive(Debug, Clone, Copy)]
pub enum Leg {
    Distance(f64),
    Fail,
}

/// Router with straight-line geometry and scripted distances.
///
/// Two-waypoint requests are treated as the base route, longer ones as the
/// augmented multi-stop route.
#[derive(Debug)]
pub struct ScriptedRouter {
    base: Leg,
    augmented: Leg,
    geometry: HaversineRouter,
    calls: Mutex<Vec<Vec<(f64, f64)>>>,
}

impl ScriptedRouter {
    pub fn new(base_distance_m: f64) -> Self {
        Self {
            base: Leg::Distance(base_distance_m),
            augmented: Leg::Distance(base_distance_m),
            geometry: HaversineRouter::new(5.0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn augmented(mut self, leg: Leg) -> Self {
        self.augmented = leg;
        self
    }

    pub fn base(mut self, leg: Leg) -> Self {
        self.base = leg;
        self
    }

    pub fn calls(&self) -> Vec<Vec<(f64, f64)>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Router for ScriptedRouter {
    fn route(&self, waypoints: &[(f64, f64)]) -> Result<RouteQuote, ProviderError> {
        self.calls.lock().unwrap().push(waypoints.to_vec());
        let leg = if waypoints.len() == 2 { self.base } else { self.augmented };
        match leg {
            Leg::Fail => Err(ProviderError::NoRoute("scripted failure".to_string())),
            Leg::Distance(distance_m) => {
                let mut quote = self.geometry.route(waypoints)?;
                quote.distance_m = distance_m;
                quote.duration_s = distance_m * 0.72;
                Ok(quote)
            }
        }
    }
}
