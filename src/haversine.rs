//! Haversine router (fallback when OSRM unavailable).
//!
//! Uses great-circle distance between consecutive waypoints.
//! Less accurate than OSRM (ignores streets) but always available.

use crate::error::ProviderError;
use crate::model::RouteQuote;
use crate::polyline::Polyline;
use crate::traits::Router;

/// Average walking speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 5.0;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two (lat, lon) points.
pub fn haversine_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Spacing of interpolated polyline points.
const DEFAULT_STEP_M: f64 = 25.0;

/// Straight-line router.
///
/// Legs are straight lines between consecutive waypoints, interpolated every
/// `step_m` so corridor sampling sees the whole leg. Distance is the sum of
/// great-circle legs and duration assumes a constant walking speed.
#[derive(Debug, Clone)]
pub struct HaversineRouter {
    /// Assumed average walking speed in km/h.
    pub speed_kmh: f64,
    /// Maximum spacing between polyline points in meters.
    pub step_m: f64,
}

impl Default for HaversineRouter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            step_m: DEFAULT_STEP_M,
        }
    }
}

impl HaversineRouter {
    pub fn new(speed_kmh: f64) -> Self {
        Self {
            speed_kmh,
            ..Self::default()
        }
    }

    fn interpolate(&self, waypoints: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let mut points = vec![waypoints[0]];
        for pair in waypoints.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let steps = (haversine_m(from, to) / self.step_m.max(1.0)).ceil().max(1.0) as usize;
            for i in 1..steps {
                let t = i as f64 / steps as f64;
                points.push((from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t));
            }
            points.push(to);
        }
        points
    }

    /// Convert a distance in meters to travel time in seconds.
    fn meters_to_seconds(&self, meters: f64) -> f64 {
        let hours = meters / 1000.0 / self.speed_kmh;
        (hours * 3600.0).round()
    }
}

impl Router for HaversineRouter {
    fn route(&self, waypoints: &[(f64, f64)]) -> Result<RouteQuote, ProviderError> {
        if waypoints.len() < 2 {
            return Err(ProviderError::InvalidRequest(format!(
                "route needs at least 2 waypoints, got {}",
                waypoints.len()
            )));
        }

        let distance_m: f64 = waypoints
            .windows(2)
            .map(|pair| haversine_m(pair[0], pair[1]))
            .sum();
        let polyline = Polyline::new(self.interpolate(waypoints));

        Ok(RouteQuote {
            distance_m,
            duration_s: self.meters_to_seconds(distance_m),
            polyline,
        })
    }
}
