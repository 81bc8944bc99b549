//! Rank candidate features for a mobility profile.
//!
//! `score = priority * priority_weight + position_bonus - distance_penalty`.
//! Priority dominates; distance to the route and closeness to an endpoint
//! only break ties between features of equal priority.

use serde::{Deserialize, Serialize};

use crate::model::{AccessibilityFeature, MobilityProfile};
use crate::polyline::{MeasuredPolyline, Polyline, Projection, planar_distance_deg};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Multiplier on the profile's category priority.
    pub priority_weight: f64,
    /// Multiplier on squared planar degree distance to the route.
    pub distance_weight: f64,
    /// Multiplier on the capped endpoint proximity term.
    pub endpoint_weight: f64,
    /// Endpoint bonus radius in degrees (~100 m).
    pub endpoint_radius_deg: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            priority_weight: 1000.0,
            distance_weight: 5e5,
            endpoint_weight: 1e5,
            endpoint_radius_deg: 0.0009,
        }
    }
}

/// A feature with its position relative to the base route. Lives for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub feature: AccessibilityFeature,
    /// Planar degree distance to the nearest point on the route.
    pub distance_deg: f64,
    /// Arc length in meters from the route start to that nearest point.
    pub progress_m: f64,
    pub score: f64,
}

/// Score one feature against `route` whose endpoints are `start` and `end`.
///
/// Returns `None` for an empty route.
pub fn score(
    candidate: &AccessibilityFeature,
    profile: MobilityProfile,
    route: &Polyline,
    start: (f64, f64),
    end: (f64, f64),
    weights: &ScoringWeights,
) -> Option<f64> {
    let projection = route.measure().project(candidate.location())?;
    Some(score_projected(candidate, profile, &projection, start, end, weights))
}

fn score_projected(
    candidate: &AccessibilityFeature,
    profile: MobilityProfile,
    projection: &Projection,
    start: (f64, f64),
    end: (f64, f64),
    weights: &ScoringWeights,
) -> f64 {
    let priority = f64::from(profile.priority(candidate.category));
    let distance_penalty = weights.distance_weight * projection.distance_deg.powi(2);

    let location = candidate.location();
    let nearest_endpoint = planar_distance_deg(location, start).min(planar_distance_deg(location, end));
    let position_bonus = weights.endpoint_weight * (weights.endpoint_radius_deg - nearest_endpoint).max(0.0);

    priority * weights.priority_weight + position_bonus - distance_penalty
}

/// Score every relevant feature against the route.
///
/// Zero-priority features are dropped before scoring. Output order follows
/// input order.
pub fn score_candidates(
    features: Vec<AccessibilityFeature>,
    profile: MobilityProfile,
    route: &Polyline,
    weights: &ScoringWeights,
) -> Vec<ScoredCandidate> {
    let (Some(start), Some(end)) = (route.first(), route.last()) else {
        return Vec::new();
    };
    let measured: MeasuredPolyline<'_> = route.measure();

    features
        .into_iter()
        .filter(|feature| profile.priority(feature.category) > 0)
        .filter_map(|feature| {
            let projection = measured.project(feature.location())?;
            let score = score_projected(&feature, profile, &projection, start, end, weights);
            Some(ScoredCandidate {
                distance_deg: projection.distance_deg,
                progress_m: projection.progress_m,
                score,
                feature,
            })
        })
        .collect()
}
