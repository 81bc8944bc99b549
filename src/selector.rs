//! Pick a small, well-spaced set of waypoints in travel order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::scorer::ScoredCandidate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    /// How many top-scored candidates are considered at all.
    pub pool_size: usize,
    /// Hard cap on returned waypoints.
    pub max_waypoints: usize,
    /// Required progress separation between any two waypoints, in meters.
    pub min_spacing_m: f64,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            pool_size: 6,
            max_waypoints: 3,
            min_spacing_m: 1000.0,
        }
    }
}

/// Select waypoints from scored candidates.
///
/// The pool is walked in score order so that, of two candidates closer than
/// `min_spacing_m`, the higher-scored one survives. The result is sorted by
/// progress along the base route.
pub fn select(mut candidates: Vec<ScoredCandidate>, options: &SelectionOptions) -> Vec<ScoredCandidate> {
    candidates.sort_by(by_score_desc);
    candidates.truncate(options.pool_size);

    let mut accepted: Vec<ScoredCandidate> = Vec::with_capacity(options.max_waypoints);
    for candidate in candidates {
        if accepted.len() >= options.max_waypoints {
            break;
        }
        let spaced = accepted
            .iter()
            .all(|kept| (kept.progress_m - candidate.progress_m).abs() > options.min_spacing_m);
        if spaced {
            accepted.push(candidate);
        }
    }

    accepted.sort_by(by_progress);
    accepted
}

fn by_score_desc(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.progress_m.total_cmp(&b.progress_m))
        .then_with(|| a.feature.id.cmp(&b.feature.id))
}

fn by_progress(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.progress_m
        .total_cmp(&b.progress_m)
        .then_with(|| a.feature.id.cmp(&b.feature.id))
}
