//! Corridor search for catalog features near a route.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{AccessibilityFeature, Category};
use crate::polyline::Polyline;
use crate::traits::{BoundingBox, FeatureCatalog};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorOptions {
    /// Approximate number of route samples, regardless of route length.
    pub target_samples: usize,
    /// Half-height of the box around each sample (~150 m).
    pub half_lat_deg: f64,
    /// Half-width of the box around each sample. Not scaled by latitude.
    pub half_lon_deg: f64,
}

impl Default for CorridorOptions {
    fn default() -> Self {
        Self {
            target_samples: 25,
            half_lat_deg: 0.0015,
            half_lon_deg: 0.0020,
        }
    }
}

/// Features of `categories` within the sampled corridor around `route`.
///
/// Boxes are queried in parallel but merged in sample order, so the first
/// occurrence of each coordinate key is stable across runs.
pub fn find_candidates<C>(
    route: &Polyline,
    categories: &[Category],
    catalog: &C,
    options: &CorridorOptions,
) -> Vec<AccessibilityFeature>
where
    C: FeatureCatalog + Sync + ?Sized,
{
    if categories.is_empty() {
        return Vec::new();
    }

    let samples = route.sample_indices(options.target_samples);
    if samples.is_empty() {
        return Vec::new();
    }

    let points = route.points();
    let per_sample: Vec<Vec<AccessibilityFeature>> = samples
        .par_iter()
        .map(|&index| {
            let bbox = BoundingBox::around(points[index], options.half_lat_deg, options.half_lon_deg);
            catalog.query_bbox(&bbox, categories)
        })
        .collect();

    let raw = per_sample.iter().map(Vec::len).sum::<usize>();
    let unique = dedupe_features(per_sample.into_iter().flatten());
    debug!(samples = samples.len(), raw, unique = unique.len(), "corridor search");
    unique
}

fn dedupe_features(features: impl Iterator<Item = AccessibilityFeature>) -> Vec<AccessibilityFeature> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for feature in features {
        if seen.insert(location_key(feature.location())) {
            unique.push(feature);
        }
    }
    unique
}

/// Six decimals is ~0.1 m.
fn location_key(location: (f64, f64)) -> String {
    format!("{:.6},{:.6}", location.0, location.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::model::NewFeature;

    fn straight_route() -> Polyline {
        Polyline::new((0..=40).map(|i| (54.19 + i as f64 * 0.0005, 37.61)).collect())
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let catalog = InMemoryCatalog::new();
        let found = find_candidates(&straight_route(), &[Category::Handrail], &catalog, &CorridorOptions::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_degenerate_route_yields_nothing() {
        let catalog = InMemoryCatalog::from_features(vec![NewFeature::new(Category::Handrail, "rail", 54.19, 37.61, "")]);
        let single = Polyline::new(vec![(54.19, 37.61)]);
        assert!(find_candidates(&single, &[Category::Handrail], &catalog, &CorridorOptions::default()).is_empty());
        assert!(find_candidates(&Polyline::default(), &[Category::Handrail], &catalog, &CorridorOptions::default()).is_empty());
    }

    #[test]
    fn test_finds_features_inside_corridor_only() {
        let catalog = InMemoryCatalog::from_features(vec![
            NewFeature::new(Category::Handrail, "near", 54.195, 37.611, ""),
            NewFeature::new(Category::Handrail, "far", 54.195, 37.65, ""),
            NewFeature::new(Category::FixedRamp, "wrong kind", 54.195, 37.6105, ""),
        ]);
        let found = find_candidates(&straight_route(), &[Category::Handrail], &catalog, &CorridorOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "near");
    }

    #[test]
    fn test_overlapping_boxes_deduplicate() {
        // Every sample box along the route contains this feature.
        let catalog = InMemoryCatalog::from_features(vec![NewFeature::new(Category::CurbCut, "cut", 54.1925, 37.61, "")]);
        let found = find_candidates(&straight_route(), &[Category::CurbCut], &catalog, &CorridorOptions::default());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_coincident_features_collapse_to_first() {
        let catalog = InMemoryCatalog::from_features(vec![
            NewFeature::new(Category::Handrail, "first", 54.1950000, 37.6100000, ""),
            NewFeature::new(Category::CurbCut, "second", 54.1950000004, 37.6100000, ""),
        ]);
        let found = find_candidates(
            &straight_route(),
            &[Category::Handrail, Category::CurbCut],
            &catalog,
            &CorridorOptions::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "first");
    }

    #[test]
    fn test_no_categories_skips_catalog() {
        let catalog = InMemoryCatalog::from_features(vec![NewFeature::new(Category::Handrail, "rail", 54.19, 37.61, "")]);
        assert!(find_candidates(&straight_route(), &[], &catalog, &CorridorOptions::default()).is_empty());
    }
}
