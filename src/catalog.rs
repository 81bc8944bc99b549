//! In-memory feature catalog backed by an R-tree.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use tracing::debug;

use crate::error::CatalogError;
use crate::model::{AccessibilityFeature, Category, FeatureId, NewFeature};
use crate::traits::{BoundingBox, FeatureCatalog};

/// Feature stored in the R-tree at `[lon, lat]`.
#[derive(Debug, Clone, PartialEq)]
struct IndexedFeature(AccessibilityFeature);

impl IndexedFeature {
    fn coords(&self) -> [f64; 2] {
        [self.0.lon, self.0.lat]
    }
}

impl RTreeObject for IndexedFeature {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.coords())
    }
}

impl PointDistance for IndexedFeature {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let [x, y] = self.coords();
        let dx = x - point[0];
        let dy = y - point[1];
        dx * dx + dy * dy
    }
}

/// Thread-safe catalog. Readers share a read lock; inserts take the write lock.
#[derive(Debug)]
pub struct InMemoryCatalog {
    tree: RwLock<RTree<IndexedFeature>>,
    next_id: AtomicU64,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            tree: RwLock::new(RTree::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Bulk-load features, assigning ids in input order starting at 1.
    pub fn from_features(features: impl IntoIterator<Item = NewFeature>) -> Self {
        let indexed: Vec<IndexedFeature> = features
            .into_iter()
            .enumerate()
            .map(|(i, feature)| IndexedFeature(feature.into_feature(FeatureId(i as u64 + 1))))
            .collect();
        let next_id = indexed.len() as u64 + 1;
        Self {
            tree: RwLock::new(RTree::bulk_load(indexed)),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Load a JSON array of features from `path`.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let reader = BufReader::new(File::open(path)?);
        let features: Vec<NewFeature> = serde_json::from_reader(reader)?;
        for feature in &features {
            if !valid_coordinates(feature.lat, feature.lon) {
                return Err(CatalogError::InvalidCoordinates {
                    description: feature.description.clone(),
                    lat: feature.lat,
                    lon: feature.lon,
                });
            }
        }
        debug!(count = features.len(), path = %path.display(), "loaded feature catalog");
        Ok(Self::from_features(features))
    }

    /// Look up a single feature by id.
    pub fn get(&self, id: FeatureId) -> Option<AccessibilityFeature> {
        let tree = self.tree.read().unwrap_or_else(PoisonError::into_inner);
        tree.iter().find(|entry| entry.0.id == id).map(|entry| entry.0.clone())
    }

    /// All features of the given categories, ordered by id.
    pub fn features_in(&self, categories: &[Category]) -> Vec<AccessibilityFeature> {
        let tree = self.tree.read().unwrap_or_else(PoisonError::into_inner);
        let mut found: Vec<AccessibilityFeature> = tree
            .iter()
            .filter(|entry| categories.contains(&entry.0.category))
            .map(|entry| entry.0.clone())
            .collect();
        found.sort_by_key(|feature| feature.id);
        found
    }
}

impl FeatureCatalog for InMemoryCatalog {
    fn query_bbox(&self, bbox: &BoundingBox, categories: &[Category]) -> Vec<AccessibilityFeature> {
        if categories.is_empty() {
            return Vec::new();
        }
        let envelope = AABB::from_corners([bbox.min_lon, bbox.min_lat], [bbox.max_lon, bbox.max_lat]);
        let tree = self.tree.read().unwrap_or_else(PoisonError::into_inner);
        let mut found: Vec<AccessibilityFeature> = tree
            .locate_in_envelope(&envelope)
            .filter(|entry| categories.contains(&entry.0.category))
            .map(|entry| entry.0.clone())
            .collect();
        // R-tree iteration order depends on tree shape.
        found.sort_by_key(|feature| feature.id);
        found
    }

    fn insert(&self, feature: NewFeature) -> FeatureId {
        let id = FeatureId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut tree = self.tree.write().unwrap_or_else(PoisonError::into_inner);
        tree.insert(IndexedFeature(feature.into_feature(id)));
        id
    }

    fn len(&self) -> usize {
        self.tree.read().unwrap_or_else(PoisonError::into_inner).size()
    }
}

fn valid_coordinates(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
