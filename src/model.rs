//! Domain types shared by the augmentation pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::polyline::Polyline;

/// Opaque catalog identity, assigned on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of physical accessibility infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FixedRamp,
    FoldingRamp,
    Elevator,
    WideDoor,
    AccessibleParking,
    TactileGuideStrip,
    TactileWarningStrip,
    AudioTrafficSignal,
    HelpButton,
    Handrail,
    CurbCut,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::FixedRamp,
        Category::FoldingRamp,
        Category::Elevator,
        Category::WideDoor,
        Category::AccessibleParking,
        Category::TactileGuideStrip,
        Category::TactileWarningStrip,
        Category::AudioTrafficSignal,
        Category::HelpButton,
        Category::Handrail,
        Category::CurbCut,
    ];

    /// Human-readable name used in route descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Category::FixedRamp => "Fixed ramp",
            Category::FoldingRamp => "Folding ramp",
            Category::Elevator => "Elevator",
            Category::WideDoor => "Wide door",
            Category::AccessibleParking => "Accessible parking",
            Category::TactileGuideStrip => "Tactile guide strip",
            Category::TactileWarningStrip => "Tactile warning strip",
            Category::AudioTrafficSignal => "Audio traffic signal",
            Category::HelpButton => "Help button",
            Category::Handrail => "Handrail",
            Category::CurbCut => "Curb cut",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A feature as stored in the catalog. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityFeature {
    pub id: FeatureId,
    pub category: Category,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

impl AccessibilityFeature {
    /// Location as a (lat, lon) pair.
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// A feature awaiting insertion; the catalog assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeature {
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

impl NewFeature {
    pub fn new(
        category: Category,
        description: impl Into<String>,
        lat: f64,
        lon: f64,
        address: impl Into<String>,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            address: address.into(),
            lat,
            lon,
        }
    }

    pub(crate) fn into_feature(self, id: FeatureId) -> AccessibilityFeature {
        AccessibilityFeature {
            id,
            category: self.category,
            description: self.description,
            address: self.address,
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// The class of impairment a route is optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MobilityProfile {
    Wheelchair,
    LowVision,
    CaneAssisted,
}

impl MobilityProfile {
    pub const ALL: [MobilityProfile; 3] = [
        MobilityProfile::Wheelchair,
        MobilityProfile::LowVision,
        MobilityProfile::CaneAssisted,
    ];

    /// Relative weight of a category for this profile. Zero means irrelevant.
    pub fn priority(self, category: Category) -> u32 {
        use Category::*;
        match (self, category) {
            (MobilityProfile::Wheelchair, FixedRamp) => 10,
            (MobilityProfile::Wheelchair, Elevator) => 9,
            (MobilityProfile::Wheelchair, FoldingRamp) => 8,
            (MobilityProfile::Wheelchair, WideDoor) => 6,
            (MobilityProfile::Wheelchair, AccessibleParking) => 4,
            (MobilityProfile::LowVision, TactileGuideStrip) => 10,
            (MobilityProfile::LowVision, AudioTrafficSignal) => 9,
            (MobilityProfile::LowVision, TactileWarningStrip) => 8,
            (MobilityProfile::LowVision, HelpButton) => 6,
            (MobilityProfile::CaneAssisted, Handrail) => 10,
            (MobilityProfile::CaneAssisted, CurbCut) => 8,
            _ => 0,
        }
    }

    /// Categories with non-zero priority, in declaration order.
    pub fn relevant_categories(self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.priority(*category) > 0)
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            MobilityProfile::Wheelchair => "wheelchair user",
            MobilityProfile::LowVision => "low-vision traveler",
            MobilityProfile::CaneAssisted => "cane user",
        }
    }
}

impl fmt::Display for MobilityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MobilityProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wheelchair" => Ok(MobilityProfile::Wheelchair),
            "low-vision" | "low_vision" | "lowvision" => Ok(MobilityProfile::LowVision),
            "cane" | "cane-assisted" | "cane_assisted" => Ok(MobilityProfile::CaneAssisted),
            other => Err(format!(
                "unknown mobility profile '{}', expected wheelchair, low-vision or cane",
                other
            )),
        }
    }
}

/// Distance, duration and geometry returned by a router for one waypoint list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuote {
    /// Total distance in meters.
    pub distance_m: f64,
    /// Total duration in seconds.
    pub duration_s: f64,
    pub polyline: Polyline,
}

/// Caller-facing view of a feature used by a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub id: FeatureId,
    pub category: Category,
    pub label: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&AccessibilityFeature> for FeatureSummary {
    fn from(feature: &AccessibilityFeature) -> Self {
        Self {
            id: feature.id,
            category: feature.category,
            label: feature.category.label().to_string(),
            description: feature.description.clone(),
            address: feature.address.clone(),
            lat: feature.lat,
            lon: feature.lon,
        }
    }
}
