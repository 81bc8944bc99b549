//! Planner configuration (TOML).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::composer::AugmentOptions;
use crate::error::ConfigError;
use crate::nominatim::NominatimConfig;
use crate::osrm::OsrmConfig;

/// Top-level configuration. Every section is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub augment: AugmentOptions,
    pub osrm: OsrmConfig,
    pub nominatim: NominatimConfig,
}

impl PlannerConfig {
    /// Check value ranges. Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let corridor = &self.augment.corridor;
        if corridor.target_samples == 0 {
            return Err(invalid("corridor.target_samples must be >= 1"));
        }
        if !(corridor.half_lat_deg > 0.0 && corridor.half_lon_deg > 0.0) {
            return Err(invalid(format!(
                "corridor half sizes must be > 0, got {} x {}",
                corridor.half_lat_deg, corridor.half_lon_deg
            )));
        }

        let scoring = &self.augment.scoring;
        for (name, value) in [
            ("priority_weight", scoring.priority_weight),
            ("distance_weight", scoring.distance_weight),
            ("endpoint_weight", scoring.endpoint_weight),
            ("endpoint_radius_deg", scoring.endpoint_radius_deg),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("scoring.{} must be finite and > 0, got {}", name, value)));
            }
        }

        let selection = &self.augment.selection;
        if selection.max_waypoints == 0 {
            return Err(invalid("selection.max_waypoints must be >= 1"));
        }
        if selection.pool_size < selection.max_waypoints {
            return Err(invalid(format!(
                "selection.pool_size ({}) must be >= max_waypoints ({})",
                selection.pool_size, selection.max_waypoints
            )));
        }
        if !(selection.min_spacing_m >= 0.0) {
            return Err(invalid(format!(
                "selection.min_spacing_m must be >= 0, got {}",
                selection.min_spacing_m
            )));
        }

        if !(self.augment.max_detour_ratio.is_finite() && self.augment.max_detour_ratio >= 0.0) {
            return Err(invalid(format!(
                "max_detour_ratio must be >= 0, got {}",
                self.augment.max_detour_ratio
            )));
        }

        if self.osrm.base_url.trim().is_empty() || self.nominatim.base_url.trim().is_empty() {
            return Err(invalid("provider base_url must not be empty"));
        }
        if self.osrm.timeout_secs == 0 || self.nominatim.timeout_secs == 0 {
            return Err(invalid("provider timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Load and validate config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the effective configuration.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}
