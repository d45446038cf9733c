//! Simulation configuration with documented defaults
//!
//! Everything that shapes a fresh world (starting stock, passive generation,
//! where the dungeon heart sits, where the host may place things) is collected
//! here. Values load from TOML; every field falls back to its default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::types::Vec3;
use crate::economy::ResourceKind;

/// Errors from loading or validating a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Region of the map where the host is allowed to place entities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementBounds {
    /// Maximum absolute value for x and z
    pub horizontal_extent: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for PlacementBounds {
    fn default() -> Self {
        Self {
            horizontal_extent: 100.0,
            min_height: -10.0,
            max_height: 20.0,
        }
    }
}

impl PlacementBounds {
    pub fn contains(&self, position: Vec3) -> bool {
        position.is_finite()
            && position.x.abs() <= self.horizontal_extent
            && position.z.abs() <= self.horizontal_extent
            && position.y >= self.min_height
            && position.y <= self.max_height
    }
}

/// Configuration for a new world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Stock credited by `World::initialize`. Kinds not listed start at zero.
    pub starting_resources: BTreeMap<ResourceKind, u64>,

    /// Passive generation per resource, units per second of game time.
    ///
    /// Applies on top of building production. Fractions below one unit per
    /// tick are dropped, so small rates only pay out with large deltas.
    pub generation_rates: BTreeMap<ResourceKind, f64>,

    /// Where the pre-built dungeon heart is placed
    pub heart_position: Vec3,

    /// Host placement limits, see `GameBridge::validate_position`
    pub placement: PlacementBounds,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let starting_resources = BTreeMap::from([
            (ResourceKind::Gold, 1000),
            (ResourceKind::Mana, 500),
            (ResourceKind::Food, 200),
            (ResourceKind::RawMaterial, 0),
            (ResourceKind::CreatureCount, 0),
        ]);

        Self {
            starting_resources,
            generation_rates: BTreeMap::new(),
            heart_position: Vec3::ORIGIN,
            placement: PlacementBounds::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, rate) in &self.generation_rates {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "generation rate for {} must be a non-negative number, got {}",
                    kind, rate
                )));
            }
        }

        if !self.heart_position.is_finite() {
            return Err(ConfigError::Invalid("heart_position must be finite".into()));
        }

        let bounds = &self.placement;
        if !(bounds.horizontal_extent > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "placement.horizontal_extent ({}) must be positive",
                bounds.horizontal_extent
            )));
        }
        if !(bounds.min_height < bounds.max_height) {
            return Err(ConfigError::Invalid(format!(
                "placement.min_height ({}) should be < placement.max_height ({})",
                bounds.min_height, bounds.max_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_resources[&ResourceKind::Gold], 1000);
        assert_eq!(config.starting_resources[&ResourceKind::Mana], 500);
        assert_eq!(config.starting_resources[&ResourceKind::Food], 200);
        assert!(config.generation_rates.is_empty());
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let config = SimulationConfig::parse_toml(
            r#"
            [starting_resources]
            gold = 50
            raw_gold = 7

            [generation_rates]
            food = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.starting_resources[&ResourceKind::Gold], 50);
        assert_eq!(config.starting_resources[&ResourceKind::RawMaterial], 7);
        // Listing starting_resources replaces the whole table
        assert!(!config.starting_resources.contains_key(&ResourceKind::Mana));
        assert_eq!(config.generation_rates[&ResourceKind::Food], 0.5);
        assert_eq!(config.placement, PlacementBounds::default());
    }

    #[test]
    fn test_parse_unknown_resource_key_fails() {
        let result = SimulationConfig::parse_toml(
            r#"
            [starting_resources]
            souls = 3
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = SimulationConfig::parse_toml(
            r#"
            [generation_rates]
            mana = -1.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_inverted_height_bounds_rejected() {
        let mut config = SimulationConfig::default();
        config.placement.min_height = 30.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_placement_bounds_contains() {
        let bounds = PlacementBounds::default();
        assert!(bounds.contains(Vec3::new(100.0, 0.0, -100.0)));
        assert!(bounds.contains(Vec3::new(0.0, -10.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(100.5, 0.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, 20.5, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, f32::NAN, 0.0)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = SimulationConfig::load_from_toml(Path::new("/nonexistent/simulation.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_sample_config() {
        let config = SimulationConfig::load_from_toml(Path::new("data/simulation.toml"))
            .expect("Should load data/simulation.toml");
        assert_eq!(config.starting_resources[&ResourceKind::Gold], 1000);
        assert_eq!(config.generation_rates[&ResourceKind::Gold], 1.0);
        assert_eq!(config.heart_position, Vec3::ORIGIN);
        assert_eq!(config.placement, PlacementBounds::default());
    }
}
