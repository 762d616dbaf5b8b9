//! # Guild scoring configuration
//!
//! Typed, independently validated parameter groups for the loot priority
//! formula. A `GuildScoringConfiguration` is immutable once validated;
//! replacing a guild's configuration replaces the whole object, never a
//! single field.
//!
//! The default configuration ships as embedded YAML and is validated once,
//! lazily, on first access.

pub mod performance;
pub mod thresholds;
pub mod weights;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

pub use performance::{NormalizationCaps, PerformanceSettings};
pub use thresholds::{EligibilityThresholds, RecencyPenalties, RoleMultipliers};
pub use weights::{MeritWeights, PriorityWeights};

const DEFAULT_SCORING_YAML: &str = include_str!("default_scoring.yaml");
static DEFAULT_CONFIG: Lazy<GuildScoringConfiguration> = Lazy::new(|| {
    GuildScoringConfiguration::from_yaml_str(DEFAULT_SCORING_YAML)
        .expect("embedded default scoring configuration is invalid")
});

/// Complete per-guild scoring configuration.
///
/// Each group validates independently; the whole object is valid only when
/// every group is. Construction through [`GuildScoringConfiguration::new`],
/// [`from_yaml_str`](Self::from_yaml_str) or
/// [`from_json_str`](Self::from_json_str) never partially succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuildScoringConfiguration {
    pub merit_weights: MeritWeights,
    pub priority_weights: PriorityWeights,
    pub eligibility: EligibilityThresholds,
    pub role_multipliers: RoleMultipliers,
    pub recency: RecencyPenalties,
    pub performance: PerformanceSettings,
    pub caps: NormalizationCaps,
}

impl GuildScoringConfiguration {
    pub fn new(
        merit_weights: MeritWeights,
        priority_weights: PriorityWeights,
        eligibility: EligibilityThresholds,
        role_multipliers: RoleMultipliers,
        recency: RecencyPenalties,
        performance: PerformanceSettings,
        caps: NormalizationCaps,
    ) -> Result<Self> {
        let config = Self {
            merit_weights,
            priority_weights,
            eligibility,
            role_multipliers,
            recency,
            performance,
            caps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every group. The first violation is returned with the
    /// offending field and rule; later groups are not inspected.
    pub fn validate(&self) -> Result<()> {
        self.merit_weights.validate()?;
        self.priority_weights.validate()?;
        self.eligibility.validate()?;
        self.role_multipliers.validate()?;
        self.recency.validate()?;
        self.performance.validate()?;
        self.caps.validate()
    }

    /// Parse and validate a YAML configuration document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            ScoringError::ConfigurationInvalid { field: "yaml", rule: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            ScoringError::ConfigurationInvalid { field: "json", rule: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Documented upper bound of the item-priority index under this
    /// configuration: `(w_upgrade + w_tier) * max_role^w_role`.
    pub fn max_item_priority(&self) -> f64 {
        let w = &self.priority_weights;
        (w.upgrade_value + w.tier_bonus)
            * self.role_multipliers.max_multiplier().powf(w.role_multiplier)
    }

    /// Documented upper bound of the final loot priority score. Merit and
    /// recency decay are both bounded by 1.0, so the item-priority bound is
    /// the whole bound.
    pub fn max_final_score(&self) -> f64 {
        self.max_item_priority()
    }
}

impl Default for GuildScoringConfiguration {
    /// The embedded default configuration. Parsed and validated once; a
    /// defect in the embedded YAML is a build problem, not a runtime input.
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

// ============================================================================
// Shared validation checks
// ============================================================================

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScoringError::ConfigurationInvalid {
            field,
            rule: format!("must be a finite value >= 0, got {}", value),
        });
    }
    Ok(())
}

pub(crate) fn check_unit_interval(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ScoringError::ConfigurationInvalid {
            field,
            rule: format!("must lie in [0.0, 1.0], got {}", value),
        });
    }
    Ok(())
}

pub(crate) fn check_positive_sum(field: &'static str, sum: f64) -> Result<()> {
    if !(sum > 0.0) {
        return Err(ScoringError::ConfigurationInvalid {
            field,
            rule: format!("weights must sum to a value > 0, got {}", sum),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse_and_validate() {
        let config = GuildScoringConfiguration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.eligibility.attendance_fraction, 0.75);
        assert_eq!(config.role_multipliers.dps, 1.0);
        assert_eq!(config.performance.min_sample_size, 5);
    }

    #[test]
    fn default_bounds_are_two() {
        let config = GuildScoringConfiguration::default();
        assert_eq!(config.max_item_priority(), 2.0);
        assert_eq!(config.max_final_score(), 2.0);
    }

    #[test]
    fn yaml_round_trip_preserves_configuration() {
        let config = GuildScoringConfiguration::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let reparsed = GuildScoringConfiguration::from_yaml_str(&yaml).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn invalid_group_fails_whole_construction() {
        let mut config = GuildScoringConfiguration::default();
        config.recency.tier_b = 0.9; // violates tier ordering
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScoringError::ConfigurationInvalid { field: "recency", .. }));
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let err = GuildScoringConfiguration::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ScoringError::ConfigurationInvalid { field: "json", .. }));
    }
}
