//! Performance-normalization settings and season normalization caps.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_non_negative, check_positive_sum, check_unit_interval};
use crate::error::{Result, ScoringError};

/// Parameters for combat-sample aggregation, peer baselines and the
/// mechanical score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceSettings {
    /// Weight applied to samples inside the recent window. Must be > 1.0 so
    /// recent fights actually dominate the average.
    pub recent_weight_multiplier: f64,
    /// Minimum samples before computed metrics/baselines are trusted.
    pub min_sample_size: usize,
    /// Percentile rank (0–100) used for spec baselines.
    pub baseline_percentile: f64,
    /// Baseline deaths-per-attempt used below the minimum sample size.
    pub fallback_deaths_per_attempt: f64,
    /// Baseline avoidable-damage percentage used below the minimum sample size.
    pub fallback_avoidable_damage_pct: f64,
    /// Mechanical score assigned when a character has too few samples.
    pub fallback_mechanical_score: f64,
    /// Peer-relative ratio above which the mechanical score is vetoed to 0.
    pub critical_ratio_threshold: f64,
    /// Weight of the deaths-per-attempt ratio in the mechanical penalty.
    pub dpa_weight: f64,
    /// Weight of the avoidable-damage ratio in the mechanical penalty.
    pub adt_weight: f64,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            recent_weight_multiplier: 1.5,
            min_sample_size: 5,
            baseline_percentile: 50.0,
            fallback_deaths_per_attempt: 1.0,
            fallback_avoidable_damage_pct: 10.0,
            fallback_mechanical_score: 0.5,
            critical_ratio_threshold: 2.0,
            dpa_weight: 0.5,
            adt_weight: 0.5,
        }
    }
}

impl PerformanceSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.recent_weight_multiplier.is_finite() || self.recent_weight_multiplier <= 1.0 {
            return Err(ScoringError::ConfigurationInvalid {
                field: "performance.recent_weight_multiplier",
                rule: format!("must be a finite value > 1.0, got {}", self.recent_weight_multiplier),
            });
        }
        if !self.baseline_percentile.is_finite()
            || !(0.0..=100.0).contains(&self.baseline_percentile)
        {
            return Err(ScoringError::ConfigurationInvalid {
                field: "performance.baseline_percentile",
                rule: format!("must lie in [0, 100], got {}", self.baseline_percentile),
            });
        }
        check_non_negative(
            "performance.fallback_deaths_per_attempt",
            self.fallback_deaths_per_attempt,
        )?;
        check_non_negative(
            "performance.fallback_avoidable_damage_pct",
            self.fallback_avoidable_damage_pct,
        )?;
        check_unit_interval(
            "performance.fallback_mechanical_score",
            self.fallback_mechanical_score,
        )?;
        if !self.critical_ratio_threshold.is_finite() || self.critical_ratio_threshold < 1.0 {
            return Err(ScoringError::ConfigurationInvalid {
                field: "performance.critical_ratio_threshold",
                rule: format!("must be a finite value >= 1.0, got {}", self.critical_ratio_threshold),
            });
        }
        check_non_negative("performance.dpa_weight", self.dpa_weight)?;
        check_non_negative("performance.adt_weight", self.adt_weight)?;
        check_positive_sum("performance", self.dpa_weight + self.adt_weight)
    }
}

/// Season-specific normalization ceilings for the preparation and
/// item-priority components. Deliberately configuration-driven: vault slot
/// counts, crest caps and tier-set sizes shift every season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizationCaps {
    /// Great Vault slots available per week.
    pub vault_slot_max: u32,
    /// Crest-usage ratio treated as fully prepared.
    pub crest_ratio_cap: f64,
    /// Heroic boss kills treated as full completion.
    pub heroic_kill_cap: u32,
    /// Pieces in a full tier set.
    pub tier_set_size: u32,
}

impl Default for NormalizationCaps {
    fn default() -> Self {
        Self { vault_slot_max: 9, crest_ratio_cap: 1.0, heroic_kill_cap: 8, tier_set_size: 5 }
    }
}

impl NormalizationCaps {
    pub fn validate(&self) -> Result<()> {
        if self.vault_slot_max == 0 {
            return Err(ScoringError::ConfigurationInvalid {
                field: "caps.vault_slot_max",
                rule: "must be > 0".to_string(),
            });
        }
        if !self.crest_ratio_cap.is_finite() || self.crest_ratio_cap <= 0.0 {
            return Err(ScoringError::ConfigurationInvalid {
                field: "caps.crest_ratio_cap",
                rule: format!("must be a finite value > 0, got {}", self.crest_ratio_cap),
            });
        }
        if self.heroic_kill_cap == 0 {
            return Err(ScoringError::ConfigurationInvalid {
                field: "caps.heroic_kill_cap",
                rule: "must be > 0".to_string(),
            });
        }
        if self.tier_set_size == 0 {
            return Err(ScoringError::ConfigurationInvalid {
                field: "caps.tier_set_size",
                rule: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PerformanceSettings::default().validate().is_ok());
        assert!(NormalizationCaps::default().validate().is_ok());
    }

    #[test]
    fn recent_weight_must_exceed_one() {
        let settings = PerformanceSettings { recent_weight_multiplier: 1.0, ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn percentile_outside_range_is_rejected() {
        let settings = PerformanceSettings { baseline_percentile: 101.0, ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_ratio_weights_are_rejected() {
        let settings =
            PerformanceSettings { dpa_weight: 0.0, adt_weight: 0.0, ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_caps_are_rejected() {
        let caps = NormalizationCaps { tier_set_size: 0, ..Default::default() };
        assert!(caps.validate().is_err());
        let caps = NormalizationCaps { crest_ratio_cap: 0.0, ..Default::default() };
        assert!(caps.validate().is_err());
    }
}
