//! Eligibility thresholds, role multipliers and recency penalties.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_non_negative, check_unit_interval};
use crate::error::{Result, ScoringError};
use crate::models::Role;

/// Hard eligibility gates expressed as fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EligibilityThresholds {
    /// Minimum attendance fraction for the attendance gate to open.
    pub attendance_fraction: f64,
    /// Minimum fraction of raid activity (signups honored, fights logged).
    pub activity_fraction: f64,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self { attendance_fraction: 0.75, activity_fraction: 0.50 }
    }
}

impl EligibilityThresholds {
    pub fn new(attendance_fraction: f64, activity_fraction: f64) -> Result<Self> {
        let thresholds = Self { attendance_fraction, activity_fraction };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        check_unit_interval("eligibility.attendance_fraction", self.attendance_fraction)?;
        check_unit_interval("eligibility.activity_fraction", self.activity_fraction)
    }
}

/// Per-role scaling of the item-priority index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoleMultipliers {
    pub tank: f64,
    pub healer: f64,
    pub dps: f64,
}

impl Default for RoleMultipliers {
    fn default() -> Self {
        Self { tank: 0.8, healer: 0.7, dps: 1.0 }
    }
}

impl RoleMultipliers {
    pub fn new(tank: f64, healer: f64, dps: f64) -> Result<Self> {
        let multipliers = Self { tank, healer, dps };
        multipliers.validate()?;
        Ok(multipliers)
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("role_multipliers.tank", self.tank)?;
        check_non_negative("role_multipliers.healer", self.healer)?;
        check_non_negative("role_multipliers.dps", self.dps)
    }

    /// Multiplier for a role. Exhaustive by construction: `Role` is a
    /// closed enum, so there is no unknown-role case at this layer.
    pub fn for_role(&self, role: Role) -> f64 {
        match role {
            Role::Tank => self.tank,
            Role::Healer => self.healer,
            Role::Dps => self.dps,
        }
    }

    /// Largest configured multiplier; defines the item-priority upper bound.
    pub fn max_multiplier(&self) -> f64 {
        self.tank.max(self.healer).max(self.dps)
    }
}

/// Recency-decay tiers for recent loot recipients.
///
/// Tier values are the *retained* fraction of the final score after the
/// first, second, and third-or-later recent award. `recovery_rate` is the
/// fraction of the lost decay recovered per day since the last award, when
/// the caller supplies elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecencyPenalties {
    pub tier_a: f64,
    pub tier_b: f64,
    pub tier_c: f64,
    pub recovery_rate: f64,
}

impl Default for RecencyPenalties {
    fn default() -> Self {
        Self { tier_a: 0.50, tier_b: 0.25, tier_c: 0.10, recovery_rate: 0.10 }
    }
}

impl RecencyPenalties {
    pub fn new(tier_a: f64, tier_b: f64, tier_c: f64, recovery_rate: f64) -> Result<Self> {
        let penalties = Self { tier_a, tier_b, tier_c, recovery_rate };
        penalties.validate()?;
        Ok(penalties)
    }

    pub fn validate(&self) -> Result<()> {
        check_unit_interval("recency.tier_a", self.tier_a)?;
        check_unit_interval("recency.tier_b", self.tier_b)?;
        check_unit_interval("recency.tier_c", self.tier_c)?;
        check_unit_interval("recency.recovery_rate", self.recovery_rate)?;
        // Ordering makes decay monotone non-increasing in the loot count a
        // configuration invariant rather than a runtime property.
        if self.tier_a < self.tier_b || self.tier_b < self.tier_c {
            return Err(ScoringError::ConfigurationInvalid {
                field: "recency",
                rule: format!(
                    "tiers must be non-increasing (tier_a {} >= tier_b {} >= tier_c {})",
                    self.tier_a, self.tier_b, self.tier_c
                ),
            });
        }
        Ok(())
    }

    /// Recency decay factor in [0, 1].
    ///
    /// Zero (or negative) recent loot retains the full score. One recent
    /// award maps to tier A, two to tier B, three or more to tier C. When
    /// `days_since_last_award` is known, the penalty recovers linearly at
    /// `recovery_rate` per day.
    pub fn decay_factor(&self, recent_loot_count: i32, days_since_last_award: Option<f64>) -> f64 {
        if recent_loot_count <= 0 {
            return 1.0;
        }
        let tier = match recent_loot_count {
            1 => self.tier_a,
            2 => self.tier_b,
            _ => self.tier_c,
        };
        let recovered = match days_since_last_award {
            Some(days) => (self.recovery_rate * days.max(0.0)).clamp(0.0, 1.0),
            None => 0.0,
        };
        (tier + (1.0 - tier) * recovered).clamp(0.0, 1.0)
    }
}
