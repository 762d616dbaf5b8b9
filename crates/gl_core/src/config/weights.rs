//! Weight groups for the merit and item-priority formulas.
//!
//! Both groups are applied multiplicatively downstream:
//! - `MeritWeights` act as exponents on the merit components, so the
//!   default of 1.0 per field reproduces the plain product
//!   `attendance * mechanical * preparation`, and a zeroed component with a
//!   positive weight still zeroes the merit score.
//! - `PriorityWeights` scale the two normalized item-priority components
//!   linearly and raise the role multiplier to `role_multiplier`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_non_negative, check_positive_sum};
use crate::error::Result;

/// Exponent weights for the three merit components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MeritWeights {
    pub attendance: f64,
    pub mechanical: f64,
    pub preparation: f64,
}

impl Default for MeritWeights {
    fn default() -> Self {
        Self { attendance: 1.0, mechanical: 1.0, preparation: 1.0 }
    }
}

impl MeritWeights {
    /// Validating constructor. Either every field is in range or
    /// construction fails; there is no partially valid group.
    pub fn new(attendance: f64, mechanical: f64, preparation: f64) -> Result<Self> {
        let weights = Self { attendance, mechanical, preparation };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("merit_weights.attendance", self.attendance)?;
        check_non_negative("merit_weights.mechanical", self.mechanical)?;
        check_non_negative("merit_weights.preparation", self.preparation)?;
        check_positive_sum(
            "merit_weights",
            self.attendance + self.mechanical + self.preparation,
        )
    }
}

/// Weights for the item-priority components.
///
/// `upgrade_value` and `tier_bonus` are linear coefficients on the two
/// normalized [0,1] components; `role_multiplier` is an exponent on the
/// configured role multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PriorityWeights {
    pub upgrade_value: f64,
    pub tier_bonus: f64,
    pub role_multiplier: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self { upgrade_value: 1.0, tier_bonus: 1.0, role_multiplier: 1.0 }
    }
}

impl PriorityWeights {
    pub fn new(upgrade_value: f64, tier_bonus: f64, role_multiplier: f64) -> Result<Self> {
        let weights = Self { upgrade_value, tier_bonus, role_multiplier };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("priority_weights.upgrade_value", self.upgrade_value)?;
        check_non_negative("priority_weights.tier_bonus", self.tier_bonus)?;
        check_non_negative("priority_weights.role_multiplier", self.role_multiplier)?;
        // The role exponent is deliberately excluded: an all-zero component
        // pair would make every item score identically.
        check_positive_sum("priority_weights", self.upgrade_value + self.tier_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;

    #[test]
    fn defaults_are_valid() {
        assert!(MeritWeights::default().validate().is_ok());
        assert!(PriorityWeights::default().validate().is_ok());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = MeritWeights::new(-0.1, 1.0, 1.0).unwrap_err();
        match err {
            ScoringError::ConfigurationInvalid { field, .. } => {
                assert_eq!(field, "merit_weights.attendance");
            }
            other => panic!("expected ConfigurationInvalid, got {:?}", other),
        }
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let err = MeritWeights::new(0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, ScoringError::ConfigurationInvalid { field: "merit_weights", .. }));

        let err = PriorityWeights::new(0.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ScoringError::ConfigurationInvalid { field: "priority_weights", .. }));
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        assert!(MeritWeights::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(PriorityWeights::new(f64::INFINITY, 1.0, 1.0).is_err());
    }
}
