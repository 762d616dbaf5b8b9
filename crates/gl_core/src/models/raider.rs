//! Raider-facing value types: the closed `Role` variant and the per-raider
//! scoring snapshot.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Raid role. A closed variant set: multiplier lookup is an exhaustive
/// match, so an unknown role cannot reach the scoring engine. Unrecognized
/// strings fail at parse time with [`ScoringError::InvalidRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tank,
    Healer,
    Dps,
}

impl FromStr for Role {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tank" => Ok(Role::Tank),
            "healer" => Ok(Role::Healer),
            "dps" => Ok(Role::Dps),
            other => Err(ScoringError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Tank => write!(f, "tank"),
            Role::Healer => write!(f, "healer"),
            Role::Dps => write!(f, "dps"),
        }
    }
}

/// One raider's snapshot for a single calculation, for one item drop.
///
/// A pure value: identity does not extend past the raider/item pairing it
/// was computed for. Mechanical inputs arrive already aggregated
/// (deaths-per-attempt and avoidable-damage alongside their spec averages);
/// callers holding raw fight samples aggregate them first through
/// [`crate::performance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RaiderScoringInput {
    /// Character name, carried through to the report.
    pub character: String,
    pub role: Role,
    /// Attendance over the evaluation window, in percent (0–100 expected;
    /// garbage values gate to zero rather than erroring).
    pub attendance_percent: f64,
    pub deaths_per_attempt: f64,
    pub spec_avg_deaths_per_attempt: f64,
    pub avoidable_damage_pct: f64,
    pub spec_avg_avoidable_damage_pct: f64,
    /// Great Vault slots unlocked this week.
    pub vault_slots: i32,
    /// Fraction of earned crests actually spent, 0.0–1.0 expected.
    pub crest_usage_ratio: f64,
    pub heroic_kills: i32,
    /// Simulated DPS/HPS gain from the drop.
    pub simulated_gain: f64,
    /// Spec-wide gear baseline the gain is normalized against.
    pub spec_gear_baseline: f64,
    pub tier_pieces_owned: i32,
    pub recent_loot_count: i32,
    /// Days since the last award, when the caller knows it; enables
    /// time-based recovery of the recency penalty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_since_last_award: Option<f64>,
}
