//! # Performance aggregator
//!
//! Converts raw per-fight combat-log samples for one character into
//! aggregate [`PerformanceMetrics`], weighting recent fights more heavily.
//!
//! Samples inside the recent window (timestamp after the cutoff) carry the
//! configured `recent_weight_multiplier`; older samples carry 1.0. Both
//! metric series are combined as weighted averages `sum(v*w) / sum(w)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PerformanceSettings;
use crate::error::{Result, ScoringError};

/// One fight's raw combat-log numbers for a single character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FightSample {
    pub deaths: u32,
    /// Pulls covered by this sample; a wipe night can log many attempts
    /// with zero deaths for a given character.
    pub attempts: u32,
    pub avoidable_damage_pct: f64,
    pub timestamp: DateTime<Utc>,
}

impl FightSample {
    /// Deaths per attempt for this sample alone. A zero-attempt sample is
    /// treated as one attempt rather than dividing by zero.
    pub fn deaths_per_attempt(&self) -> f64 {
        f64::from(self.deaths) / f64::from(self.attempts.max(1))
    }
}

/// Aggregated per-character combat metrics, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_deaths: u32,
    pub total_attempts: u32,
    /// Recency-weighted average deaths per attempt.
    pub deaths_per_attempt: f64,
    /// Recency-weighted average avoidable-damage percentage.
    pub avg_avoidable_damage_pct: f64,
    pub sample_count: usize,
}

/// Aggregate one character's samples against a recent-window cutoff.
///
/// Returns [`ScoringError::InsufficientSampleData`] on empty input — the
/// "no data" signal; callers fall back to configured values instead of
/// receiving a division by zero.
pub fn aggregate(
    samples: &[FightSample],
    recent_cutoff: DateTime<Utc>,
    settings: &PerformanceSettings,
) -> Result<PerformanceMetrics> {
    if samples.is_empty() {
        return Err(ScoringError::InsufficientSampleData { samples: 0, required: 1 });
    }

    let mut weight_sum = 0.0f64;
    let mut dpa_sum = 0.0f64;
    let mut adt_sum = 0.0f64;
    let mut total_deaths = 0u32;
    let mut total_attempts = 0u32;

    for sample in samples {
        let weight = if sample.timestamp > recent_cutoff {
            settings.recent_weight_multiplier
        } else {
            1.0
        };
        weight_sum += weight;
        dpa_sum += sample.deaths_per_attempt() * weight;
        adt_sum += sample.avoidable_damage_pct.max(0.0) * weight;
        total_deaths = total_deaths.saturating_add(sample.deaths);
        total_attempts = total_attempts.saturating_add(sample.attempts.max(1));
    }

    // weight_sum >= 1.0 here: at least one sample, every weight >= 1.0.
    Ok(PerformanceMetrics {
        total_deaths,
        total_attempts,
        deaths_per_attempt: dpa_sum / weight_sum,
        avg_avoidable_damage_pct: adt_sum / weight_sum,
        sample_count: samples.len(),
    })
}
