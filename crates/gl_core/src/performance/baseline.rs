//! # Peer baseline calculator
//!
//! Percentile-based per-spec reference values for deaths-per-attempt and
//! avoidable damage. Input sample sets are treated as immutable snapshots:
//! each metric series is copied into a fresh vector and sorted there, never
//! mutating caller-owned data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::PerformanceSettings;
use crate::performance::aggregator::FightSample;

/// How a baseline was produced. Fallback baselines are low-confidence and
/// worth flagging in caller-side logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineSource {
    Measured,
    Fallback,
}

/// Per-spec peer reference values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecBaseline {
    pub sample_size: usize,
    pub deaths_per_attempt: f64,
    pub avoidable_damage_pct: f64,
    /// Percentile rank (0–100) the values were taken at.
    pub percentile_rank: f64,
    pub source: BaselineSource,
}

impl SpecBaseline {
    pub fn is_fallback(&self) -> bool {
        self.source == BaselineSource::Fallback
    }
}

/// Compute a spec's baseline from its pooled samples.
///
/// Below the configured minimum sample size the configured fallback
/// constants are returned instead of computed percentiles, tagged as
/// [`BaselineSource::Fallback`] and logged.
pub fn compute_baseline(samples: &[FightSample], settings: &PerformanceSettings) -> SpecBaseline {
    let percentile_rank = settings.baseline_percentile.clamp(0.0, 100.0);

    if samples.len() < settings.min_sample_size {
        warn!(
            samples = samples.len(),
            required = settings.min_sample_size,
            "spec baseline below minimum sample size, using fallback constants"
        );
        return SpecBaseline {
            sample_size: samples.len(),
            deaths_per_attempt: settings.fallback_deaths_per_attempt,
            avoidable_damage_pct: settings.fallback_avoidable_damage_pct,
            percentile_rank,
            source: BaselineSource::Fallback,
        };
    }

    let mut dpa_series: Vec<f64> = samples.iter().map(FightSample::deaths_per_attempt).collect();
    let mut adt_series: Vec<f64> =
        samples.iter().map(|s| s.avoidable_damage_pct.max(0.0)).collect();
    dpa_series.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    adt_series.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    SpecBaseline {
        sample_size: samples.len(),
        deaths_per_attempt: percentile_interpolated(&dpa_series, percentile_rank),
        avoidable_damage_pct: percentile_interpolated(&adt_series, percentile_rank),
        percentile_rank,
        source: BaselineSource::Measured,
    }
}

/// Compute each spec's baseline once per batch for read-only sharing across
/// every raider scored in the same report.
pub fn compute_spec_baselines(
    samples_by_spec: &HashMap<String, Vec<FightSample>>,
    settings: &PerformanceSettings,
) -> HashMap<String, SpecBaseline> {
    samples_by_spec
        .iter()
        .map(|(spec, samples)| (spec.clone(), compute_baseline(samples, settings)))
        .collect()
}

/// Percentile by linear interpolation between the two bracketing order
/// statistics: `index = (p/100)*(n-1)`, then interpolate on the fractional
/// part. A single-sample series returns that sample for both bracket ends.
fn percentile_interpolated(sorted: &[f64], percentile: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let index = (percentile / 100.0) * (n - 1) as f64;
            let lower_idx = index.floor() as usize;
            let upper_idx = (lower_idx + 1).min(n - 1);
            let fraction = index - lower_idx as f64;
            let lower = sorted[lower_idx];
            let upper = sorted[upper_idx];
            lower + (upper - lower) * fraction
        }
    }
}
