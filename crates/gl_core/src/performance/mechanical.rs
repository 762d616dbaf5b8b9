//! # Mechanical score (MAS)
//!
//! Peer-relative, bounded skill score from combat metrics. The character's
//! deaths-per-attempt and avoidable-damage averages are divided by the spec
//! baseline; deviation from 1.0 in either direction moves the score, and a
//! catastrophic ratio vetoes it outright.

use crate::config::PerformanceSettings;
use crate::performance::aggregator::PerformanceMetrics;
use crate::performance::baseline::SpecBaseline;

/// Mechanical score for aggregated metrics against a spec baseline.
///
/// Characters below the minimum sample size receive the configured
/// fallback score: too little evidence to compute a peer-relative number.
pub fn mechanical_score(
    metrics: &PerformanceMetrics,
    baseline: &SpecBaseline,
    settings: &PerformanceSettings,
) -> f64 {
    if metrics.sample_count < settings.min_sample_size {
        return settings.fallback_mechanical_score;
    }
    mechanical_from_ratios(
        metrics.deaths_per_attempt,
        baseline.deaths_per_attempt,
        metrics.avg_avoidable_damage_pct,
        baseline.avoidable_damage_pct,
        settings,
    )
}

/// Ratio-formula core, shared with the scoring engine for callers that
/// supply already-aggregated deaths-per-attempt/avoidable-damage inputs.
///
/// Output is clamped to [0.0, 1.0]: performing better than peers raises the
/// score above the unpenalized baseline, but never past perfect.
pub fn mechanical_from_ratios(
    character_dpa: f64,
    spec_avg_dpa: f64,
    character_adt: f64,
    spec_avg_adt: f64,
    settings: &PerformanceSettings,
) -> f64 {
    let dpa_ratio = guarded_ratio(character_dpa, spec_avg_dpa);
    let adt_ratio = guarded_ratio(character_adt, spec_avg_adt);

    // Hard veto: catastrophically worse than peers in either metric.
    if dpa_ratio > settings.critical_ratio_threshold
        || adt_ratio > settings.critical_ratio_threshold
    {
        return 0.0;
    }

    let penalty = (dpa_ratio - 1.0) * settings.dpa_weight
        + (adt_ratio - 1.0) * settings.adt_weight;
    (1.0 - penalty).clamp(0.0, 1.0)
}

/// Character-to-peer ratio with a zero-baseline guard: no baseline reads as
/// neutral (1.0) rather than dividing by zero. Negative character values
/// clamp to zero first.
fn guarded_ratio(value: f64, baseline: f64) -> f64 {
    if baseline <= 0.0 || !baseline.is_finite() {
        1.0
    } else {
        value.max(0.0) / baseline
    }
}
