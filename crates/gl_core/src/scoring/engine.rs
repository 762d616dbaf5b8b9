//! # Scoring engine
//!
//! Combines the attendance gate, mechanical score, preparation composite,
//! item priority and recency decay into one [`ScoreResult`] per raider.
//!
//! Formulas (defaults reproduce the published form exactly):
//! - RMS  = attendance^w_att * mechanical^w_mech * preparation^w_prep
//! - IPI  = (w_up * upgrade + w_tier * tier_bonus) * role_mult^w_role
//! - FLPS = RMS * IPI * RDF
//!
//! Deterministic and side-effect free: identical inputs always produce
//! identical output, no I/O, no randomness.

use crate::config::GuildScoringConfiguration;
use crate::error::{Result, ScoringError};
use crate::models::{RaiderScoringInput, ScoreResult};
use crate::performance::mechanical_from_ratios;

/// Engine over a validated configuration.
///
/// Construction validates once; an invalid configuration is rejected here
/// with `ConfigurationInvalid`, never deep inside a calculation.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: GuildScoringConfiguration,
}

impl ScoringEngine {
    pub fn new(config: GuildScoringConfiguration) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine over the embedded default configuration.
    pub fn with_defaults() -> Self {
        Self { config: GuildScoringConfiguration::default() }
    }

    pub fn config(&self) -> &GuildScoringConfiguration {
        &self.config
    }

    /// Score one raider for one item drop.
    ///
    /// Finite inputs (including negative garbage) always yield a finite,
    /// bounded result; a non-finite intermediate fails with
    /// [`ScoringError::NonFiniteResult`] instead of propagating NaN.
    pub fn score(&self, input: &RaiderScoringInput) -> Result<ScoreResult> {
        let attendance_score = self.attendance_score(input.attendance_percent);
        let mechanical_score = mechanical_from_ratios(
            input.deaths_per_attempt,
            input.spec_avg_deaths_per_attempt,
            input.avoidable_damage_pct,
            input.spec_avg_avoidable_damage_pct,
            &self.config.performance,
        );
        let preparation_score = self.preparation_score(input);

        let merit = self.merit(attendance_score, mechanical_score, preparation_score);

        let upgrade_value = self.upgrade_value(input.simulated_gain, input.spec_gear_baseline);
        let tier_bonus = self.tier_bonus(input.tier_pieces_owned);
        let role_multiplier = self.config.role_multipliers.for_role(input.role);
        let item_priority = self.item_priority(upgrade_value, tier_bonus, role_multiplier);

        let recency_decay = self
            .config
            .recency
            .decay_factor(input.recent_loot_count, input.days_since_last_award);

        let final_score = merit * item_priority * recency_decay;

        check_finite("merit", merit)?;
        check_finite("item_priority", item_priority)?;
        check_finite("final_score", final_score)?;

        Ok(ScoreResult {
            attendance_score,
            mechanical_score,
            preparation_score,
            merit,
            upgrade_value,
            tier_bonus,
            role_multiplier,
            item_priority,
            recency_decay,
            final_score,
        })
    }

    /// Hard eligibility gate, not a continuous score. Attendance below the
    /// guild's bar contributes nothing regardless of margin; negative or
    /// malformed percentages simply sit below any positive threshold.
    fn attendance_score(&self, attendance_percent: f64) -> f64 {
        if attendance_percent / 100.0 >= self.config.eligibility.attendance_fraction {
            1.0
        } else {
            0.0
        }
    }

    /// Mean of three clamped terms: vault-slot utilization, crest usage and
    /// heroic completion, each against its configured season cap.
    fn preparation_score(&self, input: &RaiderScoringInput) -> f64 {
        let caps = &self.config.caps;
        let vault = f64::from(input.vault_slots) / f64::from(caps.vault_slot_max);
        let crests = input.crest_usage_ratio / caps.crest_ratio_cap;
        let kills = f64::from(input.heroic_kills) / f64::from(caps.heroic_kill_cap);
        let sum = clamp01(vault) + clamp01(crests) + clamp01(kills);
        clamp01(sum / 3.0)
    }

    /// Weighted conjunction of the merit components. `x^w` keeps [0,1]
    /// closed for w >= 0 and any zeroed component with a positive weight
    /// zeroes the product, so eligibility stays conjunctive.
    fn merit(&self, attendance: f64, mechanical: f64, preparation: f64) -> f64 {
        let w = &self.config.merit_weights;
        let merit = attendance.powf(w.attendance)
            * mechanical.powf(w.mechanical)
            * preparation.powf(w.preparation);
        clamp01(merit)
    }

    /// Normalized upgrade value. A zero or negative gear baseline carries
    /// no upgrade signal and contributes 0 rather than failing.
    fn upgrade_value(&self, simulated_gain: f64, spec_gear_baseline: f64) -> f64 {
        if spec_gear_baseline <= 0.0 || !spec_gear_baseline.is_finite() {
            return 0.0;
        }
        clamp01(simulated_gain / spec_gear_baseline)
    }

    /// Tier-completion bonus: fewer owned pieces, higher bonus.
    fn tier_bonus(&self, tier_pieces_owned: i32) -> f64 {
        let owned = f64::from(tier_pieces_owned.max(0));
        clamp01(1.0 - owned / f64::from(self.config.caps.tier_set_size))
    }

    fn item_priority(&self, upgrade_value: f64, tier_bonus: f64, role_multiplier: f64) -> f64 {
        let w = &self.config.priority_weights;
        (w.upgrade_value * upgrade_value + w.tier_bonus * tier_bonus)
            * role_multiplier.powf(w.role_multiplier)
    }
}

fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

fn check_finite(stage: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScoringError::NonFiniteResult { stage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn input(role: Role) -> RaiderScoringInput {
        RaiderScoringInput {
            character: "Tester".to_string(),
            role,
            attendance_percent: 95.0,
            deaths_per_attempt: 0.5,
            spec_avg_deaths_per_attempt: 1.0,
            avoidable_damage_pct: 5.0,
            spec_avg_avoidable_damage_pct: 10.0,
            vault_slots: 3,
            crest_usage_ratio: 0.9,
            heroic_kills: 8,
            simulated_gain: 500.0,
            spec_gear_baseline: 10000.0,
            tier_pieces_owned: 2,
            recent_loot_count: 1,
            days_since_last_award: None,
        }
    }

    #[test]
    fn reference_scenario_under_defaults() {
        let engine = ScoringEngine::with_defaults();
        let result = engine.score(&input(Role::Dps)).unwrap();

        assert_eq!(result.attendance_score, 1.0);
        assert_eq!(result.mechanical_score, 1.0);
        // (3/9 + 0.9 + 1.0) / 3
        assert!((result.preparation_score - 0.74444444).abs() < 1e-6);
        assert!((result.merit - 0.74444444).abs() < 1e-6);
        assert!((result.upgrade_value - 0.05).abs() < 1e-9);
        assert!((result.tier_bonus - 0.6).abs() < 1e-9);
        assert_eq!(result.role_multiplier, 1.0);
        assert!((result.item_priority - 0.65).abs() < 1e-9);
        assert_eq!(result.recency_decay, 0.5);
        assert!((result.final_score - 0.24194444).abs() < 1e-6);

        assert!(result.final_score > 0.0);
        for component in [result.merit, result.item_priority, result.recency_decay] {
            assert!((0.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn attendance_gate_is_binary() {
        let engine = ScoringEngine::with_defaults();

        let mut raider = input(Role::Dps);
        raider.attendance_percent = 100.0;
        assert_eq!(engine.score(&raider).unwrap().attendance_score, 1.0);

        raider.attendance_percent = 50.0;
        let result = engine.score(&raider).unwrap();
        assert_eq!(result.attendance_score, 0.0);
        // Multiplicative composition: failing the gate zeroes merit and FLPS.
        assert_eq!(result.merit, 0.0);
        assert_eq!(result.final_score, 0.0);

        raider.attendance_percent = -20.0;
        assert_eq!(engine.score(&raider).unwrap().attendance_score, 0.0);
    }

    #[test]
    fn role_multiplier_ordering_under_defaults() {
        let engine = ScoringEngine::with_defaults();
        let dps = engine.score(&input(Role::Dps)).unwrap().item_priority;
        let tank = engine.score(&input(Role::Tank)).unwrap().item_priority;
        let healer = engine.score(&input(Role::Healer)).unwrap().item_priority;
        assert!(dps >= tank && tank >= healer, "{} / {} / {}", dps, tank, healer);
    }

    #[test]
    fn zero_gear_baseline_contributes_no_upgrade_signal() {
        let engine = ScoringEngine::with_defaults();
        let mut raider = input(Role::Dps);
        raider.spec_gear_baseline = 0.0;
        let result = engine.score(&raider).unwrap();
        assert_eq!(result.upgrade_value, 0.0);
        assert!(result.final_score.is_finite());
    }

    #[test]
    fn full_preparation_scores_one_and_empty_scores_zero() {
        let engine = ScoringEngine::with_defaults();
        let mut raider = input(Role::Dps);
        raider.vault_slots = 9;
        raider.crest_usage_ratio = 1.0;
        raider.heroic_kills = 8;
        assert_eq!(engine.score(&raider).unwrap().preparation_score, 1.0);

        raider.vault_slots = -2;
        raider.crest_usage_ratio = -0.5;
        raider.heroic_kills = 0;
        assert_eq!(engine.score(&raider).unwrap().preparation_score, 0.0);
    }

    #[test]
    fn negative_garbage_inputs_stay_bounded() {
        let engine = ScoringEngine::with_defaults();
        let raider = RaiderScoringInput {
            character: "Garbage".to_string(),
            role: Role::Tank,
            attendance_percent: -500.0,
            deaths_per_attempt: -3.0,
            spec_avg_deaths_per_attempt: -1.0,
            avoidable_damage_pct: -99.0,
            spec_avg_avoidable_damage_pct: 0.0,
            vault_slots: -7,
            crest_usage_ratio: -1.0,
            heroic_kills: -4,
            simulated_gain: -1000.0,
            spec_gear_baseline: -5.0,
            tier_pieces_owned: -1,
            recent_loot_count: -9,
            days_since_last_award: Some(-3.0),
        };
        let result = engine.score(&raider).unwrap();
        assert!(result.final_score >= 0.0);
        assert!(result.final_score.is_finite());
        assert_eq!(result.recency_decay, 1.0);
        assert!((0.0..=1.0).contains(&result.merit));
    }

    #[test]
    fn flps_never_exceeds_the_documented_bound() {
        let engine = ScoringEngine::with_defaults();
        let bound = engine.config().max_final_score();
        let mut raider = input(Role::Dps);
        raider.attendance_percent = 100.0;
        raider.deaths_per_attempt = 0.0;
        raider.avoidable_damage_pct = 0.0;
        raider.vault_slots = 9;
        raider.crest_usage_ratio = 1.0;
        raider.simulated_gain = 1.0e9;
        raider.tier_pieces_owned = 0;
        raider.recent_loot_count = 0;
        let result = engine.score(&raider).unwrap();
        assert!(result.final_score <= bound, "{} > {}", result.final_score, bound);
        assert_eq!(result.final_score, 2.0); // everything maxed under defaults
    }

    #[test]
    fn invalid_configuration_is_rejected_at_construction() {
        let mut config = GuildScoringConfiguration::default();
        config.merit_weights.mechanical = -1.0;
        let err = ScoringEngine::new(config).unwrap_err();
        assert!(matches!(err, ScoringError::ConfigurationInvalid { .. }));
    }

    #[test]
    fn overflowing_intermediate_fails_with_named_error() {
        // Absurd but individually valid weights can overflow the item
        // priority; the engine must report that, not propagate infinity.
        let mut config = GuildScoringConfiguration::default();
        config.priority_weights.upgrade_value = f64::MAX;
        config.priority_weights.tier_bonus = f64::MAX;
        let engine = ScoringEngine::new(config).unwrap();
        let mut raider = input(Role::Dps);
        raider.simulated_gain = 1.0e9; // clamps to a full upgrade signal
        raider.tier_pieces_owned = 0; // full tier bonus
        let err = engine.score(&raider).unwrap_err();
        assert_eq!(err, ScoringError::NonFiniteResult { stage: "item_priority" });
    }

    #[test]
    fn identical_inputs_produce_identical_results() {
        let engine = ScoringEngine::with_defaults();
        let raider = input(Role::Healer);
        let a = engine.score(&raider).unwrap();
        let b = engine.score(&raider).unwrap();
        assert_eq!(a, b);
    }
}
