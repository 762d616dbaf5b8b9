//! # Report assembly
//!
//! Batch scoring for a guild-wide loot report: every raider is scored
//! independently (the per-raider map is embarrassingly parallel), entries
//! are sorted by final score descending, and each component is restated as
//! a percentage of its own theoretical maximum for presentation layers.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::GuildScoringConfiguration;
use crate::error::Result;
use crate::models::{RaiderScoringInput, Role, ScoreResult};
use crate::scoring::engine::ScoringEngine;

/// Component scores restated as percentages of their theoretical maxima.
/// Every field lies in [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentPercentages {
    pub attendance: f64,
    pub mechanical: f64,
    pub preparation: f64,
    pub merit: f64,
    pub item_priority: f64,
    pub recency: f64,
    pub final_score: f64,
}

/// One successfully scored raider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub character: String,
    pub role: Role,
    pub result: ScoreResult,
    pub percentages: ComponentPercentages,
}

/// One raider whose input could not be scored. Failures never abort the
/// batch; they are carried alongside the ranked entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFailure {
    pub character: String,
    pub reason: String,
}

/// Guild-wide loot priority report, ranked by final score descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootPriorityReport {
    pub entries: Vec<ReportEntry>,
    pub failures: Vec<ReportFailure>,
}

impl LootPriorityReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.failures.is_empty()
    }
}

/// Validate the configuration once and score the whole batch.
///
/// An empty raider list yields an empty, valid report.
pub fn assemble_report(
    config: &GuildScoringConfiguration,
    raiders: &[RaiderScoringInput],
) -> Result<LootPriorityReport> {
    let engine = ScoringEngine::new(config.clone())?;
    Ok(assemble_with_engine(&engine, raiders))
}

/// Score a batch with an already-constructed engine.
pub fn assemble_with_engine(
    engine: &ScoringEngine,
    raiders: &[RaiderScoringInput],
) -> LootPriorityReport {
    let max_item_priority = engine.config().max_item_priority();
    let max_final_score = engine.config().max_final_score();

    let scored: Vec<(usize, std::result::Result<ScoreResult, crate::error::ScoringError>)> =
        raiders
            .par_iter()
            .enumerate()
            .map(|(idx, raider)| (idx, engine.score(raider)))
            .collect();

    let mut entries = Vec::with_capacity(raiders.len());
    let mut failures = Vec::new();
    for (idx, outcome) in scored {
        let raider = &raiders[idx];
        match outcome {
            Ok(result) => entries.push(ReportEntry {
                character: raider.character.clone(),
                role: raider.role,
                result,
                percentages: percentages_of(&result, max_item_priority, max_final_score),
            }),
            Err(err) => {
                warn!(character = %raider.character, error = %err, "raider could not be scored");
                failures.push(ReportFailure {
                    character: raider.character.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    // Scores are finite by construction, so total_cmp gives a strict order.
    entries.sort_by(|a, b| b.result.final_score.total_cmp(&a.result.final_score));

    LootPriorityReport { entries, failures }
}

fn percentages_of(
    result: &ScoreResult,
    max_item_priority: f64,
    max_final_score: f64,
) -> ComponentPercentages {
    ComponentPercentages {
        attendance: pct(result.attendance_score, 1.0),
        mechanical: pct(result.mechanical_score, 1.0),
        preparation: pct(result.preparation_score, 1.0),
        merit: pct(result.merit, 1.0),
        item_priority: pct(result.item_priority, max_item_priority),
        recency: pct(result.recency_decay, 1.0),
        final_score: pct(result.final_score, max_final_score),
    }
}

fn pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}
