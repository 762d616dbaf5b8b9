//! # gl_core - Deterministic Loot Priority Scoring Engine
//!
//! Ranks raiders competing for the same item drop by combining a merit
//! score (attendance, peer-normalized mechanics, preparation), an
//! item-priority score (simulated upgrade value, tier completion, role)
//! and a recency-decay penalty for recent loot recipients.
//!
//! ## Properties
//! - 100% deterministic: identical inputs always produce identical scores
//! - Bounded under garbage input: negative percentages, zero baselines and
//!   similar junk clamp instead of erroring or producing NaN
//! - Pure and request-scoped: no I/O, no hidden state; configuration is
//!   validated once and passed down immutably
//!
//! The crate is a library consumed by the surrounding reporting/API layer;
//! combat-log ingestion and configuration storage stay external.

pub mod config;
pub mod error;
pub mod models;
pub mod performance;
pub mod scoring;

// Re-export the main scoring surface
pub use config::{
    EligibilityThresholds, GuildScoringConfiguration, MeritWeights, NormalizationCaps,
    PerformanceSettings, PriorityWeights, RecencyPenalties, RoleMultipliers,
};
pub use error::{Result, ScoringError};
pub use models::{RaiderScoringInput, Role, ScoreResult};
pub use performance::{
    aggregate, compute_baseline, compute_spec_baselines, mechanical_from_ratios,
    mechanical_score, BaselineSource, FightSample, PerformanceMetrics, SpecBaseline,
};
pub use scoring::{
    assemble_report, assemble_with_engine, ComponentPercentages, LootPriorityReport,
    ReportEntry, ReportFailure, ScoringEngine,
};
