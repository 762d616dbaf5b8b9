//! Scoring engine and batch report assembly.

pub mod engine;
pub mod report;

pub use engine::ScoringEngine;
pub use report::{
    assemble_report, assemble_with_engine, ComponentPercentages, LootPriorityReport,
    ReportEntry, ReportFailure,
};
