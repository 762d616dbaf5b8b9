//! Combat-log performance normalization: sample aggregation, peer
//! baselines, and the peer-relative mechanical score.
//!
//! Dependency order matches the calculation: `aggregator` turns raw fight
//! samples into per-character metrics, `baseline` pools same-spec samples
//! into percentile references, and `mechanical` combines the two into a
//! bounded score.

pub mod aggregator;
pub mod baseline;
pub mod mechanical;

pub use aggregator::{aggregate, FightSample, PerformanceMetrics};
pub use baseline::{
    compute_baseline, compute_spec_baselines, BaselineSource, SpecBaseline,
};
pub use mechanical::{mechanical_from_ratios, mechanical_score};
