use thiserror::Error;

/// Error taxonomy for the scoring core.
///
/// Validation errors are raised at construction/lookup time, never deep
/// inside a calculation. Numeric edge cases (negative inputs, zero
/// baselines) are absorbed by clamping and guarding instead of being
/// raised here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("invalid configuration: {field}: {rule}")]
    ConfigurationInvalid { field: &'static str, rule: String },

    #[error("unrecognized role: {0}")]
    InvalidRole(String),

    #[error("insufficient sample data: {samples} samples, {required} required")]
    InsufficientSampleData { samples: usize, required: usize },

    #[error("non-finite result at {stage}")]
    NonFiniteResult { stage: &'static str },
}

impl ScoringError {
    /// Whether callers are expected to continue with fallback values.
    ///
    /// `InsufficientSampleData` is a signal, not a failure: the baseline
    /// and mechanical-score paths convert it into configured fallbacks.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScoringError::InsufficientSampleData { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
