pub mod raider;
pub mod result;

pub use raider::{RaiderScoringInput, Role};
pub use result::ScoreResult;
