//! Scoring output types. Every intermediate component is retained for
//! transparency: loot-council disputes are settled by showing the math, not
//! just the final number.

use serde::{Deserialize, Serialize};

/// Full score breakdown for one raider/item pairing.
///
/// Bounds: `attendance_score`, `mechanical_score`, `preparation_score`,
/// `merit`, `recency_decay`, `upgrade_value` and `tier_bonus` all lie in
/// [0.0, 1.0]. `item_priority` and `final_score` lie in
/// [0.0, `GuildScoringConfiguration::max_item_priority()`] (2.0 under the
/// default configuration).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Attendance eligibility gate: 1.0 or 0.0, never in between.
    pub attendance_score: f64,
    /// Peer-relative mechanical score (MAS).
    pub mechanical_score: f64,
    /// Vault/crest/heroic preparation composite.
    pub preparation_score: f64,
    /// Raider merit score (RMS): the weighted conjunction of the three
    /// components above.
    pub merit: f64,
    /// Normalized simulated upgrade value.
    pub upgrade_value: f64,
    /// Tier-completion need bonus (fewer owned pieces scores higher).
    pub tier_bonus: f64,
    /// Role multiplier applied to the item priority.
    pub role_multiplier: f64,
    /// Item priority index (IPI).
    pub item_priority: f64,
    /// Recency decay factor (RDF).
    pub recency_decay: f64,
    /// Final loot priority score (FLPS) = merit * item_priority * recency_decay.
    pub final_score: f64,
}
