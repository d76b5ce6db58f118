//! User Statistics
//!
//! Derived, recomputable aggregate over a subject's transaction history.
//! A pure projection: never the source of truth, recomputed on demand.

use serde::{Deserialize, Serialize};

use crate::types::{TrustLevel, TrustLevelTier};

/// Progress toward the tier above the current one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextLevel {
    /// The tier to be reached
    pub level: TrustLevel,
    /// Points still needed to cross its threshold (always > 0)
    pub points_needed: i64,
}

/// Aggregate over a transaction history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Sum of points over all transactions in the aggregated set
    pub total_points: i64,
    /// Tier resolved from `total_points`
    pub trust_level: TrustLevelTier,
    /// Progress to the next tier; `None` at the top of the ladder
    pub next_level: Option<NextLevel>,
    /// Transactions in the configured helping category subset
    pub helped_count: u64,
    /// Transactions in the configured donation category subset
    pub donation_count: u64,
    /// Total transactions aggregated
    pub transaction_count: u64,
    /// Bounded 0-100 score derived from lifetime points
    pub trust_score: u8,
}
