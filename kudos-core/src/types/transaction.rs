//! Point Transactions
//!
//! Immutable, append-only ledger records. Created exactly once per qualifying
//! action, never mutated, never deleted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{PointCategory, SubjectId, TransactionId};

/// Computed points for a single award
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// Base point value looked up from the rate table
    pub base_points: i64,
    /// Combined multiplier in force at calculation time
    pub multiplier: Decimal,
    /// Final integer points: round-half-up of `base_points * multiplier`
    pub points: i64,
}

impl PointsBreakdown {
    /// Re-derive `points` from `base_points * multiplier` and compare.
    /// Used by audit consumers to confirm a recorded award is recomputable.
    pub fn verify(&self) -> bool {
        use rust_decimal::prelude::ToPrimitive;
        use rust_decimal::RoundingStrategy;

        let product = Decimal::from(self.base_points) * self.multiplier;
        product
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(|p| p == self.points)
            .unwrap_or(false)
    }
}

/// One immutable ledger entry crediting a subject with points
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTransaction {
    /// Transaction identity
    pub id: TransactionId,
    /// Credited user
    pub subject_id: SubjectId,
    /// Action kind
    pub category: PointCategory,
    /// Final awarded points
    pub points: i64,
    /// Base points that produced the award
    pub base_points: i64,
    /// Multiplier that produced the award
    pub multiplier: Decimal,
    /// Human-readable description
    pub description: String,
    /// Originating entity, e.g. the help request that triggered the award
    pub reference: Option<String>,
    /// Verification flag stamped at commit time
    pub verified: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl PointTransaction {
    /// Breakdown view of the recorded award
    pub fn breakdown(&self) -> PointsBreakdown {
        PointsBreakdown {
            base_points: self.base_points,
            multiplier: self.multiplier,
            points: self.points,
        }
    }
}
