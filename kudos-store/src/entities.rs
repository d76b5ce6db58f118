//! Transaction Records
//!
//! Storage representation of ledger entries. The multiplier is stored as a
//! string for lossless precision, so relational and document backends can
//! adopt the records unchanged.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kudos_core::{
    PointCategory, PointTransaction, StoreError, SubjectId, TransactionId,
};

/// Persisted transaction record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Record ID
    pub id: String,
    /// Credited subject
    pub subject_id: String,
    /// Action kind
    pub category: PointCategory,
    /// Final awarded points
    pub points: i64,
    /// Base points that produced the award
    pub base_points: i64,
    /// Multiplier (stored as string for precision)
    pub multiplier: String,
    /// Human-readable description
    pub description: String,
    /// Originating entity
    pub reference: Option<String>,
    /// Verification flag
    pub verified: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Backing table name
    pub const TABLE: &'static str = "point_transactions";

    /// Build a record from a committed transaction
    pub fn from_transaction(transaction: &PointTransaction) -> Self {
        Self {
            id: transaction.id.as_str().to_string(),
            subject_id: transaction.subject_id.as_str().to_string(),
            category: transaction.category,
            points: transaction.points,
            base_points: transaction.base_points,
            multiplier: transaction.multiplier.to_string(),
            description: transaction.description.clone(),
            reference: transaction.reference.clone(),
            verified: transaction.verified,
            created_at: transaction.created_at,
        }
    }

    /// Rebuild the ledger entry this record persists
    pub fn into_transaction(self) -> Result<PointTransaction, StoreError> {
        let multiplier: Decimal = self.multiplier.parse().map_err(|_| {
            StoreError::Serialization(format!(
                "record {} has unparseable multiplier {:?}",
                self.id, self.multiplier
            ))
        })?;
        Ok(PointTransaction {
            id: TransactionId::new(self.id),
            subject_id: SubjectId::new(self.subject_id),
            category: self.category,
            points: self.points,
            base_points: self.base_points,
            multiplier,
            description: self.description,
            reference: self.reference,
            verified: self.verified,
            created_at: self.created_at,
        })
    }
}
