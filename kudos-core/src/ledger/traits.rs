//! Ledger Traits
//!
//! Trait definition for the persistence collaborator. Any durable store
//! satisfying this contract is acceptable (relational table, document store,
//! log); the engine assumes nothing beyond read-your-writes consistency for
//! the subject that just transacted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::{PointCategory, PointTransaction, SubjectId};

/// Store Result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence collaborator failure.
///
/// Timeout policy belongs to the implementing store, not the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store cannot be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Append did not complete within the store's deadline
    #[error("store operation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Record could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other store-side failure
    #[error("internal store error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Append-only transaction store
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Durably append a committed transaction. Returning `Ok` acknowledges
    /// durability; the record is never mutated or deleted afterwards.
    async fn append(&self, transaction: PointTransaction) -> StoreResult<()>;

    /// Timestamp of the subject's most recent transaction in a category,
    /// if any
    async fn latest_activity(
        &self,
        subject_id: &SubjectId,
        category: PointCategory,
    ) -> StoreResult<Option<DateTime<Utc>>>;

    /// Full transaction history for a subject, oldest first
    async fn history(&self, subject_id: &SubjectId) -> StoreResult<Vec<PointTransaction>>;
}
