//! In-Memory Transaction Store
//!
//! Append-only datastore implementing the engine's ledger contract. Keeps
//! per-subject record vectors and a `(subject, category) -> last timestamp`
//! index under an async read-write lock.
//!
//! Suitable for tests and single-process deployments; durable backends
//! implement the same [`TransactionStore`] trait.

use std::collections::HashMap;
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use kudos_core::ledger::StoreResult;
use kudos_core::{PointCategory, PointTransaction, StoreError, SubjectId, TransactionStore};

use crate::entities::TransactionRecord;

#[derive(Default)]
struct MemoryState {
    records: HashMap<String, Vec<TransactionRecord>>,
    latest: HashMap<(String, PointCategory), DateTime<Utc>>,
}

/// In-memory append-only transaction store
#[derive(Default)]
pub struct MemoryTransactionStore {
    state: RwLock<MemoryState>,
    injected_failure: StdMutex<Option<StoreError>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `append` fail with `error`. Used to exercise commit
    /// failure handling in callers.
    pub fn inject_append_failure(&self, error: StoreError) {
        if let Ok(mut slot) = self.injected_failure.lock() {
            *slot = Some(error);
        }
    }

    /// Total records across all subjects
    pub async fn transaction_count(&self) -> usize {
        self.state
            .read()
            .await
            .records
            .values()
            .map(Vec::len)
            .sum()
    }

    fn take_injected_failure(&self) -> Option<StoreError> {
        self.injected_failure
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn append(&self, transaction: PointTransaction) -> StoreResult<()> {
        if let Some(error) = self.take_injected_failure() {
            return Err(error);
        }

        let record = TransactionRecord::from_transaction(&transaction);
        let mut state = self.state.write().await;

        let key = (record.subject_id.clone(), record.category);
        let stamp = state
            .latest
            .get(&key)
            .map_or(record.created_at, |existing| {
                record.created_at.max(*existing)
            });
        state.latest.insert(key, stamp);

        debug!(
            transaction_id = %record.id,
            subject_id = %record.subject_id,
            operation = "append",
            "transaction record stored"
        );
        state
            .records
            .entry(record.subject_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn latest_activity(
        &self,
        subject_id: &SubjectId,
        category: PointCategory,
    ) -> StoreResult<Option<DateTime<Utc>>> {
        let state = self.state.read().await;
        Ok(state
            .latest
            .get(&(subject_id.as_str().to_string(), category))
            .copied())
    }

    async fn history(&self, subject_id: &SubjectId) -> StoreResult<Vec<PointTransaction>> {
        let state = self.state.read().await;
        match state.records.get(subject_id.as_str()) {
            Some(records) => records
                .iter()
                .cloned()
                .map(TransactionRecord::into_transaction)
                .collect(),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_core::TransactionId;
    use rust_decimal::Decimal;

    fn transaction(subject: &str, category: PointCategory, points: i64) -> PointTransaction {
        PointTransaction {
            id: TransactionId::generate(),
            subject_id: SubjectId::new(subject),
            category,
            points,
            base_points: points,
            multiplier: Decimal::ONE,
            description: "test".to_string(),
            reference: None,
            verified: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_and_history() {
        let store = MemoryTransactionStore::new();
        let subject = SubjectId::new("user:001");

        store
            .append(transaction("user:001", PointCategory::Donation, 10))
            .await
            .unwrap();
        store
            .append(transaction("user:001", PointCategory::HelpCompleted, 25))
            .await
            .unwrap();
        store
            .append(transaction("user:002", PointCategory::Donation, 10))
            .await
            .unwrap();

        let history = store.history(&subject).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(store.transaction_count().await, 3);
    }

    #[tokio::test]
    async fn test_latest_activity_tracks_category() {
        let store = MemoryTransactionStore::new();
        let subject = SubjectId::new("user:001");

        assert!(store
            .latest_activity(&subject, PointCategory::Donation)
            .await
            .unwrap()
            .is_none());

        let tx = transaction("user:001", PointCategory::Donation, 10);
        let stamp = tx.created_at;
        store.append(tx).await.unwrap();

        assert_eq!(
            store
                .latest_activity(&subject, PointCategory::Donation)
                .await
                .unwrap(),
            Some(stamp)
        );
        assert!(store
            .latest_activity(&subject, PointCategory::HelpCompleted)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_injected_failure_fires_once() {
        let store = MemoryTransactionStore::new();
        store.inject_append_failure(StoreError::Timeout { seconds: 5 });

        let err = store
            .append(transaction("user:001", PointCategory::Donation, 10))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Timeout { seconds: 5 });
        assert_eq!(store.transaction_count().await, 0);

        store
            .append(transaction("user:001", PointCategory::Donation, 10))
            .await
            .unwrap();
        assert_eq!(store.transaction_count().await, 1);
    }
}
