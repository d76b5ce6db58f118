//! Transaction Emitter
//!
//! Turns a qualifying action into a durable ledger entry:
//! compute -> cooldown gate -> append -> observer fan-out.
//!
//! A transaction is *pending* until the store acknowledges the append and
//! *committed* afterwards; observers only ever see committed transactions.
//! If the append fails no observer is notified and no transaction exists.
//!
//! Concurrent awards for the same subject and category race only at the
//! cooldown gate, so the emitter serializes them through a per-key async
//! mutex rather than assuming the backing store enforces the window
//! atomically.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{KudosError, KudosResult};
use crate::ledger::TransactionStore;
use crate::points::{AwardMetadata, CooldownGate, PointsCalculator};
use crate::stats::StatsAggregator;
use crate::types::{
    EngineConfig, PointCategory, PointTransaction, SubjectId, TransactionId, UserStats,
};

use super::observers::{ObserverId, ObserverRegistry, TransactionObserver};

type AwardKey = (SubjectId, PointCategory);

/// Real-time award engine
pub struct TransactionEmitter {
    calculator: PointsCalculator,
    gate: CooldownGate,
    aggregator: StatsAggregator,
    store: Arc<dyn TransactionStore>,
    observers: ObserverRegistry,
    award_locks: Mutex<HashMap<AwardKey, Arc<Mutex<()>>>>,
}

impl TransactionEmitter {
    /// Create an emitter over a validated configuration and a ledger store
    pub fn new(config: EngineConfig, store: Arc<dyn TransactionStore>) -> KudosResult<Self> {
        config.validate()?;
        Ok(Self {
            calculator: PointsCalculator::new(config.rates.clone()),
            gate: CooldownGate::new(config.rates.clone()),
            aggregator: StatsAggregator::new(config)?,
            store,
            observers: ObserverRegistry::new(),
            award_locks: Mutex::new(HashMap::new()),
        })
    }

    /// Register an observer for committed transactions
    pub async fn subscribe(&self, observer: Arc<dyn TransactionObserver>) -> ObserverId {
        self.observers.subscribe(observer).await
    }

    /// Remove a registered observer
    pub async fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id).await
    }

    /// Award points to a subject for a qualifying action.
    ///
    /// Fails with [`KudosError::UnknownCategory`] before any storage access,
    /// with [`KudosError::CooldownActive`] when the category's window has
    /// not elapsed, and with [`KudosError::Persistence`] when the append
    /// fails; in every failure case no observer is notified and no
    /// transaction exists.
    pub async fn award(
        &self,
        subject_id: &SubjectId,
        category: PointCategory,
        description: impl Into<String>,
        metadata: AwardMetadata,
    ) -> KudosResult<PointTransaction> {
        let breakdown = self.calculator.calculate(category, &metadata)?;

        let key_lock = self.lock_for(subject_id, category).await;
        let _guard = key_lock.lock().await;

        let last_activity = self.store.latest_activity(subject_id, category).await?;
        let now = Utc::now();
        if let Some(remaining_minutes) = self.gate.remaining_at(category, last_activity, now) {
            debug!(
                subject_id = %subject_id,
                category = %category,
                remaining_minutes,
                "award rejected by cooldown gate"
            );
            return Err(KudosError::CooldownActive {
                category,
                remaining_minutes,
            });
        }

        let transaction = PointTransaction {
            id: TransactionId::generate(),
            subject_id: subject_id.clone(),
            category,
            points: breakdown.points,
            base_points: breakdown.base_points,
            multiplier: breakdown.multiplier,
            description: description.into(),
            reference: metadata.reference.clone(),
            verified: true,
            created_at: now,
        };

        self.store.append(transaction.clone()).await?;

        info!(
            transaction_id = %transaction.id,
            subject_id = %transaction.subject_id,
            category = %transaction.category,
            points = transaction.points,
            operation = "award",
            "points transaction committed"
        );

        self.observers.notify(&transaction).await;
        Ok(transaction)
    }

    /// Recompute a subject's stats from their full transaction history
    pub async fn stats_for(&self, subject_id: &SubjectId) -> KudosResult<UserStats> {
        let history = self.store.history(subject_id).await?;
        Ok(self.aggregator.aggregate(&history))
    }

    /// Aggregator reference, for windowed projections over fetched history
    pub fn aggregator(&self) -> &StatsAggregator {
        &self.aggregator
    }

    async fn lock_for(&self, subject_id: &SubjectId, category: PointCategory) -> Arc<Mutex<()>> {
        let mut locks = self.award_locks.lock().await;
        locks
            .entry((subject_id.clone(), category))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::observers::ObserverError;
    use crate::ledger::{StoreError, StoreResult};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex as StdMutex;
    use tokio::sync::RwLock;

    /// Minimal in-memory ledger for emitter tests
    #[derive(Default)]
    struct MiniStore {
        transactions: RwLock<Vec<PointTransaction>>,
    }

    #[async_trait]
    impl TransactionStore for MiniStore {
        async fn append(&self, transaction: PointTransaction) -> StoreResult<()> {
            self.transactions.write().await.push(transaction);
            Ok(())
        }

        async fn latest_activity(
            &self,
            subject_id: &SubjectId,
            category: PointCategory,
        ) -> StoreResult<Option<DateTime<Utc>>> {
            Ok(self
                .transactions
                .read()
                .await
                .iter()
                .filter(|t| &t.subject_id == subject_id && t.category == category)
                .map(|t| t.created_at)
                .max())
        }

        async fn history(&self, subject_id: &SubjectId) -> StoreResult<Vec<PointTransaction>> {
            Ok(self
                .transactions
                .read()
                .await
                .iter()
                .filter(|t| &t.subject_id == subject_id)
                .cloned()
                .collect())
        }
    }

    /// Ledger whose appends always fail
    struct BrokenStore;

    #[async_trait]
    impl TransactionStore for BrokenStore {
        async fn append(&self, _transaction: PointTransaction) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn latest_activity(
            &self,
            _subject_id: &SubjectId,
            _category: PointCategory,
        ) -> StoreResult<Option<DateTime<Utc>>> {
            Ok(None)
        }

        async fn history(&self, _subject_id: &SubjectId) -> StoreResult<Vec<PointTransaction>> {
            Ok(Vec::new())
        }
    }

    struct Counter {
        notified: Arc<StdMutex<u32>>,
    }

    impl TransactionObserver for Counter {
        fn on_committed(&self, _transaction: &PointTransaction) -> Result<(), ObserverError> {
            *self.notified.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn emitter_with(store: Arc<dyn TransactionStore>) -> TransactionEmitter {
        TransactionEmitter::new(EngineConfig::default(), store).unwrap()
    }

    #[tokio::test]
    async fn test_award_commits_and_notifies() {
        let store = Arc::new(MiniStore::default());
        let emitter = emitter_with(store.clone());
        let notified = Arc::new(StdMutex::new(0));
        emitter
            .subscribe(Arc::new(Counter { notified: notified.clone() }))
            .await;

        let subject = SubjectId::new("user:001");
        let tx = emitter
            .award(
                &subject,
                PointCategory::Donation,
                "Donated to winter appeal",
                AwardMetadata::new(),
            )
            .await
            .unwrap();

        assert_eq!(tx.points, 10);
        assert!(tx.verified);
        assert_eq!(*notified.lock().unwrap(), 1);
        assert_eq!(store.history(&subject).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_append_notifies_nobody() {
        let emitter = emitter_with(Arc::new(BrokenStore));
        let notified = Arc::new(StdMutex::new(0));
        emitter
            .subscribe(Arc::new(Counter { notified: notified.clone() }))
            .await;

        let err = emitter
            .award(
                &SubjectId::new("user:001"),
                PointCategory::Donation,
                "Donated",
                AwardMetadata::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, KudosError::Persistence(_)));
        assert_eq!(*notified.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_second_award_within_cooldown_rejected() {
        let store = Arc::new(MiniStore::default());
        let emitter = emitter_with(store.clone());
        let subject = SubjectId::new("user:001");

        emitter
            .award(
                &subject,
                PointCategory::HelpCompleted,
                "Helped with shopping",
                AwardMetadata::new(),
            )
            .await
            .unwrap();

        let err = emitter
            .award(
                &subject,
                PointCategory::HelpCompleted,
                "Helped again",
                AwardMetadata::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            KudosError::CooldownActive {
                category: PointCategory::HelpCompleted,
                ..
            }
        ));
        assert_eq!(store.history(&subject).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cooldown_is_per_subject() {
        let emitter = emitter_with(Arc::new(MiniStore::default()));

        emitter
            .award(
                &SubjectId::new("user:001"),
                PointCategory::HelpCompleted,
                "Helped",
                AwardMetadata::new(),
            )
            .await
            .unwrap();

        // a different subject is not affected by the first subject's window
        emitter
            .award(
                &SubjectId::new("user:002"),
                PointCategory::HelpCompleted,
                "Helped",
                AwardMetadata::new(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_category_fails_before_storage() {
        let config = EngineConfig {
            rates: crate::types::RateTable::empty(),
            ..EngineConfig::default()
        };
        let emitter = TransactionEmitter::new(config, Arc::new(BrokenStore)).unwrap();

        // BrokenStore would fail the append; the category check fires first
        let err = emitter
            .award(
                &SubjectId::new("user:001"),
                PointCategory::Donation,
                "Donated",
                AwardMetadata::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, KudosError::UnknownCategory { .. }));
    }

    #[tokio::test]
    async fn test_stats_for_round_trip() {
        let emitter = emitter_with(Arc::new(MiniStore::default()));
        let subject = SubjectId::new("user:001");

        emitter
            .award(&subject, PointCategory::Donation, "Donated", AwardMetadata::new())
            .await
            .unwrap();
        emitter
            .award(
                &subject,
                PointCategory::MatchingDonation,
                "Matched donation",
                AwardMetadata::new(),
            )
            .await
            .unwrap();

        let stats = emitter.stats_for(&subject).await.unwrap();
        assert_eq!(stats.total_points, 50);
        assert_eq!(stats.donation_count, 2);
    }
}
