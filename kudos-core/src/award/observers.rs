//! Observer Registry
//!
//! Registration mechanism through which UI, analytics or downstream reward
//! systems receive committed transactions. Observers are notified in
//! registration order, exactly once per committed transaction. A failing
//! observer is isolated and logged; it never affects the committed
//! transaction, other observers, or the awarding caller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::warn;

use crate::types::PointTransaction;

/// Failure raised by an individual observer callback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("observer failure: {0}")]
pub struct ObserverError(pub String);

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Handle identifying a registered observer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Receiver of committed transactions
pub trait TransactionObserver: Send + Sync {
    /// Called after the transaction is durable. Runs on the awarding task;
    /// long-running work should be handed off, not done here.
    fn on_committed(&self, transaction: &PointTransaction) -> Result<(), ObserverError>;
}

/// Observer registry owned by the component composing the engine
pub struct ObserverRegistry {
    next_id: AtomicU64,
    observers: RwLock<Vec<(ObserverId, Arc<dyn TransactionObserver>)>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer; notifications arrive in registration order
    pub async fn subscribe(&self, observer: Arc<dyn TransactionObserver>) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().await.push((id, observer));
        id
    }

    /// Remove a registered observer; returns whether it was present
    pub async fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.write().await;
        let before = observers.len();
        observers.retain(|(oid, _)| *oid != id);
        observers.len() != before
    }

    /// Number of registered observers
    pub async fn len(&self) -> usize {
        self.observers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.observers.read().await.is_empty()
    }

    /// Deliver a committed transaction to every observer in registration
    /// order. Failures are logged and do not stop delivery to the rest.
    pub async fn notify(&self, transaction: &PointTransaction) {
        let snapshot: Vec<(ObserverId, Arc<dyn TransactionObserver>)> =
            self.observers.read().await.clone();
        for (id, observer) in snapshot {
            if let Err(error) = observer.on_committed(transaction) {
                warn!(
                    transaction_id = %transaction.id,
                    subject_id = %transaction.subject_id,
                    observer_id = ?id,
                    error = %error,
                    "observer failed to process committed transaction"
                );
            }
        }
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PointCategory, SubjectId, TransactionId};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    fn sample_transaction() -> PointTransaction {
        PointTransaction {
            id: TransactionId::generate(),
            subject_id: SubjectId::new("user:001"),
            category: PointCategory::Donation,
            points: 10,
            base_points: 10,
            multiplier: Decimal::ONE,
            description: "test".to_string(),
            reference: None,
            verified: true,
            created_at: Utc::now(),
        }
    }

    struct Recorder {
        label: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl TransactionObserver for Recorder {
        fn on_committed(&self, _transaction: &PointTransaction) -> Result<(), ObserverError> {
            self.seen.lock().unwrap().push(self.label);
            Ok(())
        }
    }

    struct Failing;

    impl TransactionObserver for Failing {
        fn on_committed(&self, _transaction: &PointTransaction) -> Result<(), ObserverError> {
            Err(ObserverError::new("sound player broken"))
        }
    }

    #[tokio::test]
    async fn test_notification_in_registration_order() {
        let registry = ObserverRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        registry
            .subscribe(Arc::new(Recorder { label: "first", seen: seen.clone() }))
            .await;
        registry
            .subscribe(Arc::new(Recorder { label: "second", seen: seen.clone() }))
            .await;

        registry.notify(&sample_transaction()).await;
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_failing_observer_does_not_block_others() {
        let registry = ObserverRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        registry.subscribe(Arc::new(Failing)).await;
        registry
            .subscribe(Arc::new(Recorder { label: "after", seen: seen.clone() }))
            .await;

        registry.notify(&sample_transaction()).await;
        assert_eq!(*seen.lock().unwrap(), vec!["after"]);
    }

    #[tokio::test]
    async fn test_unsubscribe() {
        let registry = ObserverRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let id = registry
            .subscribe(Arc::new(Recorder { label: "gone", seen: seen.clone() }))
            .await;

        assert!(registry.unsubscribe(id).await);
        assert!(!registry.unsubscribe(id).await);

        registry.notify(&sample_transaction()).await;
        assert!(seen.lock().unwrap().is_empty());
    }
}
