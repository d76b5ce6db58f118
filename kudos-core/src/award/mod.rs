//! Real-Time Awarding
//!
//! The transaction emitter: computes an award, enforces the cooldown,
//! persists through the ledger collaborator and fans the committed
//! transaction out to registered observers.

mod emitter;
mod observers;

pub use emitter::TransactionEmitter;
pub use observers::{ObserverError, ObserverId, ObserverRegistry, TransactionObserver};
