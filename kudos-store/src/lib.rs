//! Kudos Store - Transaction Persistence
//!
//! Persistence collaborator for the kudos engine. Provides:
//! - [`TransactionRecord`]: the storage representation of ledger entries
//! - [`MemoryTransactionStore`]: an async, append-only in-memory datastore
//!   implementing the engine's [`TransactionStore`] contract
//!
//! Durable backends (relational table, document store, log) slot in behind
//! the same trait; the record layer keeps decimals string-encoded so rows
//! survive backends without native decimal types.
//!
//! # Usage Example
//!
//! ```ignore
//! use kudos_core::{AwardMetadata, EngineConfig, PointCategory, SubjectId, TransactionEmitter};
//! use kudos_store::MemoryTransactionStore;
//! use std::sync::Arc;
//!
//! async fn example() {
//!     let store = Arc::new(MemoryTransactionStore::new());
//!     let emitter = TransactionEmitter::new(EngineConfig::default(), store).unwrap();
//!     let tx = emitter
//!         .award(
//!             &SubjectId::new("user:001"),
//!             PointCategory::Donation,
//!             "Donated to winter appeal",
//!             AwardMetadata::new(),
//!         )
//!         .await
//!         .unwrap();
//!     assert_eq!(tx.points, 10);
//! }
//! ```

pub mod entities;
pub mod memory;

pub use entities::TransactionRecord;
pub use memory::MemoryTransactionStore;

// Re-export the contract this crate implements
pub use kudos_core::{StoreError, TransactionStore};
