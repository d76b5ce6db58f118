//! Transaction Ledger
//!
//! Contract for the external append-only store the engine persists through.
//! Implementations live outside this crate (see `kudos-store` for the
//! in-memory datastore).

mod traits;

pub use traits::{StoreError, StoreResult, TransactionStore};
