//! Engine Error Types
//!
//! Error taxonomy for the points and trust-level engine:
//! - Computation errors (`UnknownCategory`, `PointsOverflow`) are local and
//!   must be resolved before persistence is attempted.
//! - `CooldownActive` rejects an award before it reaches the store.
//! - `Persistence` wraps a collaborator failure; no transaction exists when
//!   it is returned.
//!
//! Observer failures are deliberately NOT part of this enum: they are
//! isolated and logged by the emitter, never surfaced to the awarding caller
//! (see `award::ObserverError`).

use thiserror::Error;

use crate::ledger::StoreError;
use crate::types::PointCategory;

/// Engine Result type
pub type KudosResult<T> = Result<T, KudosError>;

/// Engine Error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KudosError {
    /// Category has no entry in the configured rate table
    #[error("unknown category {category}: no rate configured")]
    UnknownCategory { category: PointCategory },

    /// Cooldown window for this category has not elapsed
    #[error("cooldown active for {category}: about {remaining_minutes} minute(s) remaining")]
    CooldownActive {
        category: PointCategory,
        remaining_minutes: i64,
    },

    /// Points product does not fit an integer point value
    #[error("points calculation overflow")]
    PointsOverflow,

    /// Engine configuration failed validation
    #[error("invalid engine configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Append-only store reported a failure; the award never happened
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl KudosError {
    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
