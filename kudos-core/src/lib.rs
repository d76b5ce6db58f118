//! Kudos Core - Points and Trust-Level Engine
//!
//! Deterministic computation core for a community contribution platform:
//! converts discrete user actions into scored transactions, aggregates them
//! into lifetime statistics and maps cumulative totals onto a trust-level
//! ladder that gates platform privileges.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Platform / Presentation Layer               │
//! │          (UI animation, toasts, analytics consumers)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  Kudos Engine (This Crate)                   │
//! │   (Rates, Calculator, Cooldown Gate, Ladder, Aggregator,    │
//! │    Transaction Emitter + Observer Fan-out)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │               Persistence Collaborator (external)            │
//! │        (append-only transaction store, e.g. kudos-store)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Invariant | Core Requirement |
//! |-----------|------------------|
//! | **Recomputable** | `points == round(base_points * multiplier)` for every transaction |
//! | **Single Source** | A subject's total is the sum over their ledger entries, nothing else |
//! | **Monotone Ladder** | More points never resolve to a lower tier; no demotion |
//! | **Cooldown** | Same-category awards for a subject respect the configured window |
//! | **Commit Before Notify** | Observers only ever see durable transactions |
//!
//! # Core Types
//!
//! - [`EngineConfig`]: immutable, versioned configuration (rates, ladder, score)
//! - [`PointTransaction`]: append-only ledger entry
//! - [`UserStats`]: recomputable aggregate projection
//! - [`TransactionEmitter`]: the awarding path
//! - [`TransactionStore`]: the persistence collaborator contract

pub mod award;
pub mod error;
pub mod ledger;
pub mod points;
pub mod stats;
pub mod trust;
pub mod types;

// Re-export error types
pub use error::{KudosError, KudosResult};

// Re-export all types
pub use types::*;

// Re-export scoring
pub use points::{AwardMetadata, CooldownGate, PointsCalculator};

// Re-export trust resolution
pub use trust::TrustResolver;

// Re-export aggregation
pub use stats::StatsAggregator;

// Re-export the ledger contract
pub use ledger::{StoreError, TransactionStore};

// Re-export awarding
pub use award::{
    ObserverError, ObserverId, ObserverRegistry, TransactionEmitter, TransactionObserver,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration version tag
pub const DEFAULT_CONFIG_VERSION: &str = "v1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(DEFAULT_CONFIG_VERSION, "v1");
    }

    #[test]
    fn test_default_config_version_tag() {
        assert_eq!(EngineConfig::default().version, DEFAULT_CONFIG_VERSION);
    }
}
