//! Stats Aggregation
//!
//! Folds transaction histories into [`UserStats`](crate::types::UserStats)
//! summaries.

mod aggregator;

pub use aggregator::StatsAggregator;
