//! Stats Aggregator
//!
//! Folds a collection of transactions into a summary: lifetime total,
//! resolved trust level, progress to the next tier, category-derived counts
//! and the bounded trust score. Pure and re-runnable over the full history
//! or any window; identical inputs produce identical results.

use chrono::{DateTime, Utc};

use crate::error::KudosResult;
use crate::trust::TrustResolver;
use crate::types::{EngineConfig, PointTransaction, UserStats};

/// Stats aggregator over an injected configuration
#[derive(Clone, Debug)]
pub struct StatsAggregator {
    config: EngineConfig,
    resolver: TrustResolver,
}

impl StatsAggregator {
    /// Create an aggregator, validating the configured ladder
    pub fn new(config: EngineConfig) -> KudosResult<Self> {
        let resolver = TrustResolver::new(config.ladder.clone(), config.score.clone())?;
        Ok(Self { config, resolver })
    }

    /// Fold a transaction set into a summary. An empty set yields zero
    /// totals, the bottom tier and the baseline trust score.
    pub fn aggregate(&self, transactions: &[PointTransaction]) -> UserStats {
        let mut total_points: i64 = 0;
        let mut helped_count: u64 = 0;
        let mut donation_count: u64 = 0;

        for tx in transactions {
            total_points += tx.points;
            if self.config.helping_categories.contains(&tx.category) {
                helped_count += 1;
            }
            if self.config.donation_categories.contains(&tx.category) {
                donation_count += 1;
            }
        }

        UserStats {
            total_points,
            trust_level: self.resolver.resolve_level(total_points).clone(),
            next_level: self.resolver.next_level(total_points),
            helped_count,
            donation_count,
            transaction_count: transactions.len() as u64,
            trust_score: self.resolver.trust_score(total_points),
        }
    }

    /// Fold only the transactions created inside `[from, to)`
    pub fn aggregate_window(
        &self,
        transactions: &[PointTransaction],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> UserStats {
        let windowed: Vec<PointTransaction> = transactions
            .iter()
            .filter(|tx| tx.created_at >= from && tx.created_at < to)
            .cloned()
            .collect();
        self.aggregate(&windowed)
    }

    /// Resolver reference
    pub fn resolver(&self) -> &TrustResolver {
        &self.resolver
    }
}
