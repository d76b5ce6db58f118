//! Trust-Level Resolver
//!
//! Pure lookups over the static ladder: the same total always yields the
//! same tier, independent of call order or history. Increasing the total
//! never decreases the resolved tier; there is no demotion concept.

use crate::error::KudosResult;
use crate::types::{NextLevel, TrustLadder, TrustLevelTier, TrustScoreParams};

/// Trust-level resolver over a validated ladder
#[derive(Clone, Debug)]
pub struct TrustResolver {
    ladder: TrustLadder,
    score: TrustScoreParams,
}

impl TrustResolver {
    /// Create a resolver, validating the ladder shape
    pub fn new(ladder: TrustLadder, score: TrustScoreParams) -> KudosResult<Self> {
        ladder.validate()?;
        Ok(Self { ladder, score })
    }

    /// Current tier for a lifetime point total
    pub fn resolve_level(&self, total_points: i64) -> &TrustLevelTier {
        self.ladder.resolve(total_points)
    }

    /// Tier above the current one and the points still needed to reach it;
    /// `None` at the top of the ladder
    pub fn next_level(&self, total_points: i64) -> Option<NextLevel> {
        self.ladder.tier_above(total_points).map(|tier| NextLevel {
            level: tier.level,
            points_needed: tier.min_points - total_points,
        })
    }

    /// Bounded 0-100 score: `baseline + total / points_per_score`, capped
    pub fn trust_score(&self, total_points: i64) -> u8 {
        debug_assert!(total_points >= 0, "point totals are non-negative");
        let earned = total_points / self.score.points_per_score;
        let score = i64::from(self.score.baseline) + earned;
        score.clamp(0, 100) as u8
    }

    /// Ladder reference
    pub fn ladder(&self) -> &TrustLadder {
        &self.ladder
    }
}
