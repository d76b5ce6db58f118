//! Points Calculator
//!
//! Computes `(base_points, multiplier, points)` for a category and optional
//! award metadata:
//! 1. Base points looked up verbatim from the rate table
//! 2. Category bonus multiplier
//! 3. Consistency bonus once the streak threshold is reached
//! 4. Round-half-up on the final product only
//!
//! Pure function of (category, metadata, rate table); safe to call from any
//! number of concurrent callers.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{KudosError, KudosResult};
use crate::points::AwardMetadata;
use crate::types::{PointCategory, PointsBreakdown, RateTable};

/// Points calculator
#[derive(Clone, Debug)]
pub struct PointsCalculator {
    rates: RateTable,
}

impl PointsCalculator {
    /// Create a calculator over an injected rate table
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Compute the award for a category.
    ///
    /// A category absent from the rate table is rejected with
    /// [`KudosError::UnknownCategory`]; no zero-point award is produced.
    pub fn calculate(
        &self,
        category: PointCategory,
        metadata: &AwardMetadata,
    ) -> KudosResult<PointsBreakdown> {
        let rate = self
            .rates
            .get(category)
            .ok_or(KudosError::UnknownCategory { category })?;

        let mut multiplier = rate.bonus_multiplier;
        let bonus = &self.rates.consistency_bonus;
        if metadata.consecutive_days >= bonus.min_consecutive_days {
            multiplier *= bonus.multiplier;
        }

        let product = Decimal::from(rate.base_points) * multiplier;
        let points = product
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(KudosError::PointsOverflow)?;

        Ok(PointsBreakdown {
            base_points: rate.base_points,
            multiplier,
            points,
        })
    }

    /// Rate table reference
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
