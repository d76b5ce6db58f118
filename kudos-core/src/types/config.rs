//! Engine Configuration
//!
//! Immutable configuration value injected into the engine at construction
//! time. Multiple engines with different configurations can coexist in one
//! process (and in tests) without interfering.

use serde::{Deserialize, Serialize};

use crate::error::{KudosError, KudosResult};
use crate::types::{PointCategory, RateTable, TrustLadder};

/// Parameters of the bounded 0-100 trust score
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustScoreParams {
    /// Score with zero lifetime points
    pub baseline: u8,
    /// Lifetime points per additional score point
    pub points_per_score: i64,
}

impl Default for TrustScoreParams {
    fn default() -> Self {
        Self {
            baseline: 10,
            points_per_score: 50,
        }
    }
}

/// Versioned engine configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration version tag
    pub version: String,
    /// Category rate table
    pub rates: RateTable,
    /// Trust ladder
    pub ladder: TrustLadder,
    /// Trust score parameters
    pub score: TrustScoreParams,
    /// Categories counted as "helping" in aggregated stats
    pub helping_categories: Vec<PointCategory>,
    /// Categories counted as donations in aggregated stats
    pub donation_categories: Vec<PointCategory>,
}

impl EngineConfig {
    /// Default configuration under a custom version tag
    pub fn versioned(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration: ladder shape, non-negative rates,
    /// sub-unit multipliers rejected
    pub fn validate(&self) -> KudosResult<()> {
        self.ladder.validate()?;
        for entry in &self.rates.entries {
            if entry.rate.base_points < 0 {
                return Err(KudosError::invalid_config(format!(
                    "negative base points for {}",
                    entry.category
                )));
            }
            if entry.rate.bonus_multiplier < rust_decimal::Decimal::ONE {
                return Err(KudosError::invalid_config(format!(
                    "bonus multiplier below 1 for {}",
                    entry.category
                )));
            }
            if entry.rate.cooldown_minutes < 0 {
                return Err(KudosError::invalid_config(format!(
                    "negative cooldown for {}",
                    entry.category
                )));
            }
        }
        if self.score.points_per_score <= 0 {
            return Err(KudosError::invalid_config(
                "points_per_score must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            rates: RateTable::default(),
            ladder: TrustLadder::default(),
            score: TrustScoreParams::default(),
            helping_categories: vec![
                PointCategory::HelpCompleted,
                PointCategory::EmergencyHelp,
                PointCategory::RecurringHelp,
            ],
            donation_categories: vec![
                PointCategory::Donation,
                PointCategory::RecurringDonation,
                PointCategory::MatchingDonation,
            ],
        }
    }
}
