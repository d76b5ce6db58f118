//! Trust Ladder
//!
//! Ordered ladder of cumulative-point thresholds gating platform privileges.
//! The ladder is static configuration: validated once at construction, then
//! every non-negative point total maps to exactly one tier.

use serde::{Deserialize, Serialize};

use crate::error::{KudosError, KudosResult};

/// Trust level tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    Newcomer,
    Helper,
    Trusted,
    Champion,
    Guardian,
}

impl TrustLevel {
    pub fn name(&self) -> &'static str {
        match self {
            TrustLevel::Newcomer => "newcomer",
            TrustLevel::Helper => "helper",
            TrustLevel::Trusted => "trusted",
            TrustLevel::Champion => "champion",
            TrustLevel::Guardian => "guardian",
        }
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One rung of the trust ladder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLevelTier {
    /// Level tag
    pub level: TrustLevel,
    /// Display name
    pub name: String,
    /// Inclusive lifetime-points threshold
    pub min_points: i64,
    /// Privileges unlocked at this tier
    pub benefits: Vec<String>,
}

impl TrustLevelTier {
    pub fn new(level: TrustLevel, name: impl Into<String>, min_points: i64) -> Self {
        Self {
            level,
            name: name.into(),
            min_points,
            benefits: Vec::new(),
        }
    }

    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefits.push(benefit.into());
        self
    }
}

/// Validated, totally ordered trust ladder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLadder {
    tiers: Vec<TrustLevelTier>,
}

impl TrustLadder {
    /// Build a ladder, enforcing shape: non-empty, bottom tier at 0 points,
    /// strictly ascending thresholds
    pub fn new(tiers: Vec<TrustLevelTier>) -> KudosResult<Self> {
        let ladder = Self { tiers };
        ladder.validate()?;
        Ok(ladder)
    }

    /// Re-check ladder shape (used after deserializing configuration)
    pub fn validate(&self) -> KudosResult<()> {
        let first = match self.tiers.first() {
            Some(tier) => tier,
            None => return Err(KudosError::invalid_config("trust ladder has no tiers")),
        };
        if first.min_points != 0 {
            return Err(KudosError::invalid_config(format!(
                "bottom tier {} must start at 0 points, found {}",
                first.level, first.min_points
            )));
        }
        for pair in self.tiers.windows(2) {
            if pair[1].min_points <= pair[0].min_points {
                return Err(KudosError::invalid_config(format!(
                    "tier thresholds must be strictly ascending: {} ({}) then {} ({})",
                    pair[0].level, pair[0].min_points, pair[1].level, pair[1].min_points
                )));
            }
        }
        Ok(())
    }

    /// Tiers in ascending threshold order
    pub fn tiers(&self) -> &[TrustLevelTier] {
        &self.tiers
    }

    /// Tier carrying a given level tag
    pub fn tier_for(&self, level: TrustLevel) -> Option<&TrustLevelTier> {
        self.tiers.iter().find(|t| t.level == level)
    }

    /// Tier resolved for a lifetime point total: the highest tier whose
    /// threshold is covered. Negative totals are a caller contract violation.
    pub fn resolve(&self, total_points: i64) -> &TrustLevelTier {
        debug_assert!(total_points >= 0, "point totals are non-negative");
        let mut current = &self.tiers[0];
        for tier in &self.tiers[1..] {
            if tier.min_points <= total_points {
                current = tier;
            } else {
                break;
            }
        }
        current
    }

    /// Tier immediately above the one resolved for this total, if any
    pub fn tier_above(&self, total_points: i64) -> Option<&TrustLevelTier> {
        self.tiers.iter().find(|t| t.min_points > total_points)
    }
}

impl Default for TrustLadder {
    fn default() -> Self {
        Self {
            tiers: vec![
                TrustLevelTier::new(TrustLevel::Newcomer, "Newcomer", 0)
                    .with_benefit("browse_campaigns")
                    .with_benefit("make_donations"),
                TrustLevelTier::new(TrustLevel::Helper, "Helper", 100)
                    .with_benefit("respond_to_help_requests")
                    .with_benefit("join_community_events"),
                TrustLevelTier::new(TrustLevel::Trusted, "Trusted Member", 500)
                    .with_benefit("respond_to_emergency_requests")
                    .with_benefit("start_campaigns"),
                TrustLevelTier::new(TrustLevel::Champion, "Community Champion", 1500)
                    .with_benefit("organise_events")
                    .with_benefit("mentor_newcomers"),
                TrustLevelTier::new(TrustLevel::Guardian, "Guardian", 3000)
                    .with_benefit("moderate_community_content")
                    .with_benefit("endorse_verifications"),
            ],
        }
    }
}
