//! Points Scoring
//!
//! Pure computation over the injected rate table:
//! - [`PointsCalculator`]: category + metadata -> points breakdown
//! - [`CooldownGate`]: time-based award admission

mod calculator;
mod cooldown;

pub use calculator::PointsCalculator;
pub use cooldown::CooldownGate;

use serde::{Deserialize, Serialize};

/// Optional context accompanying an award
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardMetadata {
    /// Length of the subject's current consecutive-days activity streak
    pub consecutive_days: u32,
    /// Originating entity of the award, e.g. a help request ID
    pub reference: Option<String>,
}

impl AwardMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consecutive_days(mut self, days: u32) -> Self {
        self.consecutive_days = days;
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
