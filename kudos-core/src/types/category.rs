//! Point Categories
//!
//! Closed set of rewarded action kinds. Immutable once a transaction
//! references one.

use serde::{Deserialize, Serialize};

/// Kind of rewarded action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCategory {
    /// A help request fulfilled by the subject
    HelpCompleted,
    /// Emergency assistance provided
    EmergencyHelp,
    /// Help provided under a recurring commitment
    RecurringHelp,
    /// One-off donation
    Donation,
    /// Donation under a recurring pledge
    RecurringDonation,
    /// Donation matched by a partner organisation
    MatchingDonation,
    /// Identity / profile verification completed
    ProfileVerification,
    /// Community event organised by the subject
    CommunityEventOrganized,
}

impl PointCategory {
    /// Category name for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            PointCategory::HelpCompleted => "help_completed",
            PointCategory::EmergencyHelp => "emergency_help",
            PointCategory::RecurringHelp => "recurring_help",
            PointCategory::Donation => "donation",
            PointCategory::RecurringDonation => "recurring_donation",
            PointCategory::MatchingDonation => "matching_donation",
            PointCategory::ProfileVerification => "profile_verification",
            PointCategory::CommunityEventOrganized => "community_event_organized",
        }
    }

    /// All categories in declaration order
    pub fn all() -> Vec<PointCategory> {
        vec![
            PointCategory::HelpCompleted,
            PointCategory::EmergencyHelp,
            PointCategory::RecurringHelp,
            PointCategory::Donation,
            PointCategory::RecurringDonation,
            PointCategory::MatchingDonation,
            PointCategory::ProfileVerification,
            PointCategory::CommunityEventOrganized,
        ]
    }
}

impl std::fmt::Display for PointCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
