//! Category Rate Table
//!
//! Static per-category scoring data: base point value, category bonus
//! multiplier and cooldown duration. Injected into the engine as part of an
//! immutable configuration value; never module-level mutable state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::PointCategory;

/// Scoring parameters for a single category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRate {
    /// Base point value before multipliers
    pub base_points: i64,
    /// Category bonus multiplier (1 = no bonus)
    pub bonus_multiplier: Decimal,
    /// Minimum minutes between two awards of this category for the same
    /// subject; 0 means unrestricted repetition
    pub cooldown_minutes: i64,
}

impl CategoryRate {
    pub fn new(base_points: i64, bonus_multiplier: Decimal, cooldown_minutes: i64) -> Self {
        Self {
            base_points,
            bonus_multiplier,
            cooldown_minutes,
        }
    }

    /// Rate with no bonus and no cooldown
    pub fn flat(base_points: i64) -> Self {
        Self::new(base_points, Decimal::ONE, 0)
    }
}

/// Rate table entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub category: PointCategory,
    pub rate: CategoryRate,
}

/// Consistency bonus applied on top of the category bonus when the subject
/// has been active for a streak of consecutive days
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyBonus {
    /// Streak length at which the bonus applies
    pub min_consecutive_days: u32,
    /// Multiplier applied once the streak threshold is reached
    pub multiplier: Decimal,
}

impl Default for ConsistencyBonus {
    fn default() -> Self {
        Self {
            min_consecutive_days: 7,
            multiplier: Decimal::new(12, 1),
        }
    }
}

/// Category rate table
///
/// A table provided by configuration may omit categories; lookups for those
/// fail and the calculator rejects the action rather than awarding zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub entries: Vec<RateEntry>,
    pub consistency_bonus: ConsistencyBonus,
}

impl RateTable {
    /// Empty table (every lookup fails)
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            consistency_bonus: ConsistencyBonus::default(),
        }
    }

    /// Look up the rate for a category
    pub fn get(&self, category: PointCategory) -> Option<&CategoryRate> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| &e.rate)
    }

    /// Add or replace a category rate
    pub fn with_rate(mut self, category: PointCategory, rate: CategoryRate) -> Self {
        self.entries.retain(|e| e.category != category);
        self.entries.push(RateEntry { category, rate });
        self
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            entries: vec![
                RateEntry {
                    category: PointCategory::HelpCompleted,
                    rate: CategoryRate::new(25, Decimal::ONE, 60),
                },
                RateEntry {
                    category: PointCategory::EmergencyHelp,
                    rate: CategoryRate::new(50, Decimal::ONE, 30),
                },
                RateEntry {
                    category: PointCategory::RecurringHelp,
                    rate: CategoryRate::new(35, Decimal::new(15, 1), 60),
                },
                RateEntry {
                    category: PointCategory::Donation,
                    rate: CategoryRate::flat(10),
                },
                RateEntry {
                    category: PointCategory::RecurringDonation,
                    rate: CategoryRate::new(15, Decimal::new(15, 1), 0),
                },
                RateEntry {
                    category: PointCategory::MatchingDonation,
                    rate: CategoryRate::new(20, Decimal::new(2, 0), 0),
                },
                RateEntry {
                    category: PointCategory::ProfileVerification,
                    rate: CategoryRate::flat(20),
                },
                RateEntry {
                    category: PointCategory::CommunityEventOrganized,
                    rate: CategoryRate::new(40, Decimal::ONE, 1440),
                },
            ],
            consistency_bonus: ConsistencyBonus::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_all_categories() {
        let table = RateTable::default();
        for category in PointCategory::all() {
            assert!(table.get(category).is_some(), "missing {category}");
        }
    }

    #[test]
    fn test_rate_lookup() {
        let table = RateTable::default();
        let rate = table.get(PointCategory::MatchingDonation).unwrap();
        assert_eq!(rate.base_points, 20);
        assert_eq!(rate.bonus_multiplier, Decimal::new(2, 0));
    }

    #[test]
    fn test_with_rate_replaces() {
        let table = RateTable::default()
            .with_rate(PointCategory::Donation, CategoryRate::flat(99));
        assert_eq!(table.get(PointCategory::Donation).unwrap().base_points, 99);
        let donation_entries = table
            .entries
            .iter()
            .filter(|e| e.category == PointCategory::Donation)
            .count();
        assert_eq!(donation_entries, 1);
    }

    #[test]
    fn test_empty_table_lookup_fails() {
        let table = RateTable::empty();
        assert!(table.get(PointCategory::Donation).is_none());
    }
}
