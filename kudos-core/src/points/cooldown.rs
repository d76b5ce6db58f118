//! Cooldown Gate
//!
//! Time-based award admission: decides whether a new award of a category is
//! currently permitted given the subject's last qualifying activity. A pure
//! time comparison; the caller supplies the last-activity timestamp from
//! whatever persistence layer tracks it.

use chrono::{DateTime, Duration, Utc};

use crate::types::{PointCategory, RateTable};

/// Cooldown gate over an injected rate table
#[derive(Clone, Debug)]
pub struct CooldownGate {
    rates: RateTable,
}

impl CooldownGate {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Whether an award of `category` is permitted right now
    pub fn can_award(
        &self,
        category: PointCategory,
        last_activity: Option<DateTime<Utc>>,
    ) -> bool {
        self.can_award_at(category, last_activity, Utc::now())
    }

    /// Whether an award of `category` is permitted at `now`
    pub fn can_award_at(
        &self,
        category: PointCategory,
        last_activity: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        self.remaining_at(category, last_activity, now).is_none()
    }

    /// Minutes until an award of `category` becomes permitted, or `None` if
    /// it is permitted at `now`. Categories with no configured rate behave
    /// as unrestricted; the calculator rejects them before persistence.
    pub fn remaining_at(
        &self,
        category: PointCategory,
        last_activity: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<i64> {
        let cooldown_minutes = match self.rates.get(category) {
            Some(rate) => rate.cooldown_minutes,
            None => return None,
        };
        if cooldown_minutes <= 0 {
            return None;
        }
        let last = last_activity?;

        let cooldown = Duration::minutes(cooldown_minutes);
        let elapsed = now.signed_duration_since(last);
        if elapsed >= cooldown {
            None
        } else {
            Some((cooldown - elapsed).num_minutes().max(1))
        }
    }
}
