//! Status enums for stock tracking.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days before expiration at which a unit counts as "expiring soon".
pub const EXPIRING_SOON_WINDOW_DAYS: u64 = 30;

/// Shelf-life status of a single medicine unit, derived from its
/// expiration date at read time.
///
/// Classification is pure: the same expiration date and reference date
/// always produce the same status. The stored `is_expired` flag on a unit
/// is a separate, manually managed field and may lag behind this derived
/// value until someone marks the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Expiration date is strictly before the reference date.
    Expired,
    /// Expiration date falls within the next 30 days (inclusive).
    ExpiringSoon,
    /// Expiration date is more than 30 days out.
    Good,
}

impl ExpiryStatus {
    /// Classifies an expiration date against a reference date.
    ///
    /// A unit expiring today is not yet expired; it is expiring soon.
    #[must_use]
    pub fn classify(expiration: NaiveDate, today: NaiveDate) -> Self {
        if expiration < today {
            return Self::Expired;
        }
        let window_end = today
            .checked_add_days(Days::new(EXPIRING_SOON_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        if expiration <= window_end {
            Self::ExpiringSoon
        } else {
            Self::Good
        }
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired => write!(f, "expired"),
            Self::ExpiringSoon => write!(f, "expiring_soon"),
            Self::Good => write!(f, "good"),
        }
    }
}

/// Where an availability figure came from.
///
/// Serialized in camelCase to match the wire format of the endpoints
/// that report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvailabilitySource {
    /// Counted from per-unit ledger records.
    Units,
    /// Taken from the aggregate stock counter; no units are tracked.
    Aggregate,
    /// Units exist but none are usable; the aggregate counter disagrees
    /// and was reported instead.
    AggregateFallback,
}

impl std::fmt::Display for AvailabilitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Units => write!(f, "units"),
            Self::Aggregate => write!(f, "aggregate"),
            Self::AggregateFallback => write!(f, "aggregateFallback"),
        }
    }
}
