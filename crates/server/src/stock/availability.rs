//! Availability resolution across the two stock stores.
//!
//! The per-unit ledger and the aggregate counter are both first-class and
//! can disagree. The resolver below picks one answer and says where it came
//! from; it never tries to repair the stores.

use chrono::NaiveDate;

use farmstead_core::{AvailabilitySource, ExpiryStatus};

use crate::models::medicine_unit::{MedicineUnit, UnitSummary};

/// An availability answer together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    /// How many units can be used right now.
    pub quantity: i64,
    /// Which store the number came from.
    pub source: AvailabilitySource,
}

/// Resolves available quantity from the unit ledger and the aggregate counter.
///
/// Decision order:
/// 1. With tracked units, count the ones whose stored flags say neither used
///    nor expired.
/// 2. If that count is zero but the aggregate counter is positive, the
///    stores disagree; report the aggregate with a fallback source so the
///    caller can log it.
/// 3. With no tracked units at all, the aggregate counter (zero when no
///    record exists) is the answer.
///
/// `aggregate_quantity` is `None` when the product has no stock record.
#[must_use]
pub fn resolve_available(
    units: &[MedicineUnit],
    aggregate_quantity: Option<i32>,
) -> Availability {
    let aggregate = i64::from(aggregate_quantity.unwrap_or(0));

    if units.is_empty() {
        return Availability {
            quantity: aggregate,
            source: AvailabilitySource::Aggregate,
        };
    }

    let available = units.iter().filter(|unit| unit.is_available()).count();
    let available = i64::try_from(available).unwrap_or(i64::MAX);

    if available == 0 && aggregate > 0 {
        return Availability {
            quantity: aggregate,
            source: AvailabilitySource::AggregateFallback,
        };
    }

    Availability {
        quantity: available,
        source: AvailabilitySource::Units,
    }
}

/// Counts a unit set for the list endpoint's summary block.
///
/// `available`/`used` read the stored flags; `expired`/`expiring_soon` are
/// classified from expiration dates against `today`. A past-date unit that
/// nobody marked yet therefore appears in both `available` and `expired`.
#[must_use]
pub fn summarize_units(units: &[MedicineUnit], today: NaiveDate) -> UnitSummary {
    let mut summary = UnitSummary {
        total: units.len(),
        available: 0,
        used: 0,
        expired: 0,
        expiring_soon: 0,
    };

    for unit in units {
        if unit.is_available() {
            summary.available += 1;
        }
        if unit.is_used {
            summary.used += 1;
        }
        match ExpiryStatus::classify(unit.expiration_date, today) {
            ExpiryStatus::Expired => summary.expired += 1,
            ExpiryStatus::ExpiringSoon => summary.expiring_soon += 1,
            ExpiryStatus::Good => {}
        }
    }

    summary
}
