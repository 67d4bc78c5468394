//! Pure filter and sort transformations over flight-record lists.
//!
//! Every function returns a fresh `Vec` and leaves its input untouched, so
//! the handler can apply them in sequence without defensive copies. Active
//! filters compose by successive narrowing in a fixed order: airline,
//! airplane name, departure window, remaining seats, then sort.

use chrono::{DateTime, Utc};

use crate::criteria::{SearchCriteria, SortBy, SortOrder};
use crate::flight::FlightRecord;

pub fn filter_by_airline(records: &[FlightRecord], airline: &str) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|r| r.airline == airline)
        .cloned()
        .collect()
}

pub fn filter_by_airplane_name(records: &[FlightRecord], name: &str) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|r| r.airplane.name == name)
        .cloned()
        .collect()
}

/// Keep records departing strictly inside `(from, to)`. Both bounds are
/// required together; the caller passes them as a pair.
pub fn filter_by_departure_window(
    records: &[FlightRecord],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|r| r.dep_time > from && r.dep_time < to)
        .cloned()
        .collect()
}

pub fn filter_by_min_remaining_seats(records: &[FlightRecord], min: u32) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|r| r.remaining_seats >= 0 && r.remaining_seats as u32 >= min)
        .cloned()
        .collect()
}

/// Stable sort by the requested comparator. `Vec::sort_by` is stable, so
/// records with equal keys keep their upstream relative order in both
/// directions.
pub fn sort_records(
    records: &[FlightRecord],
    by: SortBy,
    order: SortOrder,
) -> Vec<FlightRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ord = match by {
            SortBy::Price => a.price.cmp(&b.price),
            SortBy::DepTime => a.dep_time.cmp(&b.dep_time),
            SortBy::Duration => a.duration().cmp(&b.duration()),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    sorted
}

/// Apply every active criterion to `records` in the documented fixed order.
pub fn apply(criteria: &SearchCriteria, records: &[FlightRecord]) -> Vec<FlightRecord> {
    let mut result = records.to_vec();

    if let Some(airline) = &criteria.airline {
        result = filter_by_airline(&result, airline);
    }
    if let Some(name) = &criteria.airplane_name {
        result = filter_by_airplane_name(&result, name);
    }
    if let (Some(from), Some(to)) = (criteria.departure_time_from, criteria.departure_time_to) {
        result = filter_by_departure_window(&result, from, to);
    }
    if let Some(min) = criteria.min_remaining_seats {
        result = filter_by_min_remaining_seats(&result, min);
    }
    if let Some(by) = criteria.sort_by {
        result = sort_records(&result, by, criteria.sort_order);
    }

    result
}
