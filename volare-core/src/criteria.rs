use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Price,
    DepTime,
    Duration,
}

impl SortBy {
    /// Map a `sort_by` query value onto a comparator. Anything unrecognized
    /// is `None`, which leaves the result list in upstream order.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price" => Some(SortBy::Price),
            "dep_time" => Some(SortBy::DepTime),
            "duration" => Some(SortBy::Duration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// A normalized flight-search request. Required fields are validated and
/// date/time strings parsed before this struct is constructed; the optional
/// fields drive post-retrieval filtering and sorting only and never
/// participate in the cache key.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub departure_city: String,
    pub arrival_city: String,
    pub date: NaiveDate,
    pub airline: Option<String>,
    pub airplane_name: Option<String>,
    pub departure_time_from: Option<DateTime<Utc>>,
    pub departure_time_to: Option<DateTime<Utc>>,
    pub min_remaining_seats: Option<u32>,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
}
