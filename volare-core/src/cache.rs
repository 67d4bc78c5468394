use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Backend(String),
}

/// Cache-aside store for serialized flight-search results.
///
/// A miss is `Ok(None)`; `Err` is reserved for the backend itself being
/// unreachable, and the two must never be conflated.
#[async_trait]
pub trait SearchCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`, overwriting any prior entry, expiring
    /// after `ttl`. Eviction is time-based only; nothing deletes entries.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError>;
}

/// Cache key for a search. Filters and sort are applied after retrieval and
/// are deliberately absent. The format is a persisted contract other
/// processes read; do not change the separator or field order.
pub fn search_key(departure_city: &str, arrival_city: &str, date: NaiveDate) -> String {
    format!(
        "search:{}:{}:{}",
        departure_city,
        arrival_city,
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_key_format_is_stable() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 28).unwrap();
        assert_eq!(
            search_key("CityA", "CityB", date),
            "search:CityA:CityB:2023-06-28"
        );
    }

    #[test]
    fn test_search_key_ignores_nothing_else() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(search_key("A", "B", date), "search:A:B:2024-01-02");
    }
}
