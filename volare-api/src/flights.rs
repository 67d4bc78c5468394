use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use volare_core::cache::search_key;
use volare_core::criteria::{SearchCriteria, SortBy, SortOrder};
use volare_core::datetime;
use volare_core::flight::FlightRecord;
use volare_core::query;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/flights", get(search_flights))
}

/// Raw query parameters, before validation and normalization.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub departure_city: String,
    #[serde(default)]
    pub arrival_city: String,
    #[serde(default)]
    pub date: String,
    pub airline: Option<String>,
    pub airplane_name: Option<String>,
    pub departure_time_from: Option<String>,
    pub departure_time_to: Option<String>,
    pub remaining_seats: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

fn required<'a>(value: &'a str, name: &str) -> Result<&'a str, AppError> {
    if value.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", name)));
    }
    Ok(value)
}

/// Validate the raw parameters and produce normalized criteria.
///
/// Optional filters that arrive as empty strings stay inactive. A supplied
/// window bound must still be a well-formed `HH:MM` time, but the window
/// filter only activates when both bounds are present.
fn normalize(params: &SearchParams) -> Result<SearchCriteria, AppError> {
    let departure_city = required(&params.departure_city, "departure_city")?;
    let arrival_city = required(&params.arrival_city, "arrival_city")?;
    required(&params.date, "date")?;

    let date = datetime::parse_date(&params.date)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut window = [None, None];
    for (slot, raw) in window
        .iter_mut()
        .zip([&params.departure_time_from, &params.departure_time_to])
    {
        if let Some(raw) = raw.as_deref().filter(|s| !s.is_empty()) {
            let time = datetime::parse_time(raw)
                .map_err(|e| AppError::ValidationError(e.to_string()))?;
            *slot = Some(date.and_time(time).and_utc());
        }
    }
    let (departure_time_from, departure_time_to) = match window {
        [Some(from), Some(to)] => (Some(from), Some(to)),
        // Single bound supplied: contract says both or neither, so the
        // window stays inactive.
        _ => (None, None),
    };

    Ok(SearchCriteria {
        departure_city: departure_city.to_string(),
        arrival_city: arrival_city.to_string(),
        date,
        airline: params.airline.clone().filter(|s| !s.is_empty()),
        airplane_name: params.airplane_name.clone().filter(|s| !s.is_empty()),
        departure_time_from,
        departure_time_to,
        min_remaining_seats: params.remaining_seats,
        sort_by: params.sort_by.as_deref().and_then(SortBy::parse),
        sort_order: params
            .sort_order
            .as_deref()
            .map(SortOrder::parse)
            .unwrap_or_default(),
    })
}

/// GET /v1/flights
///
/// Cache-aside search: one cache read, at most one upstream call, at most
/// one cache write per request; filters and sort run on every request after
/// retrieval. A failed cache write fails the request.
pub async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FlightRecord>>, AppError> {
    let criteria = normalize(&params)?;
    let key = search_key(&criteria.departure_city, &criteria.arrival_city, criteria.date);

    let flights: Vec<FlightRecord> = match state.cache.get(&key).await? {
        Some(payload) => serde_json::from_slice(&payload)?,
        None => {
            tracing::debug!(%key, "cache miss, fetching from provider");
            let fetched = state
                .provider
                .get_flights(&criteria.departure_city, &criteria.arrival_city, criteria.date)
                .await?;
            let payload = serde_json::to_vec(&fetched)?;
            state.cache.set(&key, &payload, state.search_ttl).await?;
            fetched
        }
    };

    Ok(Json(query::apply(&criteria, &flights)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> SearchParams {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn test_normalize_minimal() {
        let c = normalize(&params(
            "departure_city=CityA&arrival_city=CityB&date=2023-06-28",
        ))
        .unwrap();
        assert_eq!(c.departure_city, "CityA");
        assert_eq!(c.arrival_city, "CityB");
        assert_eq!(c.sort_by, None);
        assert_eq!(c.sort_order, SortOrder::Asc);
        assert_eq!(c.airline, None);
    }

    #[test]
    fn test_normalize_rejects_missing_required() {
        for query in [
            "arrival_city=CityB&date=2023-06-28",
            "departure_city=&arrival_city=CityB&date=2023-06-28",
            "departure_city=CityA&date=2023-06-28",
            "departure_city=CityA&arrival_city=CityB",
            "departure_city=CityA&arrival_city=CityB&date=str",
        ] {
            assert!(normalize(&params(query)).is_err(), "accepted {:?}", query);
        }
    }

    #[test]
    fn test_normalize_window_requires_both_bounds() {
        let c = normalize(&params(
            "departure_city=A&arrival_city=B&date=2023-06-28&departure_time_from=09:00",
        ))
        .unwrap();
        assert_eq!(c.departure_time_from, None);
        assert_eq!(c.departure_time_to, None);

        let c = normalize(&params(
            "departure_city=A&arrival_city=B&date=2023-06-28\
             &departure_time_from=09:00&departure_time_to=11:30",
        ))
        .unwrap();
        assert!(c.departure_time_from.is_some());
        assert!(c.departure_time_to.is_some());
    }

    #[test]
    fn test_normalize_rejects_malformed_window_bound() {
        assert!(normalize(&params(
            "departure_city=A&arrival_city=B&date=2023-06-28&departure_time_from=9am",
        ))
        .is_err());
    }

    #[test]
    fn test_normalize_unknown_sort_by_is_noop() {
        let c = normalize(&params(
            "departure_city=A&arrival_city=B&date=2023-06-28&sort_by=fare&sort_order=desc",
        ))
        .unwrap();
        assert_eq!(c.sort_by, None);
        assert_eq!(c.sort_order, SortOrder::Desc);
    }
}
