use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::flight::FlightRecord;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("upstream response could not be parsed: {0}")]
    Decode(String),
    #[error("circuit breaker open, upstream call skipped")]
    BreakerOpen,
}

/// Capability interface over the external flight-data provider.
///
/// The production implementation lives in the store crate; tests inject
/// fakes through this trait instead of touching the network.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Fetch the offers for a route on a given date. All arguments are
    /// required; the handler validates them before calling.
    async fn get_flights(
        &self,
        departure_city: &str,
        arrival_city: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightRecord>, ProviderError>;

    /// Reserve `seats` seats on a flight with the provider.
    async fn reserve(&self, flight_id: i32, seats: i32) -> Result<(), ProviderError>;

    /// Release `seats` previously reserved seats.
    async fn cancel(&self, flight_id: i32, seats: i32) -> Result<(), ProviderError>;
}
