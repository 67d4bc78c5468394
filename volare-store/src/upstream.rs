use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use tracing::warn;

use crate::app_config::UpstreamConfig;
use crate::breaker::CircuitBreaker;
use volare_core::flight::FlightRecord;
use volare_core::provider::{FlightProvider, ProviderError};

/// How much of an upstream error body is kept for diagnostics.
const BODY_SNIPPET_LEN: usize = 256;

/// reqwest-backed client for the external flight-data provider. Every
/// operation shares one circuit breaker: a run of failures in any of them
/// opens the circuit for all of them.
pub struct HttpFlightClient {
    http: reqwest::Client,
    base_url: String,
    breaker: CircuitBreaker,
}

impl HttpFlightClient {
    pub fn new(cfg: &UpstreamConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            breaker: CircuitBreaker::new(
                "flight-provider",
                cfg.breaker_failure_threshold,
                cfg.breaker_reset_timeout(),
            ),
        })
    }

    /// Feed the call result into the breaker before handing it back.
    async fn record<T>(&self, result: Result<T, ProviderError>) -> Result<T, ProviderError> {
        match &result {
            Ok(_) => self.breaker.record_success().await,
            Err(e) => {
                warn!("flight provider call failed: {}", e);
                self.breaker.record_failure().await;
            }
        }
        result
    }

    fn snippet(body: &str) -> String {
        body.chars().take(BODY_SNIPPET_LEN).collect()
    }

    async fn fetch_flights(
        &self,
        departure_city: &str,
        arrival_city: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightRecord>, ProviderError> {
        let url = format!("{}/flights", self.base_url);
        let date_str = date.format("%Y-%m-%d").to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("departure_city", departure_city),
                ("arrival_city", arrival_city),
                ("date", date_str.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: Self::snippet(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn post_seat_change(
        &self,
        path: &str,
        flight_id: i32,
        seats: i32,
    ) -> Result<(), ProviderError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "flight_id": flight_id, "count": seats }))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: Self::snippet(&body),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl FlightProvider for HttpFlightClient {
    async fn get_flights(
        &self,
        departure_city: &str,
        arrival_city: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightRecord>, ProviderError> {
        if !self.breaker.check().await {
            return Err(ProviderError::BreakerOpen);
        }
        let result = self.fetch_flights(departure_city, arrival_city, date).await;
        self.record(result).await
    }

    async fn reserve(&self, flight_id: i32, seats: i32) -> Result<(), ProviderError> {
        if !self.breaker.check().await {
            return Err(ProviderError::BreakerOpen);
        }
        let result = self
            .post_seat_change("/flights/reserve", flight_id, seats)
            .await;
        self.record(result).await
    }

    async fn cancel(&self, flight_id: i32, seats: i32) -> Result<(), ProviderError> {
        if !self.breaker.check().await {
            return Err(ProviderError::BreakerOpen);
        }
        let result = self
            .post_seat_change("/flights/cancel", flight_id, seats)
            .await;
        self.record(result).await
    }
}
