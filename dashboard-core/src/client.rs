use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::model::ForecastResponse;

/// Production WeatherAPI.com endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Number of forecast days requested. The dashboard renders a single day.
const FORECAST_DAYS: &str = "1";

/// Everything that can go wrong with one fetch. The dashboard makes a
/// single request per run, so there is no retry taxonomy; the only
/// distinction that matters is transport vs upstream vs decode.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to reach WeatherAPI.com: {0}")]
    Request(#[from] reqwest::Error),

    #[error("WeatherAPI forecast request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("Failed to parse WeatherAPI forecast JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Seam for fetching forecast data, so callers and tests don't have to
/// depend on the concrete HTTP client.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different base URL, e.g. a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn fetch_forecast(&self, location: &str) -> Result<ForecastResponse, FetchError> {
        let url = format!("{}/forecast.json", self.base_url);

        debug!(location, days = FORECAST_DAYS, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", FORECAST_DAYS),
                ("aqi", "yes"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)?;

        debug!(
            location = %parsed.location.name,
            days = parsed.forecast.forecastday.len(),
            "forecast received"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl ForecastProvider for ForecastClient {
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, FetchError> {
        self.fetch_forecast(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Walk back to a char boundary so the slice can't split a multibyte char.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
