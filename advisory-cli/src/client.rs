use advisory_common::{AdvisorySnapshot, EnvironmentalFactors, ForecastEntry, ForecastResponse};
use log::warn;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const BASE_PATH: &str = "/public-advisory";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Read-only client for the public advisory API.
///
/// Every call is a fresh round trip: no retries, no caching.
#[derive(Clone)]
pub struct AdvisoryClient {
    client: Client,
    base_url: String,
}

impl AdvisoryClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn current(&self) -> Result<AdvisorySnapshot, FetchError> {
        self.get("/current", &[]).await
    }

    /// `None` when the response carries no `forecast` array.
    pub async fn forecast(&self, days: u32) -> Result<Option<Vec<ForecastEntry>>, FetchError> {
        let resp: ForecastResponse = self.get("/forecast", &[("days", days)]).await?;
        Ok(resp.forecast)
    }

    pub async fn health_risks(&self) -> Result<Value, FetchError> {
        self.get("/health-risks", &[]).await
    }

    pub async fn environmental_factors(&self) -> Result<EnvironmentalFactors, FetchError> {
        self.get("/environmental-factors", &[]).await
    }

    pub async fn model_info(&self) -> Result<Value, FetchError> {
        self.get("/model-info", &[]).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, u32)],
    ) -> Result<T, FetchError> {
        let result = self.fetch(endpoint, query).await;
        if let Err(err) = &result {
            warn!("[client] {err}");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, u32)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}{}", self.base_url, BASE_PATH, endpoint);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let resp = request
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;
        if !resp.status().is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: resp.status(),
            });
        }
        resp.json()
            .await
            .map_err(|source| FetchError::Decode { endpoint, source })
    }
}
