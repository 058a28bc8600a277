use crate::core::RawRecord;
use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues a single GET against the source and returns its records in order.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        crate::utils::validation::validate_positive_duration("timeout", timeout)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EtlError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn fetch(&self, endpoint: &str) -> Result<Vec<RawRecord>> {
        let transport = |source: reqwest::Error| EtlError::TransportError {
            endpoint: endpoint.to_string(),
            source,
        };

        tracing::debug!("Making API request to: {}", endpoint);
        let response = self.client.get(endpoint).send().await.map_err(transport)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(EtlError::HttpStatusError {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        tracing::debug!("Received {} byte body", body.len());

        let json_data: Value =
            serde_json::from_slice(&body).map_err(|e| EtlError::MalformedResponseError {
                endpoint: endpoint.to_string(),
                reason: format!("body is not valid JSON: {}", e),
            })?;

        // Only the top-level shape is checked; elements pass through as-is.
        match json_data {
            Value::Array(items) => Ok(items.into_iter().map(RawRecord::from_value).collect()),
            other => Err(EtlError::MalformedResponseError {
                endpoint: endpoint.to_string(),
                reason: format!("expected a JSON array, got {}", json_kind(&other)),
            }),
        }
    }
}

/// One-shot fetch with a fresh client.
pub async fn fetch_records(endpoint: &str, timeout: Duration) -> Result<Vec<RawRecord>> {
    HttpFetcher::new(timeout)?.fetch(endpoint).await
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
