//! HTTP client foundation for registry queries
//!
//! A thin reqwest wrapper with a crate User-Agent, a request timeout, and
//! exponential-backoff retries for transient failures (transport errors,
//! timeouts, and 429 responses).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::RegistryError;

/// Timeout applied to every request
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("aurcheck/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for a transient failure
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 250;

/// HTTP client with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a client with the default timeout and User-Agent
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a client with a custom timeout and User-Agent
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network("HTTP client", format!("failed to build client: {}", e))
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// GET a URL with query parameters and decode the JSON response.
    ///
    /// `registry` names the remote side in any resulting error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        registry: &str,
    ) -> Result<T, RegistryError> {
        let mut delay = BASE_DELAY_MS;
        let mut last_error = RegistryError::network(registry, "no request attempted");

        for attempt in 0..=self.max_retries {
            debug!(url, attempt, "registry request");

            match self.client.get(url).query(query).send().await {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    last_error = RegistryError::rate_limited(registry);
                }
                Ok(response) if !response.status().is_success() => {
                    return Err(RegistryError::network(
                        registry,
                        format!("HTTP {}", response.status()),
                    ));
                }
                Ok(response) => {
                    return response.json::<T>().await.map_err(|e| {
                        RegistryError::invalid_response(
                            registry,
                            format!("failed to decode JSON: {}", e),
                        )
                    });
                }
                Err(e) if e.is_timeout() => {
                    last_error = RegistryError::timeout(registry);
                }
                Err(e) => {
                    last_error = RegistryError::network(registry, e.to_string());
                }
            }

            if attempt < self.max_retries {
                warn!(url, attempt, delay_ms = delay, "retrying registry request");
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay *= 2;
            }
        }

        Err(last_error)
    }
}
