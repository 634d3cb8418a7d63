//! Review API client — fetches homework status updates over HTTP.
//!
//! The service answers `GET <endpoint>?from_date=<epoch>` with a JSON body
//! holding a `homeworks` list and a `current_date` server timestamp. Auth is
//! an `OAuth <token>` Authorization header. Everything that goes wrong at
//! the HTTP layer is a `Transport` error; the payload shape is validated
//! downstream by the poller.

use async_trait::async_trait;
use revizor_core::RevizorConfig;
use revizor_core::error::{Error, Result};
use revizor_core::traits::ReviewSource;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the homework review API.
pub struct ReviewApiClient {
    token: String,
    endpoint: String,
    client: reqwest::Client,
}

impl ReviewApiClient {
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self {
            token: token.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string() + "/",
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &RevizorConfig) -> Self {
        Self::new(&config.api_url, &config.practicum_token)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewSource for ReviewApiClient {
    async fn fetch_updates(&self, since: i64) -> Result<serde_json::Value> {
        tracing::debug!(since, "GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", since.to_string())])
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport(format!(
                "review API returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("could not read response body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_gets_trailing_slash() {
        let client = ReviewApiClient::new("https://example.com/api/homework_statuses", "t");
        assert_eq!(client.endpoint(), "https://example.com/api/homework_statuses/");

        let already = ReviewApiClient::new("https://example.com/api/homework_statuses/", "t");
        assert_eq!(already.endpoint(), "https://example.com/api/homework_statuses/");
    }
}
