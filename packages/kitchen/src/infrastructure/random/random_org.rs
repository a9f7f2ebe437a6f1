//! Reqwest-backed client implementing the `RandomSource` port against
//! random.org's plain-text decimal-fraction endpoint; maps reqwest errors and
//! statuses into coarse `RandomError` kinds.
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::{RandomError, RandomSource};

/// One two-decimal fraction, plain text.
pub const RANDOM_ORG_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct RandomOrgClient {
    client: reqwest::Client,
    url: String,
}

impl RandomOrgClient {
    /// Client for an arbitrary endpoint serving the same plain-text format.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RandomError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RandomError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Client for random.org with the default five second deadline.
    pub fn random_org() -> Result<Self, RandomError> {
        Self::new(RANDOM_ORG_URL, DEFAULT_TIMEOUT)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify_error(e: &reqwest::Error) -> RandomError {
        if e.is_timeout() {
            RandomError::Timeout
        } else {
            RandomError::Unavailable(e.to_string())
        }
    }

    /// Parse a response body into a value in `[0, 1)`.
    pub fn parse_body(body: &str) -> Result<f64, RandomError> {
        let trimmed = body.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| RandomError::InvalidResponse(trimmed.to_string()))?;
        if !(0.0..1.0).contains(&value) {
            return Err(RandomError::InvalidResponse(trimmed.to_string()));
        }
        Ok(value)
    }
}

#[async_trait]
impl RandomSource for RandomOrgClient {
    async fn fetch(&self) -> Result<f64, RandomError> {
        info!(url = %self.url, "Fetching random number");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "Random number request failed");
                Self::classify_error(&e)
            })?;

        let body = resp.text().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "Failed reading random number body");
            Self::classify_error(&e)
        })?;
        debug!(body = %body.trim(), "Random number response");

        let value = Self::parse_body(&body).inspect_err(|e| {
            warn!(error = %e, "Invalid random number response");
        })?;
        info!("Received random number: {value:.3}");
        Ok(value)
    }
}
