//! Single-shot JSON GET against an upstream API.
//!
//! No retries, no backoff. Every failure is logged here and returned as a
//! [`FetchError`]; deciding what to do about it is up to the caller.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::{config::UpstreamConfig, error::FetchError};

#[derive(Debug, Clone)]
pub struct Fetcher {
    http: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { http })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, FetchError> {
        Self::new(config.timeout(), &config.user_agent)
    }

    #[instrument(skip(self, url), fields(url = %url), level = "debug")]
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let res = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!("Upstream network error: {}", e);
            FetchError::Network(e)
        })?;

        let status = res.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Upstream rate limited the request (429), giving up for this request");
            return Err(FetchError::RateLimited);
        }
        if status != StatusCode::OK {
            tracing::warn!("Upstream rejected the request: {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        res.json::<T>().await.map_err(|e| {
            tracing::debug!("Ignoring undecodable upstream body: {}", e);
            FetchError::Decode(e)
        })
    }
}
