//! HTTP fetcher using a blocking `reqwest` client.

use tracing::{debug, instrument};

use pyskel_core::{
    application::{ApplicationError, ports::TextFetcher},
    error::PyskelResult,
};

const USER_AGENT: &str = concat!("pyskel/", env!("CARGO_PKG_VERSION"));

/// Fetches text over HTTP(S). One GET per call, no retry.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> PyskelResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApplicationError::Fetch {
                url: String::new(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

impl TextFetcher for HttpFetcher {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> PyskelResult<String> {
        let fetch_error = |reason: String| ApplicationError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")).into());
        }

        let body = response.text().map_err(|e| fetch_error(e.to_string()))?;
        debug!(bytes = body.len(), "fetched");
        Ok(body)
    }
}
