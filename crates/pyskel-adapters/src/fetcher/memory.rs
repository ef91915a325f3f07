//! In-memory fetcher for tests and offline runs.

use std::collections::HashMap;

use pyskel_core::{
    application::{ApplicationError, ports::TextFetcher},
    error::PyskelResult,
};

/// Serves canned responses by URL. Unknown URLs fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, String>,
    offline: bool,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetcher that fails every request with reason "offline mode".
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }
}

impl TextFetcher for MemoryFetcher {
    fn fetch(&self, url: &str) -> PyskelResult<String> {
        let reason = if self.offline {
            "offline mode"
        } else {
            match self.responses.get(url) {
                Some(body) => return Ok(body.clone()),
                None => "no canned response",
            }
        };

        Err(ApplicationError::Fetch {
            url: url.to_string(),
            reason: reason.into(),
        }
        .into())
    }
}
