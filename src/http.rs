//! HTTP-backed [`PageFetcher`] for the Searchcode API.
//!
//! Provides a configured [`reqwest::Client`] with rotating User-Agent
//! strings and an optional per-request timeout, plus [`SearchcodeClient`],
//! the production fetch capability (GET, status check, JSON decode).

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fetch::PageFetcher;
use crate::types::ApiResponse;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] configured for API queries.
///
/// The client has:
/// - Timeout from config, if one is set (none by default)
/// - Random User-Agent from the built-in rotation list (or custom if
///   configured)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    let mut builder = reqwest::Client::builder()
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10));
    if let Some(seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// The production fetch capability: one GET against the Searchcode API,
/// decoded as [`ApiResponse`].
#[derive(Debug, Clone)]
pub struct SearchcodeClient {
    client: reqwest::Client,
}

impl SearchcodeClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

impl PageFetcher for SearchcodeClient {
    async fn fetch_page(&self, uri: &str) -> Result<ApiResponse, SearchError> {
        tracing::trace!(uri, "API request");

        let response = self
            .client
            .get(uri)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("API returned error status: {e}")))?;

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| SearchError::Parse(format!("unable to parse JSON response: {e}")))
    }
}
