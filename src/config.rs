//! Search configuration with defaults matching the Searchcode API limits.
//!
//! [`SearchConfig`] controls the API endpoint, page geometry, and the size
//! of the worker pool used to fetch pages concurrently.

use crate::error::SearchError;

/// Searchcode's numeric source filter for GitLab-hosted repositories.
pub const GITLAB_SOURCE_ID: u32 = 13;

/// Configuration for one discovery search.
///
/// Use [`Default::default()`] for the stock Searchcode settings, or
/// construct with field overrides (handy for pointing `base_url` at a mock
/// server in tests).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Code-search API endpoint queried for both the discovery call and
    /// page requests.
    pub base_url: String,
    /// Results requested per page (`per_page` query parameter).
    pub page_size: usize,
    /// Hard ceiling on pages fetched, regardless of what the API reports.
    pub max_pages: usize,
    /// Number of concurrent workers draining the page queue.
    pub worker_count: usize,
    /// Per-request HTTP timeout in seconds. `None` (the default) imposes no
    /// timeout, matching the behavior of the upstream task this replaces.
    pub timeout_seconds: Option<u64>,
    /// Custom User-Agent string. If `None`, rotates through a built-in list.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://searchcode.com/api/codesearch_I/".into(),
            page_size: 100,
            max_pages: 10,
            worker_count: 20,
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an absolute URL
    /// - `page_size` must be greater than 0
    /// - `worker_count` must be greater than 0
    ///
    /// `max_pages` may be 0 — it is a cap, and a zero cap simply yields an
    /// empty result set.
    pub fn validate(&self) -> Result<(), SearchError> {
        if url::Url::parse(&self.base_url).is_err() {
            return Err(SearchError::Config(format!(
                "base_url is not a valid URL: {}",
                self.base_url
            )));
        }
        if self.page_size == 0 {
            return Err(SearchError::Config(
                "page_size must be greater than 0".into(),
            ));
        }
        if self.worker_count == 0 {
            return Err(SearchError::Config(
                "worker_count must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
