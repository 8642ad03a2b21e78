//! # gitscout
//!
//! Discovery plugins for host-reconnaissance pipelines, built around the
//! public Searchcode code-search API.
//!
//! ## Design
//!
//! - One discovery call learns how much the API has for a keyword; page
//!   fetches then fan out across a fixed-size worker pool with a hard page
//!   cap
//! - Results are aggregated and deduplicated by repository, and the
//!   discovery task emits one entity per distinct repo into a
//!   caller-supplied sink
//! - Network access is an injected capability ([`PageFetcher`]), so the
//!   pagination core is testable without a network
//! - Failures degrade recall instead of aborting: a failed page is
//!   dropped, a failed discovery call yields an empty result
//! - A separate cookie fingerprint identifies self-hosted GitLab instances
//!
//! ## Security
//!
//! - Entirely passive against the target: only third-party APIs are queried
//! - Keywords under investigation are logged at trace level only

pub mod config;
pub mod error;
pub mod fetch;
pub mod fingerprint;
pub mod http;
pub mod paginator;
pub mod task;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use fetch::PageFetcher;
pub use fingerprint::{fingerprint_gitlab, Confidence, FingerprintMatch};
pub use http::SearchcodeClient;
pub use task::{Entity, EntityKind, EntitySink};
pub use types::{ApiResponse, CodeMatch};

/// Search for a keyword through an injected fetch capability.
///
/// Issues one discovery call, fetches up to `config.max_pages` result
/// pages with `config.worker_count` concurrent workers, and returns the
/// aggregate deduplicated by repository. Per-page failures reduce recall;
/// a failed discovery call yields `Ok` with an empty set.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration or an
/// empty keyword, before any network activity.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gitscout::Result<()> {
/// let config = gitscout::SearchConfig::default();
/// let client = gitscout::SearchcodeClient::new(&config)?;
/// let matches = gitscout::search("uniquetoken1337", &config, &client).await?;
/// for m in &matches {
///     println!("{}", m.repo);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search<F: PageFetcher>(
    keyword: &str,
    config: &SearchConfig,
    fetcher: &F,
) -> Result<Vec<CodeMatch>> {
    config.validate()?;
    if keyword.is_empty() {
        return Err(SearchError::Config("keyword must not be empty".into()));
    }
    paginator::paginate(keyword, config, fetcher).await
}

/// Search Searchcode for a keyword using the built-in HTTP client.
///
/// Convenience wrapper around [`search`] that constructs a
/// [`SearchcodeClient`] from `config`.
///
/// # Errors
///
/// Same as [`search`], plus [`SearchError::Http`] if the HTTP client
/// cannot be constructed.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gitscout::Result<()> {
/// let config = gitscout::SearchConfig::default();
/// let matches = gitscout::search_searchcode("uniquetoken1337", &config).await?;
/// println!("{} distinct repositories", matches.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_searchcode(keyword: &str, config: &SearchConfig) -> Result<Vec<CodeMatch>> {
    config.validate()?;
    let client = SearchcodeClient::new(config)?;
    search(keyword, config, &client).await
}
