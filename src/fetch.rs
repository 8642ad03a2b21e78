//! Trait definition for the injected page-fetch capability.
//!
//! The paginator never talks to the network directly; it goes through
//! [`PageFetcher`], so tests can drive it with in-memory fakes and the
//! production implementation ([`crate::http::SearchcodeClient`]) stays a
//! thin HTTP adapter.

use crate::error::SearchError;
use crate::types::ApiResponse;

/// A capability that performs one API call: HTTP GET plus JSON decode.
///
/// The discovery call and page calls go through the same capability and
/// share the same response shape — only the presence of
/// [`ApiResponse::total`] distinguishes them.
///
/// Implementations must be `Send + Sync` so the worker pool can share one
/// fetcher across concurrent page fetches.
pub trait PageFetcher: Send + Sync {
    /// Fetch and decode one API response.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] for transport failures or non-success
    /// status codes, and [`SearchError::Parse`] for undecodable bodies.
    /// Callers inside the paginator absorb both — a failed unit of work is
    /// dropped, never fatal.
    fn fetch_page(
        &self,
        uri: &str,
    ) -> impl std::future::Future<Output = Result<ApiResponse, SearchError>> + Send;
}
