//! Core pagination loop: discovery call, capped work queue, worker pool,
//! join, dedup.
//!
//! One discovery call learns the total the API reports for the keyword;
//! the page cap always wins over that total. Page fetches then fan out
//! across a fixed-size worker pool draining a shared queue. Per-page
//! failures are absorbed (degraded recall, never a fatal error), and a
//! failed discovery call yields an empty result rather than an error.

use std::collections::VecDeque;
use std::sync::Mutex;

use url::Url;

use crate::config::{SearchConfig, GITLAB_SOURCE_ID};
use crate::error::SearchError;
use crate::fetch::PageFetcher;
use crate::types::{CodeMatch, PageRequest};

use super::dedup::dedup_by_repo;

/// Run one keyword search: discovery, bounded fan-out, aggregation, dedup.
///
/// # Pipeline
///
/// 1. Issue the discovery call; on failure or a missing total, return an
///    empty set without fetching any pages
/// 2. Compute `effective_pages = min(total, max_pages)`
/// 3. Build one [`PageRequest`] per offset `0..effective_pages`
/// 4. Run `worker_count` workers concurrently; each claims requests off the
///    shared queue until it is empty
/// 5. Join all workers, then deduplicate the aggregate by `repo`
///
/// No ordering guarantee is made on the returned records.
///
/// # Errors
///
/// Returns [`SearchError::Config`] only if `base_url` cannot be parsed.
/// Transport and decode failures never propagate past this boundary.
pub async fn paginate<F: PageFetcher>(
    keyword: &str,
    config: &SearchConfig,
    fetcher: &F,
) -> Result<Vec<CodeMatch>, SearchError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;

    tracing::trace!(keyword, "starting discovery");
    let discovery = match fetcher.fetch_page(&discovery_uri(&base, keyword)).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "discovery call failed; returning empty result");
            return Ok(Vec::new());
        }
    };
    let Some(total) = discovery.total else {
        tracing::debug!("discovery response carried no total; returning empty result");
        return Ok(Vec::new());
    };

    let effective_pages = usize::try_from(total)
        .unwrap_or(usize::MAX)
        .min(config.max_pages);
    tracing::debug!(total, effective_pages, "discovery complete");
    if effective_pages == 0 {
        return Ok(Vec::new());
    }

    // Built once in ascending offset order; drained destructively by the
    // workers. Each request is claimed at most once.
    let queue: Mutex<VecDeque<PageRequest>> = Mutex::new(
        (0..effective_pages)
            .map(|offset| PageRequest {
                offset,
                uri: page_uri(&base, keyword, offset, config.page_size),
            })
            .collect(),
    );
    let output: Mutex<Vec<CodeMatch>> = Mutex::new(Vec::new());

    let workers = (0..config.worker_count).map(|id| worker(id, &queue, &output, fetcher));
    futures::future::join_all(workers).await;

    let collected = output.into_inner().unwrap_or_else(|e| e.into_inner());
    Ok(dedup_by_repo(collected))
}

/// One worker: claim a page request, fetch it, append its entries.
///
/// The queue lock is released before the fetch awaits, so claims stay
/// atomic and no lock is held across a suspension point. A failed fetch
/// drops that page only.
async fn worker<F: PageFetcher>(
    id: usize,
    queue: &Mutex<VecDeque<PageRequest>>,
    output: &Mutex<Vec<CodeMatch>>,
    fetcher: &F,
) {
    loop {
        let request = queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        let Some(request) = request else { break };

        match fetcher.fetch_page(&request.uri).await {
            Ok(page) => {
                if let Some(entries) = page.results {
                    tracing::trace!(worker = id, offset = request.offset, count = entries.len(), "page fetched");
                    output
                        .lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .extend(entries);
                }
            }
            Err(err) => {
                tracing::warn!(worker = id, offset = request.offset, error = %err, "page fetch failed; dropping page");
            }
        }
    }
}

/// URI for the discovery call: keyword plus the GitLab source filter.
fn discovery_uri(base: &Url, keyword: &str) -> String {
    let mut uri = base.clone();
    uri.query_pairs_mut()
        .append_pair("q", keyword)
        .append_pair("src", &GITLAB_SOURCE_ID.to_string());
    uri.into()
}

/// URI for one page request, parameterized by offset and page size.
fn page_uri(base: &Url, keyword: &str, offset: usize, page_size: usize) -> String {
    let mut uri = base.clone();
    uri.query_pairs_mut()
        .append_pair("q", keyword)
        .append_pair("src", &GITLAB_SOURCE_ID.to_string())
        .append_pair("p", &offset.to_string())
        .append_pair("per_page", &page_size.to_string());
    uri.into()
}
