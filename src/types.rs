//! Core types for code-search responses and page requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single code match returned by the search API.
///
/// Only `repo` is required — it is the field downstream entity creation
/// keys on. Everything else the API sends is kept either in the named
/// optional fields or in `extra`, so no information is lost on
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeMatch {
    /// Repository the match was found in (e.g. `org/project`).
    pub repo: String,
    /// Matched file's base name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Matched file's name with extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Path of the matched file within the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Language the API classified the file as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Direct link to the match on the hosting site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Any response fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Decoded body of one API call.
///
/// The discovery call and page calls share this shape; only the presence
/// of `total` distinguishes a discovery response from a page response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Total the API reports for the query; drives how many pages are
    /// fetched. Present on discovery responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// The matches on this page. Present on page responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<CodeMatch>>,
}

/// One page fetch to be claimed by exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page offset (`p` query parameter).
    pub offset: usize,
    /// Fully constructed request URI.
    pub uri: String,
}
