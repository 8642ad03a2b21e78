//! Cookie-based fingerprint for self-hosted GitLab instances.
//!
//! GitLab sets a `_gitlab_session` cookie on every response, logged in or
//! not, which makes it a reliable single-signal fingerprint. The check is
//! data-driven so further cookie fingerprints can be added alongside it.

use regex::Regex;
use std::sync::LazyLock;

static GITLAB_SESSION_COOKIE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_gitlab_session").expect("static pattern is valid"));

/// How sure a fingerprint is about its identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// The signal is unambiguous for this product.
    Certain,
    /// The signal is suggestive but shared with other products.
    Tentative,
}

/// A product identification produced by a fingerprint check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintMatch {
    /// URI the fingerprinted response came from.
    pub uri: String,
    /// Identified product name.
    pub name: &'static str,
    /// Human-readable description of the product.
    pub description: &'static str,
    /// Identified version, or `"Unknown"` when the signal carries none.
    pub version: &'static str,
    /// Confidence in the identification.
    pub confidence: Confidence,
}

/// A fingerprint that inspects a response's cookie header.
#[derive(Debug, Clone)]
pub struct CookieFingerprint {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    pattern: &'static Regex,
}

impl CookieFingerprint {
    /// The GitLab session-cookie fingerprint.
    ///
    /// Matches when a `_gitlab_session` cookie is present. The cookie name
    /// carries no version information, so the version is always
    /// `"Unknown"` and confidence is [`Confidence::Certain`].
    pub fn gitlab() -> Self {
        Self {
            name: "Gitlab",
            description: "Gitlab",
            version: "Unknown",
            pattern: &*GITLAB_SESSION_COOKIE,
        }
    }

    /// Check a response's cookie header against this fingerprint.
    ///
    /// `cookie_header` is the raw `Cookie`/`Set-Cookie` header value as
    /// received. Returns `None` when the pattern does not appear.
    pub fn check(&self, uri: &str, cookie_header: &str) -> Option<FingerprintMatch> {
        if !self.pattern.is_match(cookie_header) {
            return None;
        }
        Some(FingerprintMatch {
            uri: uri.to_string(),
            name: self.name,
            description: self.description,
            version: self.version,
            confidence: Confidence::Certain,
        })
    }
}

/// Convenience wrapper: check a response's cookies for a GitLab instance.
pub fn fingerprint_gitlab(uri: &str, cookie_header: &str) -> Option<FingerprintMatch> {
    CookieFingerprint::gitlab().check(uri, cookie_header)
}
