//! Configuration constants and validation functions for the extractor.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{MicrodataError, Result};

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (10 MB).
///
/// Web pages carrying microdata are small; anything larger is almost
/// certainly not an HTML page. Can be overridden via CLI --max-size flag.
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// User agent string identifying this extractor.
pub const USER_AGENT: &str = concat!("regelrecht-microdata/", env!("CARGO_PKG_VERSION"));

/// Value rendered in place of an item that would re-enter itself.
pub const CYCLE_SENTINEL: &str = "ERROR";

/// Source argument that means "read standard input".
pub const STDIN_SOURCE: &str = "-";

/// Scheme prefix: anything starting with this is treated as a URL.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static URL_SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").expect("valid regex"));

/// Supported URL pattern: http(s) scheme followed by a host.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HTTP_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("valid regex"));

/// Where markup for an extraction run comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Standard input (`-`).
    Stdin,
    /// Remote document fetched over HTTP.
    Url,
    /// Local file.
    Path,
}

impl SourceKind {
    /// Classify a source argument.
    ///
    /// # Examples
    /// ```
    /// use regelrecht_microdata::config::SourceKind;
    ///
    /// assert_eq!(SourceKind::detect("-"), SourceKind::Stdin);
    /// assert_eq!(SourceKind::detect("https://example.com/"), SourceKind::Url);
    /// assert_eq!(SourceKind::detect("page.html"), SourceKind::Path);
    /// ```
    #[must_use]
    pub fn detect(source: &str) -> Self {
        if source == STDIN_SOURCE {
            Self::Stdin
        } else if URL_SCHEME_PATTERN.is_match(source) {
            Self::Url
        } else {
            Self::Path
        }
    }
}

/// Validate that a URL uses a supported scheme and has a host.
///
/// # Arguments
/// * `url` - The URL to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(MicrodataError::InvalidUrl)` if invalid
///
/// # Examples
/// ```
/// use regelrecht_microdata::config::validate_url;
///
/// assert!(validate_url("https://schema.org/Person").is_ok());
/// assert!(validate_url("ftp://example.com/file").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if HTTP_URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(MicrodataError::InvalidUrl(url.to_string()))
    }
}

/// Treat an empty type filter as no filter at all.
///
/// # Examples
/// ```
/// use regelrecht_microdata::config::normalize_type_filter;
///
/// assert_eq!(normalize_type_filter(Some("")), None);
/// assert_eq!(normalize_type_filter(Some("Person")), Some("Person"));
/// assert_eq!(normalize_type_filter(None), None);
/// ```
#[must_use]
pub fn normalize_type_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty())
}
