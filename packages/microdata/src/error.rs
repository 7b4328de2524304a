//! Error types for the microdata extractor.
//!
//! Extraction itself never fails: every degenerate case degrades to an empty
//! or sentinel value. `MicrodataError` covers the surfaces around it, such as
//! loading a source, parsing XML and rendering output.

use thiserror::Error;

/// Main error type for the microdata library.
#[derive(Debug, Error)]
pub enum MicrodataError {
    /// Source looked like a URL but is not a valid http(s) URL.
    #[error("Invalid URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidUrl(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download a document.
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts failed.
    #[error("Download failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Response body exceeds the configured limit.
    #[error("Response too large: {size} bytes (limit is {limit} bytes)")]
    ResponseTooLarge { size: u64, limit: u64 },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for microdata operations.
pub type Result<T> = std::result::Result<T, MicrodataError>;
