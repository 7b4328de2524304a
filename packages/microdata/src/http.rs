//! HTTP client wrapper for fetching remote documents.

use std::io::Read;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{validate_url, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{MicrodataError, Result};

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx responses).
/// Bodies larger than `max_size` bytes are rejected without buffering more
/// than `max_size + 1` bytes, also when the server sends no `Content-Length`.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Maximum accepted body size in bytes
///
/// # Returns
/// Raw bytes of the response body
pub fn download_bytes(client: &Client, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                // Client errors (4xx) won't succeed on retry
                let response = response.error_for_status()?;

                if let Some(size) = response.content_length() {
                    if size > max_size {
                        return Err(MicrodataError::ResponseTooLarge {
                            size,
                            limit: max_size,
                        });
                    }
                }

                // Chunked bodies carry no Content-Length; read at most one byte past the limit
                let mut body = Vec::new();
                response
                    .take(max_size.saturating_add(1))
                    .read_to_end(&mut body)?;
                let size = body.len() as u64;
                if size > max_size {
                    return Err(MicrodataError::ResponseTooLarge {
                        size,
                        limit: max_size,
                    });
                }
                return Ok(body);
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                // Other errors (like invalid URL) - don't retry
                return Err(MicrodataError::Http(e));
            }
        }
    }

    Err(MicrodataError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Decode a response body as UTF-8, replacing invalid sequences.
///
/// # Arguments
/// * `bytes` - Raw body
/// * `context` - Description of the body for the warning log
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(context, "Body is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Fetch a remote document as text.
///
/// # Arguments
/// * `url` - http(s) URL of the document
/// * `max_size` - Maximum accepted body size in bytes
pub fn fetch_document(url: &str, max_size: u64) -> Result<String> {
    validate_url(url)?;
    let client = create_client()?;
    let bytes = download_bytes(&client, url, max_size).map_err(|e| {
        if let MicrodataError::Http(source) = e {
            MicrodataError::Download {
                url: url.to_string(),
                source,
            }
        } else {
            e
        }
    })?;

    Ok(bytes_to_string(&bytes, url))
}
