//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Non-2xx HTTP statuses are not errors: they resolve normally into an
/// [`Envelope`](crate::types::Envelope) with `success == false`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required parameter was absent or empty. Raised before any network
    /// I/O takes place.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    /// A parameter carried a value that cannot form a valid request.
    #[error("invalid value for parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    /// The request URL could not be constructed.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// A low-level connection or protocol failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The request exceeded the configured timeout and was aborted.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
    /// The response body was not valid JSON. The only failure that can occur
    /// after a completed HTTP exchange.
    #[error("response body is not valid JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        /// Body snippet kept for diagnostics, truncated if oversized.
        body: String,
    },
}
