//! HTTP client for the CoinGecko v3 REST API.

use std::time::Duration;

use url::Url;

use crate::{
    query::Query, types::Envelope, Error, API_VERSION, DEFAULT_TIMEOUT_MS, PRO_HOST, PUBLIC_HOST,
};

/// Query parameter that carries the pro-tier key.
const PRO_API_KEY_PARAM: &str = "x_cg_pro_api_key";

/// Known non-JSON failure bodies returned by the upstream edge.
const HTML_ERROR_MARKER: &str = "<!DOCTYPE html>";
const THROTTLE_MARKER: &str = "Throttled";

/// Resolves the hostname for a key configuration: the pro host when a key is
/// present, the public host otherwise.
pub fn host_for(api_key: Option<&str>) -> &'static str {
    if api_key.is_some() {
        PRO_HOST
    } else {
        PUBLIC_HOST
    }
}

/// HTTP client for the CoinGecko v3 REST API.
///
/// Immutable after construction and safe to share across concurrent calls.
/// Every endpoint returns the same [`Envelope`] shape; the payload is left
/// as untyped JSON for the caller to interpret. Each request builds a fresh
/// `reqwest::Client` with the configured timeout (30 seconds by default).
pub struct Client {
    /// Pro API key, injected into the query string when present.
    api_key: Option<String>,
    /// Scheme + host prefix for every request, e.g. `https://api.coingecko.com`.
    base_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client for the free tier, pointing at the public host.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: format!("https://{}", PUBLIC_HOST),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Creates a client configured with a pro API key, pointing at the pro
    /// host. The key is sent as the `x_cg_pro_api_key` query parameter.
    pub fn with_api_key(api_key: &str) -> Self {
        Self {
            base_url: format!("https://{}", host_for(Some(api_key))),
            api_key: Some(api_key.to_string()),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_key: None,
            base_url: base_url.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Creates a client with a custom base URL and an API key. Used for
    /// testing key injection with wiremock.
    pub fn with_base_url_and_key(base_url: &str, api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            base_url: base_url.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the full request URL: versioned path, endpoint query
    /// parameters, then the pro key when one is configured.
    fn request_url(&self, path: &str, query: Option<&dyn Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/api/v{}{}", self.base_url, API_VERSION, path).as_str())
            .map_err(|e| {
                tracing::error!("invalid URL constructed: {}", e);
                Error::Url(e)
            })?;
        let mut url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair(PRO_API_KEY_PARAM, key);
        }
        // A query serializer that appended nothing leaves `?` behind.
        if url.query().is_some_and(|q| q.is_empty()) {
            url.set_query(None);
        }
        Ok(url)
    }

    /// Issues a single GET request and normalizes the response into an
    /// [`Envelope`]. Any HTTP status resolves; only transport failures,
    /// timeouts, and unparseable bodies reject.
    pub(crate) async fn get(
        &self,
        path: &str,
        query: Option<&dyn Query>,
    ) -> Result<Envelope, Error> {
        let url = self.request_url(path, query)?;
        let timeout_ms = self.timeout.as_millis() as u64;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::error!("request timed out after {} ms", timeout_ms);
                    Error::Timeout { timeout_ms }
                } else {
                    tracing::error!("failed to reach the API: {}", e);
                    Error::Transport(e)
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!("response body timed out after {} ms", timeout_ms);
                Error::Timeout { timeout_ms }
            } else {
                tracing::error!("failed to read response body: {}", e);
                Error::Transport(e)
            }
        })?;

        // Diagnostic only: both markers mean a non-JSON body, so the parse
        // below still decides the outcome.
        if body.starts_with(HTML_ERROR_MARKER) {
            tracing::warn!("received an HTML error page; the request was likely invalid");
        } else if body.starts_with(THROTTLE_MARKER) {
            tracing::warn!("request was throttled by the upstream API");
        }

        let data = serde_json::from_str(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("failed to parse response body: {} | body: {}", e, snippet);
            Error::Parse {
                source: e,
                body: snippet,
            }
        })?;

        Ok(Envelope {
            success: status.is_success(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
            code: status.as_u16(),
            data,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back the cut off to a char boundary; slicing mid-character panics.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
