use serde::{Deserialize, Serialize};

/// Uniform result shape returned by every endpoint.
///
/// The payload is untyped JSON: the upstream API returns wildly different
/// shapes per endpoint and the envelope contract is schema-agnostic. A non-2xx
/// status still resolves into an envelope; `success` is the only signal.
#[derive(Serialize, Deserialize, Debug)]
pub struct Envelope {
    /// True if and only if `code` is in `[200, 300)`.
    pub success: bool,
    /// HTTP status line text, e.g. `OK` or `Too Many Requests`.
    pub message: String,
    /// HTTP status code.
    pub code: u16,
    /// Parsed response body.
    pub data: serde_json::Value,
}
