use thiserror::Error;

/// Unified error type for the two upstream fetches.
///
/// Transport failures and non-2xx statuses both surface as `Network`
/// (the latter via `Response::error_for_status`); a response body that
/// does not match the expected JSON shape surfaces as `Decode`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response, timeout, or the upstream answered with a non-2xx status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
