//! Error types shared by the request builder and the batch flows.

use thiserror::Error;

/// Failure while talking to the aria2 daemon.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection refused, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response body was not a JSON-RPC response.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The daemon answered with a JSON-RPC error object.
    #[error("aria2 error {code}: {message}")]
    Rpc { code: i64, message: String },
}

/// Errors local to a single request or a single file of a batch.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid RPC endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("transport failure: {0}")]
    TransportFailure(#[from] TransportError),

    #[error("cancelled by user")]
    UserCancelled,

    #[error("failed to serialize JSON-RPC payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl BridgeError {
    pub(crate) fn invalid_endpoint(url: &str, reason: impl ToString) -> Self {
        BridgeError::InvalidEndpoint {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
