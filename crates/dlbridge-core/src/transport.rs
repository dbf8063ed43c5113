//! Delivery of JSON-RPC requests to the aria2 daemon.
//!
//! The batch flows only see the [`Transport`] trait. [`CurlTransport`] is the
//! real implementation; it blocks the calling thread for the duration of the
//! request.

use std::time::Duration;

use crate::error::TransportError;
use crate::payload::{HttpRequest, RpcResponse};

/// Sends one request and returns the daemon's JSON-RPC response.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<RpcResponse, TransportError>;
}

/// HTTP POST via libcurl.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Transport for CurlTransport {
    fn send(&self, request: &HttpRequest) -> Result<RpcResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.post(true)?;
        easy.post_fields_copy(request.body.as_bytes())?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        // Skip the 100-continue round trip on larger bodies.
        list.append("Expect:")?;
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            tracing::warn!(url = %request.url, code, "aria2 RPC returned HTTP error");
            return Err(TransportError::Http(code));
        }

        parse_response(&body)
    }
}

/// Decodes a response body, turning a JSON-RPC `error` object into an error.
pub(crate) fn parse_response(body: &[u8]) -> Result<RpcResponse, TransportError> {
    let response: RpcResponse = serde_json::from_slice(body)?;
    if let Some(err) = &response.error {
        return Err(TransportError::Rpc {
            code: err.code,
            message: err.message.clone(),
        });
    }
    Ok(response)
}
