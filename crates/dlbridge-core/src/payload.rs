//! JSON-RPC 2.0 request bodies for aria2 and the HTTP requests that carry them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::endpoint::{Credential, Endpoint};
use crate::error::BridgeError;

pub const METHOD_GET_VERSION: &str = "aria2.getVersion";
pub const METHOD_ADD_URI: &str = "aria2.addUri";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub id: Value,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: &str, id: Value, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            id,
            params,
        }
    }

    pub fn get_version() -> Self {
        Self::new(METHOD_GET_VERSION, Value::from(1), Vec::new())
    }

    /// `aria2.addUri` for one URI. The id is a millisecond timestamp;
    /// responses are not matched back to requests so collisions are harmless.
    pub fn add_uri(uri: &str, options: Map<String, Value>) -> Self {
        let id = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self::new(
            METHOD_ADD_URI,
            Value::from(id),
            vec![Value::from(vec![uri]), Value::Object(options)],
        )
    }

    /// The per-download option object (`params[1]` of `addUri`), if any.
    ///
    /// Credentials are only attached by `generate_request`, so the index is
    /// fixed while the request is still being built.
    pub fn options_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.params.get_mut(1).and_then(Value::as_object_mut)
    }
}

/// A ready-to-send POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: &'static str,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Attaches the endpoint's credential to `request` and serializes it.
///
/// A token goes in-band as the first param; basic auth becomes an
/// `Authorization` header.
pub fn generate_request(
    endpoint: &Endpoint,
    mut request: RpcRequest,
) -> Result<HttpRequest, BridgeError> {
    let mut headers = BTreeMap::new();
    match &endpoint.credential {
        Some(Credential::Token(token)) => request.params.insert(0, Value::from(token.as_str())),
        Some(Credential::Basic(basic)) => {
            headers.insert("Authorization".to_string(), basic.clone());
        }
        None => {}
    }
    let body = serde_json::to_string(&request)?;
    Ok(HttpRequest {
        url: endpoint.path.clone(),
        method: "POST",
        headers,
        body,
    })
}

/// JSON-RPC response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// `result` of `aria2.getVersion`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    #[serde(default)]
    pub enabled_features: Vec<String>,
}
