//! Integration test: real curl transport against a local JSON-RPC server.

mod common;

use dlbridge_core::config::BridgeConfig;
use dlbridge_core::error::{BridgeError, TransportError};
use dlbridge_core::file::FileDescriptor;
use dlbridge_core::submit::{check_version, Session};
use dlbridge_core::transport::CurlTransport;
use dlbridge_core::ui::{DirectoryPrompt, Notice, Notifier, PromptResponse, Prompter};
use serde_json::json;
use std::collections::BTreeMap;

struct Accept(&'static str);

impl Prompter for Accept {
    fn prompt(&self, _prompt: &DirectoryPrompt) -> PromptResponse {
        PromptResponse::confirmed(self.0)
    }
}

struct Quiet;

impl Notifier for Quiet {
    fn notify(&self, _notice: &Notice) {}
}

fn with_credentials(url: &str, userinfo: &str) -> String {
    url.replacen("http://", &format!("http://{userinfo}@"), 1)
}

fn file(name: &str, cookie: &str) -> FileDescriptor {
    let mut cookies = BTreeMap::new();
    cookies.insert("BDUSS".to_string(), cookie.to_string());
    FileDescriptor {
        link: format!("http://d.pcs.example.com/file/{name}"),
        name: name.to_string(),
        size: 1,
        sha1: None,
        cookies,
    }
}

#[test]
fn version_with_token_is_sent_in_band() {
    let server = common::rpc_server::start(
        200,
        r#"{"id":1,"jsonrpc":"2.0","result":{"enabledFeatures":["HTTPS"],"version":"1.37.0"}}"#,
    );
    let url = with_credentials(&server.url, "token:s3cret");

    let info = check_version(&CurlTransport::default(), &url).expect("getVersion");
    assert_eq!(info.version, "1.37.0");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert!(req.request_line.starts_with("POST /jsonrpc"));
    assert!(req.header("Authorization").is_none());
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(
        req.json(),
        json!({"jsonrpc": "2.0", "method": "aria2.getVersion", "id": 1, "params": ["token:s3cret"]})
    );
}

#[test]
fn batch_with_basic_auth_reaches_server() {
    let server = common::rpc_server::start(200, r#"{"id":1,"jsonrpc":"2.0","result":"2089b05ecca3d829"}"#);
    let url = format!("{}#split=8", with_credentials(&server.url, "u:p"));

    let cfg = BridgeConfig::default();
    let transport = CurlTransport::default();
    let session = Session {
        config: &cfg,
        runtime_user_agent: None,
        transport: &transport,
        prompter: &Accept("/srv/downloads"),
        notifier: &Quiet,
    };
    let reports = session
        .submit_batch(&url, vec![file("a.iso", "one"), file("b.iso", "two")])
        .expect("batch");
    assert!(reports.iter().all(|r| r.is_submitted()));
    assert_eq!(reports[0].result.as_deref().ok(), Some("2089b05ecca3d829"));

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    for (req, cookie) in requests.iter().zip(["one", "two"]) {
        assert_eq!(req.header("Authorization"), Some("Basic dTpw"));
        let body = req.json();
        assert_eq!(body["method"], "aria2.addUri");
        assert_eq!(body["params"][1]["dir"], "/srv/downloads");
        assert_eq!(body["params"][1]["split"], "8");
        assert_eq!(
            body["params"][1]["header"][2],
            json!(format!("Cookie: BDUSS={cookie}"))
        );
    }
}

#[test]
fn http_error_is_transport_failure() {
    let server = common::rpc_server::start(500, "oops");
    let err = check_version(&CurlTransport::default(), &server.url).unwrap_err();
    assert!(matches!(
        err,
        BridgeError::TransportFailure(TransportError::Http(500))
    ));
}

#[test]
fn rpc_error_object_is_transport_failure() {
    let server = common::rpc_server::start(
        200,
        r#"{"id":1,"jsonrpc":"2.0","error":{"code":1,"message":"Unauthorized"}}"#,
    );
    let err = check_version(&CurlTransport::default(), &server.url).unwrap_err();
    match err {
        BridgeError::TransportFailure(TransportError::Rpc { code, message }) => {
            assert_eq!(code, 1);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unreachable_daemon_is_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let err = check_version(
        &CurlTransport::default(),
        &format!("http://127.0.0.1:{port}/jsonrpc"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BridgeError::TransportFailure(TransportError::Curl(_))
    ));
}
