//! RPC mode: submit a batch of files to aria2, one `aria2.addUri` per file.
//!
//! Files are processed strictly in sequence. Each file gets its own header
//! set (built from its own cookies), its own directory prompt and its own
//! outcome; a cancelled or failed file never affects the rest of the batch.

use serde_json::{Map, Value};

use crate::config::BridgeConfig;
use crate::endpoint::Endpoint;
use crate::error::{BridgeError, TransportError};
use crate::file::{sort_small_first, FileDescriptor};
use crate::headers::HeaderSet;
use crate::payload::{generate_request, RpcRequest, VersionInfo};
use crate::transport::Transport;
use crate::ui::{DirectoryPrompt, Notice, Notifier, Prompter};

pub const SUBMITTED_MESSAGE: &str = "Download started! Go check it out~";
pub const FAILED_MESSAGE: &str = "Download failed! Is aria2 running?";

/// Collaborators and settings for one batch.
pub struct Session<'a> {
    pub config: &'a BridgeConfig,
    /// The caller's own user agent (see `browser_user_agent`).
    pub runtime_user_agent: Option<&'a str>,
    pub transport: &'a dyn Transport,
    pub prompter: &'a dyn Prompter,
    pub notifier: &'a dyn Notifier,
}

/// Outcome for one file. `Ok` holds the GID aria2 assigned.
#[derive(Debug)]
pub struct FileReport {
    pub name: String,
    pub link: String,
    pub result: Result<String, BridgeError>,
}

impl FileReport {
    pub fn is_submitted(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.result, Err(BridgeError::UserCancelled))
    }
}

/// Builds the `aria2.addUri` request for one file, without `dir`.
pub fn build_add_uri(
    cfg: &BridgeConfig,
    endpoint: &Endpoint,
    file: &FileDescriptor,
    runtime_user_agent: Option<&str>,
) -> RpcRequest {
    let link = file.effective_link(cfg.ssl);
    let headers = HeaderSet::build(cfg, runtime_user_agent, &file.cookie_header());

    let mut options = Map::new();
    options.insert("out".to_string(), Value::from(file.name.as_str()));
    options.insert("header".to_string(), Value::from(headers.lines().to_vec()));
    if let Some(checksum) = file.checksum(cfg.sha1_check) {
        options.insert("checksum".to_string(), Value::from(checksum));
    }
    for (k, v) in &endpoint.options {
        options.insert(k.clone(), Value::from(v.as_str()));
    }

    RpcRequest::add_uri(&link, options)
}

impl Session<'_> {
    /// Submits every file and returns one report per file, in processing order.
    ///
    /// Only an invalid endpoint fails the whole call; everything else is
    /// reported per file.
    pub fn submit_batch(
        &self,
        rpc_url: &str,
        mut files: Vec<FileDescriptor>,
    ) -> Result<Vec<FileReport>, BridgeError> {
        let endpoint = Endpoint::parse(rpc_url)?;
        if self.config.small {
            sort_small_first(&mut files);
        }
        tracing::info!(count = files.len(), endpoint = %endpoint.path, "submitting batch");

        let reports = files
            .iter()
            .map(|file| FileReport {
                name: file.name.clone(),
                link: file.effective_link(self.config.ssl),
                result: self.submit_one(&endpoint, file),
            })
            .collect();
        Ok(reports)
    }

    fn submit_one(&self, endpoint: &Endpoint, file: &FileDescriptor) -> Result<String, BridgeError> {
        let mut request = build_add_uri(self.config, endpoint, file, self.runtime_user_agent);

        let default_dir = self
            .config
            .download_path
            .clone()
            .or_else(|| endpoint.options.get("dir").cloned());
        let response = self.prompter.prompt(&DirectoryPrompt::new(&file.name, default_dir));
        let Some(dir) = response.accepted_value() else {
            tracing::debug!(file = %file.name, "directory prompt dismissed, skipping");
            return Err(BridgeError::UserCancelled);
        };
        if let Some(options) = request.options_mut() {
            options.insert("dir".to_string(), Value::from(dir));
        }

        let http = generate_request(endpoint, request)?;
        match self.transport.send(&http) {
            Ok(resp) => {
                let gid = match resp.result {
                    Some(Value::String(gid)) => gid,
                    Some(other) => other.to_string(),
                    None => String::new(),
                };
                tracing::info!(file = %file.name, %gid, dir, "submitted to aria2");
                self.notifier.notify(&Notice::info(SUBMITTED_MESSAGE));
                Ok(gid)
            }
            Err(e) => {
                tracing::warn!(file = %file.name, "submission failed: {}", e);
                self.notifier.notify(&Notice::error(FAILED_MESSAGE));
                Err(e.into())
            }
        }
    }
}

/// Calls `aria2.getVersion` on the endpoint.
pub fn check_version(transport: &dyn Transport, rpc_url: &str) -> Result<VersionInfo, BridgeError> {
    let endpoint = Endpoint::parse(rpc_url)?;
    let http = generate_request(&endpoint, RpcRequest::get_version())?;
    let resp = transport.send(&http)?;
    let info: VersionInfo = serde_json::from_value(resp.result.unwrap_or(Value::Null))
        .map_err(TransportError::Malformed)?;
    tracing::debug!(version = %info.version, "aria2 version");
    Ok(info)
}
