use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_RPC_URL: &str = "http://localhost:6800/jsonrpc";
pub const DEFAULT_USER_AGENT: &str = "netdisk;P2SP;3.0.20.63";
pub const DEFAULT_REFERER: &str = "https://pan.baidu.com/";

/// Global configuration loaded from `~/.config/dlbridge/config.toml`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// aria2 RPC endpoint; userinfo and fragment are honored (see `Endpoint`).
    pub rpc_url: String,
    /// Prefer the caller's own user agent over `user_agent` when one is given.
    pub browser_user_agent: bool,
    pub user_agent: String,
    /// `Referer` header value; the header is omitted when unset.
    pub referer: Option<String>,
    /// Extra raw header lines, one per line.
    pub headers: Option<String>,
    /// Rewrite `http://` links to `https://`.
    pub ssl: bool,
    /// Submit small files first in RPC mode.
    pub small: bool,
    /// Ask aria2 to verify SHA-1 digests when the service provides them.
    pub sha1_check: bool,
    /// Pre-filled answer of the download directory prompt.
    pub download_path: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            browser_user_agent: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: Some(DEFAULT_REFERER.to_string()),
            headers: None,
            ssl: false,
            small: false,
            sha1_check: false,
            download_path: None,
        }
    }
}

impl BridgeConfig {
    /// Non-blank extra header lines, trailing `\r` removed.
    pub fn extra_headers(&self) -> impl Iterator<Item = &str> {
        self.headers
            .as_deref()
            .unwrap_or_default()
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
    }
}

/// Hides the userinfo password and any fragment token of the RPC URL.
fn redact_rpc_url(raw: &str) -> String {
    let Ok(mut url) = url::Url::parse(raw) else {
        return "<unparsed>".to_string();
    };
    if url.password().is_some() {
        let _ = url.set_password(Some("hidden"));
    }
    if url.fragment().is_some_and(|f| f.contains("token:")) {
        url.set_fragment(Some("hidden"));
    }
    url.to_string()
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("rpc_url", &redact_rpc_url(&self.rpc_url))
            .field("browser_user_agent", &self.browser_user_agent)
            .field("user_agent", &self.user_agent)
            .field("referer", &self.referer)
            .field("extra_headers", &self.extra_headers().count())
            .field("ssl", &self.ssl)
            .field("small", &self.small)
            .field("sha1_check", &self.sha1_check)
            .field("download_path", &self.download_path)
            .finish()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlbridge")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BridgeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BridgeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BridgeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
