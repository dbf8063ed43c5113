//! Files handed over by the cloud-storage page, one batch at a time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A single file to download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Direct download URL.
    pub link: String,
    /// Output filename.
    pub name: String,
    /// Size in bytes; used only for ordering.
    #[serde(default)]
    pub size: u64,
    /// SHA-1 hex digest when the service exposes one.
    #[serde(default)]
    pub sha1: Option<String>,
    /// Cookies the storage CDN requires for this link.
    #[serde(default)]
    pub cookies: BTreeMap<String, String>,
}

impl FileDescriptor {
    /// `name=value` pairs joined by `"; "`, ready for a `Cookie` header.
    pub fn cookie_header(&self) -> String {
        format_cookies(&self.cookies)
    }

    /// `name` with control characters removed, safe as a single-line `out=` value.
    pub fn output_name(&self) -> String {
        strip_controls(&self.name)
    }

    /// Link with a leading `http://` replaced by `https://` when `ssl` is set.
    pub fn effective_link(&self, ssl: bool) -> String {
        upgrade_link(&self.link, ssl)
    }

    /// `sha-1=<digest>` when checking is requested and a digest is known.
    pub fn checksum(&self, sha1_check: bool) -> Option<String> {
        if !sha1_check {
            return None;
        }
        self.sha1
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("sha-1={s}"))
    }
}

pub fn format_cookies(cookies: &BTreeMap<String, String>) -> String {
    cookies
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Drops `\n`, `\r` and other control characters so a value stays on one line.
pub fn strip_controls(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

pub fn upgrade_link(link: &str, ssl: bool) -> String {
    match link.strip_prefix("http://") {
        Some(rest) if ssl => format!("https://{rest}"),
        _ => link.to_string(),
    }
}

/// Stable ascending sort by size (the "small files first" option).
pub fn sort_small_first(files: &mut [FileDescriptor]) {
    files.sort_by_key(|f| f.size);
}

/// Reads a batch file: a JSON array of file descriptors.
pub fn load_batch(path: &Path) -> Result<Vec<FileDescriptor>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read batch file: {}", path.display()))?;
    let files: Vec<FileDescriptor> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse batch JSON: {}", path.display()))?;
    tracing::debug!(count = files.len(), path = %path.display(), "loaded batch");
    Ok(files)
}
