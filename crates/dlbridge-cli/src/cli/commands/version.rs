//! `dlbridge version` – query `aria2.getVersion`.

use anyhow::{Context, Result};
use dlbridge_core::submit::check_version;
use dlbridge_core::transport::CurlTransport;

pub fn run_version(rpc_url: &str) -> Result<()> {
    let info = check_version(&CurlTransport::default(), rpc_url)
        .context("could not reach aria2, is it running?")?;
    println!("aria2 version: {}", info.version);
    if !info.enabled_features.is_empty() {
        println!("features: {}", info.enabled_features.join(", "));
    }
    Ok(())
}
