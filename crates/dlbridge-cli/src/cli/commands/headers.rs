//! `dlbridge headers <batch>` – show what each file would send.

use anyhow::Result;
use dlbridge_core::config::BridgeConfig;
use dlbridge_core::file;
use dlbridge_core::headers::{HeaderDialect, HeaderSet};
use std::path::Path;

pub fn run_headers(
    cfg: &BridgeConfig,
    batch: &Path,
    dialect: HeaderDialect,
    runtime_user_agent: Option<&str>,
) -> Result<()> {
    for f in file::load_batch(batch)? {
        let headers = HeaderSet::build(cfg, runtime_user_agent, &f.cookie_header());
        println!("# {}", f.name);
        println!("{}", headers.render(dialect).into_text());
    }
    Ok(())
}
