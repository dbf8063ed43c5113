//! `dlbridge send <batch>` – RPC mode.

use anyhow::Result;
use dlbridge_core::config::BridgeConfig;
use dlbridge_core::error::BridgeError;
use dlbridge_core::file;
use dlbridge_core::submit::{FileReport, Session};
use dlbridge_core::transport::CurlTransport;
use std::io;
use std::path::Path;

use crate::cli::terminal::{LinePrompter, TerminalNotifier};

pub fn run_send(
    cfg: &BridgeConfig,
    rpc_url: &str,
    batch: &Path,
    assume_yes: bool,
    runtime_user_agent: Option<&str>,
) -> Result<()> {
    let files = file::load_batch(batch)?;
    if files.is_empty() {
        println!("Batch is empty, nothing to send.");
        return Ok(());
    }
    if assume_yes && cfg.download_path.is_none() {
        tracing::warn!("--yes without download_path: files are skipped unless the endpoint sets #dir");
    }

    let transport = CurlTransport::default();
    let prompter = LinePrompter::new(io::stdin().lock(), io::stderr(), assume_yes);
    let notifier = TerminalNotifier;
    let session = Session {
        config: cfg,
        runtime_user_agent,
        transport: &transport,
        prompter: &prompter,
        notifier: &notifier,
    };

    let reports = session.submit_batch(rpc_url, files)?;
    for report in &reports {
        println!("{}", describe(report));
    }
    let submitted = reports.iter().filter(|r| r.is_submitted()).count();
    println!("Submitted {submitted} of {} file(s).", reports.len());
    Ok(())
}

fn describe(report: &FileReport) -> String {
    match &report.result {
        Ok(gid) => format!("{:<9} {} (gid {gid})", "queued", report.name),
        Err(BridgeError::UserCancelled) => format!("{:<9} {}", "skipped", report.name),
        Err(err) => format!("{:<9} {}: {err}", "failed", report.name),
    }
}
