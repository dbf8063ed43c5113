//! CLI for dlbridge.

mod commands;
mod terminal;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dlbridge_core::config::{self, BridgeConfig};
use dlbridge_core::headers::HeaderDialect;
use std::path::PathBuf;

use commands::{run_config_path, run_export, run_headers, run_send, run_version};

/// Top-level CLI for dlbridge.
#[derive(Debug, Parser)]
#[command(name = "dlbridge")]
#[command(about = "Hand cloud-storage downloads to aria2 or IDM", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Ask the aria2 daemon for its version.
    Version {
        /// RPC endpoint (defaults to `rpc_url` from the config file).
        #[arg(long)]
        rpc: Option<String>,
    },

    /// Submit a batch file to aria2 over JSON-RPC, one file at a time.
    Send {
        /// JSON array of files (link, name, size, sha1, cookies).
        batch: PathBuf,

        /// RPC endpoint (defaults to `rpc_url` from the config file).
        #[arg(long)]
        rpc: Option<String>,

        /// Accept the default download directory without prompting.
        #[arg(long, short = 'y')]
        yes: bool,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Write aria2/IDM text artifacts for a batch file instead of submitting it.
    Export {
        /// JSON array of files (link, name, size, sha1, cookies).
        batch: PathBuf,

        /// Write aria2c.sh, aria2c.txt, idm.ef2 and links.txt here instead of printing.
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Print data: URIs instead of raw text.
        #[arg(long)]
        data_uri: bool,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print each file's request headers in one dialect.
    Headers {
        /// JSON array of files (link, name, size, sha1, cookies).
        batch: PathBuf,

        #[arg(long, value_enum, default_value_t = DialectArg::Rpc)]
        dialect: DialectArg,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the location of the config file.
    ConfigPath,
}

/// Per-run overrides of config file values.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Rewrite http:// links to https://.
    #[arg(long)]
    pub ssl: bool,

    /// Submit small files first.
    #[arg(long)]
    pub small: bool,

    /// Ask aria2 to verify SHA-1 digests.
    #[arg(long)]
    pub sha1_check: bool,

    /// Send this User-Agent instead of the configured one.
    #[arg(long, value_name = "UA")]
    pub browser_ua: Option<String>,
}

impl Overrides {
    /// Applies the flags on top of `cfg`. Flags only ever switch options on.
    pub fn apply(&self, cfg: &mut BridgeConfig) {
        cfg.ssl |= self.ssl;
        cfg.small |= self.small;
        cfg.sha1_check |= self.sha1_check;
        if self.browser_ua.is_some() {
            cfg.browser_user_agent = true;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    Rpc,
    #[value(name = "aria2-cmd")]
    Aria2Cmd,
    #[value(name = "aria2c")]
    Aria2c,
    Idm,
}

impl From<DialectArg> for HeaderDialect {
    fn from(d: DialectArg) -> Self {
        match d {
            DialectArg::Rpc => HeaderDialect::Rpc,
            DialectArg::Aria2Cmd => HeaderDialect::Aria2Cmd,
            DialectArg::Aria2c => HeaderDialect::Aria2c,
            DialectArg::Idm => HeaderDialect::Idm,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if let CliCommand::ConfigPath = cli.command {
            return run_config_path();
        }

        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Version { rpc } => {
                let rpc = rpc.unwrap_or_else(|| cfg.rpc_url.clone());
                run_version(&rpc)?;
            }
            CliCommand::Send {
                batch,
                rpc,
                yes,
                overrides,
            } => {
                overrides.apply(&mut cfg);
                let rpc = rpc.unwrap_or_else(|| cfg.rpc_url.clone());
                run_send(&cfg, &rpc, &batch, yes, overrides.browser_ua.as_deref())?;
            }
            CliCommand::Export {
                batch,
                out_dir,
                data_uri,
                overrides,
            } => {
                overrides.apply(&mut cfg);
                run_export(
                    &cfg,
                    &batch,
                    out_dir.as_deref(),
                    data_uri,
                    overrides.browser_ua.as_deref(),
                )?;
            }
            CliCommand::Headers {
                batch,
                dialect,
                overrides,
            } => {
                overrides.apply(&mut cfg);
                run_headers(&cfg, &batch, dialect.into(), overrides.browser_ua.as_deref())?;
            }
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
