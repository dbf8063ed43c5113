//! Text mode: aria2 command script, aria2 input file, IDM import block and
//! a plain link list for one batch. No network I/O.
//!
//! The framing here is consumed by aria2 and IDM importers, so separators
//! (`\n` vs `\r\n`, the `<`/`>` IDM markers) must stay exactly as they are.

use anyhow::{Context, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BridgeConfig;
use crate::file::{strip_controls, FileDescriptor};
use crate::headers::{aria2_cmd, aria2c, idm, shell_quote, HeaderSet};

pub const DATA_URI_PREFIX: &str = "data:text/plain;charset=utf-8,";

const ARIA2C_COMMAND: &str = "aria2c -c -s10 -k1M -x16 --enable-rpc=false";

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The four text artifacts of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportBundle {
    /// One `aria2c` invocation per line.
    pub aria2_cmd: String,
    /// aria2 `--input-file` contents.
    pub aria2_input: String,
    /// IDM `.ef2` import contents, ending with `\r\n`.
    pub idm: String,
    /// One link per line.
    pub links: String,
}

/// Builds all artifacts, keeping the input order.
pub fn export_batch(
    cfg: &BridgeConfig,
    files: &[FileDescriptor],
    runtime_user_agent: Option<&str>,
) -> ExportBundle {
    let mut cmd_lines = Vec::with_capacity(files.len());
    let mut input_blocks = Vec::with_capacity(files.len());
    let mut idm_blocks = Vec::with_capacity(files.len());
    let mut links = Vec::with_capacity(files.len());

    for file in files {
        let link = strip_controls(&file.effective_link(cfg.ssl));
        let name = file.output_name();
        let headers = HeaderSet::build(cfg, runtime_user_agent, &file.cookie_header());
        let checksum = file.checksum(cfg.sha1_check);

        let mut cmd = format!(
            "{ARIA2C_COMMAND} -o {} {} {}",
            shell_quote(&name),
            aria2_cmd(headers.lines()),
            shell_quote(&link)
        );
        let mut block = [
            link.clone(),
            aria2c(headers.lines()),
            format!(" out={name}"),
        ]
        .join("\n");
        if let Some(checksum) = &checksum {
            cmd.push_str(&format!(" --checksum={checksum}"));
            block.push_str(&format!("\n checksum={checksum}"));
        }

        cmd_lines.push(cmd);
        input_blocks.push(block);
        let idm_headers = idm(headers.lines());
        idm_blocks.push(["<", link.as_str(), idm_headers.as_str(), ">"].join("\r\n"));
        links.push(link);
    }

    tracing::debug!(count = files.len(), "built export artifacts");

    let mut idm_text = idm_blocks.join("\r\n");
    idm_text.push_str("\r\n");

    ExportBundle {
        aria2_cmd: cmd_lines.join("\n"),
        aria2_input: input_blocks.join("\n"),
        idm: idm_text,
        links: links.join("\n"),
    }
}

/// `data:` URI for a plain-text download link.
pub fn data_uri(text: &str) -> String {
    format!("{DATA_URI_PREFIX}{}", utf8_percent_encode(text, URI_COMPONENT))
}

impl ExportBundle {
    pub const ARIA2_CMD_FILE: &'static str = "aria2c.sh";
    pub const ARIA2_INPUT_FILE: &'static str = "aria2c.txt";
    pub const IDM_FILE: &'static str = "idm.ef2";
    pub const LINKS_FILE: &'static str = "links.txt";

    /// Writes the artifacts into `dir`, creating it if needed. Returns the paths written.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let outputs = [
            (Self::ARIA2_CMD_FILE, &self.aria2_cmd),
            (Self::ARIA2_INPUT_FILE, &self.aria2_input),
            (Self::IDM_FILE, &self.idm),
            (Self::LINKS_FILE, &self.links),
        ];
        let mut written = Vec::with_capacity(outputs.len());
        for (name, contents) in outputs {
            let path = dir.join(name);
            fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
            written.push(path);
        }
        tracing::info!(dir = %dir.display(), "wrote export artifacts");
        Ok(written)
    }
}
