//! `dlbridge export <batch>` – text mode.

use anyhow::Result;
use dlbridge_core::config::BridgeConfig;
use dlbridge_core::export::{data_uri, export_batch, ExportBundle};
use dlbridge_core::file;
use std::path::Path;

pub fn run_export(
    cfg: &BridgeConfig,
    batch: &Path,
    out_dir: Option<&Path>,
    as_data_uri: bool,
    runtime_user_agent: Option<&str>,
) -> Result<()> {
    let files = file::load_batch(batch)?;
    let bundle = export_batch(cfg, &files, runtime_user_agent);

    if let Some(dir) = out_dir {
        for path in bundle.write_to_dir(dir)? {
            println!("wrote {}", path.display());
        }
        return Ok(());
    }

    let sections: [(&str, &String); 4] = [
        (ExportBundle::ARIA2_CMD_FILE, &bundle.aria2_cmd),
        (ExportBundle::ARIA2_INPUT_FILE, &bundle.aria2_input),
        (ExportBundle::IDM_FILE, &bundle.idm),
        (ExportBundle::LINKS_FILE, &bundle.links),
    ];
    for (name, text) in sections {
        println!("# {name}");
        if as_data_uri {
            println!("{}", data_uri(text));
        } else {
            println!("{text}");
        }
    }
    Ok(())
}
