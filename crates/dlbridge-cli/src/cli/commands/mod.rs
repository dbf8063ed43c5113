//! CLI command handlers, one file per command.

mod config_path;
mod export;
mod headers;
mod send;
mod version;

pub use config_path::run_config_path;
pub use export::run_export;
pub use headers::run_headers;
pub use send::run_send;
pub use version::run_version;
