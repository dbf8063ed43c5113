//! Download request builder for aria2 and IDM.
//!
//! Turns a batch of cloud-storage file descriptors into aria2 JSON-RPC
//! submissions or into text artifacts (aria2 command lines, aria2 input
//! files, IDM import blocks, link lists).

pub mod config;
pub mod endpoint;
pub mod error;
pub mod export;
pub mod file;
pub mod headers;
pub mod logging;
pub mod payload;
pub mod submit;
pub mod transport;
pub mod ui;

pub use endpoint::{Credential, Endpoint};
pub use error::{BridgeError, TransportError};
pub use file::FileDescriptor;
pub use headers::{HeaderDialect, HeaderSet};
