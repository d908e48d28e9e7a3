//! Logging utilities.
//!
//! The library itself only talks to the `log` facade; front ends call
//! [`init_logging`] to install the `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
