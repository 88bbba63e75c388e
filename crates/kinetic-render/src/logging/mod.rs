//! Logging utilities.
//!
//! The renderer logs through the `log` facade only; binaries pick the backend.
//! `init_logging` wires up `env_logger` for the demo and for quick experiments.

mod init;

pub use init::{init_logging, LoggingConfig};
