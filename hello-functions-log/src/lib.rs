//! `log` adapter for hello-world Functions
//!
//! This crate adapts [`log`](https://docs.rs/log) to the Function host's logging import. `log` is a
//! standard logging crate, used widely across the ecosystem.
//!
//! Functions use `wasm32-wasip2` as the target architecture.
//! They use the [WIT](https://component-model.bytecodealliance.org/design/wit.html) [Component Model](https://component-model.bytecodealliance.org/)
//! to describe the ABI.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions`: Code generators for Functions.
//! * `hello-functions-host`: Interfaces and tools for calling host interfaces.

use log::SetLoggerError;
use thiserror::Error;

mod host_logging;

pub use host_logging::HostLog;

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("Failed to initialize host logger: {cause}")]
    HostInit { cause: SetLoggerError },
}

/// Initializes the logging system with the specified log level.
///
/// Function instances may be reused across invocations, so calling this again is fine:
/// the logger is installed once and later calls only change the level.
pub fn configure_logging(level: log::LevelFilter) -> Result<(), LogConfigError> {
    HostLog::init(level).map_err(|e| LogConfigError::HostInit { cause: e })
}
