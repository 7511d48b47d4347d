use std::fmt::Write;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, set_logger, set_max_level};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Forwards `log` records to the Function host.
pub struct HostLog;

static LOGGER: OnceLock<HostLog> = OnceLock::new();

impl HostLog {
    /// Sets the max level and installs the logger if it is not installed yet.
    pub fn init(log_level: LevelFilter) -> Result<(), SetLoggerError> {
        set_max_level(log_level);
        if LOGGER.get().is_some() {
            return Ok(());
        }
        set_logger(LOGGER.get_or_init(|| HostLog))
    }
}

impl Log for HostLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let line = format_record(record, OffsetDateTime::now_utc());
            hello_functions_host::logging::log(&line, record.level());
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record<'_>, at: OffsetDateTime) -> String {
    let mut buffer = String::with_capacity(128);
    let timestamp = at.format(&Rfc3339).unwrap_or("<unknown>".to_string());
    let level = record.level().as_str();
    let module = record.module_path().unwrap_or("<unknown>");
    let file = record.file().unwrap_or("<unknown>");
    let line = record.line().unwrap_or(0);
    let log_message = record.args();

    let _ = write!(
        &mut buffer,
        "{level} {timestamp} {module} {file}:{line} {log_message}"
    );
    buffer
}
