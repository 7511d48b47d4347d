//! Host interface for sending log lines to the Function host
use hello_functions_wit::function_web::hello::functions::logging;

/// Logs a given string at the given level
pub fn log(input: &str, level: log::Level) {
    logging::log(input, host_level(level))
}

fn host_level(level: log::Level) -> logging::LogLevel {
    match level {
        log::Level::Error => logging::LogLevel::Error,
        log::Level::Warn => logging::LogLevel::Warn,
        log::Level::Info => logging::LogLevel::Info,
        log::Level::Debug => logging::LogLevel::Debug,
        // The host does not publish Trace logs
        log::Level::Trace => logging::LogLevel::Debug,
    }
}
