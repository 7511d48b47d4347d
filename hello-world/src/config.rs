use log::LevelFilter;

/// Environment name used when `ENV` is not set.
pub const UNKNOWN_ENVIRONMENT: &str = "unknown";

/// Process configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    /// Deployment stage label, e.g. "production".
    pub environment: String,
    pub log_level: LevelFilter,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            environment: UNKNOWN_ENVIRONMENT.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl FunctionConfig {
    /// Reads `ENV` and `LOG_LEVEL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// A missing `ENV` becomes [UNKNOWN_ENVIRONMENT]. A missing or unparseable `LOG_LEVEL`
    /// becomes `info`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENV").unwrap_or_else(|| UNKNOWN_ENVIRONMENT.to_string());
        let log_level = lookup("LOG_LEVEL")
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self {
            environment,
            log_level,
        }
    }
}
