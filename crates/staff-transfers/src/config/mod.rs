use crate::staffing::enumeration::{
    EnumerationLimit, DEFAULT_MAX_ROSTER_SIZE, MAX_SUPPORTED_ROSTER_SIZE,
};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub enumeration: EnumerationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = LogFormat::from_str(
            &env::var("APP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        )?;

        // Validated by `EnumerationConfig::limit` so commands that never
        // enumerate are unaffected by a bad value.
        let max_roster_size = env::var(MAX_ROSTER_SIZE_VAR).ok();

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
            enumeration: EnumerationConfig { max_roster_size },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Layout of log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Full,
}

impl LogFormat {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            _ => Err(ConfigError::InvalidLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

const MAX_ROSTER_SIZE_VAR: &str = "TRANSFERS_MAX_ROSTER_SIZE";
const MAX_ROSTER_SIZE_FLAG: &str = "--max-roster-size";

/// Guard rails for transfer set enumeration.
#[derive(Debug, Clone, Default)]
pub struct EnumerationConfig {
    /// Raw `TRANSFERS_MAX_ROSTER_SIZE` value, if set.
    pub max_roster_size: Option<String>,
}

impl EnumerationConfig {
    /// Resolves the enumeration limit. A command-line value takes precedence
    /// over the environment, which falls back to [`DEFAULT_MAX_ROSTER_SIZE`].
    pub fn limit(&self, flag: Option<usize>) -> Result<EnumerationLimit, ConfigError> {
        if let Some(size) = flag {
            return EnumerationLimit::new(size).ok_or_else(|| ConfigError::InvalidMaxRosterSize {
                origin: MAX_ROSTER_SIZE_FLAG,
                value: size.to_string(),
            });
        }

        let Some(raw) = self.max_roster_size.as_deref() else {
            return Ok(EnumerationLimit::default());
        };
        raw.trim()
            .parse::<usize>()
            .ok()
            .and_then(EnumerationLimit::new)
            .ok_or_else(|| ConfigError::InvalidMaxRosterSize {
                origin: MAX_ROSTER_SIZE_VAR,
                value: raw.to_string(),
            })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMaxRosterSize { origin: &'static str, value: String },
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxRosterSize { origin, value } => write!(
                f,
                "{} must be an integer between 1 and {} (got '{}')",
                origin, MAX_SUPPORTED_ROSTER_SIZE, value
            ),
            ConfigError::InvalidLogFormat { value } => write!(
                f,
                "APP_LOG_FORMAT must be 'compact' or 'full' (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_LOG_FORMAT");
        env::remove_var("TRANSFERS_MAX_ROSTER_SIZE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Compact);
        let limit = config.enumeration.limit(None).expect("default limit");
        assert_eq!(limit.max_roster_size(), DEFAULT_MAX_ROSTER_SIZE);
    }

    #[test]
    fn reads_environment_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_LOG_LEVEL", "debug");
        env::set_var("APP_LOG_FORMAT", "Full");
        env::set_var("TRANSFERS_MAX_ROSTER_SIZE", " 12 ");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.telemetry.log_format, LogFormat::Full);
        let limit = config.enumeration.limit(None).expect("valid limit");
        assert_eq!(limit.max_roster_size(), 12);
    }

    #[test]
    fn bad_roster_size_surfaces_only_when_limit_is_needed() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRANSFERS_MAX_ROSTER_SIZE", "64");
        let config = AppConfig::load().expect("load does not validate the limit");
        reset_env();

        let err = config.enumeration.limit(None).expect_err("too large");
        assert!(matches!(
            err,
            ConfigError::InvalidMaxRosterSize {
                origin: "TRANSFERS_MAX_ROSTER_SIZE",
                ..
            }
        ));
        assert!(err.to_string().contains("got '64'"));

        let limit = config.enumeration.limit(Some(5)).expect("flag wins");
        assert_eq!(limit.max_roster_size(), 5);
    }

    #[test]
    fn invalid_flag_is_reported_as_the_flag() {
        let config = EnumerationConfig::default();
        let err = config.limit(Some(0)).expect_err("zero rejected");
        assert!(err.to_string().starts_with("--max-roster-size must be"));
        assert!(!err.to_string().contains("TRANSFERS_MAX_ROSTER_SIZE"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LOG_FORMAT", "json");
        let err = AppConfig::load().expect_err("unknown format");
        reset_env();

        assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));
    }
}
