//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables. It
//! provides thread-safe access and mutation for tests or runtime overrides.
//!
//! Free functions (`config::host()`, `config::port()`, ...) are thin readers over
//! the singleton for call sites that only need one value.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

const DEFAULT_CLOCKBACK_THRESHOLD_HOURS: u64 = 24;
const DEFAULT_FUTURE_SKEW_TOLERANCE_SECONDS: u64 = 0;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    /// How far past the deadline an upload may arrive while still claiming a
    /// pre-deadline modification before it is flagged as a rolled-back clock.
    pub clockback_threshold_hours: u64,
    /// How far ahead of the server upload time a client modification time may
    /// be before it is flagged as a future clock.
    pub future_skew_tolerance_seconds: u64,
    /// `(variable, raw value)` pairs that failed to parse and fell back to their
    /// default. Loading runs before logging is installed, so the binary reports
    /// these once its subscriber is up.
    pub invalid_values: Vec<(String, String)>,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key` and parses it, falling back to `default` when the variable is
/// unset or does not parse. Parse failures are pushed onto `invalid`.
fn parse_or<T: FromStr>(key: &str, default: T, invalid: &mut Vec<(String, String)>) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                invalid.push((key.to_string(), raw));
                default
            }
        },
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a default, so this never panics.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut invalid = Vec::new();
        let port = parse_or("PORT", 3000, &mut invalid);
        let clockback_threshold_hours = parse_or(
            "TIMING_CLOCKBACK_THRESHOLD_HOURS",
            DEFAULT_CLOCKBACK_THRESHOLD_HOURS,
            &mut invalid,
        );
        let future_skew_tolerance_seconds = parse_or(
            "TIMING_FUTURE_SKEW_TOLERANCE_SECONDS",
            DEFAULT_FUTURE_SKEW_TOLERANCE_SECONDS,
            &mut invalid,
        );

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME")
                .unwrap_or_else(|_| "fortitask-timing".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info,timing=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port,
            clockback_threshold_hours,
            future_skew_tolerance_seconds,
            invalid_values: invalid,
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_clockback_threshold_hours(value: u64) {
        AppConfig::set_field(|cfg| cfg.clockback_threshold_hours = value);
    }

    pub fn set_future_skew_tolerance_seconds(value: u64) {
        AppConfig::set_field(|cfg| cfg.future_skew_tolerance_seconds = value);
    }
}

// --- Free readers ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn clockback_threshold_hours() -> u64 {
    AppConfig::global().clockback_threshold_hours
}

pub fn future_skew_tolerance_seconds() -> u64 {
    AppConfig::global().future_skew_tolerance_seconds
}

pub fn invalid_values() -> Vec<(String, String)> {
    AppConfig::global().invalid_values.clone()
}
