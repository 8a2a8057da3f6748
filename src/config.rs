use std::env;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_ANALYSIS_WINDOW, DEFAULT_MIN_SESSIONS, DEFAULT_STRENGTH_THRESHOLD,
    DEFAULT_WEAK_THRESHOLD,
};
use crate::logging::LogConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub adaptive: AdaptiveEnvConfig,
}

/// Engine knobs that may be overridden per deployment.
#[derive(Debug, Clone)]
pub struct AdaptiveEnvConfig {
    pub weak_threshold: f64,
    pub strength_threshold: f64,
    pub min_sessions: usize,
    pub analysis_window: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            adaptive: AdaptiveEnvConfig {
                weak_threshold: env_or_parse("ADAPTIVE_WEAK_THRESHOLD", DEFAULT_WEAK_THRESHOLD),
                strength_threshold: env_or_parse(
                    "ADAPTIVE_STRENGTH_THRESHOLD",
                    DEFAULT_STRENGTH_THRESHOLD,
                ),
                min_sessions: env_or_parse("ADAPTIVE_MIN_SESSIONS", DEFAULT_MIN_SESSIONS),
                analysis_window: env_or_parse("ADAPTIVE_ANALYSIS_WINDOW", DEFAULT_ANALYSIS_WINDOW),
            },
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_level: self.log_level.clone(),
            enable_file_logs: self.enable_file_logs,
            log_dir: self.log_dir.clone(),
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn managed_keys() -> &'static [&'static str] {
        &[
            "RUST_LOG",
            "ENABLE_FILE_LOGS",
            "LOG_DIR",
            "ADAPTIVE_WEAK_THRESHOLD",
            "ADAPTIVE_STRENGTH_THRESHOLD",
            "ADAPTIVE_MIN_SESSIONS",
            "ADAPTIVE_ANALYSIS_WINDOW",
        ]
    }

    fn clear_keys(keys: &[&str]) {
        for key in keys {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_defaults_when_missing() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        let cfg = Config::from_env();
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.enable_file_logs);
        assert_eq!(cfg.adaptive.weak_threshold, 70.0);
        assert_eq!(cfg.adaptive.strength_threshold, 85.0);
        assert_eq!(cfg.adaptive.min_sessions, 5);
        assert_eq!(cfg.adaptive.analysis_window, 10);
    }

    #[test]
    fn parses_numeric_values() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("ADAPTIVE_WEAK_THRESHOLD", "65.5");
        env::set_var("ADAPTIVE_MIN_SESSIONS", " 8 ");
        env::set_var("ENABLE_FILE_LOGS", "yes");

        let cfg = Config::from_env();
        assert_eq!(cfg.adaptive.weak_threshold, 65.5);
        assert_eq!(cfg.adaptive.min_sessions, 8);
        assert!(cfg.enable_file_logs);

        clear_keys(managed_keys());
    }

    #[test]
    fn invalid_values_fall_back() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("ADAPTIVE_ANALYSIS_WINDOW", "ten");
        env::set_var("ENABLE_FILE_LOGS", "maybe");

        let cfg = Config::from_env();
        assert_eq!(cfg.adaptive.analysis_window, 10);
        assert!(!cfg.enable_file_logs);

        clear_keys(managed_keys());
    }
}
