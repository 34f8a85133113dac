use std::env;

/// Distinguishes runtime behavior for different stages of the registry.
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

/// Top-level configuration for the registry process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Reads `.env` (when present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_log_level(None)
    }

    /// Like [`AppConfig::load`], but an explicit log level replaces
    /// `ZOO_LOG_LEVEL` and the environment value is not consulted.
    pub fn load_with_log_level(log_level: Option<String>) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(source) => return Err(ConfigError::Dotenv { source }),
        }

        let environment = AppEnvironment::from_str(
            &env::var("ZOO_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = match log_level {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::EmptyLogLevel { origin: "--log-level" })
            }
            Some(value) => value.trim().to_string(),
            None => match env::var("ZOO_LOG_LEVEL") {
                Ok(value) if value.trim().is_empty() => {
                    return Err(ConfigError::EmptyLogLevel {
                        origin: "ZOO_LOG_LEVEL",
                    })
                }
                Ok(value) => value.trim().to_string(),
                Err(_) => "info".to_string(),
            },
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{origin} must not be blank")]
    EmptyLogLevel { origin: &'static str },
    #[error("unable to read .env file: {source}")]
    Dotenv { source: dotenvy::Error },
}

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
        env::remove_var("ZOO_ENV");
        env::remove_var("ZOO_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn environment_and_log_level_follow_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ZOO_ENV", " CI ");
        env::set_var("ZOO_LOG_LEVEL", "zoo_registry=debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.telemetry.log_level, "zoo_registry=debug");
        reset_env();
    }

    #[test]
    fn production_aliases_are_recognised() {
        assert_eq!(AppEnvironment::from_str("prod"), AppEnvironment::Production);
        assert_eq!(
            AppEnvironment::from_str("Production"),
            AppEnvironment::Production
        );
        assert_eq!(AppEnvironment::from_str("staging"), AppEnvironment::Development);
    }

    #[test]
    fn blank_log_level_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ZOO_LOG_LEVEL", "   ");
        let err = AppConfig::load().expect_err("blank level rejected");
        assert!(matches!(
            err,
            ConfigError::EmptyLogLevel {
                origin: "ZOO_LOG_LEVEL"
            }
        ));
        reset_env();
    }

    #[test]
    fn explicit_log_level_wins_over_blank_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ZOO_LOG_LEVEL", "   ");
        let config = AppConfig::load_with_log_level(Some("debug".to_string()))
            .expect("override bypasses env value");
        assert_eq!(config.telemetry.log_level, "debug");
        reset_env();
    }

    #[test]
    fn blank_explicit_log_level_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let err = AppConfig::load_with_log_level(Some(" ".to_string()))
            .expect_err("blank override rejected");
        assert_eq!(err.to_string(), "--log-level must not be blank");
    }
}
