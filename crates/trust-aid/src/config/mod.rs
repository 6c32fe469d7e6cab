use std::env;
use std::fmt;

use crate::beneficiary::IntakeFormat;

const DEFAULT_AVATAR_BASE: &str = "/images/avatar";

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
    pub avatars: AvatarConfig,
    pub intake: IntakeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let base_path = match env::var("TRUST_AID_AVATAR_BASE") {
            Ok(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyAvatarBase);
                }
                trimmed.to_string()
            }
            Err(_) => DEFAULT_AVATAR_BASE.to_string(),
        };

        let default_format = match env::var("TRUST_AID_INTAKE_FORMAT") {
            Ok(raw) => Some(
                IntakeFormat::parse(&raw)
                    .ok_or_else(|| ConfigError::InvalidIntakeFormat { value: raw.clone() })?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            avatars: AvatarConfig { base_path },
            intake: IntakeConfig { default_format },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the avatar images the classifier keys resolve to.
#[derive(Debug, Clone)]
pub struct AvatarConfig {
    pub base_path: String,
}

/// Intake import defaults.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Used when neither the command line nor the file extension decides.
    pub default_format: Option<IntakeFormat>,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyAvatarBase,
    InvalidIntakeFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyAvatarBase => {
                write!(f, "TRUST_AID_AVATAR_BASE must not be empty")
            }
            ConfigError::InvalidIntakeFormat { value } => write!(
                f,
                "TRUST_AID_INTAKE_FORMAT must be 'json' or 'csv' (got '{value}')"
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
        env::remove_var("TRUST_AID_AVATAR_BASE");
        env::remove_var("TRUST_AID_INTAKE_FORMAT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.avatars.base_path, "/images/avatar");
        assert_eq!(config.intake.default_format, None);
    }

    #[test]
    fn avatar_base_drops_trailing_slash() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRUST_AID_AVATAR_BASE", "/static/avatars/");
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.avatars.base_path, "/static/avatars");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }

    #[test]
    fn rejects_blank_avatar_base() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRUST_AID_AVATAR_BASE", " / ");
        let err = AppConfig::load().expect_err("blank base is rejected");
        assert!(matches!(err, ConfigError::EmptyAvatarBase));
        reset_env();
    }

    #[test]
    fn parses_default_intake_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRUST_AID_INTAKE_FORMAT", "CSV");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.intake.default_format, Some(IntakeFormat::Csv));

        env::set_var("TRUST_AID_INTAKE_FORMAT", "xlsx");
        let err = AppConfig::load().expect_err("unknown format is rejected");
        assert!(matches!(err, ConfigError::InvalidIntakeFormat { .. }));
        reset_env();
    }
}
