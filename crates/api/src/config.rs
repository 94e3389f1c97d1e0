use std::str::FromStr;

use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown APP_ENV: {0}")]
    UnknownAppEnv(String),

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),

    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Deployment environment, selecting which SQLite file backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    /// Database file used in this environment.
    pub fn database_file(self) -> &'static str {
        match self {
            AppEnv::Development => "development.db",
            AppEnv::Production => "production.db",
        }
    }

    /// `sqlx` connection URL for [`Self::database_file`].
    pub fn database_url(self) -> String {
        format!("sqlite:{}", self.database_file())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
        }
    }
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    /// An empty value means development.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            other => Err(ConfigError::UnknownAppEnv(other.to_string())),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment environment (default: `development`).
    pub app_env: AppEnv,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `APP_ENV`              | `development`              |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_env: AppEnv = std::env::var("APP_ENV").unwrap_or_default().parse()?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = parse_var("PORT", "8080", "u16")?;

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        )?;

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", "30", "u64")?;

        Ok(Self {
            app_env,
            host,
            port,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_var<T: FromStr>(
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|_| ConfigError::InvalidValue {
        name,
        expected,
        value,
    })
}

/// Split a comma-separated origin list, dropping blank entries.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn app_env_defaults_to_development() {
        assert_eq!("".parse::<AppEnv>().unwrap(), AppEnv::Development);
        assert_eq!("development".parse::<AppEnv>().unwrap(), AppEnv::Development);
    }

    #[test]
    fn app_env_production() {
        let env: AppEnv = "production".parse().unwrap();
        assert_eq!(env, AppEnv::Production);
        assert_eq!(env.database_file(), "production.db");
        assert_eq!(env.database_url(), "sqlite:production.db");
    }

    #[test]
    fn app_env_rejects_unknown_values() {
        assert_matches!(
            "staging".parse::<AppEnv>(),
            Err(ConfigError::UnknownAppEnv(value)) if value == "staging"
        );
        // Matching is exact.
        assert!("Production".parse::<AppEnv>().is_err());
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,").unwrap(),
            vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ]
        );
    }

    #[test]
    fn invalid_origin_is_a_config_error() {
        assert_matches!(
            parse_origins("http://ok.test,http://bad\u{7f}.test"),
            Err(ConfigError::InvalidCorsOrigin(origin)) if origin == "http://bad\u{7f}.test"
        );
    }
}
