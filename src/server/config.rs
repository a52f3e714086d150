use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3001;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
}

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// None of these settings change how passwords are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3001`).
    pub port: u16,
    pub environment: Environment,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var   | Default       |
    /// |-----------|---------------|
    /// | `HOST`    | `0.0.0.0`     |
    /// | `PORT`    | `3001`        |
    /// | `APP_ENV` | `development` |
    ///
    /// # Errors
    ///
    /// Returns error if `HOST` or `PORT` is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("HOST") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            Err(_) => DEFAULT_HOST,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = std::env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            environment,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether fault responses may carry error details.
    pub fn expose_error_details(&self) -> bool {
        self.environment != Environment::Production
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            environment: Environment::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        for key in ["HOST", "PORT", "APP_ENV"] {
            remove_env(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:3001");
        assert!(config.expose_error_details());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        set_env("HOST", "127.0.0.1");
        set_env("PORT", "8080");
        set_env("APP_ENV", "Production");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.expose_error_details());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        set_env("PORT", "not-a-port");

        let result = ServerConfig::from_env();
        assert_eq!(result, Err(ConfigError::InvalidPort("not-a-port".to_string())));

        set_env("PORT", "70000");
        assert!(matches!(ServerConfig::from_env(), Err(ConfigError::InvalidPort(_))));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_host() {
        clear_env();
        set_env("HOST", "localhost:80");

        assert!(matches!(ServerConfig::from_env(), Err(ConfigError::InvalidHost(_))));

        clear_env();
    }

    #[test]
    fn test_unknown_environment_is_development() {
        assert_eq!(Environment::parse("staging"), Environment::Development);
        assert_eq!(Environment::parse(" production "), Environment::Production);
    }
}
