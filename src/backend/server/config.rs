/**
 * Server Configuration
 *
 * Configuration is read from the environment exactly once, at startup,
 * and the resulting values are passed into application state explicitly.
 * In particular the token secret is carried as a value from here on -
 * the token module never reads the environment itself.
 */

use std::time::Duration;
use thiserror::Error;

/// Default port when `SERVER_PORT` is unset
const DEFAULT_PORT: u16 = 3000;

/// Default token lifetime: 30 days
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Token signing/verification configuration
///
/// This is the piece of configuration the middleware and handlers
/// actually consume. It travels inside [`super::state::AppState`].
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify tokens
    pub token_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the HTTP listener on
    pub port: u16,
    /// Token configuration
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Reads:
    /// - `JWT_SECRET` (required) - token signing secret
    /// - `SERVER_PORT` (optional, default 3000)
    /// - `TOKEN_TTL_SECS` (optional, default 30 days)
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingValue("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let token_ttl = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    name: "TOKEN_TTL_SECS",
                    value: raw,
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        Ok(Self {
            port,
            auth: AuthConfig::new(token_secret).with_ttl(token_ttl),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_requires_secret() {
        std::env::remove_var("JWT_SECRET");
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingValue("JWT_SECRET"))));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("TOKEN_TTL_SECS");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.auth.token_secret, "test-secret");
        assert_eq!(config.auth.token_ttl, DEFAULT_TOKEN_TTL);

        std::env::remove_var("JWT_SECRET");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::set_var("SERVER_PORT", "not-a-port");

        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { name: "SERVER_PORT", .. })));

        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("SERVER_PORT");
    }

    #[test]
    fn test_auth_config_builder() {
        let auth = AuthConfig::new("secret").with_ttl(Duration::from_secs(60));
        assert_eq!(auth.token_secret, "secret");
        assert_eq!(auth.token_ttl, Duration::from_secs(60));
    }
}
