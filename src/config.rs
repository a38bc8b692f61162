// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_PORT: u16 = 8000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection string (`firestore://<project>` or `memory://`).
    /// `None` leaves the service running without a database.
    pub database_url: Option<String>,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            database_url: Some("memory://".to_string()),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let database_url = env::var("DATABASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases live in one test since they share process-wide env vars.
    #[test]
    fn test_config_from_env() {
        env::set_var("DATABASE_URL", "  ");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.database_url, None);
        assert_eq!(config.port, 8000);

        env::set_var("DATABASE_URL", "firestore://gym-pro-dev");
        env::set_var("PORT", "9001");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.database_url.as_deref(), Some("firestore://gym-pro-dev"));
        assert_eq!(config.port, 9001);

        env::set_var("PORT", "eighty");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        env::remove_var("PORT");
        env::remove_var("DATABASE_URL");
    }
}
