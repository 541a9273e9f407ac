//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::state::DEFAULT_MINIMUM_WITHDRAWAL;
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Deployment environment name, reported at startup
    pub environment: String,
    /// Withdrawal rules
    pub withdrawal: WithdrawalConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Withdrawal configuration
#[derive(Debug, Clone)]
pub struct WithdrawalConfig {
    /// Smallest amount accepted, in whole rupees (always positive)
    pub minimum_amount: i64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            withdrawal: WithdrawalConfig {
                minimum_amount: env::var("MIN_WITHDRAWAL_AMOUNT")
                    .ok()
                    .and_then(|m| m.parse().ok())
                    .filter(|m: &i64| *m > 0)
                    .unwrap_or(DEFAULT_MINIMUM_WITHDRAWAL),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
