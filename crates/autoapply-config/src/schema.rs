//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub automation: AutomationConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Job database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file. In-memory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Rows returned by the direct query probe.
    #[serde(default = "default_probe_limit")]
    pub probe_limit: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            probe_limit: default_probe_limit(),
        }
    }
}

fn default_probe_limit() -> u32 {
    5
}

/// External automation service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationConfig {
    /// Base URL of the automation service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_automation_timeout")]
    pub timeout_seconds: u64,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_seconds: default_automation_timeout(),
        }
    }
}

fn default_automation_timeout() -> u64 {
    300
}

/// Mock session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default = "default_user_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default = "default_user_email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            name: default_user_name(),
            email: default_user_email(),
            image: None,
            token_ttl_seconds: default_token_ttl(),
        }
    }
}

fn default_user_id() -> String {
    "mock-user-id".to_string()
}

fn default_user_name() -> Option<String> {
    Some("Test User".to_string())
}

fn default_user_email() -> Option<String> {
    Some("test@example.com".to_string())
}

fn default_token_ttl() -> u64 {
    24 * 60 * 60
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Emit console logs as JSON lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
