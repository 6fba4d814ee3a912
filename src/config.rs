//! Application configuration support.
//!
//! Configuration is read from a TOML file (`analyzer.toml`) with every field
//! defaulted, then selectively overridden from environment variables so that
//! deployments can inject secrets without touching the file.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::repository::RepositoryError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub import: ImportSettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Admin account and token settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// SHA-256 hex of the admin password. Defaults to the hash of "admin".
    #[serde(default = "default_admin_password_sha256")]
    pub admin_password_sha256: String,
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_seconds")]
    pub token_ttl_seconds: u64,
}

/// Holiday provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Seed data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSettings {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password_sha256() -> String {
    // sha256("admin")
    "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918".to_string()
}

fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}

fn default_token_ttl_seconds() -> u64 {
    86400
}

fn default_base_url() -> String {
    crate::clients::nager::DEFAULT_BASE_URL.to_string()
}

fn default_seed_enabled() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password_sha256: default_admin_password_sha256(),
            jwt_secret: default_jwt_secret(),
            token_ttl_seconds: default_token_ttl_seconds(),
        }
    }
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            enabled: default_seed_enabled(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default location, falling back to
    /// built-in defaults when no file exists.
    ///
    /// Searches for `analyzer.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("analyzer.toml"),
            PathBuf::from("config/analyzer.toml"),
            PathBuf::from("../analyzer.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from the default location, then apply environment
    /// variable overrides.
    pub fn load() -> Result<Self, RepositoryError> {
        let mut config = Self::from_default_location()?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides in place.
    ///
    /// Recognized variables: `HOST`, `PORT`, `ADMIN_USERNAME`,
    /// `ADMIN_PASSWORD_SHA256`, `JWT_SECRET`, `NAGER_BASE_URL`,
    /// `SEED_ON_START`.
    pub fn apply_env_overrides(&mut self) -> Result<(), RepositoryError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|e| {
                RepositoryError::configuration(format!("Invalid PORT value: {}", e))
            })?;
        }
        if let Ok(username) = env::var("ADMIN_USERNAME") {
            self.auth.admin_username = username;
        }
        if let Ok(hash) = env::var("ADMIN_PASSWORD_SHA256") {
            self.auth.admin_password_sha256 = hash;
        }
        if let Ok(secret) = env::var("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Ok(base_url) = env::var("NAGER_BASE_URL") {
            self.import.base_url = base_url;
        }
        if let Ok(seed) = env::var("SEED_ON_START") {
            self.seed.enabled = seed.parse().map_err(|e| {
                RepositoryError::configuration(format!("Invalid SEED_ON_START value: {}", e))
            })?;
        }
        Ok(())
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
