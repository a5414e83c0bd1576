use std::env;
use std::fmt;
use std::time::Duration;

use auth::HashCost;
use config::builder::ConfigBuilder;
use config::builder::DefaultState;
use config::Config as Settings;
use config::ConfigError;
use config::Environment;
use config::File;
use config::Map;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_JWT_TTL_MINUTES: i64 = 60;

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub hashing: HashCost,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl: chrono::Duration,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Flat view of the recognized keys, as they arrive from files and environment.
#[derive(Debug, Deserialize)]
struct RawConfig {
    db_user: String,
    db_pass: String,
    db_host: String,
    db_port: u16,
    db_name: String,
    db_max_connections: u32,
    db_acquire_timeout_secs: u64,
    db_statement_timeout_ms: u64,
    port: u16,
    jwt_secret: Option<String>,
    jwt_ttl_minutes: i64,
    hash_memory_kib: u32,
    hash_iterations: u32,
    hash_parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DB_HOST, PORT, JWT_SECRET, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// * `Missing` - `JWT_SECRET` is absent or empty
    /// * `Invalid` - A value is out of range
    /// * `Load` - A source could not be read or a value could not be parsed
    pub fn load() -> Result<Self, ConfigurationError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = Settings::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    /// Load configuration from an explicit set of environment variables only.
    pub fn from_env_map(vars: Map<String, String>) -> Result<Self, ConfigurationError> {
        Self::from_builder(Settings::builder().add_source(Environment::default().source(Some(vars))))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigurationError> {
        let defaults = HashCost::default();

        let raw: RawConfig = builder
            .set_default("db_user", "postgres")?
            .set_default("db_pass", "")?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432)?
            .set_default("db_name", "postgres")?
            .set_default("db_max_connections", 5)?
            .set_default("db_acquire_timeout_secs", 5)?
            .set_default("db_statement_timeout_ms", 5000)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("jwt_ttl_minutes", DEFAULT_JWT_TTL_MINUTES)?
            .set_default("hash_memory_kib", i64::from(defaults.memory_kib))?
            .set_default("hash_iterations", i64::from(defaults.iterations))?
            .set_default("hash_parallelism", i64::from(defaults.parallelism))?
            .build()?
            .try_deserialize()?;

        raw.try_into()
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigurationError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let secret = raw
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigurationError::Missing("JWT_SECRET"))?;

        if raw.jwt_ttl_minutes <= 0 {
            return Err(ConfigurationError::Invalid {
                key: "JWT_TTL_MINUTES",
                reason: format!("must be positive, got {}", raw.jwt_ttl_minutes),
            });
        }

        if raw.db_max_connections == 0 {
            return Err(ConfigurationError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database: DatabaseConfig {
                user: raw.db_user,
                password: raw.db_pass,
                host: raw.db_host,
                port: raw.db_port,
                name: raw.db_name,
                max_connections: raw.db_max_connections,
                acquire_timeout: Duration::from_secs(raw.db_acquire_timeout_secs),
                statement_timeout: Duration::from_millis(raw.db_statement_timeout_ms),
            },
            server: ServerConfig {
                http_port: raw.port,
            },
            jwt: JwtConfig {
                secret,
                ttl: chrono::Duration::minutes(raw.jwt_ttl_minutes),
            },
            hashing: HashCost::new(
                raw.hash_memory_kib,
                raw.hash_iterations,
                raw.hash_parallelism,
            ),
        })
    }
}

impl DatabaseConfig {
    /// Connection options for the pool. The statement timeout is applied per
    /// session so no single query can hold a request open indefinitely.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .options([(
                "statement_timeout",
                self.statement_timeout.as_millis().to_string(),
            )])
    }
}
