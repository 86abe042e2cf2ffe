//! Ledger API configuration module.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `ledger-api.toml` in the working directory (if it exists)
//! 3. The TOML file named by `LEDGER_API_CONFIG` (must exist when set)
//! 4. `LEDGER_API_*` environment variables, e.g. `LEDGER_API_PORT=9090`

use std::env;
use std::path::PathBuf;

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, Map};
use ledger_db::DbConfig;
use serde::{Deserialize, Serialize};

/// Optional config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ledger-api.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LEDGER_API_CONFIG";

/// Prefix for per-key environment overrides.
pub const ENV_PREFIX: &str = "LEDGER_API";

/// Ledger API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size
    pub max_connections: u32,

    /// Apply embedded migrations on startup
    pub run_migrations: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_path: PathBuf::from("./ledger.db"),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from files and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_vars(env::vars().collect())
    }

    /// Same as [`ApiConfig::load`], reading variables from `vars`.
    fn load_from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let mut builder = defaults()?
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false));

        if let Some(path) = vars.get(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(true));
        }

        // Keys are flat: LEDGER_API_DATABASE_PATH -> database_path.
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true)
                .source(Some(vars)),
        );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ApiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port".to_string()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings for [`ledger_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.max_connections)
            .min_connections(1)
            .run_migrations(self.run_migrations)
    }
}

/// Builder seeded with [`ApiConfig::default`].
fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let d = ApiConfig::default();
    let builder = Config::builder()
        .set_default("host", d.host)?
        .set_default("port", i64::from(d.port))?
        .set_default("database_path", d.database_path.display().to_string())?
        .set_default("max_connections", i64::from(d.max_connections))?
        .set_default("run_migrations", d.run_migrations)?;
    Ok(builder)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
