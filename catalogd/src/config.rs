//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple
//! sources with a clear precedence order: default values, then an optional
//! configuration file, then environment variables.

use crate::Cli;
use serde::{Deserialize, Serialize};

/// What to do when the database connection fails at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectFailurePolicy {
    /// Terminate the process with the connection error.
    #[default]
    Exit,
    /// Keep serving without a store; every store-backed endpoint answers
    /// 500 until a restart.
    Degrade,
}

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, allowed CORS origin)
    #[serde(default)]
    pub server: catalog_axum::config::AxumConfig,

    /// Database configuration (file path, creation behavior)
    #[serde(default)]
    pub database: catalog_sqlite::config::SqliteConfig,

    /// Startup behavior when the database connection fails
    #[serde(default)]
    pub on_connect_failure: ConnectFailurePolicy,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Set the database file via environment variable
    /// export APP_DATABASE__DATABASE_PATH="catalog.db"
    ///
    /// # Set the server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    ///
    /// # Set the allowed front-end origin
    /// export APP_SERVER__ALLOWED_ORIGIN="http://localhost:5173"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
