//! # Application Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ALMACEN_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use almacen_db::DbConfig;

/// Application configuration.
///
/// The `db_host`/`db_user`/`db_password`/`db_name` group mirrors the
/// classic server-database deployment shape; with the embedded SQLite
/// engine only `db_name` participates (it names the database file).
/// The group stays recognized so existing deployment scripts keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Database host. Unused by the embedded engine; kept as a recognized
    /// option.
    pub db_host: String,

    /// Database user. Unused by the embedded engine.
    pub db_user: String,

    /// Database password. Unused by the embedded engine.
    pub db_password: String,

    /// Logical database name. Names the SQLite file (`<db_name>.db`).
    pub db_name: String,

    /// Full database file path override. Takes precedence over `db_name`.
    pub db_path: Option<PathBuf>,

    /// Whether closing the dashboard exits the process.
    ///
    /// `true` preserves the historical behavior (dashboard close = quit);
    /// `false` returns to the login window instead.
    pub exit_on_dashboard_close: bool,
}

impl Default for AppConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Host: localhost (ignored by SQLite)
    /// - Database name: "almacen"
    /// - Dashboard close exits the process
    fn default() -> Self {
        AppConfig {
            db_host: "localhost".to_string(),
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: "almacen".to_string(),
            db_path: None,
            exit_on_dashboard_close: true,
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ALMACEN_DB_HOST`: Database host
    /// - `ALMACEN_DB_USER`: Database user
    /// - `ALMACEN_DB_PASSWORD`: Database password
    /// - `ALMACEN_DB_NAME`: Logical database name
    /// - `ALMACEN_DB_PATH`: Full path to the database file
    /// - `ALMACEN_EXIT_ON_DASHBOARD_CLOSE`: "true"/"false"
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(host) = std::env::var("ALMACEN_DB_HOST") {
            config.db_host = host;
        }

        if let Ok(user) = std::env::var("ALMACEN_DB_USER") {
            config.db_user = user;
        }

        if let Ok(password) = std::env::var("ALMACEN_DB_PASSWORD") {
            config.db_password = password;
        }

        if let Ok(name) = std::env::var("ALMACEN_DB_NAME") {
            if !name.trim().is_empty() {
                config.db_name = name;
            }
        }

        if let Ok(path) = std::env::var("ALMACEN_DB_PATH") {
            if !path.trim().is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(flag) = std::env::var("ALMACEN_EXIT_ON_DASHBOARD_CLOSE") {
            if let Ok(value) = flag.trim().parse::<bool>() {
                config.exit_on_dashboard_close = value;
            }
        }

        config
    }

    /// Resolves the database file path.
    ///
    /// Order: explicit `db_path` override, then the platform data
    /// directory, then the current directory as a last resort.
    pub fn database_path(&self) -> PathBuf {
        if let Some(path) = &self.db_path {
            return path.clone();
        }

        let file_name = format!("{}.db", self.db_name);

        if let Some(dirs) = ProjectDirs::from("com", "almacen", "almacen") {
            return dirs.data_dir().join(file_name);
        }

        PathBuf::from(file_name)
    }

    /// Builds the pool configuration for this app config.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path())
    }
}
