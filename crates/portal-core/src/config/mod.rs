//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod listing;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, StorageBackend};
pub use self::listing::ListingConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage collaborator settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// List endpoint defaults and bounds.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// and environment variables prefixed with `PORTAL__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PORTAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject configurations that cannot serve requests.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.listing.default_per_page == 0 || self.listing.max_per_page == 0 {
            return Err(AppError::configuration(
                "listing.default_per_page and listing.max_per_page must be positive",
            ));
        }
        if self.listing.default_per_page > self.listing.max_per_page {
            return Err(AppError::configuration(
                "listing.default_per_page must not exceed listing.max_per_page",
            ));
        }
        if self.listing.query_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "listing.query_timeout_seconds must be positive",
            ));
        }
        if self.database.backend == StorageBackend::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres backend",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_memory_backend() {
        let config = AppConfig::default();
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.listing.default_per_page, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_page_bounds() {
        let mut config = AppConfig::default();
        config.listing.default_per_page = 50;
        config.listing.max_per_page = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_query_timeout() {
        let mut config = AppConfig::default();
        config.listing.query_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_url_for_postgres() {
        let mut config = AppConfig::default();
        config.database.backend = StorageBackend::Postgres;
        assert!(config.validate().is_err());
    }
}
