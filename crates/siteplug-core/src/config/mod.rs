//! Application configuration schemas.
//!
//! All configuration structs are deserialized through the `config` crate
//! from an optional TOML file overlaid with `SITEPLUG__*` environment
//! variables. Every field has a default, so an empty source is valid.

pub mod logging;
pub mod plugin;
pub mod site;

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::logging::{LogFormat, LoggingConfig};
pub use self::plugin::PluginConfig;
pub use self::site::SiteConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Review site layout and public URL.
    #[serde(default)]
    #[validate(nested)]
    pub site: SiteConfig,
    /// Plugin host settings.
    #[serde(default)]
    #[validate(nested)]
    pub plugins: PluginConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `SITEPLUG` and separated by `__` override file values, e.g.
    /// `SITEPLUG__SITE__ROOT=/srv/review`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("SITEPLUG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }
}
