//! CLI command definitions and dispatch.

pub mod config;
pub mod inspect;
pub mod providers;
pub mod scan;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use plugin_hello_ssh::HelloSshPluginProvider;
use siteplug_core::config::AppConfig;
use siteplug_core::error::AppError;
use siteplug_plugin::discovery::PluginDiscovery;
use siteplug_plugin::registry::ProviderRegistry;

use crate::output::OutputFormat;

/// Siteplug: extension-based plugin discovery for review sites
#[derive(Debug, Parser)]
#[command(name = "siteplug", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "siteplug.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve every file in the site's plugins directory
    Scan,
    /// Materialize a single plugin source file and describe it
    Inspect(inspect::InspectArgs),
    /// List registered plugin providers
    Providers,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, app_config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Scan => scan::execute(app_config, self.format).await,
            Commands::Inspect(args) => inspect::execute(args, app_config, self.format).await,
            Commands::Providers => providers::execute(app_config, self.format).await,
            Commands::Config(args) => {
                config::execute(args, app_config, &self.config, self.format)
            }
        }
    }
}

/// Helper: registry holding every provider this host ships
pub async fn build_registry(config: &AppConfig) -> Result<Arc<ProviderRegistry>, AppError> {
    let registry = Arc::new(ProviderRegistry::new());
    registry
        .register(Arc::new(HelloSshPluginProvider::new(
            &config.plugins.provider_name,
        )))
        .await?;
    Ok(registry)
}

/// Helper: discovery over the configured site
pub async fn build_discovery(config: &AppConfig) -> Result<PluginDiscovery, AppError> {
    let registry = build_registry(config).await?;
    Ok(PluginDiscovery::new(
        registry,
        config.site.clone(),
        &config.plugins,
    ))
}
