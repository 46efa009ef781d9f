//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use siteplug_core::config::AppConfig;
use siteplug_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration and summarize the site layout
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Table => println!("{:#?}", config),
        },
        ConfigCommand::Validate => {
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Site root", &config.site.root.display().to_string());
            output::print_kv("Canonical URL", &config.site.canonical_web_url);
            output::print_kv(
                "Plugins directory",
                &config.site.plugins_path().display().to_string(),
            );
            output::print_kv("Data directory", &config.site.data_path().display().to_string());
            output::print_kv("Provider", &config.plugins.provider_name);

            if !config.site.plugins_path().is_dir() {
                output::print_warning("Plugins directory does not exist yet");
            }
        }
    }

    Ok(())
}
