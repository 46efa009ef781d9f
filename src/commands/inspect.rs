//! Single plugin source inspection command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use siteplug_core::config::AppConfig;
use siteplug_core::error::AppError;
use siteplug_plugin::discovery::DiscoveredPlugin;
use siteplug_plugin::plugin::PluginInfo;
use siteplug_plugin::scanner::{ExtensionMetaData, PluginManifest};

use crate::output::{self, OutputFormat};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Plugin source file
    pub path: PathBuf,
}

/// Table row for an exported extension
#[derive(Debug, Serialize, Tabled)]
struct ExtensionRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&ExtensionMetaData> for ExtensionRow {
    fn from(ext: &ExtensionMetaData) -> Self {
        Self {
            kind: ext.kind.to_string(),
            name: ext.name.clone(),
            description: ext.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct InspectOutput {
    provider: String,
    plugin: PluginInfo,
    manifest: PluginManifest,
    extensions: Vec<ExtensionMetaData>,
}

/// Execute the inspect command
pub async fn execute(
    args: &InspectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let discovery = super::build_discovery(config).await?;
    let found = discovery.resolve(&args.path).await?;
    let doc = to_output(&found);

    match format {
        OutputFormat::Json => output::print_json(&doc),
        OutputFormat::Table => {
            output::print_kv("Plugin", &doc.plugin.name);
            output::print_kv("Provider", &doc.provider);
            output::print_kv("Source", &doc.plugin.source.display().to_string());
            output::print_kv("Canonical URL", &doc.plugin.canonical_url);
            output::print_kv("User", &doc.plugin.user);
            output::print_kv("Data dir", &doc.plugin.data_dir.display().to_string());
            output::print_kv(
                "Last modified",
                &doc.plugin
                    .last_modified
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string()),
            );

            output::print_heading("Manifest");
            for (key, value) in &doc.manifest.attributes {
                output::print_kv(key, value);
            }

            output::print_heading("Extensions");
            let rows: Vec<ExtensionRow> = doc.extensions.iter().map(ExtensionRow::from).collect();
            output::print_table(&rows, "No extensions exported.");
        }
    }

    Ok(())
}

fn to_output(found: &DiscoveredPlugin) -> InspectOutput {
    let scanner = found.plugin.scanner();
    InspectOutput {
        provider: found.provider.clone(),
        plugin: found.plugin.info(),
        manifest: scanner.manifest(),
        extensions: scanner.extensions(),
    }
}
