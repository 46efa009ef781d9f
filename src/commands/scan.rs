//! Plugins directory scan command.

use serde::Serialize;
use tabled::Tabled;

use siteplug_core::config::AppConfig;
use siteplug_core::error::AppError;
use siteplug_plugin::discovery::{DiscoveredPlugin, ScanFailure, ScanReport};

use crate::output::{self, OutputFormat};

/// Table row for a materialized plugin
#[derive(Debug, Serialize, Tabled)]
pub struct PluginRow {
    /// Plugin name
    #[tabled(rename = "Plugin")]
    pub name: String,
    /// Provider that built the plugin
    #[tabled(rename = "Provider")]
    pub provider: String,
    /// Source file
    #[tabled(rename = "Source")]
    pub source: String,
    /// Exported SSH commands
    #[tabled(rename = "Commands")]
    pub commands: String,
    /// Data directory
    #[tabled(rename = "Data dir")]
    pub data_dir: String,
}

impl From<&DiscoveredPlugin> for PluginRow {
    fn from(found: &DiscoveredPlugin) -> Self {
        let info = found.plugin.info();
        Self {
            name: info.name,
            provider: found.provider.clone(),
            source: info.source.display().to_string(),
            commands: info.commands.join(", "),
            data_dir: info.data_dir.display().to_string(),
        }
    }
}

/// Table row for a rejected plugin source
#[derive(Debug, Serialize, Tabled)]
pub struct FailureRow {
    /// Source file
    #[tabled(rename = "Source")]
    pub path: String,
    /// Provider that claimed the file
    #[tabled(rename = "Provider")]
    pub provider: String,
    /// Error category
    #[tabled(rename = "Kind")]
    pub kind: String,
    /// Error message
    #[tabled(rename = "Error")]
    pub error: String,
}

impl From<&ScanFailure> for FailureRow {
    fn from(failure: &ScanFailure) -> Self {
        Self {
            path: failure.path.display().to_string(),
            provider: failure.provider.clone(),
            kind: failure.kind.to_string(),
            error: failure.error.clone(),
        }
    }
}

/// JSON document for a scan
#[derive(Debug, Serialize)]
struct ScanOutput<'a> {
    plugins_dir: String,
    loaded: Vec<PluginRow>,
    failed: &'a [ScanFailure],
    unclaimed: Vec<String>,
    ignored: Vec<String>,
}

/// Execute the scan command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let discovery = super::build_discovery(config).await?;
    let report = discovery.scan().await?;
    let plugins_dir = discovery.plugins_path().display().to_string();

    match format {
        OutputFormat::Json => output::print_json(&to_output(plugins_dir, &report)),
        OutputFormat::Table => print_tables(&plugins_dir, &report),
    }

    Ok(())
}

fn to_output(plugins_dir: String, report: &ScanReport) -> ScanOutput<'_> {
    ScanOutput {
        plugins_dir,
        loaded: report.loaded.iter().map(PluginRow::from).collect(),
        failed: &report.failed,
        unclaimed: display_all(&report.unclaimed),
        ignored: display_all(&report.ignored),
    }
}

fn print_tables(plugins_dir: &str, report: &ScanReport) {
    output::print_kv("Plugins directory", plugins_dir);

    output::print_heading("Loaded plugins");
    let rows: Vec<PluginRow> = report.loaded.iter().map(PluginRow::from).collect();
    output::print_table(&rows, "No plugins found.");

    if !report.failed.is_empty() {
        output::print_heading("Rejected sources");
        let rows: Vec<FailureRow> = report.failed.iter().map(FailureRow::from).collect();
        output::print_table(&rows, "");
    }

    for path in &report.unclaimed {
        output::print_warning(&format!("No provider handles '{}'", path.display()));
    }
}

fn display_all(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
