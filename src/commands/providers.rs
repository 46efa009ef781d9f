//! Provider listing command.

use serde::Serialize;
use tabled::Tabled;

use siteplug_core::config::AppConfig;
use siteplug_core::error::AppError;
use siteplug_plugin::registry::ProviderInfo;

use crate::output::{self, OutputFormat};

/// Table row for a registered provider
#[derive(Debug, Serialize, Tabled)]
pub struct ProviderRow {
    /// Provider name
    #[tabled(rename = "Provider")]
    pub name: String,
    /// Recognized extension
    #[tabled(rename = "Extension")]
    pub extension: String,
}

impl From<ProviderInfo> for ProviderRow {
    fn from(info: ProviderInfo) -> Self {
        Self {
            name: info.name,
            extension: info.extension,
        }
    }
}

/// Execute the providers command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let registry = super::build_registry(config).await?;
    let rows: Vec<ProviderRow> = registry
        .list()
        .await
        .into_iter()
        .map(ProviderRow::from)
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
