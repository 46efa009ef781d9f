//! Provider registry mapping recognized file extensions to providers.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use siteplug_core::error::AppError;

use crate::provider::ServerPluginProvider;

/// Metadata about a registered provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Name of the plugin contributing the provider.
    pub name: String,
    /// Extension the provider recognizes.
    pub extension: String,
}

/// Registry of plugin providers.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    /// Extension → provider.
    providers: RwLock<HashMap<String, Arc<dyn ServerPluginProvider>>>,
}

impl ProviderRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider.
    ///
    /// Fails when another provider already claims the same extension or
    /// uses the same provider name.
    pub async fn register(&self, provider: Arc<dyn ServerPluginProvider>) -> Result<(), AppError> {
        let name = provider.provider_plugin_name().to_string();
        let extension = provider.extension().to_string();

        if extension.is_empty() {
            return Err(AppError::validation(format!(
                "Provider '{name}' declares an empty extension"
            )));
        }

        let mut providers = self.providers.write().await;

        if let Some(existing) = providers.get(&extension) {
            return Err(AppError::conflict(format!(
                "Extension '{}' is already handled by provider '{}'",
                extension,
                existing.provider_plugin_name()
            )));
        }

        if providers.values().any(|p| p.provider_plugin_name() == name) {
            return Err(AppError::conflict(format!(
                "Provider '{name}' is already registered"
            )));
        }

        info!(provider = %name, extension = %extension, "Registering plugin provider");

        providers.insert(extension, provider);
        Ok(())
    }

    /// Unregisters every provider contributed under `name`.
    pub async fn unregister(&self, name: &str) -> Result<Vec<Arc<dyn ServerPluginProvider>>, AppError> {
        let mut providers = self.providers.write().await;

        let extensions: Vec<String> = providers
            .iter()
            .filter(|(_, p)| p.provider_plugin_name() == name)
            .map(|(ext, _)| ext.clone())
            .collect();

        if extensions.is_empty() {
            return Err(AppError::not_found(format!("Provider '{name}' not found")));
        }

        let removed = extensions
            .iter()
            .filter_map(|ext| providers.remove(ext))
            .collect();

        info!(provider = %name, "Plugin provider unregistered");

        Ok(removed)
    }

    /// Gets a provider by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn ServerPluginProvider>> {
        let providers = self.providers.read().await;
        providers
            .values()
            .find(|p| p.provider_plugin_name() == name)
            .cloned()
    }

    /// Finds the provider owning `path`.
    ///
    /// When several providers handle the path, the one with the longest
    /// extension wins.
    pub async fn provider_for(&self, path: &Path) -> Option<Arc<dyn ServerPluginProvider>> {
        let providers = self.providers.read().await;
        providers
            .values()
            .filter(|p| p.handles(path))
            .max_by_key(|p| p.extension().len())
            .cloned()
    }

    /// Lists registered providers, sorted by extension.
    pub async fn list(&self) -> Vec<ProviderInfo> {
        let providers = self.providers.read().await;
        let mut infos: Vec<ProviderInfo> = providers
            .iter()
            .map(|(ext, p)| ProviderInfo {
                name: p.provider_plugin_name().to_string(),
                extension: ext.clone(),
            })
            .collect();
        infos.sort_by(|a, b| a.extension.cmp(&b.extension));
        infos
    }

    /// Returns provider count.
    pub async fn count(&self) -> usize {
        let providers = self.providers.read().await;
        providers.len()
    }
}
