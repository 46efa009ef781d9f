//! Shared test helpers for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use plugin_hello_ssh::HelloSshPluginProvider;
use siteplug_core::config::AppConfig;
use siteplug_plugin::discovery::PluginDiscovery;
use siteplug_plugin::registry::ProviderRegistry;

/// A throwaway review site on disk
pub struct TestSite {
    /// Keeps the site directory alive
    _temp: TempDir,
    /// Configuration rooted at the site directory
    pub config: AppConfig,
}

impl TestSite {
    /// Create an empty site with a plugins directory
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("Failed to create site dir");

        let mut config = AppConfig::default();
        config.site.root = temp.path().to_path_buf();
        config.site.canonical_web_url = "https://review.example.org/".to_string();

        std::fs::create_dir_all(config.site.plugins_path()).expect("Failed to create plugins dir");

        Self {
            _temp: temp,
            config,
        }
    }

    /// Write a file into the plugins directory
    pub fn write_plugin(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.config.site.plugins_path().join(file_name);
        std::fs::write(&path, content).expect("Failed to write plugin source");
        path
    }

    /// Registry holding the `.ssh` provider
    pub async fn registry(&self) -> Arc<ProviderRegistry> {
        let registry = Arc::new(ProviderRegistry::new());
        registry
            .register(Arc::new(HelloSshPluginProvider::new(
                &self.config.plugins.provider_name,
            )))
            .await
            .expect("Failed to register provider");
        registry
    }

    /// Discovery over this site using `registry`
    pub fn discovery(&self, registry: Arc<ProviderRegistry>) -> PluginDiscovery {
        PluginDiscovery::new(registry, self.config.site.clone(), &self.config.plugins)
    }
}
