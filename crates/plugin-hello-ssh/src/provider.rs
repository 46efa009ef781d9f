//! `*.ssh` plugin provider.

use std::path::Path;
use std::sync::Arc;

use siteplug_plugin::description::PluginDescription;
use siteplug_plugin::error::InvalidPluginError;
use siteplug_plugin::plugin::ServerPlugin;
use siteplug_plugin::provider::ServerPluginProvider;
use siteplug_plugin::snapshot::FileSnapshot;

use crate::scanner::HelloSshContentScanner;

/// Extension recognized by [`HelloSshPluginProvider`].
pub const SSH_EXT: &str = ".ssh";

/// Provider of plugins defined by `*.ssh` files.
#[derive(Debug, Clone)]
pub struct HelloSshPluginProvider {
    /// Name of the plugin contributing this provider.
    plugin_name: String,
}

impl HelloSshPluginProvider {
    /// Creates the provider on behalf of the plugin named `plugin_name`.
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
        }
    }
}

impl ServerPluginProvider for HelloSshPluginProvider {
    fn extension(&self) -> &str {
        SSH_EXT
    }

    fn get(
        &self,
        path: &Path,
        snapshot: FileSnapshot,
        description: &PluginDescription,
    ) -> Result<ServerPlugin, InvalidPluginError> {
        let name = self.plugin_name(path)?;
        tracing::debug!(plugin = %name, path = %path.display(), "Building .ssh plugin");

        let scanner = Arc::new(HelloSshContentScanner::new(&name));
        ServerPlugin::new(name, path, snapshot, scanner, description)
    }

    fn provider_plugin_name(&self) -> &str {
        &self.plugin_name
    }
}
