//! Content scanner for `*.ssh` plugins.

use siteplug_plugin::scanner::{
    ExtensionKind, ExtensionMetaData, PluginContentScanner, PluginManifest,
};

/// Name of the SSH command every `*.ssh` plugin exports.
pub const CAT_COMMAND: &str = "cat";

/// Describes the contents of a single `*.ssh` plugin.
#[derive(Debug, Clone)]
pub struct HelloSshContentScanner {
    plugin_name: String,
}

impl HelloSshContentScanner {
    /// Creates a scanner scoped to `plugin_name`.
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
        }
    }
}

impl PluginContentScanner for HelloSshContentScanner {
    fn manifest(&self) -> PluginManifest {
        PluginManifest::new()
            .with("Plugin-Name", &self.plugin_name)
            .with("Plugin-Type", "ssh")
    }

    fn extensions(&self) -> Vec<ExtensionMetaData> {
        vec![ExtensionMetaData {
            kind: ExtensionKind::SshCommand,
            name: CAT_COMMAND.to_string(),
            description: format!(
                "Print {}.ssh and the named files from the plugin data directory",
                self.plugin_name
            ),
        }]
    }
}
