//! Host-supplied context handed to providers when a plugin is materialized.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Execution identity a plugin acts as.
///
/// Each identity is bound to exactly one plugin name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginUser {
    plugin_name: String,
}

impl PluginUser {
    /// Creates the identity for `plugin_name`.
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
        }
    }

    /// Plugin this identity belongs to.
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }
}

impl fmt::Display for PluginUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plugin:{}", self.plugin_name)
    }
}

/// Context bundle the host passes to [`crate::ServerPluginProvider::get`].
///
/// Providers treat every field as opaque and forward it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PluginDescription {
    /// Canonical URL the plugin is served under.
    #[validate(url)]
    pub canonical_url: String,
    /// Identity the plugin executes as.
    pub user: PluginUser,
    /// Directory reserved for the plugin's data.
    pub data_dir: PathBuf,
}

impl PluginDescription {
    /// Creates a new description.
    pub fn new(canonical_url: impl Into<String>, user: PluginUser, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            canonical_url: canonical_url.into(),
            user,
            data_dir: data_dir.into(),
        }
    }

    /// Builds the description the host uses for `plugin_name`.
    ///
    /// The canonical URL is `<web_url>plugins/<name>/`.
    pub fn for_plugin(web_url: &str, plugin_name: &str, data_dir: impl Into<PathBuf>) -> Self {
        let base = if web_url.ends_with('/') {
            web_url.to_string()
        } else {
            format!("{web_url}/")
        };

        Self::new(
            format!("{base}plugins/{plugin_name}/"),
            PluginUser::new(plugin_name),
            data_dir,
        )
    }
}
