//! Plugin host configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Plugin host configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PluginConfig {
    /// Name of the plugin that contributes the extension-based providers.
    #[serde(default = "default_provider_name")]
    #[validate(length(min = 1, max = 64))]
    pub provider_name: String,
    /// Whether `*.disabled` files in the plugins directory are ignored.
    #[serde(default = "default_true")]
    pub skip_disabled: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            provider_name: default_provider_name(),
            skip_disabled: default_true(),
        }
    }
}

fn default_provider_name() -> String {
    "cookbook".to_string()
}

fn default_true() -> bool {
    true
}
