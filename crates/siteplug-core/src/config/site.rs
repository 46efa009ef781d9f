//! Review site layout configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Layout of a review site on disk and the URL it is served under.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SiteConfig {
    /// Site root directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Public base URL of the review server.
    #[serde(default = "default_canonical_web_url")]
    #[validate(url)]
    pub canonical_web_url: String,
    /// Directory holding plugin source files, relative to `root` unless absolute.
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,
    /// Directory holding per-plugin data directories, relative to `root` unless absolute.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl SiteConfig {
    /// Resolved plugins directory.
    pub fn plugins_path(&self) -> PathBuf {
        self.root.join(&self.plugins_dir)
    }

    /// Resolved data root.
    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_dir)
    }

    /// Data directory assigned to the plugin named `plugin_name`.
    pub fn plugin_data_path(&self, plugin_name: &str) -> PathBuf {
        self.data_path().join(plugin_name)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            canonical_web_url: default_canonical_web_url(),
            plugins_dir: default_plugins_dir(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_canonical_web_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from("plugins")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
