//! Content scanners enumerating what a loaded plugin exports to the host.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of extension a plugin contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionKind {
    /// A command exposed over the SSH daemon.
    SshCommand,
    /// An endpoint mounted under the plugin's canonical URL.
    HttpEndpoint,
    /// An event listener.
    Listener,
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SshCommand => write!(f, "ssh_command"),
            Self::HttpEndpoint => write!(f, "http_endpoint"),
            Self::Listener => write!(f, "listener"),
        }
    }
}

/// One exported extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionMetaData {
    /// Extension kind.
    pub kind: ExtensionKind,
    /// Name the extension is exported under (e.g. the SSH command name).
    pub name: String,
    /// Short human-readable description.
    pub description: String,
}

/// Key/value manifest describing a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Manifest attributes, ordered by key.
    pub attributes: BTreeMap<String, String>,
}

impl PluginManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Looks up an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Enumerates the contents of a loaded plugin.
pub trait PluginContentScanner: Send + Sync + fmt::Debug {
    /// Returns the plugin manifest.
    fn manifest(&self) -> PluginManifest;

    /// Returns the extensions the plugin exports.
    fn extensions(&self) -> Vec<ExtensionMetaData>;

    /// Returns the exported extensions of one kind.
    fn extensions_of(&self, kind: ExtensionKind) -> Vec<ExtensionMetaData> {
        self.extensions()
            .into_iter()
            .filter(|ext| ext.kind == kind)
            .collect()
    }
}

/// Scanner for plugins that export nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScanner;

impl PluginContentScanner for EmptyScanner {
    fn manifest(&self) -> PluginManifest {
        PluginManifest::new()
    }

    fn extensions(&self) -> Vec<ExtensionMetaData> {
        Vec::new()
    }
}
