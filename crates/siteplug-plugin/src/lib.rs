//! # siteplug-plugin
//!
//! Plugin host framework for Siteplug. Provides:
//!
//! - The [`ServerPluginProvider`] trait implemented by extension-based providers
//! - The [`ServerPlugin`] handle and its checked constructor
//! - File snapshots used to detect changed plugin sources
//! - Content scanners describing what a plugin exports
//! - A [`ProviderRegistry`] keyed by file extension
//! - [`PluginDiscovery`] over a site's plugins directory

pub mod description;
pub mod discovery;
pub mod error;
pub mod plugin;
pub mod provider;
pub mod registry;
pub mod scanner;
pub mod snapshot;

pub use description::{PluginDescription, PluginUser};
pub use discovery::{DiscoveredPlugin, PluginDiscovery, ScanFailure, ScanReport};
pub use error::{InvalidPluginError, PluginNameError};
pub use plugin::{PluginInfo, ServerPlugin};
pub use provider::ServerPluginProvider;
pub use registry::{ProviderInfo, ProviderRegistry};
pub use scanner::{
    EmptyScanner, ExtensionKind, ExtensionMetaData, PluginContentScanner, PluginManifest,
};
pub use snapshot::FileSnapshot;
