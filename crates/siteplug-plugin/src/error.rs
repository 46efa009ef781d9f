//! Error types raised while naming and materializing plugins.
//!
//! Both types map into `siteplug_core::error::AppError` for callers that
//! only deal in the unified error.

use std::path::PathBuf;

use siteplug_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// A plugin name could not be derived from a source path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginNameError {
    /// The path has no final component, or it is not valid UTF-8.
    #[error("Path has no usable file name: {path}")]
    MissingFileName {
        /// The offending path.
        path: PathBuf,
    },

    /// The file name does not end with the provider's extension.
    #[error("File '{path}' does not end with '{extension}'")]
    NotHandled {
        /// The offending path.
        path: PathBuf,
        /// Extension the provider recognizes.
        extension: String,
    },

    /// Stripping the extension leaves nothing.
    #[error("File '{path}' yields an empty plugin name once '{extension}' is removed")]
    EmptyName {
        /// The offending path.
        path: PathBuf,
        /// Extension the provider recognizes.
        extension: String,
    },
}

/// The host refused to build a plugin handle from the supplied inputs.
#[derive(Debug, Error)]
#[error("Invalid plugin '{plugin}': {reason}")]
pub struct InvalidPluginError {
    /// Plugin name, or the source path when no name could be derived.
    pub plugin: String,
    /// Why the plugin was rejected.
    pub reason: String,
    /// Underlying cause, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl InvalidPluginError {
    /// Creates a rejection without an underlying cause.
    pub fn new(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Creates a rejection carrying its cause.
    pub fn with_source(
        plugin: impl Into<String>,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<PluginNameError> for InvalidPluginError {
    fn from(err: PluginNameError) -> Self {
        let plugin = match &err {
            PluginNameError::MissingFileName { path }
            | PluginNameError::NotHandled { path, .. }
            | PluginNameError::EmptyName { path, .. } => path.display().to_string(),
        };
        Self::with_source(plugin, err.to_string(), err)
    }
}

impl From<PluginNameError> for AppError {
    fn from(err: PluginNameError) -> Self {
        AppError::with_source(ErrorKind::Validation, err.to_string(), err)
    }
}

impl From<InvalidPluginError> for AppError {
    fn from(err: InvalidPluginError) -> Self {
        AppError::with_source(ErrorKind::Plugin, err.to_string(), err)
    }
}
