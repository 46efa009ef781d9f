//! Plugin handles: the host's runtime representation of a materialized plugin.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::description::{PluginDescription, PluginUser};
use crate::error::InvalidPluginError;
use crate::scanner::{ExtensionKind, PluginContentScanner};
use crate::snapshot::FileSnapshot;

/// Serializable summary of a plugin handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin name.
    pub name: String,
    /// Source file the plugin was built from.
    pub source: PathBuf,
    /// Canonical URL.
    pub canonical_url: String,
    /// Execution identity.
    pub user: String,
    /// Data directory.
    pub data_dir: PathBuf,
    /// Source modification time recorded in the snapshot.
    pub last_modified: Option<DateTime<Utc>>,
    /// Exported SSH command names.
    pub commands: Vec<String>,
}

/// A materialized plugin.
///
/// Handles are immutable. When the source file changes the host builds a
/// new handle and drops the old one.
#[derive(Debug, Clone)]
pub struct ServerPlugin {
    name: String,
    canonical_url: String,
    user: PluginUser,
    src_path: PathBuf,
    snapshot: FileSnapshot,
    scanner: Arc<dyn PluginContentScanner>,
    data_dir: PathBuf,
}

impl ServerPlugin {
    /// Builds a plugin handle.
    ///
    /// Construction is atomic: either every input is accepted or the
    /// whole handle is rejected with an [`InvalidPluginError`].
    pub fn new(
        name: impl Into<String>,
        src_path: impl Into<PathBuf>,
        snapshot: FileSnapshot,
        scanner: Arc<dyn PluginContentScanner>,
        description: &PluginDescription,
    ) -> Result<Self, InvalidPluginError> {
        let name = name.into();

        check_name(&name)?;

        description.validate().map_err(|e| {
            InvalidPluginError::with_source(
                &name,
                format!("invalid canonical URL '{}'", description.canonical_url),
                e,
            )
        })?;

        if description.user.plugin_name() != name {
            return Err(InvalidPluginError::new(
                &name,
                format!("execution identity '{}' belongs to another plugin", description.user),
            ));
        }

        if description.data_dir.as_os_str().is_empty() {
            return Err(InvalidPluginError::new(&name, "data directory is empty"));
        }

        Ok(Self {
            name,
            canonical_url: description.canonical_url.clone(),
            user: description.user.clone(),
            src_path: src_path.into(),
            snapshot,
            scanner,
            data_dir: description.data_dir.clone(),
        })
    }

    /// Plugin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical URL.
    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }

    /// Execution identity.
    pub fn user(&self) -> &PluginUser {
        &self.user
    }

    /// Source file.
    pub fn src_path(&self) -> &Path {
        &self.src_path
    }

    /// Snapshot of the source file taken when the handle was built.
    pub fn snapshot(&self) -> &FileSnapshot {
        &self.snapshot
    }

    /// Content scanner.
    pub fn scanner(&self) -> &Arc<dyn PluginContentScanner> {
        &self.scanner
    }

    /// Data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether the source file changed since the handle was built.
    pub fn is_modified(&self) -> bool {
        self.snapshot.is_modified(&self.src_path)
    }

    /// Returns a serializable summary.
    pub fn info(&self) -> PluginInfo {
        PluginInfo {
            name: self.name.clone(),
            source: self.src_path.clone(),
            canonical_url: self.canonical_url.clone(),
            user: self.user.to_string(),
            data_dir: self.data_dir.clone(),
            last_modified: self.snapshot.last_modified,
            commands: self
                .scanner
                .extensions_of(ExtensionKind::SshCommand)
                .into_iter()
                .map(|ext| ext.name)
                .collect(),
        }
    }
}

/// Characters that would change the meaning of the canonical URL path.
const URL_RESERVED: &[char] = &['/', '?', '#', '%', '[', ']', '@', ':'];

fn check_name(name: &str) -> Result<(), InvalidPluginError> {
    if name.is_empty() {
        return Err(InvalidPluginError::new(name, "plugin name is empty"));
    }
    if name == "." || name == ".." {
        return Err(InvalidPluginError::new(name, "plugin name is reserved"));
    }
    if let Some(c) = name.chars().find(|c| {
        URL_RESERVED.contains(c) || *c == '\\' || c.is_whitespace() || c.is_control()
    }) {
        return Err(InvalidPluginError::new(
            name,
            format!("plugin name contains illegal character {c:?}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::EmptyScanner;

    fn description(name: &str) -> PluginDescription {
        PluginDescription::for_plugin("http://localhost:8080/", name, format!("/srv/data/{name}"))
    }

    fn build(name: &str, description: &PluginDescription) -> Result<ServerPlugin, InvalidPluginError> {
        ServerPlugin::new(
            name,
            format!("/srv/plugins/{name}.ssh"),
            FileSnapshot::missing(),
            Arc::new(EmptyScanner),
            description,
        )
    }

    #[test]
    fn test_new_copies_description() {
        let plugin = build("hello", &description("hello")).expect("valid");
        assert_eq!(plugin.name(), "hello");
        assert_eq!(plugin.canonical_url(), "http://localhost:8080/plugins/hello/");
        assert_eq!(plugin.user().plugin_name(), "hello");
        assert_eq!(plugin.data_dir(), Path::new("/srv/data/hello"));
        assert_eq!(plugin.src_path(), Path::new("/srv/plugins/hello.ssh"));
    }

    #[test]
    fn test_rejects_bad_names() {
        for name in ["", "..", "a/b", "hello world", "tab\there", "a\\b"] {
            let err = build(name, &description(name)).expect_err(name);
            assert_eq!(err.plugin, name);
        }
    }

    #[test]
    fn test_rejects_url_reserved_characters() {
        for name in ["a#b", "a?b", "a%20b", "a:b", "a@b", "a[0]"] {
            let err = build(name, &description(name)).expect_err(name);
            assert!(err.reason.contains("illegal character"), "{name}: {}", err.reason);
        }
        assert!(build("hello-world_2.v1", &description("hello-world_2.v1")).is_ok());
    }

    #[test]
    fn test_rejects_invalid_url() {
        let mut desc = description("hello");
        desc.canonical_url = "not a url".to_string();
        let err = build("hello", &desc).expect_err("bad url");
        assert!(err.reason.contains("canonical URL"));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_rejects_foreign_user() {
        let mut desc = description("hello");
        desc.user = PluginUser::new("other");
        let err = build("hello", &desc).expect_err("foreign user");
        assert!(err.reason.contains("plugin:other"));
    }

    #[test]
    fn test_rejects_empty_data_dir() {
        let mut desc = description("hello");
        desc.data_dir = PathBuf::new();
        assert!(build("hello", &desc).is_err());
    }

    #[test]
    fn test_info_summary() {
        let plugin = build("hello", &description("hello")).expect("valid");
        let info = plugin.info();
        assert_eq!(info.name, "hello");
        assert_eq!(info.user, "plugin:hello");
        assert!(info.commands.is_empty());
        assert!(info.last_modified.is_none());
    }
}
