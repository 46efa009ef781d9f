//! Plugin providers: strategies that turn source files into plugin handles.

use std::fmt;
use std::path::Path;

use crate::description::PluginDescription;
use crate::error::{InvalidPluginError, PluginNameError};
use crate::plugin::ServerPlugin;
use crate::snapshot::FileSnapshot;

/// A strategy registered with the host that recognizes one kind of
/// plugin source file and materializes plugins from it.
///
/// Implementations hold no mutable state; every method may be called
/// concurrently.
pub trait ServerPluginProvider: Send + Sync + fmt::Debug {
    /// Literal file-name suffix this provider recognizes (e.g. `".ssh"`).
    fn extension(&self) -> &str;

    /// Whether `path` is a source this provider owns.
    fn handles(&self, path: &Path) -> bool {
        file_name_ends_with(path, self.extension())
    }

    /// Plugin name derived from `path`.
    fn plugin_name(&self, path: &Path) -> Result<String, PluginNameError> {
        name_without_extension(path, self.extension())
    }

    /// Materializes the plugin defined by `path`.
    fn get(
        &self,
        path: &Path,
        snapshot: FileSnapshot,
        description: &PluginDescription,
    ) -> Result<ServerPlugin, InvalidPluginError>;

    /// Name of the plugin contributing this provider.
    fn provider_plugin_name(&self) -> &str;
}

/// Whether the final component of `path` ends with `extension`.
///
/// The match is a literal, case-sensitive suffix match on the UTF-8 file
/// name. Paths without a UTF-8 file name never match.
pub fn file_name_ends_with(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

/// File name of `path` with `extension` removed.
///
/// Fails instead of truncating when the file name does not end with
/// `extension` or when nothing would be left.
pub fn name_without_extension(path: &Path, extension: &str) -> Result<String, PluginNameError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| PluginNameError::MissingFileName {
            path: path.to_path_buf(),
        })?;

    let stem = file_name
        .strip_suffix(extension)
        .ok_or_else(|| PluginNameError::NotHandled {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })?;

    if stem.is_empty() {
        return Err(PluginNameError::EmptyName {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    Ok(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_suffix_match_is_literal() {
        assert!(file_name_ends_with(Path::new("hello.ssh"), ".ssh"));
        assert!(file_name_ends_with(Path::new("plugins/hello.ssh"), ".ssh"));
        assert!(!file_name_ends_with(Path::new("hello.sshx"), ".ssh"));
        assert!(!file_name_ends_with(Path::new("hello.SSH"), ".ssh"));
        assert!(!file_name_ends_with(Path::new("hello.ssh/inner.txt"), ".ssh"));
    }

    #[test]
    fn test_only_final_component_counts() {
        assert!(!file_name_ends_with(Path::new("dir.ssh/hello"), ".ssh"));
        assert!(!file_name_ends_with(Path::new("/"), ".ssh"));
    }

    #[test]
    fn test_name_strips_extension() {
        assert_eq!(
            name_without_extension(Path::new("plugins/hello.ssh"), ".ssh"),
            Ok("hello".to_string())
        );
        assert_eq!(
            name_without_extension(Path::new("a.b.ssh"), ".ssh"),
            Ok("a.b".to_string())
        );
    }

    #[test]
    fn test_name_fails_fast_on_mismatch() {
        assert_eq!(
            name_without_extension(Path::new("plugins/hello.txt"), ".ssh"),
            Err(PluginNameError::NotHandled {
                path: PathBuf::from("plugins/hello.txt"),
                extension: ".ssh".to_string(),
            })
        );
        assert!(matches!(
            name_without_extension(Path::new("sh"), ".ssh"),
            Err(PluginNameError::NotHandled { .. })
        ));
    }

    #[test]
    fn test_bare_extension_is_rejected() {
        assert!(matches!(
            name_without_extension(Path::new("plugins/.ssh"), ".ssh"),
            Err(PluginNameError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_missing_file_name() {
        assert!(matches!(
            name_without_extension(Path::new(".."), ".ssh"),
            Err(PluginNameError::MissingFileName { .. })
        ));
    }
}
