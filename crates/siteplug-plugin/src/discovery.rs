//! Plugin discovery. Resolves the files in a site's plugins directory
//! into plugin handles through the registered providers.
//!
//! Discovery only materializes handles. Starting, stopping and reloading
//! plugins stays with the caller.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use siteplug_core::config::{PluginConfig, SiteConfig};
use siteplug_core::error::{AppError, ErrorKind};
use siteplug_core::result::AppResult;

use crate::description::PluginDescription;
use crate::plugin::ServerPlugin;
use crate::provider::ServerPluginProvider;
use crate::registry::ProviderRegistry;
use crate::snapshot::FileSnapshot;

/// Suffix marking a plugin source the host must not load.
pub const DISABLED_SUFFIX: &str = ".disabled";

/// A plugin handle together with the provider that built it.
#[derive(Debug, Clone)]
pub struct DiscoveredPlugin {
    /// Provider name.
    pub provider: String,
    /// The materialized plugin.
    pub plugin: ServerPlugin,
}

/// A source file that a provider claimed but could not materialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFailure {
    /// Source path.
    pub path: PathBuf,
    /// Provider that claimed the file.
    pub provider: String,
    /// Error category.
    pub kind: ErrorKind,
    /// Error message.
    pub error: String,
}

/// Outcome of a directory scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Plugins materialized successfully, in file-name order.
    pub loaded: Vec<DiscoveredPlugin>,
    /// Claimed files that were rejected.
    pub failed: Vec<ScanFailure>,
    /// Files no provider claims.
    pub unclaimed: Vec<PathBuf>,
    /// Directories and disabled files.
    pub ignored: Vec<PathBuf>,
}

impl ScanReport {
    /// Looks up a loaded plugin by name.
    pub fn plugin(&self, name: &str) -> Option<&ServerPlugin> {
        self.loaded
            .iter()
            .map(|d| &d.plugin)
            .find(|p| p.name() == name)
    }
}

/// Resolves plugin source files through a [`ProviderRegistry`].
#[derive(Debug, Clone)]
pub struct PluginDiscovery {
    registry: Arc<ProviderRegistry>,
    site: SiteConfig,
    skip_disabled: bool,
}

impl PluginDiscovery {
    /// Creates a discovery over the site's plugins directory.
    pub fn new(registry: Arc<ProviderRegistry>, site: SiteConfig, plugins: &PluginConfig) -> Self {
        Self {
            registry,
            site,
            skip_disabled: plugins.skip_disabled,
        }
    }

    /// Directory being scanned.
    pub fn plugins_path(&self) -> PathBuf {
        self.site.plugins_path()
    }

    /// Scans the plugins directory once.
    ///
    /// A missing directory yields an empty report. A file whose derived
    /// name is already taken by an earlier file is reported as failed.
    pub async fn scan(&self) -> AppResult<ScanReport> {
        let dir = self.plugins_path();
        let mut report = ScanReport::default();

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %dir.display(), "Plugins directory does not exist");
                return Ok(report);
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read plugins directory '{}': {e}", dir.display()),
                    e,
                ));
            }
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }
        paths.sort();

        let mut names = HashSet::new();

        for path in paths {
            let metadata = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cannot stat plugins directory entry");
                    report.ignored.push(path);
                    continue;
                }
            };

            if metadata.is_dir() || (self.skip_disabled && is_disabled(&path)) {
                debug!(path = %path.display(), "Ignoring plugins directory entry");
                report.ignored.push(path);
                continue;
            }

            let Some(provider) = self.registry.provider_for(&path).await else {
                debug!(path = %path.display(), "No provider handles file");
                report.unclaimed.push(path);
                continue;
            };

            let snapshot = FileSnapshot::from_metadata(&metadata);
            match self.materialize(provider.as_ref(), &path, snapshot) {
                Ok(plugin) => {
                    if !names.insert(plugin.name().to_string()) {
                        warn!(
                            plugin = %plugin.name(),
                            path = %path.display(),
                            "Plugin name already loaded from another file"
                        );
                        report.failed.push(ScanFailure {
                            path,
                            provider: provider.provider_plugin_name().to_string(),
                            kind: ErrorKind::Conflict,
                            error: format!("Plugin '{}' is already loaded", plugin.name()),
                        });
                        continue;
                    }

                    info!(
                        plugin = %plugin.name(),
                        provider = %provider.provider_plugin_name(),
                        path = %path.display(),
                        "Plugin materialized"
                    );
                    report.loaded.push(DiscoveredPlugin {
                        provider: provider.provider_plugin_name().to_string(),
                        plugin,
                    });
                }
                Err(e) => {
                    warn!(
                        provider = %provider.provider_plugin_name(),
                        path = %path.display(),
                        error = %e,
                        "Plugin rejected"
                    );
                    report.failed.push(ScanFailure {
                        path,
                        provider: provider.provider_plugin_name().to_string(),
                        kind: e.kind,
                        error: e.message,
                    });
                }
            }
        }

        info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            unclaimed = report.unclaimed.len(),
            "Plugin scan complete"
        );

        Ok(report)
    }

    /// Materializes a single source file.
    pub async fn resolve(&self, path: &Path) -> AppResult<DiscoveredPlugin> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::NotFound,
                format!("Cannot read plugin source '{}': {e}", path.display()),
                e,
            )
        })?;

        if metadata.is_dir() {
            return Err(AppError::validation(format!(
                "'{}' is a directory",
                path.display()
            )));
        }

        let provider = self.registry.provider_for(path).await.ok_or_else(|| {
            AppError::not_found(format!("No provider handles '{}'", path.display()))
        })?;

        let plugin =
            self.materialize(provider.as_ref(), path, FileSnapshot::from_metadata(&metadata))?;

        Ok(DiscoveredPlugin {
            provider: provider.provider_plugin_name().to_string(),
            plugin,
        })
    }

    fn materialize(
        &self,
        provider: &dyn ServerPluginProvider,
        path: &Path,
        snapshot: FileSnapshot,
    ) -> AppResult<ServerPlugin> {
        let name = provider.plugin_name(path)?;
        let description = PluginDescription::for_plugin(
            &self.site.canonical_web_url,
            &name,
            self.site.plugin_data_path(&name),
        );
        Ok(provider.get(path, snapshot, &description)?)
    }
}

fn is_disabled(path: &Path) -> bool {
    crate::provider::file_name_ends_with(path, DISABLED_SUFFIX)
}
