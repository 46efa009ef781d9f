//! Discovery with several competing providers.

use std::path::Path;
use std::sync::Arc;

use siteplug_core::error::ErrorKind;
use siteplug_plugin::description::PluginDescription;
use siteplug_plugin::error::InvalidPluginError;
use siteplug_plugin::plugin::ServerPlugin;
use siteplug_plugin::provider::ServerPluginProvider;
use siteplug_plugin::scanner::EmptyScanner;
use siteplug_plugin::snapshot::FileSnapshot;

use crate::helpers::TestSite;

/// Provider for `*.cmd` files exporting nothing
#[derive(Debug)]
struct CmdProvider;

impl ServerPluginProvider for CmdProvider {
    fn extension(&self) -> &str {
        ".cmd"
    }

    fn get(
        &self,
        path: &Path,
        snapshot: FileSnapshot,
        description: &PluginDescription,
    ) -> Result<ServerPlugin, InvalidPluginError> {
        let name = self.plugin_name(path)?;
        ServerPlugin::new(name, path, snapshot, Arc::new(EmptyScanner), description)
    }

    fn provider_plugin_name(&self) -> &str {
        "cmd-provider"
    }
}

#[tokio::test]
async fn test_each_file_goes_to_its_provider() {
    let site = TestSite::new();
    site.write_plugin("alpha.cmd", "");
    site.write_plugin("beta.ssh", "");

    let registry = site.registry().await;
    registry.register(Arc::new(CmdProvider)).await.expect("register");

    let report = site.discovery(registry).scan().await.expect("scan");

    let loaded: Vec<(&str, &str)> = report
        .loaded
        .iter()
        .map(|d| (d.plugin.name(), d.provider.as_str()))
        .collect();
    assert_eq!(
        loaded,
        vec![("alpha", "cmd-provider"), ("beta", "cookbook")]
    );
}

#[tokio::test]
async fn test_duplicate_names_conflict() {
    let site = TestSite::new();
    site.write_plugin("hello.cmd", "");
    let ssh = site.write_plugin("hello.ssh", "");

    let registry = site.registry().await;
    registry.register(Arc::new(CmdProvider)).await.expect("register");

    let report = site.discovery(registry).scan().await.expect("scan");

    assert_eq!(report.loaded.len(), 1);
    assert_eq!(report.loaded[0].provider, "cmd-provider");
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, ssh);
    assert_eq!(report.failed[0].kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_resolve_without_provider() {
    let site = TestSite::new();
    let source = site.write_plugin("hello.txt", "");

    let err = site
        .discovery(site.registry().await)
        .resolve(&source)
        .await
        .expect_err("unclaimed");
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_missing_plugins_directory() {
    let site = TestSite::new();
    std::fs::remove_dir(site.config.site.plugins_path()).expect("remove plugins dir");

    let report = site.discovery(site.registry().await).scan().await.expect("scan");
    assert!(report.loaded.is_empty());
    assert!(report.unclaimed.is_empty());
}
