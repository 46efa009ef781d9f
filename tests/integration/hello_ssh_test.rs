//! End-to-end behaviour of the `.ssh` provider through discovery.

use std::path::Path;

use plugin_hello_ssh::{CAT_COMMAND, SSH_EXT};
use siteplug_core::error::ErrorKind;
use siteplug_plugin::description::PluginDescription;
use siteplug_plugin::snapshot::FileSnapshot;

use crate::helpers::TestSite;

#[tokio::test]
async fn test_ssh_file_becomes_plugin() {
    let site = TestSite::new();
    let source = site.write_plugin("hello.ssh", "Hello from the plugins directory\n");

    let discovery = site.discovery(site.registry().await);
    let report = discovery.scan().await.expect("scan");

    assert_eq!(report.loaded.len(), 1);
    let found = &report.loaded[0];
    assert_eq!(found.provider, "cookbook");

    let plugin = &found.plugin;
    assert_eq!(plugin.name(), "hello");
    assert_eq!(plugin.src_path(), source.as_path());
    assert_eq!(
        plugin.canonical_url(),
        "https://review.example.org/plugins/hello/"
    );
    assert_eq!(plugin.user().plugin_name(), "hello");
    assert_eq!(plugin.data_dir(), site.config.site.plugin_data_path("hello"));
    assert_eq!(plugin.info().commands, vec![CAT_COMMAND.to_string()]);
    assert_eq!(
        plugin.scanner().manifest().get("Plugin-Name"),
        Some("hello")
    );
}

#[tokio::test]
async fn test_other_extensions_are_unclaimed() {
    let site = TestSite::new();
    let txt = site.write_plugin("hello.txt", "not a plugin");
    let sshx = site.write_plugin("hello.sshx", "not a plugin either");

    let report = site.discovery(site.registry().await).scan().await.expect("scan");

    assert!(report.loaded.is_empty());
    assert!(report.failed.is_empty());
    assert_eq!(report.unclaimed, vec![sshx, txt]);
}

#[tokio::test]
async fn test_bare_extension_is_rejected() {
    let site = TestSite::new();
    let source = site.write_plugin(SSH_EXT, "");

    let report = site.discovery(site.registry().await).scan().await.expect("scan");

    assert!(report.loaded.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, source);
    assert_eq!(report.failed[0].kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_disabled_source_is_ignored() {
    let site = TestSite::new();
    let source = site.write_plugin("hello.ssh.disabled", "off");

    let report = site.discovery(site.registry().await).scan().await.expect("scan");

    assert!(report.loaded.is_empty());
    assert_eq!(report.ignored, vec![source]);
}

#[tokio::test]
async fn test_changed_source_is_detected_and_rebuilt() {
    let site = TestSite::new();
    let source = site.write_plugin("hello.ssh", "v1");
    let discovery = site.discovery(site.registry().await);

    let first = discovery.resolve(&source).await.expect("first resolve");
    assert!(!first.plugin.is_modified());

    std::fs::write(&source, "version two").expect("rewrite");
    assert!(first.plugin.is_modified());

    let second = discovery.resolve(&source).await.expect("second resolve");
    assert_eq!(second.plugin.name(), first.plugin.name());
    assert_ne!(second.plugin.snapshot(), first.plugin.snapshot());
    assert!(!second.plugin.is_modified());

    std::fs::remove_file(&source).expect("remove");
    assert!(second.plugin.is_modified());
}

#[tokio::test]
async fn test_host_rejection_propagates_from_provider() {
    let site = TestSite::new();
    let registry = site.registry().await;
    let provider = registry
        .provider_for(Path::new("hello.ssh"))
        .await
        .expect("provider");

    let description = PluginDescription::for_plugin("not a url", "hello", "/srv/data/hello");
    let err = provider
        .get(Path::new("hello.ssh"), FileSnapshot::missing(), &description)
        .expect_err("host rejects the description");

    assert_eq!(err.plugin, "hello");
    assert!(err.reason.contains("canonical URL"));
}

#[tokio::test]
async fn test_host_rejection_is_reported_by_scan() {
    let mut site = TestSite::new();
    site.config.site.canonical_web_url = "not a url".to_string();
    site.write_plugin("hello.ssh", "hi");

    let report = site.discovery(site.registry().await).scan().await.expect("scan");

    assert!(report.loaded.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].kind, ErrorKind::Plugin);
    assert_eq!(report.failed[0].provider, "cookbook");
}

#[tokio::test]
async fn test_url_reserved_name_is_rejected_by_scan() {
    let site = TestSite::new();
    let source = site.write_plugin("a#b.ssh", "hi");

    let report = site.discovery(site.registry().await).scan().await.expect("scan");

    assert!(report.loaded.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, source);
    assert_eq!(report.failed[0].kind, ErrorKind::Plugin);
    assert!(report.failed[0].error.contains("illegal character"));
}
