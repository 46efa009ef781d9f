//! Hello-SSH plugin provider for Siteplug.
//!
//! Dropping a `*.ssh` file (e.g. `hello.ssh`) into the site's plugins
//! directory defines a plugin named after the file without its extension
//! (`hello`). The plugin exports a single `cat` SSH command which prints
//! the `.ssh` file and any files named as arguments, resolved against
//! the plugin's data directory.

pub mod provider;
pub mod scanner;

pub use provider::{HelloSshPluginProvider, SSH_EXT};
pub use scanner::{CAT_COMMAND, HelloSshContentScanner};
