//! Integration tests for plugin discovery with the `.ssh` provider.

mod discovery_test;
mod helpers;
mod hello_ssh_test;
