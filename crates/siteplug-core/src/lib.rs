//! # siteplug-core
//!
//! Core crate for Siteplug. Contains the configuration schemas for a
//! review site and its plugin host, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Siteplug crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
