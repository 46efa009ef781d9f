//! Convenience result type alias for Siteplug.

use crate::error::AppError;

/// A specialized `Result` type for Siteplug operations.
pub type AppResult<T> = Result<T, AppError>;
