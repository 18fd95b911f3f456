//! Convenience result type alias for DocDesk.

use crate::error::AppError;

/// A specialized `Result` type for DocDesk operations.
pub type AppResult<T> = Result<T, AppError>;
