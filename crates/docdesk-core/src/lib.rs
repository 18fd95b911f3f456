//! # docdesk-core
//!
//! Core crate for DocDesk. Contains configuration schemas, the typed record
//! identifier, pagination/sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
