//! Core type definitions used across the DocDesk workspace.

pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::RecordId;
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortKey};
