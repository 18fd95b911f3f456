//! # docdesk-service
//!
//! Behaviour layer for DocDesk. [`table::TableState`] owns the document
//! table (search, sort, pagination, selection, inline rename) and applies
//! the pure [`collection`] and [`mutation`] operations to a record
//! collection that is replaced, never edited in place, on every command.
//!
//! Records come from a [`source::RecordSource`], fetched once per session.

pub mod collection;
pub mod context;
pub mod mutation;
pub mod popup;
pub mod seed;
pub mod source;
pub mod table;

pub use context::CommandContext;
pub use mutation::MutationError;
pub use popup::{FolderForm, PopupMode, UploadForm};
pub use source::{FileRecordSource, HttpRecordSource, RecordSource, SeedRecordSource};
pub use table::{RenameDraft, SelectionState, SortState, TableState};
