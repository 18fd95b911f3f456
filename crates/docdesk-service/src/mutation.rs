//! Create, upload, rename, and delete as pure collection transforms.
//!
//! Each operation takes the current collection and returns a new one, or a
//! [`MutationError`] with the input left untouched. Names are unique per
//! kind, compared without case.

use thiserror::Error;
use tracing::info;

use docdesk_core::error::AppError;
use docdesk_core::types::RecordId;
use docdesk_entity::{NewRecord, Record, RecordKind, SelectedFile};

use crate::context::CommandContext;

/// Why a mutation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// A record of the same kind already uses this name.
    #[error("A {kind} named '{name}' already exists.")]
    DuplicateName {
        /// Kind whose namespace collided.
        kind: RecordKind,
        /// The rejected name.
        name: String,
    },
    /// A required input was blank or empty.
    #[error("{what} must not be empty.")]
    EmptyInput {
        /// What was missing.
        what: &'static str,
    },
    /// No record has this id.
    #[error("Record {0} not found.")]
    NotFound(RecordId),
}

impl From<MutationError> for AppError {
    fn from(err: MutationError) -> Self {
        match err {
            MutationError::DuplicateName { .. } => AppError::conflict(err.to_string()),
            MutationError::EmptyInput { .. } => AppError::validation(err.to_string()),
            MutationError::NotFound(_) => AppError::not_found(err.to_string()),
        }
    }
}

/// Prepend a new folder. Returns its id and the new collection.
pub fn create_folder(
    records: &[Record],
    name: &str,
    ctx: &CommandContext,
) -> Result<(RecordId, Vec<Record>), MutationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MutationError::EmptyInput {
            what: "Folder name",
        });
    }
    if name_taken(records, RecordKind::Folder, name, None) {
        return Err(MutationError::DuplicateName {
            kind: RecordKind::Folder,
            name: name.to_string(),
        });
    }

    let id = first_free_id(records, ctx.base_id());
    let folder = NewRecord::folder(name, &ctx.author).build(id, ctx.today());
    info!(record_id = %id, name = %folder.name, "Folder created");

    let mut updated = Vec::with_capacity(records.len() + 1);
    updated.push(folder);
    updated.extend_from_slice(records);
    Ok((id, updated))
}

/// Prepend a file record for every selected file whose name is not
/// already used by a file.
///
/// Duplicates are skipped rather than inserted. The whole upload fails
/// only when every selected file is a duplicate. Returns the ids of the
/// inserted records, in selection order, and the new collection.
pub fn upload_files(
    records: &[Record],
    files: &[SelectedFile],
    ctx: &CommandContext,
) -> Result<(Vec<RecordId>, Vec<Record>), MutationError> {
    if files.is_empty() {
        return Err(MutationError::EmptyInput {
            what: "File selection",
        });
    }

    let mut accepted: Vec<&SelectedFile> = Vec::with_capacity(files.len());
    for file in files {
        let in_batch = accepted
            .iter()
            .any(|f| f.name.to_lowercase() == file.name.to_lowercase());
        if in_batch || name_taken(records, RecordKind::File, &file.name, None) {
            info!(name = %file.name, "Skipping duplicate upload");
            continue;
        }
        accepted.push(file);
    }

    if accepted.is_empty() {
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        return Err(MutationError::DuplicateName {
            kind: RecordKind::File,
            name: names.join(", "),
        });
    }

    let base = first_free_id(records, ctx.base_id());
    let mut updated = Vec::with_capacity(records.len() + accepted.len());
    let mut ids = Vec::with_capacity(accepted.len());
    for (offset, file) in (0_i64..).zip(&accepted) {
        let id = RecordId::new(base.get().saturating_add(offset));
        let record = file.to_new_record(&ctx.author).build(id, ctx.today());
        info!(record_id = %id, name = %record.name, size = %record.size, "File uploaded");
        updated.push(record);
        ids.push(id);
    }
    updated.extend_from_slice(records);
    Ok((ids, updated))
}

/// Replace the name of record `id`.
///
/// The new name is trimmed. Blank names and names taken by another record
/// of the same kind are rejected.
pub fn rename_record(
    records: &[Record],
    id: RecordId,
    new_name: &str,
) -> Result<Vec<Record>, MutationError> {
    let target = records
        .iter()
        .find(|r| r.id == id)
        .ok_or(MutationError::NotFound(id))?;

    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(MutationError::EmptyInput { what: "Name" });
    }
    if name_taken(records, target.kind, new_name, Some(id)) {
        return Err(MutationError::DuplicateName {
            kind: target.kind,
            name: new_name.to_string(),
        });
    }

    info!(record_id = %id, old_name = %target.name, new_name = %new_name, "Record renamed");
    Ok(records
        .iter()
        .map(|r| if r.id == id { r.renamed(new_name) } else { r.clone() })
        .collect())
}

/// Remove record `id`. Removing an absent id is a no-op.
pub fn delete_record(records: &[Record], id: RecordId) -> Vec<Record> {
    records.iter().filter(|r| r.id != id).cloned().collect()
}

fn name_taken(records: &[Record], kind: RecordKind, name: &str, except: Option<RecordId>) -> bool {
    records
        .iter()
        .filter(|r| Some(r.id) != except)
        .any(|r| r.has_name(kind, name))
}

/// The clock-derived id, bumped past every existing id if needed.
fn first_free_id(records: &[Record], candidate: RecordId) -> RecordId {
    match records.iter().map(|r| r.id).max() {
        Some(max) if max >= candidate => max.next(),
        _ => candidate,
    }
}
