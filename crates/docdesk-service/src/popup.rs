//! The create-folder / upload-files dialog.

use serde::{Deserialize, Serialize};
use tracing::debug;

use docdesk_core::types::RecordId;
use docdesk_entity::SelectedFile;

use crate::context::CommandContext;
use crate::mutation::MutationError;
use crate::table::TableState;

/// Folder name form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderForm {
    /// Text typed into the "Folder name" field.
    pub name: String,
}

/// File picker form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadForm {
    /// Files chosen so far.
    pub files: Vec<SelectedFile>,
}

/// Which dialog is open, with its form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupMode {
    /// No dialog.
    #[default]
    Closed,
    /// "Create New Folder".
    CreateFolder(FolderForm),
    /// "Upload Files".
    UploadFiles(UploadForm),
}

impl PopupMode {
    /// An empty create-folder dialog.
    pub fn create_folder() -> Self {
        Self::CreateFolder(FolderForm::default())
    }

    /// An empty upload dialog.
    pub fn upload_files() -> Self {
        Self::UploadFiles(UploadForm::default())
    }

    /// Whether a dialog is showing.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::CreateFolder(_) => "Create New Folder",
            Self::UploadFiles(_) => "Upload Files",
        }
    }

    /// Label of the submit button.
    pub fn submit_text(&self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::CreateFolder(_) => "Create",
            Self::UploadFiles(_) => "Upload",
        }
    }

    /// Submit is disabled for a blank folder name or an empty file list.
    pub fn is_submit_disabled(&self) -> bool {
        match self {
            Self::Closed => true,
            Self::CreateFolder(form) => form.name.trim().is_empty(),
            Self::UploadFiles(form) => form.files.is_empty(),
        }
    }

    /// Update the folder name. Returns `false` if this is not the folder
    /// dialog.
    pub fn set_folder_name(&mut self, name: impl Into<String>) -> bool {
        match self {
            Self::CreateFolder(form) => {
                form.name = name.into();
                true
            }
            _ => false,
        }
    }

    /// Replace the picked files. Returns `false` if this is not the upload
    /// dialog.
    pub fn set_files(&mut self, files: Vec<SelectedFile>) -> bool {
        match self {
            Self::UploadFiles(form) => {
                form.files = files;
                true
            }
            _ => false,
        }
    }

    /// Close the dialog, discarding its form.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Run the dialog's command against `table`.
    ///
    /// On success the dialog closes and the new ids are returned. On
    /// rejection it stays open with its form intact. Submitting a closed
    /// dialog does nothing.
    pub fn submit(
        &mut self,
        table: &mut TableState,
        ctx: &CommandContext,
    ) -> Result<Vec<RecordId>, MutationError> {
        let created = match self {
            Self::Closed => return Ok(Vec::new()),
            Self::CreateFolder(form) => vec![table.create_folder(&form.name, ctx)?],
            Self::UploadFiles(form) => table.upload_files(&form.files, ctx)?,
        };
        debug!(created = created.len(), "Dialog submitted");
        self.close();
        Ok(created)
    }
}
