//! The document table state machine.
//!
//! [`TableState`] owns the full record collection together with the search
//! term, sort, page position, selection, and the single inline-rename
//! draft. The visible and page views are derived on every read and never
//! stored, so they cannot drift from the collection.
//!
//! Selection and editing are keyed by [`RecordId`]. They survive re-sorting
//! and paging, and are cleared whenever the collection is replaced.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use docdesk_core::config::table::TableConfig;
use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::types::pagination::{PageRequest, PageResponse, total_pages};
use docdesk_core::types::{RecordId, SortDirection, SortKey};
use docdesk_entity::{Record, SelectedFile};

use crate::collection;
use crate::context::CommandContext;
use crate::mutation::{self, MutationError};

/// Active sort key plus a remembered direction for each key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Key the table is currently sorted by.
    pub active: SortKey,
    /// Last direction used for [`SortKey::Name`].
    pub name: SortDirection,
    /// Last direction used for [`SortKey::Date`].
    pub date: SortDirection,
}

impl SortState {
    /// The direction remembered for `key`.
    pub fn direction_for(&self, key: SortKey) -> SortDirection {
        match key {
            SortKey::Name => self.name,
            SortKey::Date => self.date,
        }
    }

    /// The direction of the active key.
    pub fn direction(&self) -> SortDirection {
        self.direction_for(self.active)
    }

    /// Flip `key`'s direction and make it active.
    pub fn toggle(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self.name = self.name.toggled(),
            SortKey::Date => self.date = self.date.toggled(),
        }
        self.active = key;
    }
}

impl Default for SortState {
    /// Newest first; the first name toggle sorts A to Z.
    fn default() -> Self {
        Self {
            active: SortKey::Date,
            name: SortDirection::Desc,
            date: SortDirection::Desc,
        }
    }
}

/// The record being renamed and its uncommitted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameDraft {
    /// Record in edit mode.
    pub id: RecordId,
    /// Current contents of the rename input.
    pub buffer: String,
}

/// Header checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// Nothing selected.
    None,
    /// Some, but not all, visible records selected.
    Partial,
    /// Every visible record selected.
    All,
}

/// State of the document table.
#[derive(Debug, Clone)]
pub struct TableState {
    records: Arc<[Record]>,
    search_term: String,
    sort: SortState,
    page: usize,
    page_size: usize,
    selected: BTreeSet<RecordId>,
    editing: Option<RenameDraft>,
    loading: bool,
}

impl TableState {
    /// An empty table waiting for its first load.
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Arc::from(Vec::new()),
            search_term: String::new(),
            sort: SortState::default(),
            page: 0,
            page_size: page_size.max(1),
            selected: BTreeSet::new(),
            editing: None,
            loading: true,
        }
    }

    /// An empty table using the configured page size.
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.default_page_size)
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Shared snapshot of the full collection.
    pub fn records(&self) -> Arc<[Record]> {
        Arc::clone(&self.records)
    }

    /// Look up a record in the full collection.
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether the initial load has not completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current search term as typed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current sort.
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Current page (0-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.selected.iter().copied()
    }

    /// Number of selected records.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// The active rename draft, if any.
    pub fn editing(&self) -> Option<&RenameDraft> {
        self.editing.as_ref()
    }

    // ── Derived views ────────────────────────────────────────────

    /// The search-filtered, sorted records.
    pub fn visible_records(&self) -> Vec<Record> {
        let filtered = collection::search(&self.records, &self.search_term);
        collection::sort_by(&filtered, self.sort.active, self.sort.direction())
    }

    /// The current page position.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// The visible records on the current page.
    pub fn page_records(&self) -> Vec<Record> {
        self.page_request().slice(&self.visible_records()).to_vec()
    }

    /// The current page with pagination metadata.
    pub fn page_response(&self) -> PageResponse<Record> {
        let visible = self.visible_records();
        let items = self.page_request().slice(&visible).to_vec();
        PageResponse::new(items, self.page, self.page_size, visible.len())
    }

    /// Number of pages over the visible records.
    pub fn total_pages(&self) -> usize {
        total_pages(self.visible_records().len(), self.page_size)
    }

    /// Every visible record is selected.
    pub fn all_selected(&self) -> bool {
        !self.loading
            && !self.selected.is_empty()
            && self.selected.len() == self.visible_records().len()
    }

    /// Some, but not all, visible records are selected.
    pub fn some_selected(&self) -> bool {
        !self.loading && !self.selected.is_empty() && !self.all_selected()
    }

    /// Header checkbox state.
    pub fn selection_state(&self) -> SelectionState {
        if self.all_selected() {
            SelectionState::All
        } else if self.some_selected() {
            SelectionState::Partial
        } else {
            SelectionState::None
        }
    }

    // ── Collection replacement ───────────────────────────────────

    /// Install the initially fetched collection and leave the loading state.
    pub fn load(&mut self, records: Vec<Record>) {
        self.loading = false;
        self.replace_records(records);
    }

    /// Swap in a new collection.
    ///
    /// Clears the selection and edit mode and returns to the first page.
    /// The search term and the last chosen sort are kept.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                warn!(record_id = %record.id, "Duplicate record id in collection");
            }
        }
        debug!(count = records.len(), "Records replaced");
        self.records = Arc::from(records);
        self.selected.clear();
        self.editing = None;
        self.page = 0;
    }

    // ── Search, sort, paging ─────────────────────────────────────

    /// Change the search term.
    ///
    /// The page is pulled back if the visible list shrank past it, and
    /// selected records that are no longer visible are deselected.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        let visible = self.visible_records();
        let visible_ids: HashSet<RecordId> = visible.iter().map(|r| r.id).collect();
        self.selected.retain(|id| visible_ids.contains(id));
        self.page = self.page_request().clamped(visible.len()).page;
        debug!(term = %self.search_term, visible = visible.len(), "Search term set");
    }

    /// Flip the direction remembered for `key` and sort by it.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        debug!(key = %key, direction = %self.sort.direction(), "Sort toggled");
    }

    /// Move to page `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages() - 1;
        self.page = page.min(last);
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> AppResult<()> {
        if page_size == 0 {
            return Err(AppError::validation("Page size must be greater than zero"));
        }
        self.page_size = page_size;
        self.page = 0;
        Ok(())
    }

    // ── Selection ────────────────────────────────────────────────

    /// Flip the selection of a visible record. Returns `false` if `id` is
    /// not visible.
    pub fn toggle_select(&mut self, id: RecordId) -> bool {
        if !self.visible_records().iter().any(|r| r.id == id) {
            return false;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// Clear the selection if everything is selected, otherwise select
    /// every visible record.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.visible_records().iter().map(|r| r.id).collect();
        }
    }

    // ── Inline rename ────────────────────────────────────────────

    /// Put `id` in edit mode, seeding the draft with its current name.
    pub fn begin_rename(&mut self, id: RecordId) -> Result<(), MutationError> {
        let name = self
            .record(id)
            .map(|r| r.name.clone())
            .ok_or(MutationError::NotFound(id))?;
        self.editing = Some(RenameDraft { id, buffer: name });
        Ok(())
    }

    /// Replace the draft text. Returns `false` when nothing is in edit mode.
    pub fn edit_rename_buffer(&mut self, text: impl Into<String>) -> bool {
        match self.editing.as_mut() {
            Some(draft) => {
                draft.buffer = text.into();
                true
            }
            None => false,
        }
    }

    /// Write `new_name` to record `id` and leave edit mode.
    ///
    /// Edit mode ends whether or not the rename is accepted. On rejection
    /// the record keeps its old name.
    pub fn commit_rename(&mut self, id: RecordId, new_name: &str) -> Result<(), MutationError> {
        self.editing = None;
        match mutation::rename_record(&self.records, id, new_name) {
            Ok(updated) => {
                self.replace_records(updated);
                Ok(())
            }
            Err(err) => {
                warn!(record_id = %id, error = %err, "Rename rejected");
                Err(err)
            }
        }
    }

    /// Commit the current draft. Does nothing when no record is in edit mode.
    pub fn commit_rename_draft(&mut self) -> Result<(), MutationError> {
        match self.editing.take() {
            Some(RenameDraft { id, buffer }) => self.commit_rename(id, &buffer),
            None => Ok(()),
        }
    }

    /// Leave edit mode without writing anything. Returns `false` when
    /// nothing was in edit mode.
    pub fn cancel_rename(&mut self) -> bool {
        self.editing.take().is_some()
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Delete record `id`. Returns `false` (and changes nothing) when the
    /// id is already gone.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let updated = mutation::delete_record(&self.records, id);
        if updated.len() == self.records.len() {
            debug!(record_id = %id, "Delete of absent record ignored");
            return false;
        }
        info!(record_id = %id, "Record deleted");
        self.replace_records(updated);
        true
    }

    /// Create a folder and return its id.
    pub fn create_folder(
        &mut self,
        name: &str,
        ctx: &CommandContext,
    ) -> Result<RecordId, MutationError> {
        let (id, updated) =
            mutation::create_folder(&self.records, name, ctx).inspect_err(|err| {
                warn!(error = %err, "Create folder rejected");
            })?;
        self.replace_records(updated);
        Ok(id)
    }

    /// Upload files and return the ids of the records actually created.
    pub fn upload_files(
        &mut self,
        files: &[SelectedFile],
        ctx: &CommandContext,
    ) -> Result<Vec<RecordId>, MutationError> {
        let (ids, updated) =
            mutation::upload_files(&self.records, files, ctx).inspect_err(|err| {
                warn!(error = %err, "Upload rejected");
            })?;
        self.replace_records(updated);
        Ok(ids)
    }
}
