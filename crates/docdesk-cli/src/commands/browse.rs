//! Interactive table session.
//!
//! Reads one command per line and applies it to a [`TableState`] loaded
//! once at start-up. The table is printed again after every command that
//! changes what is on screen.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::output::{self, OutputFormat};
use docdesk_core::config::AppConfig;
use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::types::{RecordId, SortKey};
use docdesk_entity::SelectedFile;
use docdesk_service::{CommandContext, PopupMode, TableState};

const HELP: &str = "\
Commands:
  search <text>        filter by name (empty text clears)
  clear                clear the search
  sort name|date       sort by a column; repeat to flip direction
  page <n>             go to page n
  next | prev          move one page
  size <n>             rows per page
  select <id>          toggle a row's checkbox
  select-all           toggle every visible row
  rename <id> [name]   rename a row (prompts when no name is given)
  cancel               leave rename or close the open dialog
  delete <id> [-y]     delete a row (asks first unless -y)
  mkdir [name]         create a folder (prompts when no name is given)
  upload <path>...     add files from disk
  show                 print the table
  help                 this text
  quit                 leave";

/// One line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Set the search term.
    Search(String),
    /// Clear the search term.
    Clear,
    /// Toggle a sort column.
    Sort(SortKey),
    /// Jump to a 1-based page.
    Page(usize),
    /// Next page.
    Next,
    /// Previous page.
    Prev,
    /// Change the page size.
    Size(usize),
    /// Toggle one row.
    Select(RecordId),
    /// Toggle every visible row.
    SelectAll,
    /// Rename a row, prompting when `name` is absent.
    Rename {
        /// Target row.
        id: RecordId,
        /// New name given inline.
        name: Option<String>,
    },
    /// Leave edit mode or close the dialog.
    Cancel,
    /// Delete a row.
    Delete {
        /// Target row.
        id: RecordId,
        /// Skip the confirmation prompt.
        confirmed: bool,
    },
    /// Create a folder, prompting when the name is absent.
    Mkdir(Option<String>),
    /// Upload files from disk.
    Upload(Vec<PathBuf>),
    /// Print the table.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for ShellCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "" | "show" | "ls" => Self::Show,
            "search" | "find" => Self::Search(rest.to_string()),
            "clear" => Self::Clear,
            "sort" => Self::Sort(rest.parse()?),
            "page" => match parse_count(rest, "Page")? {
                0 => return Err(AppError::validation("Pages start at 1")),
                n => Self::Page(n),
            },
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "size" => Self::Size(parse_count(rest, "Page size")?),
            "select" => Self::Select(parse_id(rest)?),
            "select-all" | "all" => Self::SelectAll,
            "rename" | "mv" => {
                let (id, name) = match rest.split_once(char::is_whitespace) {
                    Some((id, name)) => (id, Some(name.trim().to_string())),
                    None => (rest, None),
                };
                Self::Rename {
                    id: parse_id(id)?,
                    name,
                }
            }
            "cancel" => Self::Cancel,
            "delete" | "rm" => {
                let mut id = None;
                let mut confirmed = false;
                for token in rest.split_whitespace() {
                    match token {
                        "-y" | "--yes" => confirmed = true,
                        other => id = Some(parse_id(other)?),
                    }
                }
                let id = id.ok_or_else(|| AppError::validation("Usage: delete <id> [-y]"))?;
                Self::Delete { id, confirmed }
            }
            "mkdir" => Self::Mkdir(Some(rest.to_string()).filter(|name| !name.is_empty())),
            "upload" => {
                let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
                if paths.is_empty() {
                    return Err(AppError::validation("Usage: upload <path>..."));
                }
                Self::Upload(paths)
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(AppError::validation(format!(
                    "Unknown command '{}'. Type 'help' for a list.",
                    other
                )));
            }
        };
        Ok(command)
    }
}

fn parse_id(value: &str) -> AppResult<RecordId> {
    if value.is_empty() {
        return Err(AppError::validation("A document ID is required"));
    }
    value
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid document ID '{}'", value)))
}

fn parse_count(value: &str, what: &str) -> AppResult<usize> {
    value
        .parse()
        .map_err(|_| AppError::validation(format!("{} must be a number", what)))
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the session.
    Quit,
}

/// Table plus dialog state for one interactive session.
#[derive(Debug)]
pub struct Session<'a> {
    table: TableState,
    popup: PopupMode,
    config: &'a AppConfig,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    /// Wrap a loaded table.
    pub fn new(table: TableState, config: &'a AppConfig, format: OutputFormat) -> Self {
        Self {
            table,
            popup: PopupMode::Closed,
            config,
            format,
        }
    }

    fn context(&self) -> CommandContext {
        CommandContext::now(self.config.table.author.as_str())
    }

    fn show(&self) {
        output::print_page(&self.table, self.format);
    }

    /// Apply one command.
    pub async fn run(&mut self, command: ShellCommand) -> AppResult<Flow> {
        match command {
            ShellCommand::Search(term) => self.table.set_search_term(term),
            ShellCommand::Clear => self.table.set_search_term(""),
            ShellCommand::Sort(key) => self.table.toggle_sort(key),
            ShellCommand::Page(page) => self.table.set_page(page.saturating_sub(1)),
            ShellCommand::Next => self.table.set_page(self.table.page() + 1),
            ShellCommand::Prev => self.table.set_page(self.table.page().saturating_sub(1)),
            ShellCommand::Size(size) => {
                let options = &self.config.table.page_size_options;
                if !options.contains(&size) {
                    return Err(AppError::validation(format!(
                        "Page size must be one of {:?}",
                        options
                    )));
                }
                self.table.set_page_size(size)?;
            }
            ShellCommand::Select(id) => {
                if !self.table.toggle_select(id) {
                    return Err(AppError::not_found(format!(
                        "Document {} is not in the current view",
                        id
                    )));
                }
            }
            ShellCommand::SelectAll => self.table.toggle_select_all(),
            ShellCommand::Rename { id, name } => self.rename(id, name)?,
            ShellCommand::Cancel => {
                let was_editing = self.table.cancel_rename();
                let was_open = self.popup.is_open();
                self.popup.close();
                if was_editing || was_open {
                    output::print_success("Cancelled");
                } else {
                    output::print_warning("Nothing to cancel");
                    return Ok(Flow::Continue);
                }
            }
            ShellCommand::Delete { id, confirmed } => {
                if !self.delete(id, confirmed)? {
                    return Ok(Flow::Continue);
                }
            }
            ShellCommand::Mkdir(name) => self.create_folder(name)?,
            ShellCommand::Upload(paths) => self.upload(&paths).await?,
            ShellCommand::Show => {}
            ShellCommand::Help => {
                println!("{}", HELP);
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        self.show();
        Ok(Flow::Continue)
    }

    fn rename(&mut self, id: RecordId, name: Option<String>) -> AppResult<()> {
        self.table.begin_rename(id)?;
        let text = match name {
            Some(name) => name,
            None => {
                self.show();
                let initial = self
                    .table
                    .editing()
                    .map(|draft| draft.buffer.clone())
                    .unwrap_or_default();
                match dialoguer::Input::<String>::new()
                    .with_prompt("New name")
                    .with_initial_text(initial)
                    .allow_empty(true)
                    .interact_text()
                {
                    Ok(text) => text,
                    Err(e) => {
                        self.table.cancel_rename();
                        return Err(AppError::internal(format!("Input error: {}", e)));
                    }
                }
            }
        };
        self.table.edit_rename_buffer(text);
        self.table.commit_rename_draft()?;
        output::print_success("Renamed");
        Ok(())
    }

    /// Returns `false` when the user declined.
    fn delete(&mut self, id: RecordId, confirmed: bool) -> AppResult<bool> {
        let name = self
            .table
            .record(id)
            .map(|r| r.name.clone())
            .ok_or_else(|| AppError::not_found(format!("Document {} not found", id)))?;

        let confirmed = confirmed
            || dialoguer::Confirm::new()
                .with_prompt(format!("Delete '{}'?", name))
                .default(false)
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;
        if !confirmed {
            output::print_warning("Delete cancelled");
            return Ok(false);
        }

        self.table.delete(id);
        output::print_success(&format!("Deleted '{}'", name));
        Ok(true)
    }

    fn create_folder(&mut self, name: Option<String>) -> AppResult<()> {
        self.popup = PopupMode::create_folder();
        if let Some(name) = name {
            self.popup.set_folder_name(name);
            return self.submit_and_close().map(|_| ());
        }

        loop {
            let name: String = match dialoguer::Input::new()
                .with_prompt(format!("{} (empty to cancel)", self.popup.title()))
                .allow_empty(true)
                .interact_text()
            {
                Ok(name) => name,
                Err(e) => {
                    self.popup.close();
                    return Err(AppError::internal(format!("Input error: {}", e)));
                }
            };
            match self.submit_folder_name(name) {
                FolderAttempt::Created => return Ok(()),
                FolderAttempt::Abandoned => {
                    output::print_warning("Folder not created");
                    return Ok(());
                }
                FolderAttempt::Rejected(e) => output::print_error(&e.message),
            }
        }
    }

    /// Put `name` in the open folder dialog and submit it.
    ///
    /// A rejected name leaves the dialog open for another try. A blank name
    /// closes it.
    fn submit_folder_name(&mut self, name: String) -> FolderAttempt {
        self.popup.set_folder_name(name);
        if self.popup.is_submit_disabled() {
            self.popup.close();
            return FolderAttempt::Abandoned;
        }
        match self.submit_open_popup() {
            Ok(_) => FolderAttempt::Created,
            Err(e) => FolderAttempt::Rejected(e),
        }
    }

    async fn upload(&mut self, paths: &[PathBuf]) -> AppResult<()> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match selected_file(path).await {
                Ok(file) => files.push(file),
                Err(e) => output::print_warning(&e.message),
            }
        }
        if files.is_empty() {
            return Err(AppError::validation("No readable files to upload"));
        }

        let requested = files.len();
        self.popup = PopupMode::upload_files();
        self.popup.set_files(files);
        let created = self.submit_and_close()?;
        if created < requested {
            output::print_warning(&format!(
                "{} file(s) skipped because the name already exists",
                requested - created
            ));
        }
        Ok(())
    }

    /// Submit the open dialog and close it whatever the outcome.
    fn submit_and_close(&mut self) -> AppResult<usize> {
        let result = self.submit_open_popup();
        self.popup.close();
        result
    }

    /// Submit the open dialog. It closes on success and stays open with
    /// its form when the command is rejected.
    fn submit_open_popup(&mut self) -> AppResult<usize> {
        let title = self.popup.title();
        let ctx = self.context();
        let created = self.popup.submit(&mut self.table, &ctx)?;
        output::print_success(&format!("{}: {} added", title, created.len()));
        Ok(created.len())
    }
}

/// Outcome of one answer to the folder name prompt.
#[derive(Debug)]
enum FolderAttempt {
    /// The folder was created and the dialog closed.
    Created,
    /// The name was blank; the dialog closed.
    Abandoned,
    /// The name was refused; the dialog is still open.
    Rejected(AppError),
}

/// Describe a file on disk as an upload candidate.
async fn selected_file(path: &Path) -> AppResult<SelectedFile> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| AppError::validation(format!("Cannot read '{}': {}", path.display(), e)))?;
    if !metadata.is_file() {
        return Err(AppError::validation(format!(
            "'{}' is not a file",
            path.display()
        )));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::validation(format!("'{}' has no file name", path.display())))?;
    Ok(SelectedFile::new(name, metadata.len()))
}

/// Execute the browse command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let table = super::open_table(config).await?;
    let mut session = Session::new(table, config, format);
    session.show();
    println!("Type 'help' for commands.");

    loop {
        let line: String = dialoguer::Input::new()
            .with_prompt("docdesk")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                output::print_error(&e.message);
                continue;
            }
        };

        match session.run(command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => output::print_error(&e.message),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use docdesk_core::types::SortDirection;
    use docdesk_service::seed::seed_records;

    use super::*;

    fn session(config: &AppConfig) -> Session<'_> {
        let mut table = TableState::from_config(&config.table);
        table.load(seed_records());
        Session::new(table, config, OutputFormat::Json)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("".parse::<ShellCommand>().expect("empty"), ShellCommand::Show);
        assert_eq!(
            "search  board minutes ".parse::<ShellCommand>().expect("search"),
            ShellCommand::Search("board minutes".to_string())
        );
        assert_eq!(
            "SORT name".parse::<ShellCommand>().expect("sort"),
            ShellCommand::Sort(SortKey::Name)
        );
        assert_eq!(
            "page 3".parse::<ShellCommand>().expect("page"),
            ShellCommand::Page(3)
        );
        assert_eq!(
            "rename 4 Board pack.pdf".parse::<ShellCommand>().expect("rename"),
            ShellCommand::Rename {
                id: RecordId(4),
                name: Some("Board pack.pdf".to_string())
            }
        );
        assert_eq!(
            "rename 4".parse::<ShellCommand>().expect("rename prompt"),
            ShellCommand::Rename {
                id: RecordId(4),
                name: None
            }
        );
        assert_eq!(
            "delete -y 7".parse::<ShellCommand>().expect("delete"),
            ShellCommand::Delete {
                id: RecordId(7),
                confirmed: true
            }
        );
        assert_eq!(
            "mkdir".parse::<ShellCommand>().expect("mkdir"),
            ShellCommand::Mkdir(None)
        );
        assert_eq!(
            "upload a.pdf b.pdf".parse::<ShellCommand>().expect("upload"),
            ShellCommand::Upload(vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")])
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("page 0".parse::<ShellCommand>().is_err());
        assert!("page two".parse::<ShellCommand>().is_err());
        assert!("select".parse::<ShellCommand>().is_err());
        assert!("delete -y".parse::<ShellCommand>().is_err());
        assert!("upload".parse::<ShellCommand>().is_err());
        assert!("sort size".parse::<ShellCommand>().is_err());
        assert!("frobnicate".parse::<ShellCommand>().is_err());
    }

    #[tokio::test]
    async fn test_paging_commands() {
        let config = AppConfig::default();
        let mut session = session(&config);

        session.run(ShellCommand::Page(3)).await.expect("page");
        assert_eq!(session.table.page(), 2);
        session.run(ShellCommand::Next).await.expect("next");
        assert_eq!(session.table.page(), 2);
        session.run(ShellCommand::Prev).await.expect("prev");
        assert_eq!(session.table.page(), 1);

        assert!(session.run(ShellCommand::Size(7)).await.is_err());
        session.run(ShellCommand::Size(5)).await.expect("size");
        assert_eq!(session.table.page(), 0);
        assert_eq!(session.table.total_pages(), 6);
    }

    #[tokio::test]
    async fn test_sort_and_search_commands() {
        let config = AppConfig::default();
        let mut session = session(&config);

        session
            .run(ShellCommand::Sort(SortKey::Name))
            .await
            .expect("sort");
        assert_eq!(session.table.sort().direction(), SortDirection::Asc);

        session
            .run(ShellCommand::Search("audit".to_string()))
            .await
            .expect("search");
        assert_eq!(session.table.visible_records().len(), 2);
        session.run(ShellCommand::Clear).await.expect("clear");
        assert_eq!(session.table.visible_records().len(), 30);
    }

    #[tokio::test]
    async fn test_select_unknown_row_is_error() {
        let config = AppConfig::default();
        let mut session = session(&config);
        assert!(session.run(ShellCommand::Select(RecordId(999))).await.is_err());
        session
            .run(ShellCommand::Select(RecordId(3)))
            .await
            .expect("select");
        assert!(session.table.is_selected(RecordId(3)));
    }

    #[tokio::test]
    async fn test_inline_rename_and_confirmed_delete() {
        let config = AppConfig::default();
        let mut session = session(&config);

        session
            .run(ShellCommand::Rename {
                id: RecordId(1),
                name: Some("Board appointments".to_string()),
            })
            .await
            .expect("rename");
        assert_eq!(
            session.table.record(RecordId(1)).map(|r| r.name.as_str()),
            Some("Board appointments")
        );

        session
            .run(ShellCommand::Delete {
                id: RecordId(1),
                confirmed: true,
            })
            .await
            .expect("delete");
        assert!(session.table.record(RecordId(1)).is_none());
        assert!(
            session
                .run(ShellCommand::Delete {
                    id: RecordId(1),
                    confirmed: true,
                })
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_mkdir_duplicate_closes_dialog() {
        let config = AppConfig::default();
        let mut session = session(&config);

        session
            .run(ShellCommand::Mkdir(Some("Board packs".to_string())))
            .await
            .expect("mkdir");
        assert_eq!(session.table.records().len(), 31);
        assert_eq!(session.table.records()[0].created_by, "John Green");

        let err = session
            .run(ShellCommand::Mkdir(Some("board PACKS".to_string())))
            .await
            .expect_err("duplicate");
        assert_eq!(err.kind, docdesk_core::error::ErrorKind::Conflict);
        assert!(!session.popup.is_open());
        assert_eq!(session.table.records().len(), 31);
    }

    #[test]
    fn test_folder_prompt_retries_after_rejected_name() {
        let config = AppConfig::default();
        let mut session = session(&config);
        session.popup = PopupMode::create_folder();

        let attempt = session.submit_folder_name("board meetings".to_string());
        assert!(matches!(attempt, FolderAttempt::Rejected(_)));
        assert!(session.popup.is_open());
        assert_eq!(
            session.popup,
            PopupMode::CreateFolder(docdesk_service::FolderForm {
                name: "board meetings".to_string()
            })
        );
        assert_eq!(session.table.records().len(), 30);

        let attempt = session.submit_folder_name("Brand new folder".to_string());
        assert!(matches!(attempt, FolderAttempt::Created));
        assert!(!session.popup.is_open());
        assert_eq!(session.table.records()[0].name, "Brand new folder");
        assert_eq!(session.table.records().len(), 31);
    }

    #[test]
    fn test_folder_prompt_blank_name_closes_dialog() {
        let config = AppConfig::default();
        let mut session = session(&config);
        session.popup = PopupMode::create_folder();

        let attempt = session.submit_folder_name("   ".to_string());

        assert!(matches!(attempt, FolderAttempt::Abandoned));
        assert!(!session.popup.is_open());
        assert_eq!(session.table.records().len(), 30);
    }

    #[tokio::test]
    async fn test_upload_reads_file_size() {
        let config = AppConfig::default();
        let mut session = session(&config);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("minutes.pdf");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(&[0u8; 2048]).expect("write");

        session
            .run(ShellCommand::Upload(vec![
                path.clone(),
                dir.path().join("missing.pdf"),
            ]))
            .await
            .expect("upload");

        let records = session.table.records();
        let uploaded = records
            .iter()
            .find(|r| r.name == "minutes.pdf")
            .expect("uploaded record");
        assert_eq!(uploaded.size, "2.0 KB");

        assert!(session.run(ShellCommand::Upload(vec![path])).await.is_err());
    }

    #[tokio::test]
    async fn test_cancel_and_quit() {
        let config = AppConfig::default();
        let mut session = session(&config);
        session.table.begin_rename(RecordId(2)).expect("begin");
        assert_eq!(
            session.run(ShellCommand::Cancel).await.expect("cancel"),
            Flow::Continue
        );
        assert!(session.table.editing().is_none());
        assert_eq!(
            session.run(ShellCommand::Quit).await.expect("quit"),
            Flow::Quit
        );
    }
}
