use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::fs::dirfs::{self, Result};
use crate::fs::listing::DirectoryEntry;

/// Messages delivered to `update`. Every dispatched effect produces exactly
/// one completion message (success payload or failure text).
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Noop,
    Quit,
    Tick,
    TerminalResize(u16, u16),

    // Cursor and list navigation
    CursorUp,
    CursorDown,
    GoToTop,
    GoToBottom,

    // Keystrokes passed through to the list's filter line
    FilterKey(KeyEvent),

    // Navigation across directories
    OpenSelected,
    ToggleHidden,
    GoHome,
    GoRoot,
    GoPrevious,

    // Mutating operations and mode transitions
    CopyItem,
    ZipItem,
    UnzipItem,
    StartCreateFile,
    StartCreateDirectory,
    StartDelete,
    ConfirmDelete,
    StartRename,
    StartMove,
    ConfirmMove,
    CopyPathToClipboard,
    OpenInEditor,
    Cancel,
    Submit,
    InputKey(KeyEvent),
    ToggleHelp,

    // Effect completions
    ListingLoaded(Vec<DirectoryEntry>),
    OperationComplete {
        entries: Vec<DirectoryEntry>,
        status: String,
    },
    OperationFailed(String),
    ClipboardWritten(String),
    EditorClosed(Option<String>),
}

/// Effects the update step can request. Each asynchronous command runs off
/// the update path and delivers one `Msg` when it completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    None,
    /// Build and apply a listing for a path or `dirfs` sentinel.
    LoadListing(String),
    /// Run one mutating filesystem operation, then re-list the current
    /// directory; the two steps complete as a single message so the display
    /// never shows a success banner next to a stale listing.
    Run(FileOperation),
    CopyToClipboard(String),
    OpenEditor(PathBuf),
    /// Pick-a-file mode: record the selection and exit.
    WriteSelectionAndQuit {
        output: PathBuf,
        selection: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmdOrBatch {
    Single(Cmd),
    Batch(Vec<Cmd>),
}

impl CmdOrBatch {
    pub fn none() -> Self {
        Self::Single(Cmd::None)
    }
}

/// Input sources the program polls for the current model state.
#[derive(Debug, Clone, PartialEq)]
pub enum Sub {
    KeyboardInput,
    TerminalResize,
}

/// One mutating filesystem operation, paired with the status text shown
/// when it completes.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOperation {
    CreateFile(String),
    CreateDirectory(String),
    Delete(PathBuf),
    Copy(PathBuf),
    Zip(PathBuf),
    Unzip(PathBuf),
    Rename { path: PathBuf, new_name: String },
    Move { source: PathBuf, target: PathBuf },
}

impl FileOperation {
    pub fn apply(&self) -> Result<()> {
        match self {
            Self::CreateFile(name) => dirfs::create_file(name),
            Self::CreateDirectory(name) => dirfs::create_directory(name),
            Self::Delete(path) => dirfs::delete_item(path),
            Self::Copy(path) => dirfs::copy_item(path),
            Self::Zip(path) => dirfs::zip_item(path),
            Self::Unzip(path) => dirfs::unzip_item(path),
            Self::Rename { path, new_name } => dirfs::rename_item(path, new_name),
            Self::Move { source, target } => dirfs::move_item(source, target),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::CreateFile(_) => "Successfully created file",
            Self::CreateDirectory(_) => "Successfully created directory",
            Self::Delete(_) => "Successfully deleted item",
            Self::Copy(_) => "Successfully copied item",
            Self::Zip(_) => "Successfully zipped item",
            Self::Unzip(_) => "Successfully unzipped item",
            Self::Rename { .. } => "Successfully renamed item",
            Self::Move { .. } => "Successfully moved item",
        }
    }
}
