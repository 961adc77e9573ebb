use std::path::PathBuf;

use crate::app::event_msg::{Cmd, CmdOrBatch};
use crate::app::ui_components::{EntryList, TextInput};
use crate::fs::dirfs::CURRENT_DIRECTORY;
use crate::fs::listing::DirectoryEntry;

/// Where the filetree starts and how it behaves, fixed for the lifetime of
/// the program.
#[derive(Debug, Clone)]
pub struct FiletreeConfig {
    /// Directory shown first. Sentinels (`~`, `.`, `/`) are resolved by the
    /// listing layer.
    pub start_dir: String,
    pub show_hidden: bool,
    pub show_icons: bool,
    /// When set, selecting a file writes its path here and exits instead of
    /// opening an editor.
    pub selection_path: Option<PathBuf>,
    /// Editor command. Falls back to $EDITOR, then vim.
    pub editor: Option<String>,
}

impl Default for FiletreeConfig {
    fn default() -> Self {
        Self {
            start_dir: CURRENT_DIRECTORY.to_string(),
            show_hidden: false,
            show_icons: true,
            selection_path: None,
            editor: None,
        }
    }
}

/// Interaction mode. Exactly one is active at a time; every mode other than
/// Idle is an in-flight operation awaiting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiletreeMode {
    Idle,
    CreatingFile,
    CreatingDirectory,
    ConfirmingDelete,
    Renaming,
    Moving,
}

/// An entry captured when a multi-step operation begins. Listings can be
/// replaced while a confirmation is pending (completions are never
/// cancelled), so the later step acts on the capture, never on whatever the
/// cursor happens to rest on by then.
#[derive(Debug, Clone)]
pub struct StagedEntry {
    pub short_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Model {
    pub config: FiletreeConfig,
    pub mode: FiletreeMode,
    pub entry_list: EntryList,
    pub text_input: TextInput,
    /// Source staged while mode is Moving.
    pub pending_move: Option<StagedEntry>,
    /// Victim staged while mode is ConfirmingDelete or Renaming.
    pub staged_target: Option<StagedEntry>,
    pub show_hidden: bool,
    pub show_icons: bool,
    /// Whether keyboard input is routed to this component.
    pub active: bool,
    pub show_help: bool,
    pub width: u16,
    pub height: u16,
    pub quitting: bool,
}

impl Model {
    pub fn new(config: FiletreeConfig) -> Self {
        let show_hidden = config.show_hidden;
        let show_icons = config.show_icons;
        Self {
            config,
            mode: FiletreeMode::Idle,
            entry_list: EntryList::new(),
            text_input: TextInput::new(),
            pending_move: None,
            staged_target: None,
            show_hidden,
            show_icons,
            active: true,
            show_help: false,
            width: 0,
            height: 0,
            quitting: false,
        }
    }

    /// Command that populates the first listing.
    pub fn initial_cmd(&self) -> CmdOrBatch {
        CmdOrBatch::Single(Cmd::LoadListing(self.config.start_dir.clone()))
    }

    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.entry_list.selected()
    }

    pub fn is_filtering(&self) -> bool {
        self.entry_list.is_filtering()
    }

    /// Drops any partially-entered state and returns to Idle. Listing
    /// contents and cursor are left alone.
    pub fn reset_to_idle(&mut self) {
        self.mode = FiletreeMode::Idle;
        self.pending_move = None;
        self.staged_target = None;
        self.text_input.blur();
        self.text_input.clear();
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(FiletreeConfig::default())
    }
}
