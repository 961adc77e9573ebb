use tracing::debug;

use crate::app::event_msg::{Cmd, CmdOrBatch, FileOperation, Msg};
use crate::app::tea_model::{FiletreeMode, Model, StagedEntry};
use crate::fs::dirfs::{CURRENT_DIRECTORY, HOME_DIRECTORY, PREVIOUS_DIRECTORY, ROOT_DIRECTORY};

/// Advances the model by one message and returns any follow-up commands.
/// Filesystem work never happens here; it is described as a `Cmd` and run
/// by the program loop.
pub fn update(model: &mut Model, msg: Msg) -> CmdOrBatch {
    match msg {
        Msg::Noop => CmdOrBatch::none(),
        Msg::Tick => {
            model.entry_list.expire_status();
            CmdOrBatch::none()
        }
        Msg::Quit => {
            model.quitting = true;
            CmdOrBatch::none()
        }
        Msg::TerminalResize(width, height) => {
            model.width = width;
            model.height = height;
            CmdOrBatch::none()
        }

        Msg::CursorUp => {
            model.entry_list.cursor_up();
            CmdOrBatch::none()
        }
        Msg::CursorDown => {
            model.entry_list.cursor_down();
            CmdOrBatch::none()
        }
        Msg::GoToTop => {
            model.entry_list.go_to_top();
            CmdOrBatch::none()
        }
        Msg::GoToBottom => {
            model.entry_list.go_to_bottom();
            CmdOrBatch::none()
        }
        Msg::FilterKey(key) => {
            model.entry_list.handle_filter_key(key);
            CmdOrBatch::none()
        }

        Msg::OpenSelected => open_selected(model),
        Msg::ToggleHidden => {
            model.show_hidden = !model.show_hidden;
            load(CURRENT_DIRECTORY)
        }
        Msg::GoHome => load(HOME_DIRECTORY),
        Msg::GoRoot => load(ROOT_DIRECTORY),
        Msg::GoPrevious => load(PREVIOUS_DIRECTORY),

        Msg::CopyItem => run_on_selection(model, "copy", FileOperation::Copy),
        Msg::ZipItem => run_on_selection(model, "zip", FileOperation::Zip),
        Msg::UnzipItem => run_on_selection(model, "unzip", FileOperation::Unzip),

        Msg::StartCreateFile => start_text_entry(model, FiletreeMode::CreatingFile),
        Msg::StartCreateDirectory => start_text_entry(model, FiletreeMode::CreatingDirectory),
        Msg::StartDelete => {
            if let Some(staged) = stage_selection(model, "delete") {
                debug!(path = %staged.path.display(), "confirming delete");
                model.staged_target = Some(staged);
                model.mode = FiletreeMode::ConfirmingDelete;
            }
            CmdOrBatch::none()
        }
        Msg::ConfirmDelete => {
            // Deletes the entry staged at StartDelete. The cursor is not
            // consulted again: a listing completion may have replaced the
            // entries while the prompt was up.
            let staged = model.staged_target.take();
            model.reset_to_idle();
            match staged {
                Some(staged) => {
                    CmdOrBatch::Single(Cmd::Run(FileOperation::Delete(staged.path)))
                }
                None => CmdOrBatch::none(),
            }
        }
        Msg::StartRename => {
            if let Some(staged) = stage_selection(model, "rename") {
                model.mode = FiletreeMode::Renaming;
                model.text_input.set_value(&staged.short_name);
                model.text_input.focus();
                model.staged_target = Some(staged);
            }
            CmdOrBatch::none()
        }
        Msg::StartMove => {
            if let Some(staged) = stage_selection(model, "move") {
                model.pending_move = Some(staged);
                model.mode = FiletreeMode::Moving;
            }
            CmdOrBatch::none()
        }
        Msg::ConfirmMove => confirm_move(model),

        Msg::CopyPathToClipboard => match model.selected_entry() {
            Some(entry) => CmdOrBatch::Single(Cmd::CopyToClipboard(
                entry.path.to_string_lossy().into_owned(),
            )),
            None => CmdOrBatch::none(),
        },
        Msg::OpenInEditor => match model.selected_entry() {
            Some(entry) if !entry.is_directory => {
                let path = entry.path.clone();
                open_file(model, path)
            }
            _ => CmdOrBatch::none(),
        },

        Msg::Cancel => {
            if model.mode != FiletreeMode::Idle {
                model.reset_to_idle();
            } else {
                model.entry_list.clear_filter();
            }
            CmdOrBatch::none()
        }
        Msg::Submit => submit_text_entry(model),
        Msg::InputKey(key) => {
            model.text_input.handle_key(key);
            CmdOrBatch::none()
        }
        Msg::ToggleHelp => {
            model.show_help = !model.show_help;
            CmdOrBatch::none()
        }

        Msg::ListingLoaded(entries) => {
            model.entry_list.set_entries(entries);
            CmdOrBatch::none()
        }
        Msg::OperationComplete { entries, status } => {
            model.entry_list.set_entries(entries);
            model.entry_list.set_info_status(status);
            CmdOrBatch::none()
        }
        Msg::OperationFailed(error) => {
            model.entry_list.set_error_status(error);
            CmdOrBatch::none()
        }
        Msg::ClipboardWritten(path) => {
            model
                .entry_list
                .set_info_status(format!("Copied {path} to the clipboard"));
            CmdOrBatch::none()
        }
        Msg::EditorClosed(error) => {
            if let Some(error) = error {
                model.entry_list.set_error_status(error);
                CmdOrBatch::none()
            } else {
                // The editor may have written new files; refresh.
                load(CURRENT_DIRECTORY)
            }
        }
    }
}

fn load(target: &str) -> CmdOrBatch {
    CmdOrBatch::Single(Cmd::LoadListing(target.to_string()))
}

/// Space on a directory descends into it; on a file it either reports the
/// selection (pick mode) or opens the editor.
fn open_selected(model: &mut Model) -> CmdOrBatch {
    let Some(entry) = model.selected_entry() else {
        return CmdOrBatch::none();
    };
    if entry.is_directory {
        let target = entry.path.to_string_lossy().into_owned();
        model.entry_list.clear_filter();
        return CmdOrBatch::Single(Cmd::LoadListing(target));
    }
    if model.mode == FiletreeMode::Moving {
        return CmdOrBatch::none();
    }
    let path = entry.path.clone();
    open_file(model, path)
}

/// What acting on a file means: report it and exit when a selection-output
/// path is configured, otherwise open the editor.
fn open_file(model: &Model, path: std::path::PathBuf) -> CmdOrBatch {
    match &model.config.selection_path {
        Some(output) => CmdOrBatch::Single(Cmd::WriteSelectionAndQuit {
            output: output.clone(),
            selection: path,
        }),
        None => CmdOrBatch::Single(Cmd::OpenEditor(path)),
    }
}

/// Selection for a mutating operation. The parent `..` entry is a view of
/// the directory above, not something that can be altered from here.
fn guarded_selection<'a>(
    model: &'a mut Model,
    verb: &str,
) -> Option<&'a crate::fs::listing::DirectoryEntry> {
    let blocked = match model.entry_list.selected() {
        Some(entry) => entry.is_parent(),
        None => return None,
    };
    if blocked {
        model
            .entry_list
            .set_error_status(format!("Cannot {verb} the parent entry"));
        return None;
    }
    model.entry_list.selected()
}

/// Guarded selection captured as an owned [`StagedEntry`], for operations
/// with a later confirmation step.
fn stage_selection(model: &mut Model, verb: &str) -> Option<StagedEntry> {
    guarded_selection(model, verb).map(|entry| StagedEntry {
        short_name: entry.short_name.clone(),
        path: entry.path.clone(),
    })
}

fn run_on_selection(
    model: &mut Model,
    verb: &str,
    build: fn(std::path::PathBuf) -> FileOperation,
) -> CmdOrBatch {
    match guarded_selection(model, verb) {
        Some(entry) => CmdOrBatch::Single(Cmd::Run(build(entry.path.clone()))),
        None => CmdOrBatch::none(),
    }
}

fn start_text_entry(model: &mut Model, mode: FiletreeMode) -> CmdOrBatch {
    model.mode = mode;
    model.text_input.clear();
    model.text_input.focus();
    CmdOrBatch::none()
}

/// Enter in a text-entry mode. An empty name is treated like a cancel.
fn submit_text_entry(model: &mut Model) -> CmdOrBatch {
    let name = model.text_input.value().trim().to_string();
    let mode = model.mode;
    let staged = model.staged_target.take();
    model.reset_to_idle();
    if name.is_empty() {
        return CmdOrBatch::none();
    }
    // Creation is relative to the working directory, which follows the
    // listing. Renaming acts on the entry staged at StartRename, not on the
    // current cursor.
    let op = match mode {
        FiletreeMode::CreatingFile => FileOperation::CreateFile(name),
        FiletreeMode::CreatingDirectory => FileOperation::CreateDirectory(name),
        FiletreeMode::Renaming => match staged {
            Some(staged) => FileOperation::Rename {
                path: staged.path,
                new_name: name,
            },
            None => return CmdOrBatch::none(),
        },
        _ => return CmdOrBatch::none(),
    };
    CmdOrBatch::Single(Cmd::Run(op))
}

/// Enter while a move is staged: the entry lands in whatever directory the
/// listing currently shows, keeping its name.
fn confirm_move(model: &mut Model) -> CmdOrBatch {
    let Some(pending) = model.pending_move.take() else {
        return CmdOrBatch::none();
    };
    model.reset_to_idle();
    let Some(directory) = model.entry_list.current_directory() else {
        return CmdOrBatch::none();
    };
    let target = directory.join(&pending.short_name);
    if target == pending.path {
        model.entry_list.set_info_status("Move cancelled, same location");
        return CmdOrBatch::none();
    }
    CmdOrBatch::Single(Cmd::Run(FileOperation::Move {
        source: pending.path,
        target,
    }))
}
