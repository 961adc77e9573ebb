//! Mode state machine and operation sequencing tests, driven through
//! `update` the same way the program loop drives it.

mod common;

use std::path::PathBuf;

use common::{cwd_lock, mkdir, scratch, touch};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use steep::app::event_msg::{Cmd, CmdOrBatch, FileOperation, Msg};
use steep::app::tea_model::{FiletreeConfig, FiletreeMode, Model};
use steep::app::tea_update::update;
use steep::app::program::{run_file_operation, run_load_listing};
use steep::fs::DirectoryEntry;

fn entry(directory: &str, short_name: &str, is_directory: bool) -> DirectoryEntry {
    DirectoryEntry {
        name: short_name.to_string(),
        short_name: short_name.to_string(),
        path: PathBuf::from(directory).join(short_name),
        extension: String::new(),
        is_directory,
        status_line: String::new(),
        current_directory: PathBuf::from(directory),
    }
}

fn parent(directory: &str) -> DirectoryEntry {
    let mut entry = entry(directory, "..", true);
    entry.path = PathBuf::from(directory).parent().map_or_else(
        || PathBuf::from("/"),
        |p| p.to_path_buf(),
    );
    entry
}

fn model_with(entries: Vec<DirectoryEntry>) -> Model {
    let mut model = Model::new(FiletreeConfig::default());
    update(&mut model, Msg::ListingLoaded(entries));
    model
}

fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        update(
            model,
            Msg::InputKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        );
    }
}

fn single(cmd: CmdOrBatch) -> Cmd {
    match cmd {
        CmdOrBatch::Single(cmd) => cmd,
        CmdOrBatch::Batch(_) => panic!("expected a single command"),
    }
}

#[test]
fn create_file_flow_produces_a_create_operation() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "existing", false)]);

    assert!(matches!(single(update(&mut model, Msg::StartCreateFile)), Cmd::None));
    assert_eq!(model.mode, FiletreeMode::CreatingFile);
    assert!(model.text_input.is_focused());

    type_text(&mut model, "fresh.rs");
    let cmd = single(update(&mut model, Msg::Submit));

    assert_eq!(model.mode, FiletreeMode::Idle);
    assert!(!model.text_input.is_focused());
    match cmd {
        Cmd::Run(FileOperation::CreateFile(name)) => assert_eq!(name, "fresh.rs"),
        other => panic!("expected a create-file operation, got {other:?}"),
    }
}

#[test]
fn submitting_an_empty_name_is_a_cancel() {
    let mut model = model_with(vec![parent("/work")]);

    update(&mut model, Msg::StartCreateDirectory);
    let cmd = single(update(&mut model, Msg::Submit));

    assert_eq!(model.mode, FiletreeMode::Idle);
    assert!(matches!(cmd, Cmd::None));
}

#[test]
fn delete_requires_confirmation() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "victim.txt", false)]);
    update(&mut model, Msg::CursorDown);

    update(&mut model, Msg::StartDelete);
    assert_eq!(model.mode, FiletreeMode::ConfirmingDelete);

    let cmd = single(update(&mut model, Msg::ConfirmDelete));
    assert_eq!(model.mode, FiletreeMode::Idle);
    match cmd {
        Cmd::Run(FileOperation::Delete(path)) => {
            assert_eq!(path, PathBuf::from("/work/victim.txt"));
        }
        other => panic!("expected a delete operation, got {other:?}"),
    }
}

#[test]
fn a_listing_arriving_mid_confirmation_cannot_redirect_the_delete() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "victim.txt", false)]);
    update(&mut model, Msg::CursorDown);
    update(&mut model, Msg::StartDelete);

    // A late listing completion replaces the entries and clamps the cursor
    // onto the synthetic parent while the prompt is still up.
    update(&mut model, Msg::ListingLoaded(vec![parent("/work")]));

    let cmd = single(update(&mut model, Msg::ConfirmDelete));
    match cmd {
        Cmd::Run(FileOperation::Delete(path)) => {
            assert_eq!(path, PathBuf::from("/work/victim.txt"));
        }
        other => panic!("expected a delete of the staged entry, got {other:?}"),
    }
}

#[test]
fn a_listing_arriving_mid_rename_cannot_redirect_the_rename() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "draft.md", false)]);
    update(&mut model, Msg::CursorDown);
    update(&mut model, Msg::StartRename);

    update(
        &mut model,
        Msg::ListingLoaded(vec![parent("/work"), entry("/work", "bystander", false)]),
    );

    type_text(&mut model, "!");
    let cmd = single(update(&mut model, Msg::Submit));
    match cmd {
        Cmd::Run(FileOperation::Rename { path, new_name }) => {
            assert_eq!(path, PathBuf::from("/work/draft.md"));
            assert_eq!(new_name, "draft.md!");
        }
        other => panic!("expected a rename of the staged entry, got {other:?}"),
    }
}

#[test]
fn escape_abandons_a_pending_delete() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "victim.txt", false)]);
    update(&mut model, Msg::CursorDown);
    update(&mut model, Msg::StartDelete);

    let cmd = single(update(&mut model, Msg::Cancel));

    assert_eq!(model.mode, FiletreeMode::Idle);
    assert!(matches!(cmd, Cmd::None));
}

#[test]
fn escape_returns_to_idle_from_every_mode() {
    let start = [
        Msg::StartCreateFile,
        Msg::StartCreateDirectory,
        Msg::StartDelete,
        Msg::StartRename,
        Msg::StartMove,
    ];
    for msg in start {
        let mut model = model_with(vec![parent("/work"), entry("/work", "thing", false)]);
        update(&mut model, Msg::CursorDown);
        update(&mut model, msg);
        assert_ne!(model.mode, FiletreeMode::Idle);

        update(&mut model, Msg::Cancel);
        assert_eq!(model.mode, FiletreeMode::Idle);
        assert!(!model.text_input.is_focused());
        assert!(model.pending_move.is_none());
        assert!(model.staged_target.is_none());
    }
}

#[test]
fn the_parent_entry_cannot_be_mutated() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "real", false)]);

    for msg in [Msg::StartDelete, Msg::StartRename, Msg::StartMove, Msg::CopyItem] {
        let cmd = single(update(&mut model, msg));
        assert_eq!(model.mode, FiletreeMode::Idle);
        assert!(matches!(cmd, Cmd::None));
    }
    assert!(model
        .entry_list
        .status_text()
        .is_some_and(|text| text.contains("parent")));
}

#[test]
fn rename_prefills_the_current_name() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "draft.md", false)]);
    update(&mut model, Msg::CursorDown);

    update(&mut model, Msg::StartRename);
    assert_eq!(model.mode, FiletreeMode::Renaming);
    assert_eq!(model.text_input.value(), "draft.md");

    type_text(&mut model, "2");
    let cmd = single(update(&mut model, Msg::Submit));
    match cmd {
        Cmd::Run(FileOperation::Rename { path, new_name }) => {
            assert_eq!(path, PathBuf::from("/work/draft.md"));
            assert_eq!(new_name, "draft.md2");
        }
        other => panic!("expected a rename operation, got {other:?}"),
    }
}

#[test]
fn a_staged_move_lands_in_the_directory_shown_at_confirm() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "wandering.txt", false)]);
    update(&mut model, Msg::CursorDown);

    update(&mut model, Msg::StartMove);
    assert_eq!(model.mode, FiletreeMode::Moving);
    assert!(model.pending_move.is_some());

    // Navigation while staged replaces the listing.
    update(
        &mut model,
        Msg::ListingLoaded(vec![parent("/work/dest"), entry("/work/dest", "other", false)]),
    );

    let cmd = single(update(&mut model, Msg::ConfirmMove));
    assert_eq!(model.mode, FiletreeMode::Idle);
    assert!(model.pending_move.is_none());
    match cmd {
        Cmd::Run(FileOperation::Move { source, target }) => {
            assert_eq!(source, PathBuf::from("/work/wandering.txt"));
            assert_eq!(target, PathBuf::from("/work/dest/wandering.txt"));
        }
        other => panic!("expected a move operation, got {other:?}"),
    }
}

#[test]
fn confirming_a_move_in_place_does_nothing() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "stay.txt", false)]);
    update(&mut model, Msg::CursorDown);
    update(&mut model, Msg::StartMove);

    let cmd = single(update(&mut model, Msg::ConfirmMove));

    assert_eq!(model.mode, FiletreeMode::Idle);
    assert!(matches!(cmd, Cmd::None));
}

#[test]
fn opening_a_directory_requests_its_listing() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "src", true)]);
    update(&mut model, Msg::CursorDown);

    let cmd = single(update(&mut model, Msg::OpenSelected));
    match cmd {
        Cmd::LoadListing(target) => assert_eq!(target, "/work/src"),
        other => panic!("expected a listing request, got {other:?}"),
    }
}

#[test]
fn opening_a_file_reports_the_selection_in_pick_mode() {
    let mut config = FiletreeConfig::default();
    config.selection_path = Some(PathBuf::from("/tmp/picked"));
    let mut model = Model::new(config);
    update(
        &mut model,
        Msg::ListingLoaded(vec![parent("/work"), entry("/work", "choice.txt", false)]),
    );
    update(&mut model, Msg::CursorDown);

    for msg in [Msg::OpenSelected, Msg::OpenInEditor] {
        let cmd = single(update(&mut model, msg));
        match cmd {
            Cmd::WriteSelectionAndQuit { output, selection } => {
                assert_eq!(output, PathBuf::from("/tmp/picked"));
                assert_eq!(selection, PathBuf::from("/work/choice.txt"));
            }
            other => panic!("expected a selection report, got {other:?}"),
        }
    }
}

#[test]
fn the_editor_key_opens_the_editor_when_no_selection_path_is_set() {
    let mut model = model_with(vec![parent("/work"), entry("/work", "choice.txt", false)]);
    update(&mut model, Msg::CursorDown);

    let cmd = single(update(&mut model, Msg::OpenInEditor));
    match cmd {
        Cmd::OpenEditor(path) => assert_eq!(path, PathBuf::from("/work/choice.txt")),
        other => panic!("expected an editor launch, got {other:?}"),
    }
}

#[test]
fn toggling_hidden_entries_reloads_the_listing() {
    let mut model = model_with(vec![parent("/work")]);
    assert!(!model.show_hidden);

    let cmd = single(update(&mut model, Msg::ToggleHidden));
    assert!(model.show_hidden);
    assert!(matches!(cmd, Cmd::LoadListing(_)));
}

#[test]
fn failures_surface_as_an_error_banner() {
    let mut model = model_with(vec![parent("/work")]);

    update(
        &mut model,
        Msg::OperationFailed("could not delete item".to_string()),
    );

    assert_eq!(model.entry_list.status_text(), Some("could not delete item"));
}

#[tokio::test]
async fn a_mutation_always_arrives_with_its_refreshed_listing() {
    let _guard = cwd_lock();
    let scratch = scratch();
    std::env::set_current_dir(&scratch.path).unwrap();

    let msg = run_file_operation(
        FileOperation::CreateFile("made.txt".to_string()),
        false,
        false,
    )
    .await;

    match msg {
        Msg::OperationComplete { entries, status } => {
            assert_eq!(status, "Successfully created file");
            assert!(entries.iter().any(|entry| entry.short_name == "made.txt"));
        }
        other => panic!("expected a completed operation, got {other:?}"),
    }
}

#[tokio::test]
async fn a_failed_mutation_reports_without_replacing_the_listing() {
    let _guard = cwd_lock();
    let scratch = scratch();
    std::env::set_current_dir(&scratch.path).unwrap();
    touch(&scratch.path.join("taken.txt"));

    let msg = run_file_operation(
        FileOperation::CreateFile("taken.txt".to_string()),
        false,
        false,
    )
    .await;

    assert!(matches!(msg, Msg::OperationFailed(_)));
}

#[tokio::test]
async fn loading_a_listing_descends_and_reports_entries() {
    let _guard = cwd_lock();
    let scratch = scratch();
    mkdir(&scratch.path.join("inner"));
    touch(&scratch.path.join("inner").join("present.txt"));

    let msg = run_load_listing(
        scratch.path.join("inner").to_string_lossy().into_owned(),
        false,
        false,
    )
    .await;

    match msg {
        Msg::ListingLoaded(entries) => {
            assert!(entries.iter().any(|entry| entry.short_name == "present.txt"));
        }
        other => panic!("expected a listing, got {other:?}"),
    }
}
