use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::app::event_msg::{Msg, Sub};
use crate::app::tea_model::{FiletreeMode, Model};

/// Event sources the running program listens to.
pub fn subscriptions(_model: &Model) -> Vec<Sub> {
    vec![Sub::KeyboardInput, Sub::TerminalResize]
}

/// Translates a terminal event into a message, given the current mode.
/// Returns None for events that mean nothing right now.
pub fn crossterm_to_msg(event: Event, model: &Model) -> Option<Msg> {
    match event {
        Event::Resize(width, height) => Some(Msg::TerminalResize(width, height)),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl-C quits from any state.
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(Msg::Quit);
            }
            if !model.active {
                return None;
            }
            if model.show_help {
                return match key.code {
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                        Some(Msg::ToggleHelp)
                    }
                    _ => None,
                };
            }
            if model.is_filtering() {
                return Some(Msg::FilterKey(key));
            }
            match model.mode {
                FiletreeMode::CreatingFile
                | FiletreeMode::CreatingDirectory
                | FiletreeMode::Renaming => match key.code {
                    KeyCode::Enter => Some(Msg::Submit),
                    KeyCode::Esc => Some(Msg::Cancel),
                    _ => Some(Msg::InputKey(key)),
                },
                FiletreeMode::ConfirmingDelete => match key.code {
                    KeyCode::Char('y') => Some(Msg::ConfirmDelete),
                    KeyCode::Esc => Some(Msg::Cancel),
                    _ => None,
                },
                FiletreeMode::Moving => match key.code {
                    KeyCode::Enter => Some(Msg::ConfirmMove),
                    KeyCode::Esc => Some(Msg::Cancel),
                    _ => navigation_msg(key.code),
                },
                FiletreeMode::Idle => match key.code {
                    KeyCode::Char('q') => Some(Msg::Quit),
                    KeyCode::Char('n') => Some(Msg::StartCreateFile),
                    KeyCode::Char('N') => Some(Msg::StartCreateDirectory),
                    KeyCode::Char('x') => Some(Msg::StartDelete),
                    KeyCode::Char('r') => Some(Msg::StartRename),
                    KeyCode::Char('m') => Some(Msg::StartMove),
                    KeyCode::Char('c') => Some(Msg::CopyItem),
                    KeyCode::Char('z') => Some(Msg::ZipItem),
                    KeyCode::Char('u') => Some(Msg::UnzipItem),
                    KeyCode::Char('y') => Some(Msg::CopyPathToClipboard),
                    KeyCode::Char('e') => Some(Msg::OpenInEditor),
                    KeyCode::Char('?') => Some(Msg::ToggleHelp),
                    KeyCode::Esc => Some(Msg::Cancel),
                    code => navigation_msg(code),
                },
            }
        }
        _ => None,
    }
}

/// Keys that move around the listing. Shared between Idle and Moving so a
/// staged move can be carried into another directory.
fn navigation_msg(code: KeyCode) -> Option<Msg> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::CursorDown),
        KeyCode::Char('g') => Some(Msg::GoToTop),
        KeyCode::Char('G') => Some(Msg::GoToBottom),
        KeyCode::Char(' ') => Some(Msg::OpenSelected),
        KeyCode::Char('.') => Some(Msg::ToggleHidden),
        KeyCode::Char('~') => Some(Msg::GoHome),
        KeyCode::Char('R') => Some(Msg::GoRoot),
        KeyCode::Char('-') => Some(Msg::GoPrevious),
        KeyCode::Char('/') => Some(Msg::FilterKey(crossterm::event::KeyEvent::new(
            KeyCode::Char('/'),
            KeyModifiers::NONE,
        ))),
        _ => None,
    }
}

/// Key/description pairs shown by the help overlay.
pub fn bindings() -> &'static [(&'static str, &'static str)] {
    &[
        ("j / ↓", "move cursor down"),
        ("k / ↑", "move cursor up"),
        ("g / G", "jump to top / bottom"),
        ("space", "open directory or select file"),
        ("-", "go to parent directory"),
        ("~", "go to home directory"),
        ("R", "go to filesystem root"),
        (".", "toggle hidden entries"),
        ("/", "filter the listing"),
        ("n", "create a file"),
        ("N", "create a directory"),
        ("r", "rename the selected entry"),
        ("x", "delete the selected entry (y confirms)"),
        ("m", "stage a move, enter confirms in target"),
        ("c", "copy the selected entry"),
        ("z", "zip the selected entry"),
        ("u", "unzip the selected archive"),
        ("y", "copy the selected path to the clipboard"),
        ("e", "open the selected file in $EDITOR"),
        ("?", "toggle this help"),
        ("esc", "cancel / clear filter"),
        ("q / ctrl-c", "quit"),
    ]
}
