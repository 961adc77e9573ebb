use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::tea_model::{FiletreeMode, Model};
use crate::app::ui_components::{Help, StatusBar};

const PROMPT_STYLE: Style = Style::new().fg(Color::Yellow);

/// Draws the whole frame from the model. Pure: rendering never mutates
/// state or issues commands.
pub fn view(model: &Model, frame: &mut Frame) {
    let has_prompt_row = matches!(
        model.mode,
        FiletreeMode::CreatingFile
            | FiletreeMode::CreatingDirectory
            | FiletreeMode::Renaming
            | FiletreeMode::ConfirmingDelete
            | FiletreeMode::Moving
    );

    let constraints = if has_prompt_row {
        vec![
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(1)]
    };
    let rows = Layout::vertical(constraints).split(frame.area());

    if model.show_help {
        frame.render_widget(&Help, rows[0]);
    } else {
        frame.render_widget(&model.entry_list, rows[0]);
    }

    if has_prompt_row {
        match model.mode {
            FiletreeMode::CreatingFile
            | FiletreeMode::CreatingDirectory
            | FiletreeMode::Renaming => {
                frame.render_widget(&model.text_input, rows[1]);
            }
            FiletreeMode::ConfirmingDelete => {
                let name = model
                    .staged_target
                    .as_ref()
                    .map(|staged| staged.short_name.clone())
                    .unwrap_or_default();
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format!("Delete {name}? press y to confirm, esc to cancel"),
                        PROMPT_STYLE,
                    ))),
                    rows[1],
                );
            }
            FiletreeMode::Moving => {
                let name = model
                    .pending_move
                    .as_ref()
                    .map(|pending| pending.short_name.clone())
                    .unwrap_or_default();
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format!("Moving {name}: navigate to the target, enter confirms"),
                        PROMPT_STYLE,
                    ))),
                    rows[1],
                );
            }
            FiletreeMode::Idle => {}
        }
    }

    let (cursor, total) = model.entry_list.cursor_position();
    let status_bar = StatusBar {
        mode_label: mode_label(model.mode).to_string(),
        directory: model
            .entry_list
            .current_directory()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        selection: model
            .selected_entry()
            .map(|entry| entry.short_name.clone())
            .unwrap_or_default(),
        cursor,
        total,
    };
    frame.render_widget(&status_bar, rows[rows.len() - 1]);
}

fn mode_label(mode: FiletreeMode) -> &'static str {
    match mode {
        FiletreeMode::Idle => "BROWSE",
        FiletreeMode::CreatingFile => "NEW FILE",
        FiletreeMode::CreatingDirectory => "NEW DIR",
        FiletreeMode::ConfirmingDelete => "DELETE",
        FiletreeMode::Renaming => "RENAME",
        FiletreeMode::Moving => "MOVE",
    }
}
