use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;

use crate::app::{App, Direction, Message, Model};
use crate::ui::layout::GridTarget;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                Some(Message::Resize(*w, *h))
            }
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                .then_some(Message::HideHelp);
        }

        let target = model
            .grid_layout()
            .target_at(mouse.column, mouse.row, &model.matrix);

        match mouse.kind {
            // Only entering a new target counts; motion inside one is ignored.
            MouseEventKind::Moved => match target {
                Some(GridTarget::Cell { pos, .. }) => {
                    (model.hovered_cell != Some(pos)).then_some(Message::HoverCell(pos))
                }
                Some(GridTarget::RowSum(row)) => {
                    (model.hovered_sum_row != Some(row)).then_some(Message::HoverRowSum(row))
                }
                _ => model.hover_active().then_some(Message::ClearHover),
            },
            MouseEventKind::Up(MouseButton::Left) => match target? {
                GridTarget::AddRow => Some(Message::AddRow),
                GridTarget::RemoveColumn(col) => Some(Message::RemoveColumn(col)),
                // the delete marker is only shown, and only clickable, on the hovered cell
                GridTarget::Cell { pos, delete: true } if model.hovered_cell == Some(pos) => {
                    Some(Message::DeleteCell(pos))
                }
                GridTarget::Cell { pos, .. } => Some(Message::IncrementCell(pos)),
                GridTarget::RemoveRow(row) => Some(Message::RemoveRow(row)),
                GridTarget::RowSum(_) => None,
            },
            MouseEventKind::ScrollDown => model
                .viewport
                .can_scroll_down()
                .then_some(Message::ScrollDown(1)),
            MouseEventKind::ScrollUp => model
                .viewport
                .can_scroll_up()
                .then_some(Message::ScrollUp(1)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let cursor = model.cursor;
        let cursor_on_cell = model.matrix.cell(cursor).is_some();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Message::Quit);
        }

        match key.code {
            // Cursor
            KeyCode::Char('k') | KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Char('h') | KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Char('l') | KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Esc => model.hover_active().then_some(Message::ClearHover),

            // Edits
            KeyCode::Enter | KeyCode::Char(' ' | '+') if cursor_on_cell => {
                Some(Message::IncrementCell(cursor))
            }
            KeyCode::Char('x') | KeyCode::Delete if cursor_on_cell => {
                Some(Message::DeleteCell(cursor))
            }
            KeyCode::Char('d') if cursor.row < model.matrix.row_count() => {
                Some(Message::RemoveRow(cursor.row))
            }
            KeyCode::Char('c') if cursor_on_cell => Some(Message::RemoveColumn(cursor.col)),
            KeyCode::Char('a') => Some(Message::AddRow),
            KeyCode::Char('%' | 'p') if cursor.row < model.matrix.row_count() => {
                Some(Message::ToggleRowPercent)
            }

            // Scrolling
            KeyCode::PageDown => model
                .viewport
                .can_scroll_down()
                .then_some(Message::PageDown),
            KeyCode::PageUp => model.viewport.can_scroll_up().then_some(Message::PageUp),

            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            KeyCode::Char('q') => Some(Message::Quit),

            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
