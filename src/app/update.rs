use crate::app::Model;
use crate::app::model::{Direction, ToastLevel};
use crate::matrix::{CellPos, MatrixError};

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Hover
    /// Pointer entered a cell
    HoverCell(CellPos),
    /// Pointer entered a row-sum cell
    HoverRowSum(usize),
    /// Pointer left every hoverable target
    ClearHover,
    /// Move the keyboard cursor (a hover-enter on the new cell)
    MoveCursor(Direction),
    /// Toggle percentage display for the cursor row
    ToggleRowPercent,

    // Edits
    /// Add 1 to a cell's amount
    IncrementCell(CellPos),
    /// Delete a cell (zero or remove, per the configured mode)
    DeleteCell(CellPos),
    /// Remove a whole row
    RemoveRow(usize),
    /// Remove a column from every row
    RemoveColumn(usize),
    /// Append a row of random amounts
    AddRow,

    // Scrolling
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,

    // Help
    ToggleHelp,
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    /// Quit the application
    Quit,
}

/// Apply one message to the model.
///
/// Every state transition happens here. Edits go through the pure matrix
/// functions and replace `model.matrix`.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::HoverCell(pos) => model.hover_cell(pos),
        Message::HoverRowSum(row) => model.hover_sum(row),
        Message::ClearHover => model.clear_hover(),
        Message::MoveCursor(direction) => model.move_cursor(direction),
        Message::ToggleRowPercent => {
            if model.hovered_sum_row.is_some() {
                model.clear_hover();
            } else {
                model.hover_sum(model.cursor.row);
            }
        }

        Message::IncrementCell(pos) => {
            let result = model.increment_cell(pos);
            report_rejected_edit(&mut model, "increment", result);
        }
        Message::DeleteCell(pos) => {
            let result = model.delete_cell(pos);
            report_rejected_edit(&mut model, "delete", result);
        }
        Message::RemoveRow(row) => model.remove_row(row),
        Message::RemoveColumn(col) => model.remove_column(col),
        Message::AddRow => {
            model.add_row();
            let last = model.matrix.row_count().saturating_sub(1);
            model.viewport.ensure_visible(last);
        }

        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        Message::Resize(width, height) => model.resize(width, height),
        Message::Redraw => {}
        Message::Quit => model.should_quit = true,
    }
    model
}

fn report_rejected_edit(model: &mut Model, action: &str, result: Result<(), MatrixError>) {
    if let Err(err) = result {
        tracing::debug!(action, %err, "edit rejected");
        model.show_toast(ToastLevel::Warning, format!("Cannot {action}: {err}"));
    }
}
