use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::matrix::stats::format_stat;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let dims = format!(
        "{}x{}",
        model.matrix.row_count(),
        model.matrix.column_count()
    );
    let cursor_info = model
        .matrix
        .cell(model.cursor)
        .map_or_else(String::new, |cell| {
            format!(
                "  cell {},{} = {}",
                model.cursor.row + 1,
                model.cursor.col + 1,
                cell.amount
            )
        });
    let row_info = model
        .focused_row_stats()
        .map_or_else(String::new, |(row, sum, average)| {
            format!("  row {}: sum {sum} avg {}", row + 1, format_stat(average))
        });

    let status = format!(
        " gridstat  {dims}{cursor_info}{row_info}  K={}  delete:{}  ?:help",
        model.neighbor_count,
        model.cell_delete.as_str()
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
