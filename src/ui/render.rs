use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;
use crate::matrix::stats::{format_percentage, format_stat, percentage_of};
use crate::matrix::{Cell, CellPos, column_medians, row_sum};

use super::layout::{ADD_ROW_LABEL, CELL_WIDTH, DELETE_MARKER, GridLayout, REMOVE_ROW_LABEL};
use super::{overlays, status, style};

const CELL_TEXT_WIDTH: usize = (CELL_WIDTH - 1) as usize;

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    let layout = GridLayout::new(area, &model.matrix, &model.viewport);

    put(
        frame,
        layout.add_button(),
        Line::styled(ADD_ROW_LABEL, style::add_row_style()),
    );
    render_header(model, frame, &layout);
    render_body(model, frame, &layout);
    render_footer(model, frame, &layout);

    if area.height >= 2 && model.active_toast().is_some() {
        let toast_area = Rect {
            y: area.bottom() - 2,
            height: 1,
            ..area
        };
        status::render_toast_bar(model, frame, toast_area);
    }
    if area.height >= 1 {
        let status_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        status::render_status_bar(model, frame, status_area);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn put(frame: &mut Frame, rect: Option<Rect>, line: Line<'_>) {
    if let Some(rect) = rect {
        frame.render_widget(Paragraph::new(line), rect);
    }
}

fn render_header(model: &Model, frame: &mut Frame, layout: &GridLayout) {
    let y = layout.header_y();
    let label_width = CELL_TEXT_WIDTH - DELETE_MARKER.len();
    for col in 0..model.matrix.column_count() {
        let label = format!("N = {}", col + 1);
        let line = Line::from(vec![
            Span::styled(
                format!("{label:<label_width$.label_width$}"),
                style::header_style(),
            ),
            Span::styled(DELETE_MARKER, style::control_style()),
        ]);
        put(frame, layout.cell_rect(col, y), line);
    }
    put(
        frame,
        layout.sum_rect(y),
        Line::styled("Row Sum", style::header_style()),
    );
    put(
        frame,
        layout.actions_rect(y),
        Line::styled("Actions", style::header_style()),
    );
}

fn render_body(model: &Model, frame: &mut Frame, layout: &GridLayout) {
    for row in model.viewport.visible_range() {
        let (Some(y), Some(cells)) = (layout.row_y(row), model.matrix.row(row)) else {
            continue;
        };
        let sum = row_sum(cells);
        let percent_mode = model.hovered_sum_row == Some(row);
        for (col, cell) in cells.iter().enumerate() {
            let line = cell_line(model, CellPos::new(row, col), cell, sum, percent_mode);
            put(frame, layout.cell_rect(col, y), line);
        }
        put(
            frame,
            layout.sum_rect(y),
            Line::styled(sum.to_string(), style::sum_style(percent_mode)),
        );
        put(
            frame,
            layout.actions_rect(y),
            Line::styled(REMOVE_ROW_LABEL, style::control_style()),
        );
    }
}

fn cell_line(
    model: &Model,
    pos: CellPos,
    cell: &Cell,
    sum: i64,
    percent_mode: bool,
) -> Line<'static> {
    let width = CELL_TEXT_WIDTH;
    let base = style::cell_style(
        cell.amount,
        model.highlighted.contains(&cell.id),
        model.cursor == pos,
    );

    if percent_mode {
        let percent = percentage_of(cell.amount, sum);
        let text = format!("{:<width$}", format_percentage(percent));
        let fill = filled_width(percent, width).min(text.len());
        let (head, tail) = text.split_at(fill);
        return Line::from(vec![
            Span::styled(head.to_string(), style::percent_fill_style()),
            Span::styled(tail.to_string(), base),
        ]);
    }

    let text = if cell.amount == 0 {
        "-".to_string()
    } else {
        cell.amount.to_string()
    };
    if model.hovered_cell == Some(pos) {
        let text_width = width - DELETE_MARKER.len();
        Line::from(vec![
            Span::styled(format!("{text:<text_width$.text_width$}"), base),
            Span::styled(DELETE_MARKER, style::control_style()),
        ])
    } else {
        Line::styled(format!("{text:<width$}"), base)
    }
}

/// Columns of a `width`-wide cell covered by `percent`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn filled_width(percent: f64, width: usize) -> usize {
    let share = (percent / 100.0).clamp(0.0, 1.0);
    ((share * width as f64).round() as usize).min(width)
}

fn render_footer(model: &Model, frame: &mut Frame, layout: &GridLayout) {
    let average_y = layout.average_y();
    let median_y = layout.median_y();
    for (col, median) in column_medians(&model.matrix).into_iter().enumerate() {
        put(
            frame,
            layout.cell_rect(col, average_y),
            Line::styled("Average", style::label_style()),
        );
        put(
            frame,
            layout.cell_rect(col, median_y),
            Line::styled(format_stat(median), style::median_style()),
        );
    }
    put(
        frame,
        layout.sum_rect(median_y),
        Line::styled("Median", style::label_style()),
    );
}
