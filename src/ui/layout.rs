//! Screen geometry of the grid.
//!
//! Rendering and mouse hit-testing both go through [`GridLayout`] so a click
//! always lands on what was drawn there.

use ratatui::layout::Rect;

use crate::matrix::{CellPos, Matrix};

use super::viewport::Viewport;

pub const LEFT_PADDING: u16 = 1;
/// Width of one matrix column including the gap after it.
pub const CELL_WIDTH: u16 = 12;
pub const SUM_WIDTH: u16 = 10;
pub const ACTIONS_WIDTH: u16 = 9;

pub const ADD_ROW_LABEL: &str = "[ Add Row ]";
pub const DELETE_MARKER: &str = "[x]";
pub const REMOVE_ROW_LABEL: &str = "[del]";

/// Add-row button and column headers.
pub const HEADER_ROWS: u16 = 2;
/// Average labels, medians, toast line and status bar.
pub const FOOTER_ROWS: u16 = 4;

/// Body rows available in a terminal `total_height` rows tall.
pub const fn body_height(total_height: u16) -> u16 {
    total_height.saturating_sub(HEADER_ROWS + FOOTER_ROWS)
}

/// Something clickable or hoverable in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTarget {
    AddRow,
    RemoveColumn(usize),
    /// A matrix cell; `delete` when the point is on its delete marker.
    Cell { pos: CellPos, delete: bool },
    RowSum(usize),
    RemoveRow(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    area: Rect,
    /// Columns laid out (the widest row).
    columns: usize,
    first_row: usize,
    visible_rows: usize,
}

impl GridLayout {
    pub fn new(area: Rect, matrix: &Matrix, viewport: &Viewport) -> Self {
        let visible = viewport.visible_range();
        Self {
            area,
            columns: matrix.widest_row(),
            first_row: visible.start,
            visible_rows: visible.len(),
        }
    }

    pub const fn area(&self) -> Rect {
        self.area
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub fn add_button(&self) -> Option<Rect> {
        #[allow(clippy::cast_possible_truncation)]
        let width = ADD_ROW_LABEL.len() as u16;
        self.clip(Rect::new(self.area.x + LEFT_PADDING, self.area.y, width, 1))
    }

    pub const fn header_y(&self) -> u16 {
        self.area.y + 1
    }

    /// Screen line of a matrix row, if it is on screen.
    pub fn row_y(&self, row: usize) -> Option<u16> {
        let rel = row.checked_sub(self.first_row)?;
        if rel >= self.visible_rows {
            return None;
        }
        let y = self.area.y + HEADER_ROWS + u16::try_from(rel).ok()?;
        (y < self.area.bottom()).then_some(y)
    }

    /// Matrix row drawn on screen line `y`.
    pub fn row_at(&self, y: u16) -> Option<usize> {
        let rel = usize::from(y.checked_sub(self.area.y + HEADER_ROWS)?);
        (rel < self.visible_rows).then_some(self.first_row + rel)
    }

    pub fn average_y(&self) -> u16 {
        (self.area.y + HEADER_ROWS).saturating_add(clamp_u16(self.visible_rows))
    }

    pub fn median_y(&self) -> u16 {
        self.average_y().saturating_add(1)
    }

    pub fn column_x(&self, col: usize) -> u16 {
        (self.area.x + LEFT_PADDING).saturating_add(clamp_u16(col).saturating_mul(CELL_WIDTH))
    }

    pub fn sum_x(&self) -> u16 {
        self.column_x(self.columns)
    }

    pub fn actions_x(&self) -> u16 {
        self.sum_x().saturating_add(SUM_WIDTH)
    }

    /// Drawable part of column `col` on line `y` (without the trailing gap).
    pub fn cell_rect(&self, col: usize, y: u16) -> Option<Rect> {
        self.clip(Rect::new(self.column_x(col), y, CELL_WIDTH - 1, 1))
    }

    pub fn sum_rect(&self, y: u16) -> Option<Rect> {
        self.clip(Rect::new(self.sum_x(), y, SUM_WIDTH - 1, 1))
    }

    pub fn actions_rect(&self, y: u16) -> Option<Rect> {
        self.clip(Rect::new(self.actions_x(), y, ACTIONS_WIDTH - 1, 1))
    }

    /// Where the delete marker sits inside an unclipped cell or header.
    pub fn delete_marker_x(&self, col: usize) -> u16 {
        #[allow(clippy::cast_possible_truncation)]
        let marker = DELETE_MARKER.len() as u16;
        self.column_x(col).saturating_add(CELL_WIDTH - 1 - marker)
    }

    /// What is drawn at (`x`, `y`).
    pub fn target_at(&self, x: u16, y: u16, matrix: &Matrix) -> Option<GridTarget> {
        if !self.area.contains((x, y).into()) {
            return None;
        }
        if y == self.area.y {
            return self
                .add_button()
                .filter(|button| button.contains((x, y).into()))
                .map(|_| GridTarget::AddRow);
        }
        if y == self.header_y() {
            let col = self.column_at(x)?;
            let on_marker = x >= self.delete_marker_x(col);
            return (on_marker && col < matrix.column_count())
                .then_some(GridTarget::RemoveColumn(col));
        }

        let row = self.row_at(y)?;
        if let Some(col) = self.column_at(x) {
            let pos = CellPos::new(row, col);
            matrix.cell(pos)?;
            let delete = x >= self.delete_marker_x(col);
            return Some(GridTarget::Cell { pos, delete });
        }
        let sum_x = self.sum_x();
        if x >= sum_x && x < sum_x.saturating_add(SUM_WIDTH - 1) {
            return Some(GridTarget::RowSum(row));
        }
        let actions_x = self.actions_x();
        #[allow(clippy::cast_possible_truncation)]
        let label = REMOVE_ROW_LABEL.len() as u16;
        if x >= actions_x && x < actions_x.saturating_add(label) {
            return Some(GridTarget::RemoveRow(row));
        }
        None
    }

    /// Matrix column under `x`, excluding the gap between columns.
    fn column_at(&self, x: u16) -> Option<usize> {
        let rel = x.checked_sub(self.area.x + LEFT_PADDING)?;
        let col = usize::from(rel / CELL_WIDTH);
        let in_gap = rel % CELL_WIDTH == CELL_WIDTH - 1;
        (col < self.columns && !in_gap).then_some(col)
    }

    fn clip(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        (!clipped.is_empty()).then_some(clipped)
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
