use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use ratatui::layout::Rect;

use crate::config::CellDeleteMode;
use crate::matrix::{
    self, CellId, CellPos, DEFAULT_NEIGHBOR_COUNT, Matrix, MatrixError, row_average, row_sum,
};
use crate::ui::layout::{GridLayout, body_height};
use crate::ui::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The complete application state.
///
/// The matrix is replaced wholesale on every edit. Hover state is transient
/// and always refers to positions in the current matrix.
#[derive(Debug)]
pub struct Model {
    /// The matrix being edited
    pub matrix: Matrix,
    /// Source of amounts for appended rows
    rng: StdRng,
    /// Visible window of matrix rows
    pub viewport: Viewport,
    /// Terminal size the layout is computed for
    pub screen_size: (u16, u16),
    /// How many cells to highlight on hover
    pub neighbor_count: usize,
    /// Whether deleting a cell zeroes or removes it
    pub cell_delete: CellDeleteMode,
    /// Keyboard cursor; follows the pointer when it hovers a cell
    pub cursor: CellPos,
    /// Cell currently hovered, if any
    pub hovered_cell: Option<CellPos>,
    /// Ids of the cells nearest in value to the hovered cell
    pub highlighted: HashSet<CellId>,
    /// Row whose sum is hovered; its cells show percentages
    pub hovered_sum_row: Option<usize>,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    pub fn new(matrix: Matrix, rng: StdRng, screen_size: (u16, u16)) -> Self {
        let viewport = Viewport::new(screen_size.0, body_height(screen_size.1), matrix.row_count());
        Self {
            matrix,
            rng,
            viewport,
            screen_size,
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
            cell_delete: CellDeleteMode::default(),
            cursor: CellPos::default(),
            hovered_cell: None,
            highlighted: HashSet::new(),
            hovered_sum_row: None,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            toast: None,
            should_quit: false,
        }
    }

    pub const fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = count;
        self
    }

    pub const fn with_cell_delete(mut self, mode: CellDeleteMode) -> Self {
        self.cell_delete = mode;
        self
    }

    pub const fn screen_area(&self) -> Rect {
        Rect::new(0, 0, self.screen_size.0, self.screen_size.1)
    }

    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::new(self.screen_area(), &self.matrix, &self.viewport)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen_size = (width, height);
        self.viewport.resize(width, body_height(height));
    }

    pub const fn hover_active(&self) -> bool {
        self.hovered_cell.is_some() || self.hovered_sum_row.is_some()
    }

    /// Hover-enter on a cell: move the cursor there and recompute the
    /// highlighted neighbors.
    pub fn hover_cell(&mut self, pos: CellPos) {
        let Some(cell) = self.matrix.cell(pos) else {
            self.clear_hover();
            return;
        };
        self.cursor = pos;
        self.hovered_cell = Some(pos);
        self.hovered_sum_row = None;
        self.highlighted = matrix::nearest(&self.matrix, &cell, self.neighbor_count);
        crate::perf::log_event(
            "hover.cell",
            format!("row={} col={} highlighted={}", pos.row, pos.col, self.highlighted.len()),
        );
    }

    /// Hover a row sum: that row switches to percentage display.
    pub fn hover_sum(&mut self, row: usize) {
        if row >= self.matrix.row_count() {
            self.clear_hover();
            return;
        }
        self.hovered_cell = None;
        self.highlighted.clear();
        self.hovered_sum_row = Some(row);
    }

    pub fn clear_hover(&mut self) {
        self.hovered_cell = None;
        self.highlighted.clear();
        self.hovered_sum_row = None;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let rows = self.matrix.row_count();
        if rows == 0 {
            return;
        }
        let CellPos { mut row, mut col } = self.cursor;
        row = row.min(rows - 1);
        match direction {
            Direction::Up => row = row.saturating_sub(1),
            Direction::Down => row = (row + 1).min(rows - 1),
            Direction::Left => col = col.saturating_sub(1),
            Direction::Right => col += 1,
        }
        let width = self.matrix.row(row).map_or(0, <[_]>::len);
        col = col.min(width.saturating_sub(1));
        let pos = CellPos::new(row, col);
        self.cursor = pos;
        self.viewport.ensure_visible(row);
        self.hover_cell(pos);
    }

    /// Replace the matrix and drop hover state that no longer points at
    /// anything.
    pub fn replace_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
        self.viewport.set_total_rows(self.matrix.row_count());
        if self
            .hovered_cell
            .is_some_and(|pos| self.matrix.cell(pos).is_none())
        {
            self.hovered_cell = None;
            self.highlighted.clear();
        }
        if self
            .hovered_sum_row
            .is_some_and(|row| row >= self.matrix.row_count())
        {
            self.hovered_sum_row = None;
        }
        self.clamp_cursor();
    }

    /// Replace the matrix after cells were removed. Positions shift, so the
    /// hover no longer refers to the same cell and is dropped.
    fn replace_matrix_structure(&mut self, matrix: Matrix) {
        self.clear_hover();
        self.replace_matrix(matrix);
    }

    fn clamp_cursor(&mut self) {
        let rows = self.matrix.row_count();
        let row = self.cursor.row.min(rows.saturating_sub(1));
        let width = self.matrix.row(row).map_or(0, <[_]>::len);
        self.cursor = CellPos::new(row, self.cursor.col.min(width.saturating_sub(1)));
    }

    /// Add 1 to the amount at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CellOutOfBounds`] when there is no cell at `pos`;
    /// the matrix is left unchanged.
    pub fn increment_cell(&mut self, pos: CellPos) -> Result<(), MatrixError> {
        let current = self
            .matrix
            .cell(pos)
            .ok_or(MatrixError::CellOutOfBounds {
                row: pos.row,
                col: pos.col,
            })?;
        self.set_amount(pos, current.amount + 1)
    }

    /// Delete the cell at `pos` according to the configured delete mode.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CellOutOfBounds`] when there is no cell at `pos`.
    pub fn delete_cell(&mut self, pos: CellPos) -> Result<(), MatrixError> {
        match self.cell_delete {
            CellDeleteMode::Zero => self.set_amount(pos, 0),
            CellDeleteMode::Remove => {
                if self.matrix.cell(pos).is_none() {
                    return Err(MatrixError::CellOutOfBounds {
                        row: pos.row,
                        col: pos.col,
                    });
                }
                let next = matrix::remove_cell(&self.matrix, pos.row, pos.col);
                tracing::debug!(row = pos.row, col = pos.col, "cell removed");
                self.replace_matrix_structure(next);
                Ok(())
            }
        }
    }

    fn set_amount(&mut self, pos: CellPos, amount: i64) -> Result<(), MatrixError> {
        let next = matrix::try_update_cell_amount(&self.matrix, pos.row, pos.col, amount)?;
        tracing::debug!(row = pos.row, col = pos.col, amount, "cell updated");
        self.replace_matrix(next);
        Ok(())
    }

    pub fn remove_row(&mut self, row: usize) {
        let next = matrix::remove_row(&self.matrix, row);
        tracing::debug!(row, rows = next.row_count(), "row removed");
        self.replace_matrix_structure(next);
    }

    pub fn remove_column(&mut self, col: usize) {
        let next = matrix::remove_column(&self.matrix, col);
        tracing::debug!(col, "column removed");
        self.replace_matrix_structure(next);
    }

    pub fn add_row(&mut self) {
        let next = matrix::add_row(&self.matrix, &mut self.rng);
        tracing::debug!(rows = next.row_count(), "row added");
        self.replace_matrix(next);
    }

    /// Row whose statistics the status bar shows: the hovered sum row, else
    /// the cursor row.
    pub fn focused_row(&self) -> Option<usize> {
        self.hovered_sum_row
            .or_else(|| (self.cursor.row < self.matrix.row_count()).then_some(self.cursor.row))
    }

    /// Sum and average of the focused row.
    pub fn focused_row_stats(&self) -> Option<(usize, i64, f64)> {
        let index = self.focused_row()?;
        let row = self.matrix.row(index)?;
        Some((index, row_sum(row), row_average(row)))
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(3),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Matrix::default(), matrix::seeded_rng(Some(0)), (80, 24))
    }
}
