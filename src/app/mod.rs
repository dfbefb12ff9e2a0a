//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Single place where state changes
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Direction, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::{CellDeleteMode, DEFAULT_COLS, DEFAULT_ROWS};
use crate::matrix::{self, DEFAULT_NEIGHBOR_COUNT};

/// Main application struct that owns the startup settings and runs the
/// event loop.
#[derive(Debug, Clone)]
pub struct App {
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    neighbor_count: usize,
    cell_delete: CellDeleteMode,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create an application that starts with a `rows` x `cols` matrix.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seed: None,
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
            cell_delete: CellDeleteMode::Zero,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Fix the random seed so the initial matrix and added rows repeat.
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells highlighted on hover.
    pub const fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = count;
        self
    }

    pub const fn with_cell_delete(mut self, mode: CellDeleteMode) -> Self {
        self.cell_delete = mode;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Build the starting model for a terminal of `screen_size`.
    pub fn initial_model(&self, screen_size: (u16, u16)) -> Model {
        let mut rng = matrix::seeded_rng(self.seed);
        let grid = matrix::generate(self.rows, self.cols, &mut rng);
        let mut model = Model::new(grid, rng, screen_size)
            .with_neighbor_count(self.neighbor_count)
            .with_cell_delete(self.cell_delete);
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        model
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests;
