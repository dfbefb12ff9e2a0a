// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. matrix::MatrixError)
    clippy::module_name_repetitions
)]

//! # Gridstat
//!
//! An interactive matrix of integer amounts in the terminal.
//!
//! Gridstat shows a grid of random amounts with:
//! - Row sums, column medians and row percentages
//! - Hover highlighting of the cells nearest in value
//! - Mouse and keyboard editing (increment, delete, add and remove rows/columns)
//!
//! ## Architecture
//!
//! Gridstat uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`matrix`]: Immutable matrix, pure transforms and statistics
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults
//! - [`report`]: JSON snapshot of a matrix and its statistics
//! - [`perf`]: Timing and event logging

pub mod app;
pub mod config;
pub mod matrix;
pub mod perf;
pub mod report;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::matrix::{Cell, CellPos, Matrix};
    pub use crate::ui::viewport::Viewport;
}
