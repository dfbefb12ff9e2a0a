//! Gridstat - an interactive matrix editor for the terminal.
//!
//! # Usage
//!
//! ```bash
//! gridstat
//! gridstat --rows 8 --cols 6 --seed 42
//! gridstat --json --seed 42
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gridstat::app::App;
use gridstat::config::{
    CellDeleteMode, ConfigFlags, DEFAULT_COLS, DEFAULT_ROWS, clear_config_flags,
    global_config_path, load_config_flags, local_override_path, parse_flag_tokens,
    save_config_flags,
};
use gridstat::matrix::{self, DEFAULT_NEIGHBOR_COUNT};
use gridstat::perf;
use gridstat::report::Report;

/// An interactive matrix editor with row sums, medians and nearest-value
/// highlighting
#[derive(Parser, Debug)]
#[command(name = "gridstat", version, about, long_about = None)]
struct Cli {
    /// Number of rows in the starting matrix [default: 5]
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Number of columns in the starting matrix [default: 5]
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Seed for the random amounts
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// How many nearest cells to highlight on hover [default: 5]
    #[arg(long, value_name = "K")]
    neighbors: Option<usize>,

    /// What deleting a cell does [default: zero]
    #[arg(long, value_enum)]
    cell_delete: Option<CellDeleteMode>,

    /// Print the starting matrix and its statistics as JSON and exit
    #[arg(long)]
    json: bool,

    /// Enable performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed event debug log to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // Initialize logging; stderr keeps stdout clean for --json
    let level = if effective.perf {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?effective, "effective flags");

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("GRIDSTAT_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_event_log_path(debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize debug log {}: {}",
            debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let rows = effective.rows.unwrap_or(DEFAULT_ROWS);
    let cols = effective.cols.unwrap_or(DEFAULT_COLS);

    if cli.json {
        let mut rng = matrix::seeded_rng(effective.seed);
        let grid = matrix::generate(rows, cols, &mut rng);
        let json = Report::from_matrix(&grid)
            .to_json()
            .context("Failed to serialize report")?;
        println!("{json}");
        return Ok(());
    }

    // Run the application
    let mut app = App::new(rows, cols)
        .with_seed(effective.seed)
        .with_neighbor_count(effective.neighbors.unwrap_or(DEFAULT_NEIGHBOR_COUNT))
        .with_cell_delete(effective.cell_delete.unwrap_or_default())
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
