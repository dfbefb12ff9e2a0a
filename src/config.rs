//! Saved command-line defaults.
//!
//! Config files hold the same flags as the command line, one or more per
//! line. `#` starts a comment line. Values from later sources win: global
//! file, then local `.gridstatrc`, then the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// What deleting a cell does.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellDeleteMode {
    /// Set the amount to 0 and keep the cell
    #[default]
    Zero,
    /// Remove the cell from its row
    Remove,
}

impl CellDeleteMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Remove => "remove",
        }
    }
}

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub seed: Option<u64>,
    pub neighbors: Option<usize>,
    pub cell_delete: Option<CellDeleteMode>,
    pub perf: bool,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
            seed: other.seed.or(self.seed),
            neighbors: other.neighbors.or(self.neighbors),
            cell_delete: other.cell_delete.or(self.cell_delete),
            perf: self.perf || other.perf,
            debug_log: other
                .debug_log
                .clone()
                .or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("gridstat").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("gridstat")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gridstat").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("gridstat")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".gridstatrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# gridstat defaults (saved with --save)".to_string()];
    if let Some(rows) = flags.rows {
        lines.push(format!("--rows {rows}"));
    }
    if let Some(cols) = flags.cols {
        lines.push(format!("--cols {cols}"));
    }
    if let Some(seed) = flags.seed {
        lines.push(format!("--seed {seed}"));
    }
    if let Some(k) = flags.neighbors {
        lines.push(format!("--neighbors {k}"));
    }
    if let Some(mode) = flags.cell_delete {
        lines.push(format!("--cell-delete {}", mode.as_str()));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of raw arguments. Unknown tokens and unparsable
/// values are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--perf" {
            flags.perf = true;
            i += 1;
            continue;
        }
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        if !VALUE_FLAGS.contains(&name) {
            i += 1;
            continue;
        }
        let value = match inline_value {
            Some(value) => value,
            None => {
                i += 1;
                match tokens.get(i) {
                    Some(next) => next.as_str(),
                    None => break,
                }
            }
        };
        apply_value(&mut flags, name, value);
        i += 1;
    }
    flags
}

const VALUE_FLAGS: [&str; 6] = [
    "--rows",
    "--cols",
    "--seed",
    "--neighbors",
    "--cell-delete",
    "--debug-log",
];

fn apply_value(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--rows" => flags.rows = value.parse().ok().or(flags.rows),
        "--cols" => flags.cols = value.parse().ok().or(flags.cols),
        "--seed" => flags.seed = value.parse().ok().or(flags.seed),
        "--neighbors" => flags.neighbors = value.parse().ok().or(flags.neighbors),
        "--cell-delete" => flags.cell_delete = parse_cell_delete(value).or(flags.cell_delete),
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

fn parse_cell_delete(s: &str) -> Option<CellDeleteMode> {
    match s {
        "zero" => Some(CellDeleteMode::Zero),
        "remove" => Some(CellDeleteMode::Remove),
        _ => None,
    }
}
