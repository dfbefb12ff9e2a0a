//! Timing scopes and an optional event log for the render loop.
//!
//! Scopes report through `tracing` when enabled with `--perf`. The event log
//! is a plain text file (`--debug-log` or `GRIDSTAT_DEBUG_LOG`) with one
//! timestamped line per message, frame and edit.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
static EVENT_LOG: LazyLock<Mutex<EventLog>> = LazyLock::new(|| Mutex::new(EventLog::default()));

/// Reports its lifetime when dropped.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(scope = self.name, elapsed_ms, "perf");
        log_event("perf", format!("{} {elapsed_ms:.3} ms", self.name));
    }
}

#[derive(Debug)]
struct EventLog {
    start: Instant,
    written: u64,
    writer: Option<BufWriter<File>>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            written: 0,
            writer: None,
        }
    }
}

fn event_log() -> MutexGuard<'static, EventLog> {
    EVENT_LOG.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start writing the event log to `path`, or stop when `None`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or written.
pub fn set_event_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut log = event_log();
    if let Some(writer) = log.writer.as_mut() {
        writer.flush()?;
    }
    *log = EventLog::default();
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "gridstat event log start")?;
        writer.flush()?;
        log.writer = Some(writer);
    }
    Ok(())
}

pub fn is_event_log_enabled() -> bool {
    event_log().writer.is_some()
}

pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut log = event_log();
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    let seq = log.written;
    let Some(writer) = log.writer.as_mut() else {
        return;
    };
    let written = writeln!(
        writer,
        "#{seq:<6} [{elapsed_ms:>10.3} ms] {name}: {}",
        detail.as_ref()
    )
    .and_then(|()| writer.flush());
    if written.is_ok() {
        log.written += 1;
    }
}
