//! Diagnostics reporting for pipeline runs.
//!
//! The pipeline never halts on data-quality findings (mapped nutrient names
//! absent from the Nutrient table, orphan facts, duplicate pivot cells); it
//! reports them through a [`PipelineObserver`] and keeps going. The default
//! no-op implementation keeps library callers quiet; batch jobs typically
//! install [`StdErrObserver`] or [`FileObserver`].

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Observer interface for pipeline progress and data-quality diagnostics.
///
/// All methods default to no-ops, so implementors pick the events they care
/// about.
pub trait PipelineObserver: Send + Sync {
    /// A source table finished loading.
    fn on_table_loaded(&self, _table: &str, _rows: usize) {}

    /// Mapped source nutrient names not found in the loaded Nutrient table.
    /// Their canonical columns will be empty after reindexing.
    fn on_missing_nutrients(&self, _missing: &[&str]) {}

    /// Facts dropped by inner-join semantics.
    fn on_facts_dropped(&self, _unknown_food: usize, _unknown_nutrient: usize) {}

    /// Duplicate `(food, nutrient)` cells discarded by the pivot.
    fn on_duplicate_cells(&self, _count: usize) {}

    /// The output file was written.
    fn on_output_written(&self, _path: &Path, _rows: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl PipelineObserver for NullObserver {}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_table_loaded(&self, table: &str, rows: usize) {
        for o in &self.observers {
            o.on_table_loaded(table, rows);
        }
    }

    fn on_missing_nutrients(&self, missing: &[&str]) {
        for o in &self.observers {
            o.on_missing_nutrients(missing);
        }
    }

    fn on_facts_dropped(&self, unknown_food: usize, unknown_nutrient: usize) {
        for o in &self.observers {
            o.on_facts_dropped(unknown_food, unknown_nutrient);
        }
    }

    fn on_duplicate_cells(&self, count: usize) {
        for o in &self.observers {
            o.on_duplicate_cells(count);
        }
    }

    fn on_output_written(&self, path: &Path, rows: usize) {
        for o in &self.observers {
            o.on_output_written(path, rows);
        }
    }
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_table_loaded(&self, table: &str, rows: usize) {
        eprintln!("[pipeline][load] table={table} rows={rows}");
    }

    fn on_missing_nutrients(&self, missing: &[&str]) {
        eprintln!(
            "[pipeline][warn] {} mapped nutrient name(s) absent from Nutrient table: {}",
            missing.len(),
            missing.join("; ")
        );
    }

    fn on_facts_dropped(&self, unknown_food: usize, unknown_nutrient: usize) {
        eprintln!(
            "[pipeline][warn] dropped facts: unknown_food={unknown_food} unknown_nutrient={unknown_nutrient}"
        );
    }

    fn on_duplicate_cells(&self, count: usize) {
        eprintln!("[pipeline][warn] discarded {count} duplicate (food, nutrient) cell(s)");
    }

    fn on_output_written(&self, path: &Path, rows: usize) {
        eprintln!("[pipeline][ok] wrote {} rows to {}", rows, path.display());
    }
}

/// Appends pipeline events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are
    /// ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PipelineObserver for FileObserver {
    fn on_table_loaded(&self, table: &str, rows: usize) {
        self.append_line(&format!("{} load table={table} rows={rows}", unix_ts()));
    }

    fn on_missing_nutrients(&self, missing: &[&str]) {
        self.append_line(&format!(
            "{} warn missing_nutrients={}",
            unix_ts(),
            missing.join("; ")
        ));
    }

    fn on_facts_dropped(&self, unknown_food: usize, unknown_nutrient: usize) {
        self.append_line(&format!(
            "{} warn dropped_facts unknown_food={unknown_food} unknown_nutrient={unknown_nutrient}",
            unix_ts()
        ));
    }

    fn on_duplicate_cells(&self, count: usize) {
        self.append_line(&format!("{} warn duplicate_cells={count}", unix_ts()));
    }

    fn on_output_written(&self, path: &Path, rows: usize) {
        self.append_line(&format!(
            "{} ok wrote rows={} path={}",
            unix_ts(),
            rows,
            path.display()
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
