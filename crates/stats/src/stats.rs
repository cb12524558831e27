// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage accumulator shared across a run.

use crate::row::{ClassCoverage, CoverageTotals};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

#[derive(Default)]
struct Dataset {
    rows: Vec<ClassCoverage>,
    totals: CoverageTotals,
}

/// Accumulated per-class coverage rows and totals
pub struct CoverageStats {
    dataset: Arc<Mutex<Dataset>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl CoverageStats {
    /// Create a new in-memory accumulator
    pub fn new() -> Self {
        Self {
            dataset: Arc::new(Mutex::new(Dataset::default())),
            file_writer: None,
        }
    }

    /// Create an accumulator that also writes each row to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            dataset: Arc::new(Mutex::new(Dataset::default())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record one class from its resolved real and NYI lists
    pub fn record(&self, class_name: &str, real: &[String], nyi: &[String]) -> ClassCoverage {
        let mut dataset = self.dataset.lock();
        let seq = dataset.rows.len() as u64;
        let row = ClassCoverage::compute(seq, class_name, real, nyi);

        dataset.totals.add(&row);
        dataset.rows.push(row.clone());

        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&row) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }

        row
    }

    /// Get all recorded rows in recording order
    pub fn rows(&self) -> Vec<ClassCoverage> {
        self.dataset.lock().rows.clone()
    }

    /// Get the running totals
    pub fn totals(&self) -> CoverageTotals {
        self.dataset.lock().totals
    }

    /// Overall coverage percentage
    pub fn percent(&self) -> Option<u32> {
        self.totals().percent()
    }

    /// Rows where the engine deviates from the real browser
    pub fn incomplete(&self) -> Vec<ClassCoverage> {
        self.dataset
            .lock()
            .rows
            .iter()
            .filter(|r| !r.is_complete())
            .cloned()
            .collect()
    }

    /// Get the number of recorded rows
    pub fn len(&self) -> usize {
        self.dataset.lock().rows.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.dataset.lock().rows.is_empty()
    }

    /// Clear all rows and totals
    pub fn clear(&self) {
        let mut dataset = self.dataset.lock();
        dataset.rows.clear();
        dataset.totals = CoverageTotals::default();
    }
}

impl Default for CoverageStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CoverageStats {
    fn clone(&self) -> Self {
        Self {
            dataset: Arc::clone(&self.dataset),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
