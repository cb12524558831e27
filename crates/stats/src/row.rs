// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-class coverage rows and running totals.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::coverage::{
    coverage_percent, errored_properties, implemented_properties, missing_properties,
};

/// Coverage of one host object class for the simulated browser
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCoverage {
    /// Sequence number within the run
    pub seq: u64,
    /// Interface name, e.g. `HTMLDivElement`
    pub class_name: String,
    /// Number of distinct properties the real browser exposes
    pub real_count: usize,
    /// Exposed by both the engine and the real browser
    pub implemented: Vec<String>,
    /// Exposed by the engine only
    pub errored: Vec<String>,
    /// Exposed by the real browser only
    pub missing: Vec<String>,
}

impl ClassCoverage {
    /// Compute the row for one class from its two resolved lists
    pub fn compute(
        seq: u64,
        class_name: impl Into<String>,
        real: &[String],
        nyi: &[String],
    ) -> Self {
        Self {
            seq,
            class_name: class_name.into(),
            real_count: real.iter().collect::<HashSet<_>>().len(),
            implemented: implemented_properties(nyi, real),
            errored: errored_properties(nyi, real),
            missing: missing_properties(nyi, real),
        }
    }

    /// Coverage percentage for this class alone
    pub fn percent(&self) -> Option<u32> {
        coverage_percent(self.implemented.len(), self.real_count)
    }

    /// True when the engine matches the real browser exactly
    pub fn is_complete(&self) -> bool {
        self.errored.is_empty() && self.missing.is_empty()
    }
}

/// Running totals across every recorded class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageTotals {
    pub classes: usize,
    pub real: usize,
    pub implemented: usize,
    pub errored: usize,
    pub missing: usize,
}

impl CoverageTotals {
    /// Fold one row into the totals
    pub fn add(&mut self, row: &ClassCoverage) {
        self.classes += 1;
        self.real += row.real_count;
        self.implemented += row.implemented.len();
        self.errored += row.errored.len();
        self.missing += row.missing.len();
    }

    /// `round(100 * implemented / real)`, `None` when nothing was expected
    pub fn percent(&self) -> Option<u32> {
        coverage_percent(self.implemented, self.real)
    }
}
