// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property-coverage statistics for host object compatibility runs.
//!
//! This crate holds the derived set arithmetic between a real-browser
//! property list and the engine's recorded ("not yet implemented") list,
//! and a running accumulator that collects one row per checked class.

mod coverage;
mod row;
mod stats;

pub use coverage::{
    coverage_percent, errored_properties, format_percent, implemented_properties,
    missing_properties,
};
pub use row::{ClassCoverage, CoverageTotals};
pub use stats::CoverageStats;
