// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host object property expectations for headless browser engines.
//!
//! A headless engine is validated by comparing the own properties of its
//! host objects against lists recorded from real browsers. Every test case
//! carries a real-browser [`ExpectationSet`](expectation::ExpectationSet)
//! and an [`NyiExpectationSet`](expectation::NyiExpectationSet) describing
//! what the engine currently does. This crate resolves both for a simulated
//! browser, accumulates coverage statistics and checks engine output.
//!
#![doc = include_str!("../README.md")]

pub mod browser;
pub mod check;
pub mod cli;
/// Re-exported coverage arithmetic and statistics from hostprops-stats.
pub mod coverage {
    pub use hostprops_stats::{
        coverage_percent, errored_properties, format_percent, implemented_properties,
        missing_properties, ClassCoverage, CoverageStats, CoverageTotals,
    };
}
#[doc(hidden)]
pub mod env;
pub mod expectation;
/// Re-exported property ordering from hostprops-diff.
pub mod ordering {
    pub use hostprops_diff::{compare_property_names, sort_properties};
}
#[doc(hidden)]
pub mod output_diagnostic;
pub mod property;
pub mod registry;
pub mod report;
#[doc(hidden)]
pub mod run;
