// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Set arithmetic between resolved property lists.
//!
//! All helpers keep the strings verbatim (no case folding) and preserve the
//! order of the list they draw from. Duplicates are reported once.

use std::collections::HashSet;

/// Properties the engine exposes that the real browser also exposes.
///
/// Returned in `nyi` order.
pub fn implemented_properties(nyi: &[String], real: &[String]) -> Vec<String> {
    let real: HashSet<&str> = real.iter().map(String::as_str).collect();
    retain_unique(nyi, |name| real.contains(name))
}

/// Properties the engine exposes that the real browser does not.
///
/// Returned in `nyi` order.
pub fn errored_properties(nyi: &[String], real: &[String]) -> Vec<String> {
    let real: HashSet<&str> = real.iter().map(String::as_str).collect();
    retain_unique(nyi, |name| !real.contains(name))
}

/// Properties the real browser exposes that the engine is still missing.
///
/// Returned in `real` order.
pub fn missing_properties(nyi: &[String], real: &[String]) -> Vec<String> {
    let nyi: HashSet<&str> = nyi.iter().map(String::as_str).collect();
    retain_unique(real, |name| !nyi.contains(name))
}

fn retain_unique(from: &[String], keep: impl Fn(&str) -> bool) -> Vec<String> {
    let mut seen = HashSet::new();
    from.iter()
        .filter(|name| keep(name.as_str()) && seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Coverage as a whole percentage, rounded half away from zero.
///
/// Returns `None` when there is nothing to cover (`real == 0`).
pub fn coverage_percent(implemented: usize, real: usize) -> Option<u32> {
    if real == 0 {
        return None;
    }
    let percent = (100.0 * implemented as f64 / real as f64).round();
    Some(percent as u32)
}

/// Render a percentage the way reports show it: `"33%"`, or `"n/a"`.
pub fn format_percent(percent: Option<u32>) -> String {
    match percent {
        Some(p) => format!("{}%", p),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
