// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The property sort rule: case-insensitive, ties broken case-sensitively.

use std::cmp::Ordering;

/// Compare two property names
///
/// `align` < `Align2` < `ALIGNED`; `Align` and `align` fall back to a plain
/// byte comparison so the order is total.
pub fn compare_property_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Sort a property list in place
pub fn sort_properties(names: &mut [String]) {
    names.sort_by(|a, b| compare_property_names(a, b));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
