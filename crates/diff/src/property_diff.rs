// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sorted comparison of an expected and an actual property list.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use crate::ordering::sort_properties;

/// Result of comparing two property lists
#[derive(Clone, Debug, Serialize)]
pub struct PropertyDiff {
    /// Expected list, sorted
    pub expected: Vec<String>,
    /// Actual list, sorted
    pub actual: Vec<String>,
    /// Lines present only in the expected list
    pub only_expected: Vec<String>,
    /// Lines present only in the actual list
    pub only_actual: Vec<String>,
    /// Unified diff of the sorted lists (empty on a match)
    pub unified: String,
}

impl PropertyDiff {
    /// True when both sorted lists are identical
    pub fn is_match(&self) -> bool {
        self.expected == self.actual
    }
}

/// Compare two property lists after sorting both with the property order
pub fn diff_property_lists(expected: &[String], actual: &[String]) -> PropertyDiff {
    let mut expected = expected.to_vec();
    let mut actual = actual.to_vec();
    sort_properties(&mut expected);
    sort_properties(&mut actual);

    let old = sorted_text(&expected);
    let new = sorted_text(&actual);
    let diff = TextDiff::from_lines(&old, &new);

    let mut only_expected = Vec::new();
    let mut only_actual = Vec::new();
    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches('\n').to_string();
        match change.tag() {
            ChangeTag::Delete => only_expected.push(line),
            ChangeTag::Insert => only_actual.push(line),
            ChangeTag::Equal => {}
        }
    }

    let unified = if only_expected.is_empty() && only_actual.is_empty() {
        String::new()
    } else {
        diff.unified_diff()
            .context_radius(3)
            .header("expected", "actual")
            .to_string()
    };

    PropertyDiff {
        expected,
        actual,
        only_expected,
        only_actual,
        unified,
    }
}

fn sorted_text(names: &[String]) -> String {
    let mut text = String::new();
    for name in names {
        text.push_str(name);
        text.push('\n');
    }
    text
}

/// Parse a property list written one per line or comma-separated
pub fn parse_property_list(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "property_diff_tests.rs"]
mod tests;
