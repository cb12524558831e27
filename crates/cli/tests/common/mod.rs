// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for hostprops integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Directory holding the sample fixtures shipped with the tests
pub fn sample_fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Create a temporary fixture file
/// Detects JSON vs TOML content and uses appropriate extension
pub fn write_fixture(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{');
    write_with_suffix(content, if is_json { ".json" } else { ".toml" })
}

/// Create a temporary engine output file
pub fn write_actual(content: &str) -> NamedTempFile {
    write_with_suffix(content, ".json")
}

fn write_with_suffix(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
