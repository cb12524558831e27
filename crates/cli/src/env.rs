// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by hostprops are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// Width used when wrapping property lists if the variable is unset
pub const DEFAULT_WRAP_WIDTH: usize = 100;

/// `HOSTPROPS_REPORT_DIR` — Directory coverage reports are written to.
pub fn report_dir() -> Option<PathBuf> {
    std::env::var(names::HOSTPROPS_REPORT_DIR)
        .ok()
        .map(PathBuf::from)
}

/// `HOSTPROPS_WRAP_WIDTH` — Column width for wrapped property lists.
pub fn wrap_width() -> usize {
    var_usize(names::HOSTPROPS_WRAP_WIDTH)
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WRAP_WIDTH)
}

fn var_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
