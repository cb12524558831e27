// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property name classification and validation.

use regex::Regex;
use std::sync::LazyLock;

/// Literal recorded when the real browser throws while enumerating
pub const EXCEPTION_SENTINEL: &str = "exception";

/// Suffix that marks a callable property
pub const METHOD_SUFFIX: &str = "()";

/// What kind of own property a recorded name stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// Plain data or accessor property
    Data,
    /// Callable, recorded with a `()` suffix
    Method,
    /// The real browser threw instead of listing properties
    Exception,
}

impl PropertyKind {
    pub fn of(name: &str) -> Self {
        if name == EXCEPTION_SENTINEL {
            PropertyKind::Exception
        } else if name.ends_with(METHOD_SUFFIX) {
            PropertyKind::Method
        } else {
            PropertyKind::Data
        }
    }
}

static NAME_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\(\))?$").ok());

/// Check that a recorded name is a JavaScript identifier, optionally with `()`
pub fn is_valid_property_name(name: &str) -> bool {
    NAME_REGEX.as_ref().is_some_and(|re| re.is_match(name))
}

#[cfg(test)]
#[path = "property_tests.rs"]
mod tests;
