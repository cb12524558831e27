// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checking actual engine output against resolved expectations.
//!
//! The engine dumps one property list per class as a JSON object. Each case
//! in the registry is compared against its NYI resolution, which is what the
//! engine is currently expected to produce.

use hostprops_diff::{diff_property_lists, PropertyDiff};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::browser::BrowserIdentity;
use crate::expectation::PropertyList;
use crate::registry::Registry;

/// Errors that can occur when reading engine output
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to read engine output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse engine output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Property lists the engine actually produced, keyed by class name
#[derive(Clone, Debug, Default)]
pub struct ActualOutput {
    classes: BTreeMap<String, PropertyList>,
}

impl ActualOutput {
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, CheckError> {
        Ok(Self {
            classes: serde_json::from_str(content)?,
        })
    }

    pub fn get(&self, class_name: &str) -> Option<&[String]> {
        self.classes.get(class_name).map(PropertyList::as_slice)
    }

    /// Classes present in the output but unknown to the registry
    pub fn unknown_classes<'a>(&'a self, registry: &Registry) -> Vec<&'a str> {
        self.classes
            .keys()
            .filter(|name| registry.get(name).is_none())
            .map(String::as_str)
            .collect()
    }
}

/// Outcome of checking one case
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    Match,
    Mismatch { diff: PropertyDiff },
    /// The engine output has no entry for this class
    NotReported,
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    #[serde(flatten)]
    pub status: CheckStatus,
}

impl CheckOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self.status, CheckStatus::Match)
    }
}

/// Compare every registry case against the engine output
pub fn check_registry(
    registry: &Registry,
    actual: &ActualOutput,
    current: BrowserIdentity,
) -> Vec<CheckOutcome> {
    registry
        .resolve(current)
        .into_iter()
        .map(|case| {
            let status = match actual.get(&case.name) {
                None => CheckStatus::NotReported,
                Some(properties) => {
                    let diff = diff_property_lists(case.nyi.as_slice(), properties);
                    if diff.is_match() {
                        CheckStatus::Match
                    } else {
                        CheckStatus::Mismatch { diff }
                    }
                }
            };
            CheckOutcome {
                name: case.name,
                status,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
