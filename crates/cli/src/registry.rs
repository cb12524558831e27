// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture loading and the explicit registry of test cases.
//!
//! Each fixture file declares an ordered list of cases:
//!
//! ```toml
//! [[cases]]
//! name = "HTMLDivElement"
//!
//! [cases.expected]
//! default = "align,constructor()"
//! ie = ["align", "noWrap"]
//!
//! [cases.nyi]
//! ff = "align"
//! ```
//!
//! JSON and JSON5 files use the same shape.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::browser::BrowserIdentity;
use crate::expectation::{
    resolve_nyi, resolve_primary, ExpectationSet, NyiExpectationSet, ResolvedExpectation,
};
use crate::property::is_valid_property_name;

/// File extensions recognized when loading a fixture directory
pub const FIXTURE_EXTENSIONS: [&str; 3] = ["toml", "json", "json5"];

/// Errors that can occur when loading fixtures
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<FixtureError>,
    },
}

/// One test case: a host object class and its expectations
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaseDescriptor {
    /// Interface name, e.g. `HTMLDivElement`
    pub name: String,

    /// Real-browser baseline
    #[serde(default)]
    pub expected: ExpectationSet,

    /// Engine deviations from the baseline
    #[serde(default)]
    pub nyi: NyiExpectationSet,
}

impl CaseDescriptor {
    pub fn new(name: impl Into<String>, expected: ExpectationSet, nyi: NyiExpectationSet) -> Self {
        Self {
            name: name.into(),
            expected,
            nyi,
        }
    }

    /// Resolve both lists for the simulated browser
    pub fn resolve(&self, current: BrowserIdentity) -> ResolvedCase {
        let real = resolve_primary(&self.expected, current);
        let nyi = resolve_nyi(&self.nyi, current, &real);
        ResolvedCase {
            name: self.name.clone(),
            real,
            nyi,
        }
    }
}

/// A case resolved for one browser
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedCase {
    pub name: String,
    pub real: ResolvedExpectation,
    pub nyi: ResolvedExpectation,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    #[serde(default)]
    cases: Vec<CaseDescriptor>,
}

/// Ordered collection of every known test case
#[derive(Clone, Debug, Default)]
pub struct Registry {
    cases: Vec<CaseDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fixture file, or every fixture file below a directory
    ///
    /// A directory without any fixture file is an error.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let mut registry = Self::new();
        if path.is_dir() {
            let files = fixture_files(path)?;
            if files.is_empty() {
                return Err(FixtureError::Validation(format!(
                    "No fixture files found under {}",
                    path.display()
                )));
            }
            for file in files {
                registry.load_file(&file)?;
            }
        } else {
            registry.load_file(path)?;
        }
        Ok(registry)
    }

    /// Append the cases of one fixture file
    pub fn load_file(&mut self, path: &Path) -> Result<(), FixtureError> {
        let in_file = |source: FixtureError| FixtureError::InFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let content = std::fs::read_to_string(path).map_err(|e| in_file(e.into()))?;
        let cases = parse_cases(path, &content).map_err(in_file)?;
        for case in cases {
            self.register(case).map_err(in_file)?;
        }
        Ok(())
    }

    /// Add a case after validating it against the registry
    pub fn register(&mut self, case: CaseDescriptor) -> Result<(), FixtureError> {
        validate_case(&case)?;
        if self.get(&case.name).is_some() {
            return Err(FixtureError::Validation(format!(
                "Duplicate case '{}'",
                case.name
            )));
        }
        self.cases.push(case);
        Ok(())
    }

    /// Look up a case by class name
    pub fn get(&self, name: &str) -> Option<&CaseDescriptor> {
        self.cases.iter().find(|c| c.name == name)
    }

    pub fn cases(&self) -> &[CaseDescriptor] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Resolve every case for the simulated browser, in registration order
    pub fn resolve(&self, current: BrowserIdentity) -> Vec<ResolvedCase> {
        self.cases.iter().map(|c| c.resolve(current)).collect()
    }
}

fn parse_cases(path: &Path, content: &str) -> Result<Vec<CaseDescriptor>, FixtureError> {
    let file: FixtureFile = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(content)?,
        Some("json5") => {
            json5::from_str(content).or_else(|_| serde_json::from_str(content))?
        }
        _ => toml::from_str(content)?,
    };
    Ok(file.cases)
}

fn fixture_files(dir: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    let mut files = Vec::new();
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    for ext in FIXTURE_EXTENSIONS {
        let pattern = Path::new(&base).join("**").join(format!("*.{}", ext));
        for entry in glob::glob(&pattern.to_string_lossy())? {
            files.push(entry.map_err(glob::GlobError::into_error)?);
        }
    }
    files.sort();
    Ok(files)
}

fn validate_case(case: &CaseDescriptor) -> Result<(), FixtureError> {
    if case.name.trim().is_empty() {
        return Err(FixtureError::Validation(
            "Case name must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for name in case.expected.all_names().chain(case.nyi.all_names()) {
        if seen.insert(name.as_str()) && !is_valid_property_name(name) {
            return Err(FixtureError::Validation(format!(
                "Invalid property name '{}' in case '{}'",
                name, case.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
