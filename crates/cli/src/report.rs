// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage reporting for one simulated browser.

use hostprops_stats::{format_percent, ClassCoverage, CoverageStats, CoverageTotals};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::browser::BrowserIdentity;
use crate::property::PropertyKind;

/// Coverage report for one run
#[derive(Clone, Debug, Serialize)]
pub struct CoverageReport {
    browser: BrowserIdentity,
    generated: Option<String>,
    totals: CoverageTotals,
    percent: Option<u32>,
    classes: Vec<ClassCoverage>,
}

impl CoverageReport {
    /// Snapshot the accumulated statistics
    pub fn new(browser: BrowserIdentity, stats: &CoverageStats) -> Self {
        let totals = stats.totals();
        Self {
            browser,
            generated: None,
            totals,
            percent: totals.percent(),
            classes: stats.rows(),
        }
    }

    /// Set generation date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.generated = Some(date.into());
        self
    }

    /// Stamp with today's date
    pub fn dated_today(self) -> Self {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        self.with_date(today)
    }

    pub fn totals(&self) -> CoverageTotals {
        self.totals
    }

    pub fn percent(&self) -> Option<u32> {
        self.percent
    }

    /// File name the report is written under
    pub fn file_name(&self) -> String {
        format!("properties-{}.md", self.browser.nickname())
    }

    /// Write the Markdown report into `dir`, returning the file path
    pub fn write_to_dir(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.to_markdown())?;
        Ok(path)
    }

    /// One-line summary for terminal output
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} of {} properties implemented ({}), {} errored, {} missing across {} classes",
            self.browser.display_name(),
            self.totals.implemented,
            self.totals.real,
            format_percent(self.percent),
            self.totals.errored,
            self.totals.missing,
            self.totals.classes,
        )
    }

    /// Generate markdown report
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!(
            "# Property Coverage: {}\n\n",
            self.browser.display_name()
        ));

        if let Some(date) = &self.generated {
            md.push_str(&format!("Generated: {}\n\n", date));
        }

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- Classes: {}\n", self.totals.classes));
        md.push_str(&format!("- Real properties: {}\n", self.totals.real));
        md.push_str(&format!("- Implemented: {}\n", self.totals.implemented));
        md.push_str(&format!("- Errored: {}\n", self.totals.errored));
        md.push_str(&format!("- Missing: {}\n", self.totals.missing));
        md.push_str(&format!("- Coverage: {}\n", format_percent(self.percent)));
        md.push('\n');

        if self.classes.is_empty() {
            return md;
        }

        md.push_str("## Classes\n\n");
        md.push_str("| Class | Coverage | Implemented | Errored | Missing |\n");
        md.push_str("|-------|----------|-------------|---------|---------|\n");
        for row in &self.classes {
            md.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                row.class_name,
                format_percent(row.percent()),
                code_list(&row.implemented),
                code_list(&row.errored),
                code_list(&row.missing),
            ));
        }
        md.push('\n');

        md
    }
}

fn code_list(names: &[String]) -> String {
    if names.is_empty() {
        return "-".to_string();
    }
    names
        .iter()
        .map(|n| match PropertyKind::of(n) {
            PropertyKind::Exception => format!("`{}` (throws)", n),
            PropertyKind::Data | PropertyKind::Method => format!("`{}`", n),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
