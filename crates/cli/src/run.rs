// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand execution.

use std::io::Write;
use thiserror::Error;

use crate::check::{check_registry, ActualOutput, CheckError, CheckStatus};
use crate::cli::{Cli, Command, GlobalArgs, OutputFormat};
use crate::coverage::{format_percent, CoverageStats};
use crate::env;
use crate::expectation::{ResolutionSource, ResolvedExpectation};
use crate::output_diagnostic::{print_verbose, print_warning};
use crate::registry::{FixtureError, Registry};
use crate::report::CoverageReport;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("Unknown case '{0}'")]
    UnknownCase(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run a parsed command line, writing results to `out`
///
/// Returns `Ok(false)` when the command ran but found mismatches.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<bool, RunError> {
    let registry = Registry::load(&cli.global.fixtures)?;
    if cli.global.verbose {
        print_verbose(format_args!(
            "loaded {} cases from {}; simulating {}",
            registry.len(),
            cli.global.fixtures.display(),
            cli.global.browser.display_name()
        ));
    }

    if let (Some(path), Command::Resolve { .. } | Command::Check { .. }) =
        (&cli.global.capture, &cli.command)
    {
        print_warning(format_args!(
            "--capture {} only applies to coverage; ignoring it",
            path.display()
        ));
    }

    match &cli.command {
        Command::Resolve { case, format } => resolve(&registry, &cli.global, case, *format, out),
        Command::Coverage { report_dir, format } => {
            let report_dir = report_dir.clone().or_else(env::report_dir);
            coverage(&registry, &cli.global, report_dir.as_deref(), *format, out)
        }
        Command::Check { actual, format } => {
            let actual = ActualOutput::load(actual)?;
            check(&registry, &cli.global, &actual, *format, out)
        }
    }
}

fn resolve(
    registry: &Registry,
    global: &GlobalArgs,
    name: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<bool, RunError> {
    let case = registry
        .get(name)
        .ok_or_else(|| RunError::UnknownCase(name.to_string()))?
        .resolve(global.browser);

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&case)?)?,
        OutputFormat::Text => {
            writeln!(out, "{} ({})", case.name, global.browser)?;
            write_resolved(out, "real", &case.real)?;
            write_resolved(out, "nyi", &case.nyi)?;
        }
        OutputFormat::Markdown => {
            writeln!(out, "# `{}` ({})", case.name, global.browser.display_name())?;
            write_resolved_markdown(out, "Real", &case.real)?;
            write_resolved_markdown(out, "NYI", &case.nyi)?;
        }
    }
    Ok(true)
}

fn source_label(source: ResolutionSource) -> String {
    match source {
        ResolutionSource::Browser(browser) => browser.nickname().to_string(),
        ResolutionSource::Default => "default".to_string(),
        ResolutionSource::Empty => "empty".to_string(),
        ResolutionSource::Primary => "real".to_string(),
    }
}

fn write_resolved(
    out: &mut dyn Write,
    label: &str,
    resolved: &ResolvedExpectation,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{} [{}] {} properties",
        label,
        source_label(resolved.source),
        resolved.len()
    )?;
    if !resolved.is_empty() {
        let options = textwrap::Options::new(env::wrap_width())
            .initial_indent("  ")
            .subsequent_indent("  ");
        writeln!(out, "{}", textwrap::fill(&resolved.names.join(", "), options))?;
    }
    Ok(())
}

fn write_resolved_markdown(
    out: &mut dyn Write,
    heading: &str,
    resolved: &ResolvedExpectation,
) -> std::io::Result<()> {
    writeln!(
        out,
        "\n## {} ({}, {} properties)\n",
        heading,
        source_label(resolved.source),
        resolved.len()
    )?;
    if resolved.is_empty() {
        writeln!(out, "_none_")?;
    }
    for name in resolved.as_slice() {
        writeln!(out, "- `{}`", name)?;
    }
    Ok(())
}

/// `--capture` only feeds the coverage accumulator
fn open_stats(global: &GlobalArgs) -> Result<CoverageStats, RunError> {
    Ok(match &global.capture {
        Some(path) => CoverageStats::with_file(path)?,
        None => CoverageStats::new(),
    })
}

fn coverage(
    registry: &Registry,
    global: &GlobalArgs,
    report_dir: Option<&std::path::Path>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<bool, RunError> {
    let stats = open_stats(global)?;
    for case in registry.resolve(global.browser) {
        stats.record(&case.name, case.real.as_slice(), case.nyi.as_slice());
    }
    if global.verbose {
        for row in stats.incomplete() {
            print_verbose(format_args!(
                "incomplete {} ({}): {} errored, {} missing",
                row.class_name,
                format_percent(row.percent()),
                row.errored.len(),
                row.missing.len()
            ));
        }
    }

    let report = CoverageReport::new(global.browser, &stats).dated_today();
    if let Some(dir) = report_dir {
        let path = report.write_to_dir(dir)?;
        if global.verbose {
            print_verbose(format_args!("report written to {}", path.display()));
        }
    }

    match format {
        OutputFormat::Text => writeln!(out, "{}", report.summary_line())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Markdown => write!(out, "{}", report.to_markdown())?,
    }
    Ok(true)
}

fn check(
    registry: &Registry,
    global: &GlobalArgs,
    actual: &ActualOutput,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<bool, RunError> {
    for name in actual.unknown_classes(registry) {
        print_warning(format_args!("'{}' is not in the registry", name));
    }

    let outcomes = check_registry(registry, actual, global.browser);
    let failed = outcomes.iter().filter(|o| !o.is_match()).count();

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&outcomes)?)?,
        OutputFormat::Text | OutputFormat::Markdown => {
            for outcome in &outcomes {
                match &outcome.status {
                    CheckStatus::Match => {
                        if global.verbose {
                            writeln!(out, "ok       {}", outcome.name)?;
                        }
                    }
                    CheckStatus::NotReported => writeln!(out, "missing  {}", outcome.name)?,
                    CheckStatus::Mismatch { diff } => {
                        writeln!(out, "mismatch {}", outcome.name)?;
                        write!(out, "{}", diff.unified)?;
                    }
                }
            }
            writeln!(
                out,
                "{} of {} cases match for {}",
                outcomes.len() - failed,
                outcomes.len(),
                global.browser
            )?;
        }
    }

    Ok(failed == 0)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
