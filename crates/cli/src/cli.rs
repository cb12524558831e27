// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::browser::BrowserIdentity;

/// Host object property expectations and coverage
#[derive(Parser, Clone, Debug)]
#[command(name = "hostprops", version, about = "Host object property expectations and coverage")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Simulated browser (CHROME, EDGE, FF, FF-ESR, IE)
    #[arg(long, short = 'b', global = true, env = "HOSTPROPS_BROWSER", default_value = "CHROME")]
    pub browser: BrowserIdentity,

    /// Fixture file or directory of fixture files
    #[arg(long, global = true, env = "HOSTPROPS_FIXTURES", default_value = "fixtures")]
    pub fixtures: PathBuf,

    /// Capture file for recording per-class coverage rows (JSONL); `coverage` only
    #[arg(long, global = true, env = "HOSTPROPS_CAPTURE")]
    pub capture: Option<PathBuf>,

    /// Verbose output mode
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Print the resolved real and NYI property lists for one case
    Resolve {
        /// Class name, e.g. HTMLDivElement
        #[arg(long = "case", value_name = "NAME")]
        case: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve every case and summarize property coverage
    Coverage {
        /// Write the Markdown report into this directory (default: $HOSTPROPS_REPORT_DIR)
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Compare engine output against the resolved expectations
    Check {
        /// JSON object mapping class names to the properties the engine exposed
        #[arg(long, value_name = "FILE")]
        actual: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
