// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property-list diff CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hostprops_diff::{diff_property_lists, parse_property_list};

/// Compare an expected and an actual property list
#[derive(Parser, Debug)]
#[command(name = "hostprops-diff")]
#[command(about = "Compare two property lists using the property sort order")]
struct Cli {
    /// File with the expected properties (one per line or comma-separated)
    expected: PathBuf,

    /// File with the actual properties
    actual: PathBuf,

    /// Print the comparison as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let expected = tokio::fs::read_to_string(&cli.expected).await?;
    let actual = tokio::fs::read_to_string(&cli.actual).await?;

    let diff = diff_property_lists(
        &parse_property_list(&expected),
        &parse_property_list(&actual),
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else if diff.is_match() {
        println!("match: {} properties", diff.expected.len());
    } else {
        print!("{}", diff.unified);
    }

    Ok(if diff.is_match() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
