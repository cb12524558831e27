// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hostprops binary entry point.

use std::process::ExitCode;

use clap::Parser;

use hostprops::cli::Cli;
use hostprops::output_diagnostic::print_error;
use hostprops::run::run;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            print_error(e);
            ExitCode::FAILURE
        }
    }
}
