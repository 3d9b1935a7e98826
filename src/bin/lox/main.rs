use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rlox_lex::cli::{Cli, Command};
use rlox_lex::run;

/// `EX_DATAERR` from sysexits.h
const EXIT_DATA_ERROR: u8 = 65;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Tokenize { file, diagnostics } => {
            let code =
                fs::read_to_string(file).with_context(|| format!("script `{}`", file.display()))?;

            if run(file, &code, *diagnostics)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_DATA_ERROR))
            }
        }
    }
}
