use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::DiagnosticStyle;

#[derive(Debug, Parser)]
#[command(name = "lox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the tokens of a script, one per line
    Tokenize {
        /// Script to scan
        file: PathBuf,
        /// How lexical errors are reported on stderr
        #[arg(long, value_enum, default_value = "plain")]
        diagnostics: DiagnosticStyle,
    },
}
