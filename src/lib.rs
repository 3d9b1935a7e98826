pub mod cli;
mod report;
mod scan;
mod span;

pub use report::{DiagnosticStyle, Reporter};
pub use scan::{scan, Literal, ScanError, ScanErrorKind, Scanned, Scanner, Token, TokenKind};
pub use span::Span;

use std::io::{self, Write};
use std::path::Path;

/// Scans `source`, reports lexical errors on stderr and prints every token on
/// stdout. Returns `false` if any lexical error was found.
pub fn run(path: &Path, source: &str, style: DiagnosticStyle) -> io::Result<bool> {
    let scanned = scan(source);

    let path = path.to_string_lossy();
    Reporter::new(&path, source, style).report(&scanned.errors, io::stderr().lock())?;

    let mut stdout = io::stdout().lock();
    for token in &scanned.tokens {
        writeln!(stdout, "{token}")?;
    }

    Ok(!scanned.has_error())
}
