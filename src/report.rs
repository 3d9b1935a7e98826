use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use clap::ValueEnum;

use crate::scan::ScanError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticStyle {
    /// `[line N] Error: message`
    #[default]
    Plain,
    /// Annotated source excerpt
    Pretty,
}

#[derive(Debug)]
pub struct Reporter<'a> {
    path: &'a str,
    source: &'a str,
    style: DiagnosticStyle,
    color: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(path: &'a str, source: &'a str, style: DiagnosticStyle) -> Self {
        Self {
            path,
            source,
            style,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn report<W: Write>(&self, errors: &[ScanError], mut out: W) -> io::Result<()> {
        for e in errors {
            match self.style {
                DiagnosticStyle::Plain => writeln!(out, "{e}")?,
                DiagnosticStyle::Pretty => self.pretty(e, &mut out)?,
            }
        }

        Ok(())
    }

    fn pretty<W: Write>(&self, e: &ScanError, out: W) -> io::Result<()> {
        let span = self.char_range(e.span.range.clone());

        Report::build(ReportKind::Error, (self.path, span.clone()))
            .with_config(Config::default().with_color(self.color))
            .with_message(format!("line {}", e.line()))
            .with_label(
                Label::new((self.path, span))
                    .with_message(e.kind)
                    .with_color(Color::Red),
            )
            .finish()
            .write((self.path, Source::from(self.source)), out)
    }

    /// ariadne counts characters, spans count bytes.
    fn char_range(&self, range: Range<usize>) -> Range<usize> {
        let count = |s: Option<&str>| s.map_or(0, |s| s.chars().count());
        let start = count(self.source.get(..range.start));
        let len = count(self.source.get(range));
        start..start + len
    }
}
