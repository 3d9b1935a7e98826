use std::ops::Range;

/// Byte range of a lexeme in the source, plus the line it starts on.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Span {
    pub range: Range<usize>,
    pub line: usize,
}

impl Span {
    pub const fn new(range: Range<usize>, line: usize) -> Self {
        Self { range, line }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
