use std::ops::Range;

use serde::Serialize;

/// Half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from `usize` offsets as produced by string slicing.
    ///
    /// Offsets are stored as `u32`, which limits sources to 4 GiB. Larger
    /// offsets panic rather than wrap.
    pub fn from_range(range: Range<usize>) -> Self {
        let offset =
            |n: usize| u32::try_from(n).unwrap_or_else(|_| panic!("offset {n} exceeds 4 GiB"));
        Self::new(offset(range.start), offset(range.end))
    }

    pub fn len(self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The slice of `source` this span covers.
    pub fn slice(self, source: &str) -> &str {
        &source[self.range()]
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::DUMMY
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}
