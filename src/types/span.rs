//! Defines a [`Span`] which is used to represent a region in a pattern or in
//! the text being searched.

use std::ops::{Index, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub m: usize,
    pub n: usize,
}

impl Span {
    /// Widens the span so that both ends fall on UTF-8 character boundaries
    /// of the given source.
    pub fn widen_to_chars(self, source: &str) -> Self {
        let Span { mut m, mut n } = self;
        m = m.min(source.len());
        n = n.min(source.len()).max(m);
        while !source.is_char_boundary(m) {
            m -= 1;
        }
        while !source.is_char_boundary(n) {
            n += 1;
        }
        Self { m, n }
    }
}

impl Index<Span> for str {
    type Output = str;

    fn index(&self, span: Span) -> &Self::Output {
        let Span { m, n } = span;
        &self[m..n]
    }
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Self {
            m: r.start,
            n: r.end,
        }
    }
}
