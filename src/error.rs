use std::cmp::max;
use std::fmt;

use crate::types::span::Span;

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A pattern that cannot be inserted into an automaton, for example the
    /// empty string.
    InvalidPattern,
    /// A pattern or text contains a byte that is not in the configured
    /// alphabet.
    UnknownSymbol,
}

/// An error that can occur while building an automaton or searching text.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    at: Option<Span>,
    source: Option<String>,
}

impl Error {
    pub(crate) fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidPattern,
            msg: msg.into(),
            at: None,
            source: None,
        }
    }

    /// An unknown symbol at byte offset `at` of `text`.
    pub(crate) fn unknown_symbol(text: &[u8], at: usize) -> Self {
        let msg = format!("unknown symbol '{}'", text[at].escape_ascii());
        let span = Span::from(at..at + 1);
        match std::str::from_utf8(text) {
            Ok(source) if !source.is_empty() => Self {
                kind: ErrorKind::UnknownSymbol,
                msg,
                at: Some(span.widen_to_chars(source)),
                source: Some(source.to_owned()),
            },
            _ => Self {
                kind: ErrorKind::UnknownSymbol,
                msg,
                at: Some(span),
                source: None,
            },
        }
    }

    /// An unknown symbol outside of any text.
    pub(crate) fn unknown_byte(byte: u8) -> Self {
        Self {
            kind: ErrorKind::UnknownSymbol,
            msg: format!("unknown symbol '{}'", byte.escape_ascii()),
            at: None,
            source: None,
        }
    }

    /// Names the pattern that the error was found in.
    pub(crate) fn in_pattern(mut self, id: usize) -> Self {
        self.msg = format!("{} in pattern {id}", self.msg);
        self
    }

    /// Shifts the reported position by `offset` bytes, for errors found in a
    /// chunk of a longer stream.
    pub(crate) fn offset(mut self, offset: usize) -> Self {
        if offset > 0 {
            if let Some(span) = &mut self.at {
                span.m += offset;
                span.n += offset;
            }
            // The snippet no longer lines up with the reported offsets.
            self.source = None;
        }
        self
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.at) {
            (Some(source), Some(span)) => fmt_pretty(&self.msg, source, span, f),
            _ => fmt::Display::fmt(self, f),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.at) {
            (Some(source), Some(span)) if f.alternate() => fmt_pretty(&self.msg, source, span, f),
            (_, Some(span)) => {
                write!(f, "{} between bytes {} and {}", self.msg, span.m, span.n)
            }
            (_, None) => write!(f, "{}", self.msg),
        }
    }
}

fn fmt_pretty(msg: &str, source: &str, span: Span, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines: Vec<_> = source.split_terminator('\n').collect();
    let (line, col) = to_line_col(&lines, source, span.m);
    let width = max(1, width(&source[span]));
    let code = lines
        .get(line)
        .or_else(|| lines.last())
        .copied()
        .unwrap_or_default();

    let num = (line + 1).to_string();
    let pad = num.len();
    let pipe = "|";
    let underline = "^".repeat(width);

    write!(
        f,
        "\n \
        {0:pad$} {pipe}\n \
        {num:>} {pipe} {code}\n \
        {0:pad$} {pipe} {underline:>width$} {msg}\n",
        "",
        pad = pad,
        pipe = pipe,
        num = num,
        code = code,
        underline = underline,
        width = col + width,
        msg = msg
    )
}

/// Converts a byte offset into a line number and a display column.
fn to_line_col(lines: &[&str], source: &str, offset: usize) -> (usize, usize) {
    let mut n = 0;
    for (i, line) in lines.iter().enumerate() {
        let len = line.len() + 1;
        if n + len > offset {
            return (i, width(&source[n..offset]));
        }
        n += len;
    }
    let last = lines.len().saturating_sub(1);
    (last, lines.last().map(|l| width(l)).unwrap_or(0))
}

#[cfg(feature = "unicode")]
fn width(s: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(s)
}

#[cfg(not(feature = "unicode"))]
fn width(s: &str) -> usize {
    s.chars().count()
}
