//! Error reporting for the reader.

use thiserror::Error;

use crate::source::SourceError;

/// Classifies every failure a [`Reader`](crate::Reader) can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A growable buffer could not be allocated or resized.
    #[error("out of memory")]
    Memory,
    /// A number did not follow the JSON number grammar.
    #[error("malformed number")]
    NumberFormat,
    /// A non-string token was not `true`, `false`, `null`, or a number.
    #[error("unrecognized token")]
    Token,
    /// An object key did not start with `"`, or an object had a trailing
    /// comma before its close.
    #[error("expected a string")]
    ExpectedString,
    /// An object member key was not followed by `:`.
    #[error("expected a colon")]
    ExpectedColon,
    /// A close bracket did not match the open compound, or the input ended
    /// with a compound still open.
    #[error("mismatched or unterminated brackets")]
    Brackets,
    /// A string had no closing `"` before the end of the input.
    #[error("unclosed string quote")]
    UnclosedQuote,
    /// An escape sequence was invalid, including malformed `\u` hex digits.
    #[error("invalid escape sequence")]
    Escape,
    /// An unescaped control character below 0x20 appeared in a string.
    #[error("control character in string")]
    ControlChar,
    /// A value was required but a `,`, `:`, or close bracket was found, such
    /// as after a trailing comma in a list.
    #[error("expected a value")]
    ExpectedValue,
    /// The refill hook reported a failure; the original error is attached
    /// as this error's source.
    #[error("input source failed")]
    Source,
}

/// A parse failure: what went wrong and where.
///
/// The offset is the read position within the *current* input window, not a
/// whole-stream offset. After an error the reader's state is left exactly as
/// it was at the failure point; the caller must not resume parsing with it.
#[derive(Debug, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
    #[source]
    source: Option<SourceError>,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
            source: None,
        }
    }

    pub(crate) fn from_source(source: SourceError, offset: usize) -> Self {
        Self {
            kind: ErrorKind::Source,
            offset,
            source: Some(source),
        }
    }

    /// The category of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the current input window where the failure was
    /// detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The refill hook's own error, when [`kind`](Self::kind) is
    /// [`ErrorKind::Source`].
    #[must_use]
    pub fn source_error(&self) -> Option<&SourceError> {
        self.source.as_ref()
    }
}
