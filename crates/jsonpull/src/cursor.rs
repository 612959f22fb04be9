//! The input window: byte-at-a-time reads with transparent refill.

use alloc::vec::Vec;

use crate::{
    error::{ErrorKind, ParseError},
    source::{Refill, Source},
};

/// Owns the current input window and read position for a reader.
///
/// All sub-parsers pull bytes from here. Refill is invoked transparently
/// whenever the window is exhausted and the source has not yet reported
/// depletion; refill failures propagate immediately without rolling back
/// any state.
#[derive(Debug)]
pub(crate) struct Cursor<S> {
    source: S,
    window: Vec<u8>,
    head: usize,
    depleted: bool,
}

impl<S: Source> Cursor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            window: Vec::new(),
            head: 0,
            depleted: false,
        }
    }

    /// Byte offset of the read position within the current window.
    pub fn offset(&self) -> usize {
        self.head
    }

    /// Builds a parse error at the current offset.
    pub fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.head)
    }

    fn refill(&mut self) -> Result<(), ParseError> {
        match self.source.refill(&mut self.window) {
            Ok(Refill::More) => {}
            Ok(Refill::Depleted) => self.depleted = true,
            Err(err) => return Err(ParseError::from_source(err, self.head)),
        }
        self.head = 0;
        Ok(())
    }

    /// Returns the next input byte, or `None` once the source is depleted.
    pub fn next_byte(&mut self) -> Result<Option<u8>, ParseError> {
        while self.head >= self.window.len() {
            if self.depleted {
                return Ok(None);
            }
            self.refill()?;
        }
        let byte = self.window[self.head];
        self.head += 1;
        Ok(Some(byte))
    }

    /// Un-consumes the byte most recently returned by
    /// [`next_byte`](Self::next_byte).
    ///
    /// At most one byte of lookahead is ever pushed back, always before the
    /// next refill, so the byte is still in the window.
    pub fn push_back(&mut self) {
        debug_assert!(self.head > 0, "push_back with nothing consumed");
        self.head -= 1;
    }

    /// Fills `buf`, spanning refill boundaries as needed.
    ///
    /// Returns the number of bytes written. Fewer than `buf.len()` means the
    /// source became depleted mid-read; that is not an error here, and
    /// callers map a short read to their own malformed-token error.
    pub fn next_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ParseError> {
        for (i, slot) in buf.iter_mut().enumerate() {
            match self.next_byte()? {
                Some(byte) => *slot = byte,
                None => return Ok(i),
            }
        }
        Ok(buf.len())
    }

    /// Skips JSON whitespace: space, tab, line feed, carriage return.
    /// Form feed is not insignificant whitespace in RFC 8259.
    pub fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(byte) = self.next_byte()? {
            if !matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
                self.push_back();
                break;
            }
        }
        Ok(())
    }
}
