//! Input sources and the refill contract.

use alloc::vec::Vec;

use thiserror::Error;

/// Outcome of a successful [`Source::refill`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refill {
    /// The source may have more bytes to give after these.
    More,
    /// The source is depleted; the bytes now in the window are the last.
    Depleted,
}

/// Failure reported by a [`Source`], surfaced through
/// [`ErrorKind::Source`](crate::ErrorKind::Source).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// An adapter-defined error code.
    #[error("source failed with code {0}")]
    Code(i32),
    /// An I/O failure from a [`ReadSource`].
    #[cfg(feature = "std")]
    #[error("i/o error")]
    Io(#[from] std::io::Error),
}

/// A refillable byte source feeding a [`Reader`](crate::Reader).
///
/// The reader calls [`refill`](Source::refill) synchronously, as many times
/// as needed, whenever its window is exhausted and depletion has not yet
/// been reported. The source may reuse or replace the window's allocation;
/// whatever bytes it leaves behind are the valid ones. A
/// [`Refill::Depleted`] return may still deliver final bytes.
pub trait Source {
    /// Replaces the window contents with the next run of input bytes.
    ///
    /// # Errors
    ///
    /// Adapter-defined; any error aborts the read that triggered the refill.
    fn refill(&mut self, window: &mut Vec<u8>) -> Result<Refill, SourceError>;
}

/// Serves an in-memory byte slice in a single refill.
#[derive(Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    served: bool,
}

impl<'a> SliceSource<'a> {
    /// Wraps `data` as a one-shot source.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            served: false,
        }
    }
}

impl Source for SliceSource<'_> {
    fn refill(&mut self, window: &mut Vec<u8>) -> Result<Refill, SourceError> {
        window.clear();
        if !self.served {
            window.extend_from_slice(self.data);
            self.served = true;
        }
        Ok(Refill::Depleted)
    }
}

/// Reads successive chunks from any [`std::io::Read`] into the window.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    chunk: usize,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    /// Default refill size in bytes.
    pub const DEFAULT_CHUNK: usize = 8192;

    /// Wraps `inner`, refilling [`DEFAULT_CHUNK`](Self::DEFAULT_CHUNK)
    /// bytes at a time.
    pub fn new(inner: R) -> Self {
        Self::with_chunk_size(inner, Self::DEFAULT_CHUNK)
    }

    /// Wraps `inner` with an explicit refill size.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is zero.
    pub fn with_chunk_size(inner: R, chunk: usize) -> Self {
        assert!(chunk > 0, "refill chunk size must be non-zero");
        Self { inner, chunk }
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Source for ReadSource<R> {
    fn refill(&mut self, window: &mut Vec<u8>) -> Result<Refill, SourceError> {
        window.resize(self.chunk, 0);
        let n = loop {
            match self.inner.read(window) {
                Ok(n) => break n,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => {
                    window.clear();
                    return Err(SourceError::Io(err));
                }
            }
        };
        window.truncate(n);
        Ok(if n == 0 { Refill::Depleted } else { Refill::More })
    }
}
