//! Shared sources and collectors for the reader tests.

use alloc::{vec, vec::Vec};

use crate::{ErrorKind, Item, Reader, Refill, Source, SourceError};

/// Serves the input in chunks whose sizes cycle through `sizes`.
///
/// The final refill that exhausts the data reports `Depleted` while still
/// carrying bytes, exercising the "depletion may deliver a final chunk"
/// half of the refill contract.
pub struct ChunkSource {
    data: Vec<u8>,
    pos: usize,
    sizes: Vec<usize>,
    next_size: usize,
}

impl ChunkSource {
    pub fn new(data: &[u8], sizes: &[usize]) -> Self {
        assert!(sizes.iter().all(|&size| size > 0));
        Self {
            data: data.to_vec(),
            pos: 0,
            sizes: sizes.to_vec(),
            next_size: 0,
        }
    }
}

impl Source for ChunkSource {
    fn refill(&mut self, window: &mut Vec<u8>) -> Result<Refill, SourceError> {
        window.clear();
        if self.pos >= self.data.len() {
            return Ok(Refill::Depleted);
        }
        let size = self.sizes[self.next_size % self.sizes.len()];
        self.next_size += 1;
        let end = (self.pos + size).min(self.data.len());
        window.extend_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        if self.pos >= self.data.len() {
            Ok(Refill::Depleted)
        } else {
            Ok(Refill::More)
        }
    }
}

/// A source whose refill always fails.
pub struct FailingSource;

impl Source for FailingSource {
    fn refill(&mut self, _window: &mut Vec<u8>) -> Result<Refill, SourceError> {
        Err(SourceError::Code(-7))
    }
}

/// Reads items until the idle sentinel; panics on any parse error.
pub fn items<S: Source>(source: S) -> Vec<Item> {
    Reader::new(source)
        .map(|item| item.expect("unexpected parse error"))
        .collect()
}

/// Reads the whole of `input` in one refill.
pub fn items_whole(input: &[u8]) -> Vec<Item> {
    items(crate::SliceSource::new(input))
}

/// Reads `input` delivered in cycling chunk sizes.
pub fn items_chunked(input: &[u8], sizes: &[usize]) -> Vec<Item> {
    items(ChunkSource::new(input, sizes))
}

/// Reads until the first error, returning the items before it and the
/// error's kind.
pub fn read_until_err(input: &[u8]) -> (Vec<Item>, ErrorKind) {
    let mut reader = Reader::new(crate::SliceSource::new(input));
    let mut seen = vec![];
    loop {
        match reader.read_item() {
            Ok(item) => {
                assert!(
                    !item.is_empty(),
                    "input parsed cleanly, expected an error: {seen:?}"
                );
                seen.push(item);
            }
            Err(err) => return (seen, err.kind()),
        }
    }
}

/// The error kind `input` fails with, ignoring any items before it.
pub fn err_kind(input: &[u8]) -> ErrorKind {
    read_until_err(input).1
}
