//! A pull-style, incremental JSON reader.
//!
//! [`Reader`] consumes strict RFC 8259 JSON through a caller-supplied,
//! refillable [`Source`] - a file, socket, or in-memory slice fed in
//! arbitrarily small chunks - and emits one [`Item`] per call to
//! [`Reader::read_item`]: a flat event sequence isomorphic to a depth-first
//! walk of the document, with no materialized tree. Sub-parsers suspend and
//! resume across buffer boundaries, so the emitted items are identical no
//! matter how the input is chunked.
//!
//! # Examples
//!
//! ```rust
//! use jsonpull::{Reader, SliceSource, Value};
//!
//! let mut reader = Reader::new(SliceSource::new(br#"{"on": true}"#));
//! assert_eq!(reader.read_item().unwrap().value, Value::BeginObject);
//!
//! let member = reader.read_item().unwrap();
//! assert_eq!(member.key.unwrap(), "on");
//! assert_eq!(member.value, Value::Boolean(true));
//!
//! assert_eq!(reader.read_item().unwrap().value, Value::EndObject);
//! // The idle sentinel repeats once the source is depleted.
//! assert!(reader.read_item().unwrap().is_empty());
//! assert!(reader.read_item().unwrap().is_empty());
//! ```
//!
//! `Reader` also implements [`Iterator`], ending at the idle sentinel:
//!
//! ```rust
//! use jsonpull::{Reader, SliceSource};
//!
//! let reader = Reader::new(SliceSource::new(b"[1, 2, 3] \"four\""));
//! assert_eq!(reader.count(), 6); // begin, three numbers, end, string
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod cursor;
mod error;
mod frame;
mod item;
mod literal;
mod number;
mod reader;
mod scratch;
mod source;
mod string;

#[cfg(test)]
mod tests;

pub use bstr::BString as ByteString;
pub use error::{ErrorKind, ParseError};
pub use item::{Item, Value};
pub use reader::Reader;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{Refill, SliceSource, Source, SourceError};
