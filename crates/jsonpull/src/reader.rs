//! The item stream driver: the reader's public entry point.

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    frame::{FrameKind, FrameStack},
    item::{Item, Value},
    literal, number,
    source::Source,
    string,
};

/// A pull-style, incremental JSON reader.
///
/// Each call to [`read_item`](Self::read_item) consumes just enough input to
/// produce one item, pulling bytes from the [`Source`] in whatever chunks it
/// provides. The emitted sequence is a depth-first walk of the document;
/// concatenated top-level values are delimited by the frame stack returning
/// to empty.
///
/// The reader is synchronous and exclusively owned: a call blocks for as
/// long as the source's refill blocks, and aborting mid-stream is simply
/// dropping the reader.
///
/// # Examples
///
/// ```rust
/// use jsonpull::{Reader, SliceSource, Value};
///
/// let mut reader = Reader::new(SliceSource::new(br#"[1, true]"#));
/// assert_eq!(reader.read_item().unwrap().value, Value::BeginList);
/// assert_eq!(reader.read_item().unwrap().value, Value::Number(1.0));
/// assert_eq!(reader.read_item().unwrap().value, Value::Boolean(true));
/// assert_eq!(reader.read_item().unwrap().value, Value::EndList);
/// assert_eq!(reader.read_item().unwrap().value, Value::Empty);
/// ```
#[derive(Debug)]
pub struct Reader<S> {
    cursor: Cursor<S>,
    frames: FrameStack,
    failed: bool,
}

impl<S: Source> Reader<S> {
    /// Creates a reader over `source`.
    pub fn new(source: S) -> Self {
        Self {
            cursor: Cursor::new(source),
            frames: FrameStack::new(),
            failed: false,
        }
    }

    /// Creates a reader with an explicit initial frame-stack capacity.
    pub fn with_frame_capacity(source: S, capacity: usize) -> Self {
        Self {
            cursor: Cursor::new(source),
            frames: FrameStack::with_capacity(capacity),
            failed: false,
        }
    }

    /// Current nesting depth: the number of unclosed lists and objects.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.depth()
    }

    /// Reads the next item from the input source.
    ///
    /// Returns [`Value::Empty`] when the frame stack is empty and the
    /// source is depleted; once depleted, every further call returns it
    /// again.
    ///
    /// # Errors
    ///
    /// The first failure aborts the call. The reader's state is left as it
    /// was at the failure point, so an error is terminal: the reader must
    /// not be used afterwards except to inspect the [`ParseError`].
    pub fn read_item(&mut self) -> Result<Item, ParseError> {
        match self.frames.top() {
            None => {
                self.cursor.skip_whitespace()?;
                match self.cursor.next_byte()? {
                    None => Ok(Item::empty()),
                    Some(byte) => Ok(Item::bare(self.parse_value(byte)?)),
                }
            }
            Some(frame) => match frame.kind {
                FrameKind::List => self.next_element(frame.fresh),
                FrameKind::Object => self.next_member(frame.fresh),
            },
        }
    }

    /// Produces the next item inside an open list.
    fn next_element(&mut self, fresh: bool) -> Result<Item, ParseError> {
        self.frames.clear_fresh();
        self.cursor.skip_whitespace()?;
        let Some(byte) = self.cursor.next_byte()? else {
            return Err(self.cursor.error(ErrorKind::Brackets));
        };
        if byte == b']' {
            self.frames.pop();
            return Ok(Item::bare(Value::EndList));
        }
        let byte = if fresh {
            byte
        } else {
            if byte != b',' {
                return Err(self.cursor.error(ErrorKind::Brackets));
            }
            self.cursor.skip_whitespace()?;
            match self.cursor.next_byte()? {
                Some(byte) => byte,
                None => return Err(self.cursor.error(ErrorKind::Brackets)),
            }
        };
        Ok(Item::bare(self.parse_value(byte)?))
    }

    /// Produces the next item inside an open object: a close, or a keyed
    /// member.
    fn next_member(&mut self, fresh: bool) -> Result<Item, ParseError> {
        self.frames.clear_fresh();
        self.cursor.skip_whitespace()?;
        let Some(byte) = self.cursor.next_byte()? else {
            return Err(self.cursor.error(ErrorKind::Brackets));
        };
        if byte == b'}' {
            self.frames.pop();
            return Ok(Item::bare(Value::EndObject));
        }
        let byte = if fresh {
            byte
        } else {
            if byte != b',' {
                return Err(self.cursor.error(ErrorKind::Brackets));
            }
            self.cursor.skip_whitespace()?;
            match self.cursor.next_byte()? {
                Some(byte) => byte,
                None => return Err(self.cursor.error(ErrorKind::Brackets)),
            }
        };
        // A close here would be a trailing comma; both that and a non-quote
        // key are "expected a string".
        if byte != b'"' {
            return Err(self.cursor.error(ErrorKind::ExpectedString));
        }
        let key = string::parse_string(&mut self.cursor)?;
        self.cursor.skip_whitespace()?;
        match self.cursor.next_byte()? {
            Some(b':') => {}
            Some(_) | None => return Err(self.cursor.error(ErrorKind::ExpectedColon)),
        }
        self.cursor.skip_whitespace()?;
        let Some(value_byte) = self.cursor.next_byte()? else {
            return Err(self.cursor.error(ErrorKind::Brackets));
        };
        let value = self.parse_value(value_byte)?;
        Ok(Item {
            key: Some(key),
            value,
        })
    }

    /// Dispatches one value on its first byte, already consumed.
    ///
    /// Opening a compound pushes a fresh frame and returns immediately;
    /// children are produced by subsequent `read_item` calls.
    fn parse_value(&mut self, first: u8) -> Result<Value, ParseError> {
        match first {
            b'[' => {
                self.frames
                    .push(FrameKind::List)
                    .map_err(|kind| self.cursor.error(kind))?;
                Ok(Value::BeginList)
            }
            b'{' => {
                self.frames
                    .push(FrameKind::Object)
                    .map_err(|kind| self.cursor.error(kind))?;
                Ok(Value::BeginObject)
            }
            b'"' => Ok(Value::String(string::parse_string(&mut self.cursor)?)),
            b't' | b'f' | b'n' => literal::parse_literal(&mut self.cursor, first),
            b'-' | b'0'..=b'9' => Ok(Value::Number(number::parse_number(
                &mut self.cursor,
                first,
            )?)),
            b']' | b'}' => {
                let kind = if self.frames.is_empty() {
                    ErrorKind::Brackets
                } else {
                    ErrorKind::ExpectedValue
                };
                Err(self.cursor.error(kind))
            }
            b',' | b':' => Err(self.cursor.error(ErrorKind::ExpectedValue)),
            _ => Err(self.cursor.error(ErrorKind::Token)),
        }
    }
}

/// Iterates until the idle sentinel, fusing after the first error.
impl<S: Source> Iterator for Reader<S> {
    type Item = Result<Item, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_item() {
            Ok(item) if item.is_empty() => None,
            Ok(item) => Some(Ok(item)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
