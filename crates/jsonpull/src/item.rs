//! Parse items: one event per [`read_item`](crate::Reader::read_item) call.

use bstr::BString as ByteString;

/// The value carried by an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The frame stack is empty and no further value has begun. Once the
    /// source is depleted this is returned on every subsequent call, so
    /// seeing it twice in a row means there is nothing more to read.
    Empty,
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number; always carried as a 64-bit float.
    Number(f64),
    /// A string payload: a byte-counted buffer, never NUL-terminated. JSON
    /// strings may embed NUL, and unmatched surrogate escapes pass through
    /// as their raw (WTF-8) encoding, so this is not guaranteed UTF-8.
    String(ByteString),
    /// `[` was consumed; subsequent items are the list's elements.
    BeginList,
    /// `]` - the innermost open list is complete.
    EndList,
    /// `{` was consumed; subsequent items are keyed members.
    BeginObject,
    /// `}` - the innermost open object is complete.
    EndObject,
}

/// One parse event from the item stream.
///
/// String payloads (the key and any [`Value::String`]) are owned by the
/// item; dropping the item releases them.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Present on the item that opens an object member's value, including
    /// the Begin marker of a nested compound. Close markers and list
    /// elements carry no key.
    pub key: Option<ByteString>,
    /// The event itself.
    pub value: Value,
}

impl Item {
    pub(crate) fn empty() -> Self {
        Self {
            key: None,
            value: Value::Empty,
        }
    }

    pub(crate) fn bare(value: Value) -> Self {
        Self { key: None, value }
    }

    /// Whether this is the idle sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.value, Value::Empty)
    }
}
