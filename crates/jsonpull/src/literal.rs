//! The `true` / `false` / `null` literal sub-parser.

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    item::Value,
    source::Source,
};

/// Parses a literal whose first byte (`t`, `f`, or `n`) was just consumed.
///
/// Reads the remaining bytes in one gulp and compares them against the only
/// sequence that can follow. A mismatch, or a short read because the source
/// depleted, is a token error.
pub(crate) fn parse_literal<S: Source>(
    cursor: &mut Cursor<S>,
    first: u8,
) -> Result<Value, ParseError> {
    let (rest, value) = match first {
        b't' => (&b"rue"[..], Value::Boolean(true)),
        b'f' => (&b"alse"[..], Value::Boolean(false)),
        b'n' => (&b"ull"[..], Value::Null),
        _ => return Err(cursor.error(ErrorKind::Token)),
    };
    let mut buf = [0u8; 4];
    let got = cursor.next_bytes(&mut buf[..rest.len()])?;
    if got < rest.len() || buf[..rest.len()] != *rest {
        return Err(cursor.error(ErrorKind::Token));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::parse_literal;
    use crate::{cursor::Cursor, error::ErrorKind, item::Value, source::SliceSource};

    fn parse(src: &[u8]) -> Result<Value, ErrorKind> {
        let mut cursor = Cursor::new(SliceSource::new(src));
        let first = cursor.next_byte().unwrap().unwrap();
        parse_literal(&mut cursor, first).map_err(|err| err.kind())
    }

    #[test]
    fn exact_literals() {
        assert_eq!(parse(b"true"), Ok(Value::Boolean(true)));
        assert_eq!(parse(b"false"), Ok(Value::Boolean(false)));
        assert_eq!(parse(b"null"), Ok(Value::Null));
    }

    #[test]
    fn mismatch_is_a_token_error() {
        assert_eq!(parse(b"trux"), Err(ErrorKind::Token));
        assert_eq!(parse(b"nope"), Err(ErrorKind::Token));
        assert_eq!(parse(b"falsy"), Err(ErrorKind::Token));
    }

    #[test]
    fn short_read_is_a_token_error() {
        assert_eq!(parse(b"tru"), Err(ErrorKind::Token));
        assert_eq!(parse(b"n"), Err(ErrorKind::Token));
    }

    #[test]
    fn terminator_is_not_consumed_beyond_the_literal() {
        let mut cursor = Cursor::new(SliceSource::new(b"null,"));
        let first = cursor.next_byte().unwrap().unwrap();
        assert_eq!(parse_literal(&mut cursor, first).unwrap(), Value::Null);
        assert_eq!(cursor.next_byte().unwrap(), Some(b','));
    }
}
