//! The string/escape sub-parser, including UTF-16 escape decoding.

use bstr::BString as ByteString;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    scratch::ByteBuf,
    source::Source,
};

/// What to do after handling a `\u` escape.
enum AfterUnicode {
    Done,
    /// An unmatched high surrogate was followed by `\` and a non-`u` byte;
    /// re-enter escape dispatch with that byte.
    Redispatch(u8),
}

/// Parses a string whose opening `"` was just consumed, returning the
/// decoded bytes.
///
/// The payload accumulates in a growable scratch buffer; if an error aborts
/// the parse, the partially-built buffer is dropped here and never reaches
/// the caller.
pub(crate) fn parse_string<S: Source>(cursor: &mut Cursor<S>) -> Result<ByteString, ParseError> {
    let mut out = ByteBuf::new().map_err(|kind| cursor.error(kind))?;
    loop {
        let Some(byte) = cursor.next_byte()? else {
            return Err(cursor.error(ErrorKind::UnclosedQuote));
        };
        match byte {
            b'"' => return Ok(out.into_string()),
            b'\\' => escape(cursor, &mut out)?,
            // DEL (0x7F) is permitted; only bytes below 0x20 are rejected.
            0x00..=0x1F => return Err(cursor.error(ErrorKind::ControlChar)),
            _ => out.push(byte).map_err(|kind| cursor.error(kind))?,
        }
    }
}

/// Handles one escape sequence; the `\` was just consumed.
fn escape<S: Source>(cursor: &mut Cursor<S>, out: &mut ByteBuf) -> Result<(), ParseError> {
    let Some(mut kind) = cursor.next_byte()? else {
        return Err(cursor.error(ErrorKind::Escape));
    };
    // Trampoline: unicode_escape may hand back one byte for a second
    // dispatch, and that byte is never `u`, so the loop runs at most twice.
    loop {
        let mapped = match kind {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => match unicode_escape(cursor, out)? {
                AfterUnicode::Done => return Ok(()),
                AfterUnicode::Redispatch(byte) => {
                    kind = byte;
                    continue;
                }
            },
            _ => return Err(cursor.error(ErrorKind::Escape)),
        };
        out.push(mapped).map_err(|kind| cursor.error(kind))?;
        return Ok(());
    }
}

/// Decodes a `\u` escape; the `u` was just consumed.
///
/// A unit outside the high-surrogate range is encoded directly (lone low
/// surrogates pass through as their raw value). A high surrogate looks
/// ahead for a `\uXXXX` low surrogate to combine with; every other shape
/// emits the raw unit(s) without combination.
fn unicode_escape<S: Source>(
    cursor: &mut Cursor<S>,
    out: &mut ByteBuf,
) -> Result<AfterUnicode, ParseError> {
    let unit = read_hex4(cursor)?;
    if !is_high_surrogate(unit) {
        push_codepoint(cursor, out, u32::from(unit))?;
        return Ok(AfterUnicode::Done);
    }

    let Some(lookahead) = cursor.next_byte()? else {
        push_codepoint(cursor, out, u32::from(unit))?;
        return Ok(AfterUnicode::Done);
    };
    if lookahead != b'\\' {
        // Ordinary content follows; hand the byte back to the string loop
        // so closing quotes and control characters are still caught.
        push_codepoint(cursor, out, u32::from(unit))?;
        cursor.push_back();
        return Ok(AfterUnicode::Done);
    }
    let Some(escape_kind) = cursor.next_byte()? else {
        // A bare `\` at end of input can never form a valid escape.
        push_codepoint(cursor, out, u32::from(unit))?;
        return Err(cursor.error(ErrorKind::Escape));
    };
    if escape_kind != b'u' {
        push_codepoint(cursor, out, u32::from(unit))?;
        return Ok(AfterUnicode::Redispatch(escape_kind));
    }

    let second = read_hex4(cursor)?;
    if is_low_surrogate(second) {
        let codepoint =
            (u32::from(unit) - 0xD800) * 0x400 + (u32::from(second) - 0xDC00) + 0x10000;
        push_codepoint(cursor, out, codepoint)?;
    } else {
        push_codepoint(cursor, out, u32::from(unit))?;
        push_codepoint(cursor, out, u32::from(second))?;
    }
    Ok(AfterUnicode::Done)
}

/// Reads exactly four hex digits (case-insensitive) into a UTF-16 unit.
fn read_hex4<S: Source>(cursor: &mut Cursor<S>) -> Result<u16, ParseError> {
    let mut buf = [0u8; 4];
    if cursor.next_bytes(&mut buf)? < 4 {
        return Err(cursor.error(ErrorKind::Escape));
    }
    let mut unit: u16 = 0;
    for byte in buf {
        let nibble = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return Err(cursor.error(ErrorKind::Escape)),
        };
        unit = (unit << 4) | u16::from(nibble);
    }
    Ok(unit)
}

fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

fn push_codepoint<S: Source>(
    cursor: &Cursor<S>,
    out: &mut ByteBuf,
    codepoint: u32,
) -> Result<(), ParseError> {
    let mut buf = [0u8; 4];
    let len = encode_utf8(codepoint, &mut buf);
    out.extend(&buf[..len]).map_err(|kind| cursor.error(kind))
}

/// Encodes a code point as UTF-8 bytes, returning the encoded length.
///
/// Surrogate values (unmatched pairs passed through raw) take the three-byte
/// form, so the output can be WTF-8 rather than strict UTF-8.
fn encode_utf8(codepoint: u32, buf: &mut [u8; 4]) -> usize {
    if codepoint <= 0x7F {
        buf[0] = codepoint as u8;
        1
    } else if codepoint <= 0x7FF {
        buf[0] = 0xC0 | (codepoint >> 6) as u8;
        buf[1] = 0x80 | (codepoint & 0x3F) as u8;
        2
    } else if codepoint <= 0xFFFF {
        buf[0] = 0xE0 | (codepoint >> 12) as u8;
        buf[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
        buf[2] = 0x80 | (codepoint & 0x3F) as u8;
        3
    } else {
        buf[0] = 0xF0 | (codepoint >> 18) as u8;
        buf[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
        buf[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
        buf[3] = 0x80 | (codepoint & 0x3F) as u8;
        4
    }
}
