//! The incremental number sub-parser.
//!
//! Implements the JSON number grammar digit by digit against the cursor,
//! with no backtracking beyond the single-byte pushback: optional `-`, an
//! integer part (`0` alone or a nonzero-leading digit run), an optional
//! fraction, and an optional exponent. Input may run out between any two
//! bytes; termination is legal after the integer part, any fraction digit,
//! or any exponent digit, and illegal after a bare `.`, `e`, or exponent
//! sign.

use alloc::vec::Vec;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    source::Source,
};

/// Parses a number whose first byte (`-` or a digit) was just consumed.
///
/// On a terminating byte that does not belong to the number, that byte is
/// pushed back for the next consumer. Termination by depletion in a valid
/// state needs no pushback.
pub(crate) fn parse_number<S: Source>(
    cursor: &mut Cursor<S>,
    first: u8,
) -> Result<f64, ParseError> {
    let mut next = Some(first);
    let negative = first == b'-';
    if negative {
        next = cursor.next_byte()?;
    }

    // Integer part: a lone zero, or a nonzero-leading digit run.
    let mut num = match next {
        Some(b'0') => {
            next = cursor.next_byte()?;
            0.0
        }
        Some(digit @ b'1'..=b'9') => {
            let mut num = f64::from(digit - b'0');
            loop {
                next = cursor.next_byte()?;
                match next {
                    Some(digit @ b'0'..=b'9') => {
                        num = num * 10.0 + f64::from(digit - b'0');
                    }
                    _ => break,
                }
            }
            num
        }
        Some(_) => {
            cursor.push_back();
            return Err(cursor.error(ErrorKind::NumberFormat));
        }
        None => return Err(cursor.error(ErrorKind::NumberFormat)),
    };

    if next == Some(b'.') {
        // Digits are folded right-to-left after all of them are seen, so
        // the composition yields the conventional decimal fraction.
        let mut digits: Vec<u8> = Vec::new();
        loop {
            next = cursor.next_byte()?;
            match next {
                Some(digit @ b'0'..=b'9') => digits.push(digit - b'0'),
                _ => break,
            }
        }
        if digits.is_empty() {
            if next.is_some() {
                cursor.push_back();
            }
            return Err(cursor.error(ErrorKind::NumberFormat));
        }
        let mut fraction = 0.0f64;
        for &digit in digits.iter().rev() {
            fraction = fraction / 10.0 + f64::from(digit);
        }
        num += fraction / 10.0;
    }

    if matches!(next, Some(b'e' | b'E')) {
        next = cursor.next_byte()?;
        let mut exp_negative = false;
        if let Some(sign @ (b'+' | b'-')) = next {
            exp_negative = sign == b'-';
            next = cursor.next_byte()?;
        }
        let mut exponent: u32 = 0;
        let mut seen_digit = false;
        while let Some(digit @ b'0'..=b'9') = next {
            seen_digit = true;
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(u32::from(digit - b'0'));
            next = cursor.next_byte()?;
        }
        if !seen_digit {
            if next.is_some() {
                cursor.push_back();
            }
            return Err(cursor.error(ErrorKind::NumberFormat));
        }
        num = scale_pow10(num, exponent, exp_negative);
    }

    if next.is_some() {
        cursor.push_back();
    }
    Ok(if negative { -num } else { num })
}

/// Applies a power-of-ten exponent to an already-assembled mantissa.
fn scale_pow10(mut num: f64, exponent: u32, negative: bool) -> f64 {
    // Any |exponent| past 350 has already saturated every finite f64 to
    // infinity or zero.
    let exponent = exponent.min(350);
    for _ in 0..exponent {
        if negative {
            num /= 10.0;
        } else {
            num *= 10.0;
        }
    }
    num
}

#[cfg(test)]
mod tests {
    use crate::{
        cursor::Cursor,
        error::ErrorKind,
        source::SliceSource,
    };

    fn parse(src: &[u8]) -> Result<f64, ErrorKind> {
        let mut cursor = Cursor::new(SliceSource::new(src));
        let first = cursor.next_byte().unwrap().unwrap();
        super::parse_number(&mut cursor, first).map_err(|err| err.kind())
    }

    #[test]
    fn integers() {
        assert_eq!(parse(b"0"), Ok(0.0));
        assert_eq!(parse(b"7"), Ok(7.0));
        assert_eq!(parse(b"123"), Ok(123.0));
        assert_eq!(parse(b"-123"), Ok(-123.0));
        assert_eq!(parse(b"-0"), Ok(0.0));
    }

    #[test]
    fn fractions() {
        assert_eq!(parse(b"1.5"), Ok(1.5));
        assert_eq!(parse(b"0.25"), Ok(0.25));
        assert_eq!(parse(b"-2.75"), Ok(-2.75));
    }

    #[test]
    fn exponents() {
        assert_eq!(parse(b"-4.5e1"), Ok(-45.0));
        assert_eq!(parse(b"2e3"), Ok(2000.0));
        assert_eq!(parse(b"2E+3"), Ok(2000.0));
        assert_eq!(parse(b"1e0"), Ok(1.0));
        assert_eq!(parse(b"25e-2"), Ok(0.25));
        assert_eq!(parse(b"1e400"), Ok(f64::INFINITY));
    }

    #[test]
    fn terminator_is_pushed_back() {
        let mut cursor = Cursor::new(SliceSource::new(b"12,"));
        let first = cursor.next_byte().unwrap().unwrap();
        assert_eq!(super::parse_number(&mut cursor, first).unwrap(), 12.0);
        assert_eq!(cursor.next_byte().unwrap(), Some(b','));
    }

    #[test]
    fn depletion_after_integer_part_is_valid() {
        let mut cursor = Cursor::new(SliceSource::new(b"42"));
        let first = cursor.next_byte().unwrap().unwrap();
        assert_eq!(super::parse_number(&mut cursor, first).unwrap(), 42.0);
        assert_eq!(cursor.next_byte().unwrap(), None);
    }

    #[test]
    fn malformed() {
        assert_eq!(parse(b"-"), Err(ErrorKind::NumberFormat));
        assert_eq!(parse(b"-x"), Err(ErrorKind::NumberFormat));
        assert_eq!(parse(b"1."), Err(ErrorKind::NumberFormat));
        assert_eq!(parse(b"1.e5"), Err(ErrorKind::NumberFormat));
        assert_eq!(parse(b"1e"), Err(ErrorKind::NumberFormat));
        assert_eq!(parse(b"1e+"), Err(ErrorKind::NumberFormat));
        assert_eq!(parse(b"1e-x"), Err(ErrorKind::NumberFormat));
    }
}
