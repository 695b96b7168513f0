// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteLength, CharStorage, byte_len};

/// Why a byte sequence is not a well formed `UTF-8` encoding of a single scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum Utf8DecodeError {
    #[error("There are no bytes to decode")]
    #[diagnostic(code(r3bl_primitives::utf8::empty))]
    Empty,

    #[error("Byte {byte:#04x} is a continuation byte, it can't start a scalar value")]
    #[diagnostic(
        code(r3bl_primitives::utf8::unexpected_continuation_byte),
        help("Continuation bytes look like 10xxxxxx and only follow a lead byte")
    )]
    UnexpectedContinuationByte { byte: u8 },

    #[error("Byte {byte:#04x} never occurs in UTF-8")]
    #[diagnostic(
        code(r3bl_primitives::utf8::invalid_lead_byte),
        help("0xc0, 0xc1 and 0xf8..=0xff are never valid in UTF-8")
    )]
    InvalidLeadByte { byte: u8 },

    #[error("Expected {expected} bytes, but only {available} are left")]
    #[diagnostic(code(r3bl_primitives::utf8::truncated))]
    Truncated { expected: usize, available: usize },

    #[error("Byte {byte:#04x} at offset {offset} is not a continuation byte")]
    #[diagnostic(code(r3bl_primitives::utf8::invalid_continuation_byte))]
    InvalidContinuationByte { byte: u8, offset: usize },

    #[error("U+{code_point:04X} is encoded in {width} bytes, which is more than needed")]
    #[diagnostic(
        code(r3bl_primitives::utf8::overlong),
        help("Every scalar value has exactly one (shortest) encoding")
    )]
    Overlong { code_point: u32, width: usize },

    #[error("U+{code_point:04X} is a surrogate, not a scalar value")]
    #[diagnostic(
        code(r3bl_primitives::utf8::surrogate),
        help("U+D800..=U+DFFF are reserved for UTF-16 and can't be encoded in UTF-8")
    )]
    Surrogate { code_point: u32 },

    #[error("U+{code_point:04X} is above U+10FFFF")]
    #[diagnostic(code(r3bl_primitives::utf8::out_of_range))]
    OutOfRange { code_point: u32 },
}

pub const MAX_SCALAR_WIDTH: usize = 4;

/// Continuation bytes look like `10xxxxxx`.
#[must_use]
pub fn is_continuation_byte(byte: u8) -> bool { byte & 0b1100_0000 == 0b1000_0000 }

/// Number of bytes in the sequence that `lead_byte` starts, or [`None`] if it can't
/// start a sequence. `0xf5..=0xf7` are accepted here (they have the 4 byte shape) and
/// rejected by [`decode_scalar`] as [`Utf8DecodeError::OutOfRange`].
///
/// ```
/// use r3bl_primitives::{byte_len, encoded_width};
///
/// assert_eq!(encoded_width(b'c'), Some(byte_len(1)));
/// assert_eq!(encoded_width(0xc3), Some(byte_len(2)));
/// assert_eq!(encoded_width(0xa9), None);
/// ```
#[must_use]
pub fn encoded_width(lead_byte: u8) -> Option<ByteLength> {
    match lead_byte {
        0x00..=0x7f => Some(byte_len(1)),
        0xc2..=0xdf => Some(byte_len(2)),
        0xe0..=0xef => Some(byte_len(3)),
        0xf0..=0xf7 => Some(byte_len(4)),
        // Continuation bytes, `0xc0`, `0xc1` and `0xf8..=0xff`.
        _ => None,
    }
}

/// Decode the first scalar value in `bytes`, and return it along with the number of
/// bytes it occupies. Trailing bytes after the first sequence are ignored.
///
/// # Errors
///
/// Returns a [`Utf8DecodeError`] if `bytes` is empty, or does not start with the
/// shortest well formed encoding of a scalar value.
///
/// ```
/// use r3bl_primitives::{Utf8DecodeError, byte_len, decode_scalar};
///
/// assert_eq!(decode_scalar("é!".as_bytes()), Ok(('é', byte_len(2))));
/// assert_eq!(
///     decode_scalar(&[0xc3]),
///     Err(Utf8DecodeError::Truncated { expected: 2, available: 1 })
/// );
/// ```
pub fn decode_scalar(bytes: &[u8]) -> Result<(char, ByteLength), Utf8DecodeError> {
    let Some(&lead_byte) = bytes.first() else {
        return Err(Utf8DecodeError::Empty);
    };

    if is_continuation_byte(lead_byte) {
        return Err(Utf8DecodeError::UnexpectedContinuationByte { byte: lead_byte });
    }

    let Some(width) = encoded_width(lead_byte) else {
        return Err(Utf8DecodeError::InvalidLeadByte { byte: lead_byte });
    };

    let (mut code_point, min_code_point) = match width.as_usize() {
        1 => return Ok((char::from(lead_byte), width)),
        2 => (u32::from(lead_byte & 0b0001_1111), 0x80),
        3 => (u32::from(lead_byte & 0b0000_1111), 0x800),
        _ => (u32::from(lead_byte & 0b0000_0111), 0x1_0000),
    };

    for offset in 1..width.as_usize() {
        let Some(&byte) = bytes.get(offset) else {
            return Err(Utf8DecodeError::Truncated {
                expected: width.as_usize(),
                available: bytes.len(),
            });
        };
        if !is_continuation_byte(byte) {
            return Err(Utf8DecodeError::InvalidContinuationByte { byte, offset });
        }
        code_point = (code_point << 6) | u32::from(byte & 0b0011_1111);
    }

    if code_point < min_code_point {
        return Err(Utf8DecodeError::Overlong {
            code_point,
            width: width.as_usize(),
        });
    }

    if (0xd800..=0xdfff).contains(&code_point) {
        return Err(Utf8DecodeError::Surrogate { code_point });
    }

    match char::from_u32(code_point) {
        Some(scalar) => Ok((scalar, width)),
        None => Err(Utf8DecodeError::OutOfRange { code_point }),
    }
}

/// The `UTF-8` encoding of `scalar`, 1 to 4 bytes, on the stack.
#[must_use]
pub fn encode_scalar(scalar: char) -> CharStorage {
    let mut buffer = [0_u8; MAX_SCALAR_WIDTH];
    CharStorage::from_slice(scalar.encode_utf8(&mut buffer).as_bytes())
}

/// Number of bytes in the `UTF-8` encoding of `scalar`.
#[must_use]
pub fn scalar_width(scalar: char) -> ByteLength { byte_len(scalar.len_utf8()) }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0x00, Some(1) ; "nul")]
    #[test_case(b'c', Some(1) ; "ascii")]
    #[test_case(0x7f, Some(1) ; "del")]
    #[test_case(0x80, None ; "first continuation byte")]
    #[test_case(0xa9, None ; "second byte of e acute")]
    #[test_case(0xbf, None ; "last continuation byte")]
    #[test_case(0xc0, None ; "overlong lead c0")]
    #[test_case(0xc1, None ; "overlong lead c1")]
    #[test_case(0xc3, Some(2) ; "first byte of e acute")]
    #[test_case(0xe2, Some(3) ; "first byte of euro")]
    #[test_case(0xf0, Some(4) ; "first byte of package emoji")]
    #[test_case(0xf8, None ; "five byte shape")]
    #[test_case(0xff, None ; "all ones")]
    fn test_encoded_width(lead_byte: u8, expected: Option<usize>) {
        assert_eq2!(encoded_width(lead_byte), expected.map(byte_len));
    }

    #[test_case('c', &[0x63] ; "one byte")]
    #[test_case('é', &[0xc3, 0xa9] ; "two bytes")]
    #[test_case('€', &[0xe2, 0x82, 0xac] ; "three bytes")]
    #[test_case('📦', &[0xf0, 0x9f, 0x93, 0xa6] ; "four bytes")]
    fn test_encode_then_decode(scalar: char, expected_bytes: &[u8]) {
        let bytes = encode_scalar(scalar);
        assert_eq2!(bytes.as_slice(), expected_bytes);
        assert_eq2!(scalar_width(scalar), byte_len(expected_bytes.len()));
        assert_eq2!(decode_scalar(&bytes), Ok((scalar, byte_len(bytes.len()))));
    }

    #[test]
    fn test_round_trip_width_boundaries() {
        for scalar in [
            '\u{0}', '\u{7f}', '\u{80}', '\u{7ff}', '\u{800}', '\u{d7ff}', '\u{e000}',
            '\u{ffff}', '\u{10000}', '\u{10ffff}',
        ] {
            let bytes = encode_scalar(scalar);
            let (decoded, width) = decode_scalar(&bytes).unwrap();
            assert_eq2!(decoded, scalar);
            assert_eq2!(width.as_usize(), bytes.len());
            assert_eq2!(bytes.as_slice(), scalar.to_string().as_bytes());
        }
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        assert_eq2!(decode_scalar(b"caf"), Ok(('c', byte_len(1))));
        assert_eq2!(decode_scalar("ção".as_bytes()), Ok(('ç', byte_len(2))));
    }

    #[test_case(&[], Utf8DecodeError::Empty ; "empty")]
    #[test_case(
        &[0xa9],
        Utf8DecodeError::UnexpectedContinuationByte { byte: 0xa9 } ;
        "starts with continuation byte"
    )]
    #[test_case(
        &[0xff, 0x41],
        Utf8DecodeError::InvalidLeadByte { byte: 0xff } ;
        "invalid lead byte"
    )]
    #[test_case(
        &[0xc3],
        Utf8DecodeError::Truncated { expected: 2, available: 1 } ;
        "truncated two byte sequence"
    )]
    #[test_case(
        &[0xe2, 0x82],
        Utf8DecodeError::Truncated { expected: 3, available: 2 } ;
        "truncated three byte sequence"
    )]
    #[test_case(
        &[0xc3, 0x41],
        Utf8DecodeError::InvalidContinuationByte { byte: 0x41, offset: 1 } ;
        "ascii where continuation byte expected"
    )]
    #[test_case(
        &[0xe0, 0x80, 0xaf],
        Utf8DecodeError::Overlong { code_point: 0x2f, width: 3 } ;
        "overlong slash"
    )]
    #[test_case(
        &[0xf0, 0x82, 0x82, 0xac],
        Utf8DecodeError::Overlong { code_point: 0x20ac, width: 4 } ;
        "overlong euro"
    )]
    #[test_case(
        &[0xed, 0xa0, 0x80],
        Utf8DecodeError::Surrogate { code_point: 0xd800 } ;
        "high surrogate"
    )]
    #[test_case(
        &[0xed, 0xbf, 0xbf],
        Utf8DecodeError::Surrogate { code_point: 0xdfff } ;
        "low surrogate"
    )]
    #[test_case(
        &[0xf4, 0x90, 0x80, 0x80],
        Utf8DecodeError::OutOfRange { code_point: 0x11_0000 } ;
        "just above max scalar"
    )]
    fn test_decode_errors(bytes: &[u8], expected: Utf8DecodeError) {
        assert_eq2!(decode_scalar(bytes), Err(expected));
        // Agrees with the standard library on what is malformed.
        assert!(std::str::from_utf8(bytes).is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq2!(
            Utf8DecodeError::InvalidContinuationByte {
                byte: 0x41,
                offset: 1
            }
            .to_string(),
            "Byte 0x41 at offset 1 is not a continuation byte"
        );
        assert_eq2!(
            Utf8DecodeError::Surrogate { code_point: 0xd800 }.to_string(),
            "U+D800 is a surrogate, not a scalar value"
        );
    }
}
