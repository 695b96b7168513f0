// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Writers for the quoted forms of text and bytes. Bytes that aren't valid `UTF-8` are
//! written as `\x{hh}`, so a slice that ends in the middle of a multi-byte sequence can
//! still be shown.

use std::fmt::{Result, Write};

use crate::{BufTextStorage, join};

/// How to escape the valid `UTF-8` parts of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// [`str::escape_debug`]: printable non `ASCII` characters are kept as is.
    Debug,
    /// [`str::escape_default`]: everything outside of printable `ASCII` is escaped.
    Default,
}

/// Write `text` in double quotes.
///
/// # Errors
///
/// Returns an error if the buffer rejects a write.
pub fn write_quoted_str(text: &str, escape: Escape, acc: &mut BufTextStorage) -> Result {
    acc.push('"');
    write_escaped_str(text, escape, acc)?;
    acc.push('"');
    Ok(())
}

/// Write `bytes` in double quotes, with invalid bytes as `\x{hh}`.
///
/// ```
/// use r3bl_primitives::{BufTextStorage, Escape, write_quoted_bytes};
///
/// let mut acc = BufTextStorage::new();
/// write_quoted_bytes(&"café".as_bytes()[..4], Escape::Debug, &mut acc).unwrap();
/// assert_eq!(acc, r#""caf\xc3""#);
/// ```
///
/// # Errors
///
/// Returns an error if the buffer rejects a write.
pub fn write_quoted_bytes(bytes: &[u8], escape: Escape, acc: &mut BufTextStorage) -> Result {
    acc.push('"');
    for chunk in bytes.utf8_chunks() {
        write_escaped_str(chunk.valid(), escape, acc)?;
        for byte in chunk.invalid() {
            write!(acc, "\\x{byte:02x}")?;
        }
    }
    acc.push('"');
    Ok(())
}

/// Write `scalar` in single quotes.
///
/// # Errors
///
/// Returns an error if the buffer rejects a write.
pub fn write_quoted_char(scalar: char, escape: Escape, acc: &mut BufTextStorage) -> Result {
    match escape {
        Escape::Debug => write!(acc, "{scalar:?}"),
        Escape::Default => write!(acc, "'{}'", scalar.escape_default()),
    }
}

/// Write each byte as two lower case hex digits, separated by a space.
pub fn write_hex_bytes(bytes: &[u8], acc: &mut BufTextStorage) {
    let it = join!(from: bytes, each: byte, delim: " ", format: "{byte:02x}");
    acc.push_str(&it);
}

fn write_escaped_str(text: &str, escape: Escape, acc: &mut BufTextStorage) -> Result {
    match escape {
        Escape::Debug => write!(acc, "{}", text.escape_debug()),
        Escape::Default => write!(acc, "{}", text.escape_default()),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("café", Escape::Debug, r#""café""# ; "debug keeps printable non ascii")]
    #[test_case("café", Escape::Default, r#""caf\u{e9}""# ; "default escapes non ascii")]
    #[test_case("a\tb", Escape::Debug, r#""a\tb""# ; "debug escapes tab")]
    #[test_case("", Escape::Default, r#""""# ; "empty")]
    fn test_write_quoted_str(text: &str, escape: Escape, expected: &str) {
        let mut acc = BufTextStorage::new();
        write_quoted_str(text, escape, &mut acc).unwrap();
        assert_eq2!(acc, expected);
    }

    #[test_case(b"caf", Escape::Debug, r#""caf""# ; "valid ascii")]
    #[test_case(b"caf\xc3", Escape::Debug, r#""caf\xc3""# ; "ends mid codepoint debug")]
    #[test_case(b"caf\xc3", Escape::Default, r#""caf\xc3""# ; "ends mid codepoint default")]
    #[test_case(b"\xa9!", Escape::Default, r#""\xa9!""# ; "starts mid codepoint")]
    #[test_case(b"f\xc3\xa9", Escape::Default, r#""f\u{e9}""# ; "valid two byte scalar")]
    #[test_case(b"\xe2\x82", Escape::Debug, r#""\xe2\x82""# ; "truncated three byte scalar")]
    fn test_write_quoted_bytes(bytes: &[u8], escape: Escape, expected: &str) {
        let mut acc = BufTextStorage::new();
        write_quoted_bytes(bytes, escape, &mut acc).unwrap();
        assert_eq2!(acc, expected);
    }

    #[test_case('A', Escape::Debug, "'A'" ; "ascii debug")]
    #[test_case('A', Escape::Default, "'A'" ; "ascii default")]
    #[test_case('Ω', Escape::Debug, "'Ω'" ; "omega debug")]
    #[test_case('Ω', Escape::Default, r"'\u{3a9}'" ; "omega default")]
    #[test_case('\u{c3}', Escape::Debug, "'Ã'" ; "latin1 debug")]
    fn test_write_quoted_char(scalar: char, escape: Escape, expected: &str) {
        let mut acc = BufTextStorage::new();
        write_quoted_char(scalar, escape, &mut acc).unwrap();
        assert_eq2!(acc, expected);
    }

    #[test]
    fn test_write_hex_bytes() {
        let mut acc = BufTextStorage::new();
        write_hex_bytes("café".as_bytes(), &mut acc);
        assert_eq2!(acc, "63 61 66 c3 a9");
    }
}
