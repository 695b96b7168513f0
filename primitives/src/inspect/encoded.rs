// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Result, Write};

use super::{Escape, Inspect, write_quoted_bytes, write_quoted_char};
use crate::BufTextStorage;

/// A single byte taken out of encoded text, eg: `word.as_bytes()[3]`.
///
/// A plain [`u8`] inspects as a decimal number. This shows the byte in hex, and then
/// what you get if you mistake the byte for a scalar value: the `Latin-1` character
/// with the same number. For `0xc3`, the lead byte of `é`, that is `Ã`.
///
/// ```
/// use r3bl_primitives::{EncodedByte, Inspect};
///
/// let word = "café";
/// assert_eq!(
///     EncodedByte(word.as_bytes()[3]).inspect(),
///     "u8: 0xc3 // '\\u{c3}' 'Ã'"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedByte(pub u8);

impl EncodedByte {
    /// The `Latin-1` character with the same value as the byte.
    #[must_use]
    pub fn as_latin1(&self) -> char { char::from(self.0) }
}

impl Inspect for EncodedByte {
    fn type_name(&self) -> &'static str { "u8" }

    fn write_repr(&self, acc: &mut BufTextStorage) -> Result {
        write!(acc, "{:#04x} // ", self.0)?;
        write_quoted_char(self.as_latin1(), Escape::Default, acc)?;
        acc.push(' ');
        write_quoted_char(self.as_latin1(), Escape::Debug, acc)
    }
}

/// A byte slice taken out of encoded text, which does not have to end (or start) on a
/// scalar boundary, eg: `&word.as_bytes()[..4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedBytes<'a>(pub &'a [u8]);

impl EncodedBytes<'_> {
    /// Whether the bytes are well formed `UTF-8` on their own.
    #[must_use]
    pub fn is_valid_utf8(&self) -> bool { std::str::from_utf8(self.0).is_ok() }
}

impl Inspect for EncodedBytes<'_> {
    fn type_name(&self) -> &'static str { "&[u8]" }

    fn write_repr(&self, acc: &mut BufTextStorage) -> Result {
        write_quoted_bytes(self.0, Escape::Debug, acc)?;
        acc.push(' ');
        write_quoted_bytes(self.0, Escape::Default, acc)
    }
}
