// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

use crate::ByteIndex;

/// Represents a byte length measurement (1-based).
///
/// A `ByteLength` represents the number of bytes in `UTF-8` encoded text, or the number
/// of bytes that a single scalar value occupies once encoded (between 1 and 4). Unlike
/// [`ByteIndex`] which is 0-based (representing positions), `ByteLength` is 1-based
/// (representing sizes/counts).
///
/// # Examples
///
/// ```rust
/// use r3bl_primitives::{ByteLength, byte_index, byte_len};
///
/// let length = byte_len("café".len());
/// assert_eq!(length, ByteLength::from(5usize));
/// assert_eq!(length.convert_to_index(), byte_index(4));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteLength(pub usize);

/// Creates a new [`ByteLength`] from any type that can be converted into it.
pub fn byte_len(arg_byte_length: impl Into<ByteLength>) -> ByteLength {
    arg_byte_length.into()
}

impl ByteLength {
    /// Get the length value as a usize.
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    /// Convert this length to the corresponding index type (0-based).
    ///
    /// Since lengths are 1-based and indices are 0-based, this subtracts 1
    /// to get the last valid index position.
    ///
    /// ```text
    /// "café" has Length=5 (1-based) to index (0-based) conversion:
    ///
    ///             c   a   f   é
    /// Length:     1   2   3   4   5
    /// (1-based) ┌───┬───┬───┬───┬───┐
    ///           │63 │61 │66 │c3 │a9 │
    ///           └───┴───┴───┴───┴───┘
    /// Index:      0   1   2   3   4
    /// (0-based)                   ↑
    ///           convert_to_index() = 4 (0-based, last valid position)
    /// ```
    #[must_use]
    pub fn convert_to_index(&self) -> ByteIndex {
        ByteIndex::from(self.0.saturating_sub(1))
    }
}

impl Deref for ByteLength {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ByteLength {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ByteLength {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<ByteIndex> for ByteLength {
    /// Convert a byte index to a byte length.
    ///
    /// This adds 1 to convert from 0-based index to 1-based length.
    fn from(it: ByteIndex) -> Self { Self(it.as_usize() + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, byte_index};

    #[test]
    fn test_convert_to_index() {
        assert_eq2!(byte_len(5).convert_to_index(), byte_index(4));
        assert_eq2!(byte_len(1).convert_to_index(), byte_index(0));
        // Saturates.
        assert_eq2!(byte_len(0).convert_to_index(), byte_index(0));
    }

    #[test]
    fn test_from_index() {
        assert_eq2!(ByteLength::from(byte_index(4)), byte_len(5));
    }
}
