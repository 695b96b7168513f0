// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, AddAssign, Deref, DerefMut};

use crate::ByteLength;

/// Represents a byte index (0-based) inside of `UTF-8` encoded text. This is a position
/// in the encoded byte sequence, not a scalar value (or [`char`]) index. In `"café"` the
/// `é` starts at byte index 3 and the text ends at byte index 5.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteIndex(pub usize);

impl ByteIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

pub fn byte_index(arg_byte_index: impl Into<ByteIndex>) -> ByteIndex {
    arg_byte_index.into()
}

impl Deref for ByteIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ByteIndex {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ByteIndex {
    fn from(it: usize) -> Self { Self(it) }
}

/// Advance a byte index by the encoded width of a scalar value.
impl Add<ByteLength> for ByteIndex {
    type Output = ByteIndex;

    fn add(self, rhs: ByteLength) -> Self::Output { Self(self.0 + rhs.as_usize()) }
}

impl AddAssign<ByteLength> for ByteIndex {
    fn add_assign(&mut self, rhs: ByteLength) { self.0 += rhs.as_usize(); }
}
