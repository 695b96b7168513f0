// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte level access to encoded text that never panics. [`str`] indexing panics when a
//! range ends in the middle of a multi-byte sequence. These functions work on the
//! underlying bytes instead, so the partial sequence is returned for inspection.

use std::ops::Range;

use super::{is_continuation_byte, scalar_indices};
use crate::{ByteIndex, ByteLength, byte_len};

/// The raw byte at `index`, which may be a continuation byte in the middle of a
/// multi-byte sequence.
///
/// ```
/// use r3bl_primitives::{byte_at, byte_index};
///
/// assert_eq!(byte_at("café", byte_index(3)), Some(0xc3));
/// assert_eq!(byte_at("café", byte_index(4)), Some(0xa9));
/// assert_eq!(byte_at("café", byte_index(5)), None);
/// ```
pub fn byte_at<T>(text: &T, index: ByteIndex) -> Option<u8>
where
    T: AsRef<[u8]> + ?Sized,
{
    text.as_ref().get(index.as_usize()).copied()
}

/// The bytes in `range`, clamped to the length of `text`. An inverted range yields an
/// empty slice.
pub fn slice_bytes<T>(text: &T, range: Range<ByteIndex>) -> &[u8]
where
    T: AsRef<[u8]> + ?Sized,
{
    let bytes = text.as_ref();
    let end = range.end.as_usize().min(bytes.len());
    let start = range.start.as_usize().min(end);
    &bytes[start..end]
}

/// Number of encoded bytes in `text`.
pub fn encoded_len<T>(text: &T) -> ByteLength
where
    T: AsRef<[u8]> + ?Sized,
{
    byte_len(text.as_ref().len())
}

/// Number of scalar values in `text`. Each byte that does not start a well formed
/// sequence counts as one.
pub fn scalar_count<T>(text: &T) -> usize
where
    T: AsRef<[u8]> + ?Sized,
{
    scalar_indices(text).count()
}

/// Whether `index` is the start of a sequence (or the end of `text`). Agrees with
/// [`str::is_char_boundary`] for valid text.
pub fn is_scalar_boundary<T>(text: &T, index: ByteIndex) -> bool
where
    T: AsRef<[u8]> + ?Sized,
{
    let bytes = text.as_ref();
    match bytes.get(index.as_usize()) {
        Some(&byte) => !is_continuation_byte(byte),
        None => index.as_usize() == bytes.len(),
    }
}
