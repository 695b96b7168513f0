// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::decode_scalar;
use crate::{ByteIndex, ByteLength, Utf8DecodeError, byte_index, byte_len};

/// What was found at a byte offset: a decoded scalar value, or a byte that does not
/// start a well formed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Valid(char),
    Invalid(u8),
}

impl Scalar {
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Scalar::Valid(it) => Some(*it),
            Scalar::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool { matches!(self, Scalar::Valid(_)) }
}

/// One step of [`ScalarIndices`]. The next item starts at `byte_index + width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarItem {
    pub byte_index: ByteIndex,
    pub scalar: Scalar,
    pub width: ByteLength,
}

impl ScalarItem {
    /// Byte offset right after this item.
    #[must_use]
    pub fn end_index(&self) -> ByteIndex { self.byte_index + self.width }
}

/// Iterate encoded text by scalar value, yielding the byte offset where each one
/// starts. This decodes one sequence at a time and advances by the width it decoded,
/// instead of relying on [`str::char_indices`].
///
/// Bytes that don't start a well formed sequence are yielded as [`Scalar::Invalid`]
/// with a width of 1, so iteration never fails and always ends. For valid text the
/// items are the same as [`str::char_indices`].
///
/// ```
/// use r3bl_primitives::{Scalar, scalar_indices};
///
/// let it: Vec<(usize, Scalar)> = scalar_indices(b"caf\xc3")
///     .map(|item| (item.byte_index.as_usize(), item.scalar))
///     .collect();
/// assert_eq!(
///     it,
///     vec![
///         (0, Scalar::Valid('c')),
///         (1, Scalar::Valid('a')),
///         (2, Scalar::Valid('f')),
///         (3, Scalar::Invalid(0xc3)),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ScalarIndices<'a> {
    bytes: &'a [u8],
    cursor: ByteIndex,
}

impl<'a> ScalarIndices<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: byte_index(0),
        }
    }

    /// Start over from the first byte.
    pub fn reset(&mut self) { self.cursor = byte_index(0); }

    /// Byte offset of the next item.
    #[must_use]
    pub fn cursor(&self) -> ByteIndex { self.cursor }

    /// The bytes that have not been decoded yet.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.bytes.get(self.cursor.as_usize()..).unwrap_or_default()
    }
}

impl Iterator for ScalarIndices<'_> {
    type Item = ScalarItem;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        let start = self.cursor;

        let (scalar, width) = match decode_scalar(remaining) {
            Ok((it, width)) => (Scalar::Valid(it), width),
            Err(Utf8DecodeError::Empty) => return None,
            Err(error) => {
                let byte = *remaining.first()?;
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "invalid byte in scalar_indices",
                    byte_index = ?start,
                    byte,
                    error = %error,
                );
                (Scalar::Invalid(byte), byte_len(1))
            }
        };

        self.cursor += width;

        Some(ScalarItem {
            byte_index: start,
            scalar,
            width,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining().len();
        (remaining.div_ceil(super::MAX_SCALAR_WIDTH), Some(remaining))
    }
}

impl FusedIterator for ScalarIndices<'_> {}

/// Decode-and-advance iterator over `text`, which can be a [`str`], a [`String`], or
/// any byte slice (it does not have to be valid `UTF-8`).
pub fn scalar_indices<T>(text: &T) -> ScalarIndices<'_>
where
    T: AsRef<[u8]> + ?Sized,
{
    ScalarIndices::new(text.as_ref())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn offsets_and_chars(text: &str) -> Vec<(usize, char)> {
        scalar_indices(text)
            .map(|item| (item.byte_index.as_usize(), item.scalar.as_char().unwrap()))
            .collect()
    }

    #[test]
    fn test_cafe() {
        let word = "café";
        assert_eq2!(word.len(), 5);
        assert_eq2!(
            offsets_and_chars(word),
            vec![(0, 'c'), (1, 'a'), (2, 'f'), (3, 'é')]
        );
        assert_eq2!(u32::from('é'), 233);
    }

    #[test]
    fn test_acao() {
        assert_eq2!(
            offsets_and_chars("ação"),
            vec![(0, 'a'), (1, 'ç'), (3, 'ã'), (5, 'o')]
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("hello" ; "ascii")]
    #[test_case("café" ; "two byte scalar at end")]
    #[test_case("ação" ; "two byte scalars in the middle")]
    #[test_case("Ω€📦" ; "two three and four byte scalars")]
    #[test_case("🙏🏽 नमस्ते" ; "emoji modifier and devanagari")]
    fn test_agrees_with_char_indices(text: &str) {
        let expected: Vec<(usize, char)> = text.char_indices().collect();
        assert_eq2!(offsets_and_chars(text), expected);
    }

    #[test]
    fn test_offsets_advance_by_width() {
        let text = "a€bé📦";
        let items: Vec<ScalarItem> = scalar_indices(text).collect();
        for pair in items.windows(2) {
            let [prev, next] = pair else { unreachable!() };
            assert!(next.byte_index > prev.byte_index);
            assert_eq2!(next.byte_index, prev.end_index());
            assert!((1..=4).contains(&prev.width.as_usize()));
        }
        let last = items.last().unwrap();
        assert_eq2!(last.end_index().as_usize(), text.len());
    }

    #[test]
    fn test_invalid_bytes_are_yielded_one_at_a_time() {
        let bytes: &[u8] = &[b'a', 0xa9, 0xff, 0xc3, b'b', 0xe2, 0x82];
        let items: Vec<(usize, Scalar, usize)> = scalar_indices(bytes)
            .map(|it| (it.byte_index.as_usize(), it.scalar, it.width.as_usize()))
            .collect();
        assert_eq2!(
            items,
            vec![
                (0, Scalar::Valid('a'), 1),
                (1, Scalar::Invalid(0xa9), 1),
                (2, Scalar::Invalid(0xff), 1),
                (3, Scalar::Invalid(0xc3), 1),
                (4, Scalar::Valid('b'), 1),
                (5, Scalar::Invalid(0xe2), 1),
                (6, Scalar::Invalid(0x82), 1),
            ]
        );
    }

    #[test]
    fn test_mid_codepoint_slice() {
        let word = "café";
        let items: Vec<Scalar> = scalar_indices(&word.as_bytes()[..4])
            .map(|it| it.scalar)
            .collect();
        assert_eq2!(
            items,
            vec![
                Scalar::Valid('c'),
                Scalar::Valid('a'),
                Scalar::Valid('f'),
                Scalar::Invalid(0xc3)
            ]
        );
    }

    #[test]
    fn test_reset_and_clone_restart() {
        let mut it = scalar_indices("ação");
        assert_eq2!(it.next().map(|it| it.scalar), Some(Scalar::Valid('a')));

        let snapshot = it.clone();
        assert_eq2!(it.cursor(), byte_index(1));
        assert_eq2!(it.remaining(), "ção".as_bytes());
        assert_eq2!(it.by_ref().count(), 3);
        assert_eq2!(snapshot.count(), 3);

        it.reset();
        assert_eq2!(it.count(), 4);
    }

    #[test]
    fn test_fused() {
        let mut it = scalar_indices("é");
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert_eq2!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_bounds() {
        let text = "a€bé📦";
        let (lower, upper) = scalar_indices(text).size_hint();
        let actual = scalar_indices(text).count();
        assert!(lower <= actual);
        assert!(actual <= upper.unwrap());
    }
}
