// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result, Write};

use super::FixedWidthInt;
use crate::{BufTextStorage, WriteToBuf};

/// The maximum value of `T`, and the outcome of adding one to it under each overflow
/// policy.
///
/// Its [`Display`] implementation renders the two line maximum and wraparound block:
///
/// ```
/// use r3bl_primitives::OverflowReport;
///
/// let it = OverflowReport::<i64>::at_max();
/// assert_eq!(
///     it.to_string(),
///     "   maximum i64: 9223372036854775807 (2↑63)\nmaximum i64 ++: -9223372036854775808"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowReport<T: FixedWidthInt> {
    pub max: T,
    /// `max == 2^max_log2 - 1`.
    pub max_log2: u32,
    pub wrapping: T,
    pub checked: Option<T>,
    pub overflowing: (T, bool),
    pub saturating: T,
}

impl<T: FixedWidthInt> OverflowReport<T> {
    #[must_use]
    pub fn at_max() -> Self {
        let max = T::MAX;
        Self {
            max,
            max_log2: T::max_log2(),
            wrapping: max.wrapping_increment(),
            checked: max.checked_increment(),
            overflowing: max.overflowing_increment(),
            saturating: max.saturating_increment(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str { T::TYPE_NAME }

    /// Whether `MAX + 1` wrapped all the way around to `MIN`. This is `0` for unsigned
    /// types.
    #[must_use]
    pub fn wraps_to_min(&self) -> bool { self.wrapping == T::MIN }

    /// One line per overflow policy, for example `u8 255 checked_add(1): None`. Each
    /// line ends with a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects a write.
    pub fn write_policies_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        let (name, max) = (T::TYPE_NAME, self.max);
        writeln!(acc, "{name} {max} wrapping_add(1): {}", self.wrapping)?;
        writeln!(acc, "{name} {max} checked_add(1): {:?}", self.checked)?;
        writeln!(acc, "{name} {max} overflowing_add(1): {:?}", self.overflowing)?;
        writeln!(acc, "{name} {max} saturating_add(1): {}", self.saturating)
    }
}

impl<T: FixedWidthInt> WriteToBuf for OverflowReport<T> {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        // Pad the first label so both colons line up.
        acc.push_str("   maximum ");
        acc.push_str(T::TYPE_NAME);
        write!(acc, ": {} (2↑{})", self.max, self.max_log2)?;
        acc.push('\n');
        acc.push_str("maximum ");
        acc.push_str(T::TYPE_NAME);
        write!(acc, " ++: {}", self.wrapping)
    }
}

impl<T: FixedWidthInt> Display for OverflowReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut buffer = BufTextStorage::new();
        self.write_to_buf(&mut buffer)?;
        self.write_buf_to_fmt(&buffer, f)
    }
}
