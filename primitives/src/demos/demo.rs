// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Result, Write},
          str::FromStr};

use pretty_assertions::StrComparison;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::{Transcript, golden};
use crate::{BufTextStorage, EncodedByte, EncodedBytes, InlineString, OverflowReport,
            PrimitivesError, Scalar, byte_at, byte_index, inline_string,
            is_scalar_boundary, join, ok, scalar_indices, slice_bytes};

/// Every demonstration, in the order they are run. The names are kebab case, eg:
/// `uint-overflow`.
///
/// More info:
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumString.html>
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.Display.html>
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumIter.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Demo {
    /// An integer literal without a suffix is an `i32`.
    IntDefaultType,
    /// `u64::MAX + 1` wraps to `0`.
    UintOverflow,
    /// `i64::MAX + 1` wraps to `i64::MIN`.
    IntOverflow,
    /// Maximum and wraparound for every fixed width, `u8..=u128` and `i8..=i128`.
    OverflowAllWidths,
    /// `MAX + 1` under the wrapping, checked, overflowing and saturating policies.
    OverflowPolicies,
    /// A `char` is a Unicode scalar value.
    CharConstants,
    /// Indexing text by byte yields a `u8`, which may be part of a multi-byte sequence.
    StringBytes,
    /// Slicing text by byte offset can end in the middle of a scalar value.
    StringSlices,
    /// Iterating text by scalar value, with the byte offset of each one.
    StringScalars,
}

impl Demo {
    pub fn all() -> impl Iterator<Item = Demo> { Demo::iter() }

    /// Comma separated list of every demo name.
    #[must_use]
    pub fn valid_names() -> InlineString {
        let names: Vec<Demo> = Demo::all().collect();
        join!(from: names, each: it, delim: ", ", format: "{it}")
    }

    /// Look up a demo by name.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitivesError::UnknownDemo`] if there is no demo called `name`.
    pub fn try_parse(name: &str) -> std::result::Result<Demo, PrimitivesError> {
        Demo::from_str(name).map_err(|_| PrimitivesError::UnknownDemo {
            name: name.to_string(),
            valid_names: Demo::valid_names().to_string(),
        })
    }

    /// The golden text block for this demo.
    #[must_use]
    pub fn expected(self) -> &'static str {
        match self {
            Demo::IntDefaultType => golden::INT_DEFAULT_TYPE,
            Demo::UintOverflow => golden::UINT_OVERFLOW,
            Demo::IntOverflow => golden::INT_OVERFLOW,
            Demo::OverflowAllWidths => golden::OVERFLOW_ALL_WIDTHS,
            Demo::OverflowPolicies => golden::OVERFLOW_POLICIES,
            Demo::CharConstants => golden::CHAR_CONSTANTS,
            Demo::StringBytes => golden::STRING_BYTES,
            Demo::StringSlices => golden::STRING_SLICES,
            Demo::StringScalars => golden::STRING_SCALARS,
        }
    }

    /// Write the lines of this demo to `acc`.
    ///
    /// # Errors
    ///
    /// Returns an error if a line can't be written.
    pub fn run(self, acc: &mut Transcript) -> Result {
        // % is Display, ? is Debug.
        tracing::debug!(message = "run demo", demo = %self);

        match self {
            Demo::IntDefaultType => {
                let count = 1000;
                acc.push_inspect(&count)
            }
            Demo::UintOverflow => acc.push_block(&OverflowReport::<u64>::at_max()),
            Demo::IntOverflow => acc.push_block(&OverflowReport::<i64>::at_max()),
            Demo::OverflowAllWidths => {
                acc.push_block(&OverflowReport::<u8>::at_max())?;
                acc.push_block(&OverflowReport::<u16>::at_max())?;
                acc.push_block(&OverflowReport::<u32>::at_max())?;
                acc.push_block(&OverflowReport::<u64>::at_max())?;
                acc.push_block(&OverflowReport::<u128>::at_max())?;
                acc.push_block(&OverflowReport::<i8>::at_max())?;
                acc.push_block(&OverflowReport::<i16>::at_max())?;
                acc.push_block(&OverflowReport::<i32>::at_max())?;
                acc.push_block(&OverflowReport::<i64>::at_max())?;
                acc.push_block(&OverflowReport::<i128>::at_max())
            }
            Demo::OverflowPolicies => {
                let mut block = BufTextStorage::new();
                OverflowReport::<u8>::at_max().write_policies_to_buf(&mut block)?;
                OverflowReport::<i8>::at_max().write_policies_to_buf(&mut block)?;
                block.lines().for_each(|line| acc.push_line(line));
                ok!()
            }
            Demo::CharConstants => {
                acc.push_inspect(&'A')?;
                acc.push_inspect(&'Ω')
            }
            Demo::StringBytes => run_string_bytes(acc),
            Demo::StringSlices => run_string_slices(acc),
            Demo::StringScalars => {
                for word in ["café", "ação"] {
                    acc.push_line(inline_string!("scalars {word:?}:").as_str());
                    write_scalar_listing(word, acc)?;
                }
                ok!()
            }
        }
    }

    /// Run this demo and collect its lines.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitivesError::Format`] if a line can't be written.
    pub fn try_transcript(self) -> std::result::Result<Transcript, PrimitivesError> {
        let mut acc = Transcript::new();
        self.run(&mut acc)?;
        Ok(acc)
    }

    /// The rendered transcript of this demo.
    #[must_use]
    pub fn transcript(self) -> String {
        let mut acc = Transcript::new();
        // Lines are written to `String`s, which don't fail.
        self.run(&mut acc).ok();
        acc.to_string()
    }

    /// Compare the transcript of this demo with its golden text block.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitivesError::TranscriptMismatch`], with a line diff, if they differ.
    pub fn verify(self) -> std::result::Result<(), PrimitivesError> {
        let actual = self.try_transcript()?.to_string();
        let expected = self.expected();

        if actual == expected {
            tracing::debug!(message = "verify demo", demo = %self, result = "match");
            return ok!();
        }

        let diff = StrComparison::new(expected, &actual).to_string();
        tracing::debug!(message = "verify demo", demo = %self, result = "mismatch", diff = %diff);
        Err(PrimitivesError::TranscriptMismatch {
            demo: self.to_string(),
            diff,
        })
    }
}

/// Verify every demo, stopping at the first mismatch.
///
/// # Errors
///
/// Returns the first [`PrimitivesError::TranscriptMismatch`].
pub fn verify_all() -> std::result::Result<(), PrimitivesError> {
    for demo in Demo::all() {
        demo.verify()?;
    }
    ok!()
}

/// One line per scalar value of `text`, with its byte offset and code point, eg:
/// `    index usize: [3] → char: 233 // é`. A byte that doesn't start a well formed
/// sequence is shown as a `u8`.
///
/// # Errors
///
/// Returns an error if a line can't be written.
pub fn write_scalar_listing<T>(text: &T, acc: &mut Transcript) -> Result
where
    T: AsRef<[u8]> + ?Sized,
{
    for item in scalar_indices(text) {
        acc.write_line(|line| {
            write!(line, "    index usize: [{}] → ", item.byte_index.as_usize())?;
            match item.scalar {
                Scalar::Valid(scalar) => write!(
                    line,
                    "char: {:3} // {}",
                    u32::from(scalar),
                    scalar.escape_debug()
                ),
                Scalar::Invalid(byte) => write!(line, "u8: {byte:#04x} // invalid"),
            }
        })?;
    }
    ok!()
}

fn run_string_bytes(acc: &mut Transcript) -> Result {
    let word = "café";
    acc.push_inspect(word)?;
    acc.push_labeled("word.len()", &word.len())?;
    for index in [0, 3, 4] {
        if let Some(byte) = byte_at(word, byte_index(index)) {
            let label = inline_string!("word.as_bytes()[{index}]");
            acc.push_labeled(&label, &EncodedByte(byte))?;
        }
    }
    ok!()
}

fn run_string_slices(acc: &mut Transcript) -> Result {
    let word = "café";
    acc.push_inspect(word)?;
    acc.push_labeled("word.len()", &word.len())?;
    for (label, range) in [("..3", 0..3), ("..4", 0..4), ("2..", 2..word.len())] {
        let bytes = slice_bytes(word, byte_index(range.start)..byte_index(range.end));
        let label = inline_string!("word.as_bytes()[{label}]");
        acc.push_labeled(&label, &EncodedBytes(bytes))?;
    }
    acc.push_labeled(
        "word.is_char_boundary(4)",
        &is_scalar_boundary(word, byte_index(4)),
    )
}
