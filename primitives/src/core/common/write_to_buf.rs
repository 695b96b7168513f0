// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # String building with `WriteToBuf`
//!
//! Every line of a transcript is built by appending to a single [`BufTextStorage`]
//! buffer, instead of allocating a [String] per value with [format!]. Use
//! [`String::push_str`] for literals and [`write!`] only when a value actually needs
//! formatting.
//!
//! ## Example: `Display` implementation backed by `WriteToBuf`
//!
//! ```rust
//! # use std::fmt::{Display, Formatter, Result};
//! # use r3bl_primitives::{WriteToBuf, BufTextStorage};
//! struct Maximum {
//!     type_name: &'static str,
//!     value: u64,
//! }
//!
//! impl WriteToBuf for Maximum {
//!     fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
//!         use std::fmt::Write;
//!         acc.push_str("maximum ");
//!         acc.push_str(self.type_name);
//!         write!(acc, ": {}", self.value)?;
//!         Ok(())
//!     }
//! }
//!
//! impl Display for Maximum {
//!     fn fmt(&self, f: &mut Formatter<'_>) -> Result {
//!         let mut buffer = BufTextStorage::new();
//!         self.write_to_buf(&mut buffer)?;
//!         self.write_buf_to_fmt(&buffer, f)
//!     }
//! }
//!
//! let it = Maximum { type_name: "u64", value: u64::MAX };
//! assert_eq!(it.to_string(), "maximum u64: 18446744073709551615");
//! ```

use std::fmt::{Formatter, Result};

/// Buffer for building text. This type alias allows us to experiment with different
/// string-like data structures (e.g., `SmallString`) without impacting the rest of the
/// codebase.
pub type BufTextStorage = String;

/// Trait for writing text to a buffer (the sink of the demonstration harness).
///
/// The [`std::fmt::Display`] implementations of the harness types delegate to
/// `WriteToBuf`, and then make a single call to [`Formatter::write_str`].
pub trait WriteToBuf {
    /// Write the formatted representation to the provided buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting operation fails.
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// Use [`Formatter::write_str`] to actually write the `acc` buffer when implementing
    /// the [`std::fmt::Display`] trait.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}
