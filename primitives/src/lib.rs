// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_primitives
//!
//! A small set of demonstrations of how Rust's primitive types actually behave, each
//! one producing a transcript that is checked against a golden text block.
//!
//! 1. Fixed width integers: the maximum value of every width, and what `+1` does to it
//!    under each overflow policy. Unsigned types wrap to `0`, signed types wrap to their
//!    most negative value. See [`integers`].
//! 2. [`char`] is a Unicode scalar value: its numeric code point, its escaped form, and
//!    its hex encoding. See [`inspect`].
//! 3. [`str`] is `UTF-8` encoded bytes. Indexing into the bytes yields a [`u8`], not a
//!    [`char`], and slicing by byte offset can end in the middle of a multi-byte
//!    sequence. See [`utf8`].
//!
//! Rust uses `UTF-8` to represent text in [String]. `UTF-8` is a variable width encoding,
//! so each character can take up a different number of bytes, between 1 and 4.
//!
//! | Character | Code point | Byte size | Bytes         |
//! | --------- | ---------- | --------- | ------------- |
//! | `c`       | `U+0063`   | 1         | `63`          |
//! | `é`       | `U+00E9`   | 2         | `c3 a9`       |
//! | `Ω`       | `U+03A9`   | 2         | `ce a9`       |
//! | `€`       | `U+20AC`   | 3         | `e2 82 ac`    |
//! | `📦`      | `U+1F4E6`  | 4         | `f0 9f 93 a6` |
//!
//! So `"café"` is 4 scalar values but 5 bytes long, and iterating over it by scalar
//! value yields the byte offsets `[0, 1, 2, 3]`.
//!
//! ```
//! use r3bl_primitives::{Scalar, scalar_indices};
//!
//! let offsets: Vec<(usize, Scalar)> = scalar_indices("ação")
//!     .map(|it| (it.byte_index.as_usize(), it.scalar))
//!     .collect();
//! assert_eq!(
//!     offsets,
//!     vec![
//!         (0, Scalar::Valid('a')),
//!         (1, Scalar::Valid('ç')),
//!         (3, Scalar::Valid('ã')),
//!         (5, Scalar::Valid('o')),
//!     ]
//! );
//! ```
//!
//! # The demonstration harness
//!
//! Every value is rendered by the [`Inspect`] trait into a single line of the form
//! `"{type name}: {representation}"`. The [`Demo`] registry composes these lines into
//! transcripts, and [`Demo::verify`] compares them with the golden blocks.
//!
//! ```
//! use r3bl_primitives::{Demo, Inspect};
//!
//! assert_eq!('Ω'.inspect(), "char: 937 '\\u{3a9}' 3a9");
//! assert!(Demo::UintOverflow.verify().is_ok());
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod cli;
pub mod core;
pub mod demos;
pub mod inspect;
pub mod integers;
pub mod utf8;

// Re-export.
pub use core::*;
pub use demos::*;
pub use inspect::*;
pub use integers::*;
pub use utf8::*;
