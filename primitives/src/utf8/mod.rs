// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text as `UTF-8` encoded bytes.
//!
//! A [`str`] is a sequence of bytes, not a sequence of [`char`]s. Indexing it by byte
//! offset yields a [`u8`] (which may be in the middle of a multi-byte sequence), and
//! iterating it by scalar value means decoding one sequence at a time and advancing the
//! byte offset by the width of what was decoded. That decode-and-advance loop is
//! [`ScalarIndices`].
//!
//! | Width | Bits | Lead byte  | Continuation bytes | Range                  |
//! | ----- | ---- | ---------- | ------------------ | ---------------------- |
//! | 1     | 7    | `0xxxxxxx` |                    | `U+0000..=U+007F`      |
//! | 2     | 11   | `110xxxxx` | `10xxxxxx`         | `U+0080..=U+07FF`      |
//! | 3     | 16   | `1110xxxx` | `10xxxxxx` x 2     | `U+0800..=U+FFFF`      |
//! | 4     | 21   | `11110xxx` | `10xxxxxx` x 3     | `U+10000..=U+10FFFF`   |

// Attach.
pub mod byte_view;
pub mod decode;
pub mod scalar_indices;

// Re-export.
pub use byte_view::*;
pub use decode::*;
pub use scalar_indices::*;
