// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The formatted demonstration harness. Every value is rendered as a single line
//! `"{type name}: {representation}"`, where the representation shows how the value is
//! stored, not just what it prints as.
//!
//! | Value                | Type name | Representation                            |
//! | -------------------- | --------- | ----------------------------------------- |
//! | `1000`               | `i32`     | `1000`                                    |
//! | `'Ω'`                | `char`    | `937 '\u{3a9}' 3a9`                       |
//! | `"café"`             | `&str`    | `"café" "caf\u{e9}" 63 61 66 c3 a9`       |
//! | `EncodedByte(0xc3)`  | `u8`      | `0xc3 // '\u{c3}' 'Ã'`                    |
//! | `EncodedBytes(..)`   | `&[u8]`   | `"caf\xc3" "caf\xc3"`                     |
//!
//! Text is shown twice: once quoted with [`str::escape_debug`], and once with
//! [`str::escape_default`] which escapes everything outside of `ASCII` as `\u{..}`.

// Attach.
pub mod encoded;
pub mod escape;
pub mod inspect_trait;
pub mod primitive_impls;

// Re-export.
pub use encoded::*;
pub use escape::*;
pub use inspect_trait::*;
