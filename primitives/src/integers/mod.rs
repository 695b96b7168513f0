// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed width integers and what happens when you add one to their maximum value.
//!
//! An unsigned `N` bit integer holds `0..=2^N - 1`, and a signed one holds
//! `-2^(N-1)..=2^(N-1) - 1` in two's complement. Adding one to the maximum overflows.
//! Plain `+` panics in debug builds and wraps in release builds, so every demonstration
//! here names its policy explicitly with [`FixedWidthInt::wrapping_increment`] and
//! friends. Wrapping is the same in every build profile.

// Attach.
pub mod fixed_width;
pub mod overflow;

// Re-export.
pub use fixed_width::*;
pub use overflow::*;
