// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocation sizes for the short strings and byte sequences that the
//! demonstrations produce. A harness line like `char: 937 '\u{3a9}' 3a9` rarely needs
//! more than [`DEFAULT_STRING_STORAGE_SIZE`] bytes before it spills onto the heap, and
//! an encoded scalar value never needs more than [`DEFAULT_CHAR_STORAGE_SIZE`] bytes.

use smallstr::SmallString;
use smallvec::SmallVec;

pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;

/// The maximum number of bytes that `UTF-8` uses to encode a single scalar value.
pub const DEFAULT_CHAR_STORAGE_SIZE: usize = 4;

pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated vector. When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;

/// The encoded bytes of a single scalar value. This never spills on the heap.
pub type CharStorage = SmallVec<[u8; DEFAULT_CHAR_STORAGE_SIZE]>;
