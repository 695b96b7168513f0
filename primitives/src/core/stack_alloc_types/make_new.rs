// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// XMARK: Clever Rust, use of decl macro w/ `tt` to allow any number of arguments.

/// Format the arguments into a new [`crate::InlineString`]. This is just like [format!],
/// except that no [String] is allocated on the heap, unless the result is larger than
/// [`crate::DEFAULT_STRING_STORAGE_SIZE`].
///
/// # Example
///
/// ```
/// use r3bl_primitives::inline_string;
/// let it = inline_string!("{}: {}", "u8", u8::MAX);
/// assert_eq!(it, "u8: 255");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // We don't care about the result of this operation.
        write!(&mut acc, $($format)*).ok();
        acc
    }};
}

/// A macro to join elements of a collection into a single [`crate::InlineString`] (which
/// is allocated and returned) with a specified delimiter and format. No heap allocation
/// via [String] creation occurs when the `$format` expression is executed.
///
/// # Arguments
///
/// * `from: $collection` - The collection to iterate over.
/// * `each: $item` - The identifier for each item in the collection.
/// * `delim: $delim` - The delimiter to insert between items.
/// * `format: $($format:tt)*` - The format to apply to each item. This is whatever you
///   would pass to [format!] or [write!].
///
/// # Example
///
/// ```
/// use r3bl_primitives::join;
/// let bytes = "é".as_bytes();
/// let result = join! {
///     from: bytes,
///     each: byte,
///     delim: " ",
///     format: "{byte:02x}"
/// };
/// assert_eq!(result, "c3 a9");
/// ```
#[macro_export]
macro_rules! join {
    (
        from: $collection:expr,
        each: $item:ident,
        delim: $delim:expr,
        format: $($format:tt)*
    ) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        let mut iter = $collection.iter();
        // First item.
        if let Some($item) = iter.next() {
            // We don't care about the result of this operation.
            write!(&mut acc, $($format)*).ok();
        }
        // Rest of the items.
        for $item in iter {
            // We don't care about the result of this operation.
            write!(&mut acc, "{}", $delim).ok();
            // We don't care about the result of this operation.
            write!(&mut acc, $($format)*).ok();
        }
        acc
    }};
}

#[cfg(test)]
mod tests_inline_string {
    #[test]
    fn test_short_string_stays_inline() {
        let it = inline_string!("{}", "i32: 1000");
        assert_eq!(it, "i32: 1000");
        assert!(!it.spilled());
    }

    #[test]
    fn test_long_string_spills() {
        let it = inline_string!("   maximum u128: {} (2↑{})", u128::MAX, 128);
        assert_eq!(
            it,
            "   maximum u128: 340282366920938463463374607431768211455 (2↑128)"
        );
        assert!(it.spilled());
    }
}
