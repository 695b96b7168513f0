// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Result;

use crate::{BufTextStorage, InlineString};

/// Render a value as `"{type name}: {representation}"`.
///
/// Implementors only provide [`Inspect::type_name`] and [`Inspect::write_repr`]. Writes
/// only go to the supplied buffer, and the only possible error is the one the buffer
/// returns.
///
/// ```
/// use r3bl_primitives::Inspect;
///
/// // An unsuffixed integer literal defaults to `i32`.
/// assert_eq!(Inspect::inspect(&1000), "i32: 1000");
/// assert_eq!('A'.inspect(), "char: 65 'A' 41");
/// assert_eq!("café".inspect(), r#"&str: "café" "caf\u{e9}" 63 61 66 c3 a9"#);
/// ```
pub trait Inspect {
    /// The type as written in source, eg: `u64` or `&str`.
    fn type_name(&self) -> &'static str;

    /// Write just the representation, without the type name.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer rejects a write.
    fn write_repr(&self, acc: &mut BufTextStorage) -> Result;

    /// Write `"{type name}: {representation}"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer rejects a write.
    fn write_inspect(&self, acc: &mut BufTextStorage) -> Result {
        acc.push_str(self.type_name());
        acc.push_str(": ");
        self.write_repr(acc)
    }

    /// Write `"{label} {type name}: {representation}"`, eg:
    /// `word.len() usize: 5`.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer rejects a write.
    fn write_labeled(&self, label: &str, acc: &mut BufTextStorage) -> Result {
        acc.push_str(label);
        acc.push(' ');
        self.write_inspect(acc)
    }

    fn inspect(&self) -> InlineString {
        let mut acc = BufTextStorage::new();
        // Writing to a `String` does not fail.
        self.write_inspect(&mut acc).ok();
        InlineString::from(acc.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    struct Celsius(i16);

    impl Inspect for Celsius {
        fn type_name(&self) -> &'static str { "Celsius" }

        fn write_repr(&self, acc: &mut BufTextStorage) -> Result {
            use std::fmt::Write;
            write!(acc, "{}°", self.0)
        }
    }

    #[test]
    fn test_provided_methods() {
        let it = Celsius(-40);
        assert_eq2!(it.inspect(), "Celsius: -40°");

        let mut acc = BufTextStorage::new();
        it.write_labeled("freezing", &mut acc).unwrap();
        assert_eq2!(acc, "freezing Celsius: -40°");
    }
}
