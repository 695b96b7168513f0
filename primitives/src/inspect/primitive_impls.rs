// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Result, Write};

use super::{Escape, Inspect, write_hex_bytes, write_quoted_char, write_quoted_str};
use crate::{BufTextStorage, FixedWidthInt};

macro_rules! impl_inspect_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_name(&self) -> &'static str { <$ty as FixedWidthInt>::TYPE_NAME }

                fn write_repr(&self, acc: &mut BufTextStorage) -> Result {
                    write!(acc, "{self}")
                }
            }
        )*
    };
}

impl_inspect_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Inspect for bool {
    fn type_name(&self) -> &'static str { "bool" }

    fn write_repr(&self, acc: &mut BufTextStorage) -> Result { write!(acc, "{self}") }
}

/// `{code point} {escaped} {hex}`, eg: `937 '\u{3a9}' 3a9`.
impl Inspect for char {
    fn type_name(&self) -> &'static str { "char" }

    fn write_repr(&self, acc: &mut BufTextStorage) -> Result {
        let code_point = u32::from(*self);
        write!(acc, "{code_point} ")?;
        write_quoted_char(*self, Escape::Default, acc)?;
        write!(acc, " {code_point:x}")
    }
}

/// `{quoted} {escaped} {hex bytes}`, eg: `"café" "caf\u{e9}" 63 61 66 c3 a9`.
impl Inspect for str {
    fn type_name(&self) -> &'static str { "&str" }

    fn write_repr(&self, acc: &mut BufTextStorage) -> Result {
        write_quoted_str(self, Escape::Debug, acc)?;
        acc.push(' ');
        write_quoted_str(self, Escape::Default, acc)?;
        if !self.is_empty() {
            acc.push(' ');
            write_hex_bytes(self.as_bytes(), acc);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_integers() {
        assert_eq2!(Inspect::inspect(&1000), "i32: 1000");
        assert_eq2!(u64::MAX.inspect(), "u64: 18446744073709551615");
        assert_eq2!(i8::MIN.inspect(), "i8: -128");
        assert_eq2!(5_usize.inspect(), "usize: 5");
    }

    #[test]
    fn test_bool() {
        assert_eq2!("café".is_char_boundary(4).inspect(), "bool: false");
        assert_eq2!(true.inspect(), "bool: true");
    }

    #[test_case('A', "char: 65 'A' 41" ; "ascii")]
    #[test_case('Ω', r"char: 937 '\u{3a9}' 3a9" ; "greek capital omega")]
    #[test_case('é', r"char: 233 '\u{e9}' e9" ; "e acute")]
    #[test_case('📦', r"char: 128230 '\u{1f4e6}' 1f4e6" ; "four byte scalar")]
    fn test_char(scalar: char, expected: &str) {
        assert_eq2!(scalar.inspect(), expected);
    }

    #[test_case("café", r#"&str: "café" "caf\u{e9}" 63 61 66 c3 a9"# ; "cafe")]
    #[test_case("A", r#"&str: "A" "A" 41"# ; "ascii")]
    #[test_case("", r#"&str: "" """# ; "empty")]
    fn test_str(text: &str, expected: &str) {
        assert_eq2!(text.inspect(), expected);
    }

    #[test]
    fn test_write_labeled() {
        let word = "café";
        let mut acc = BufTextStorage::new();
        word.len().write_labeled("word.len()", &mut acc).unwrap();
        assert_eq2!(acc, "word.len() usize: 5");
    }
}
