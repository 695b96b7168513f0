// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Golden text blocks. Each one is the exact expected transcript of a
//! [`crate::Demo`], including the newline at the end of every line. These are the
//! external contract: if one changes, the behavior of a primitive type changed.

pub const INT_DEFAULT_TYPE: &str = "i32: 1000\n";

pub const UINT_OVERFLOW: &str = concat!(
    "   maximum u64: 18446744073709551615 (2↑64)\n",
    "maximum u64 ++: 0\n",
);

pub const INT_OVERFLOW: &str = concat!(
    "   maximum i64: 9223372036854775807 (2↑63)\n",
    "maximum i64 ++: -9223372036854775808\n",
);

pub const OVERFLOW_ALL_WIDTHS: &str = concat!(
    "   maximum u8: 255 (2↑8)\n",
    "maximum u8 ++: 0\n",
    "   maximum u16: 65535 (2↑16)\n",
    "maximum u16 ++: 0\n",
    "   maximum u32: 4294967295 (2↑32)\n",
    "maximum u32 ++: 0\n",
    "   maximum u64: 18446744073709551615 (2↑64)\n",
    "maximum u64 ++: 0\n",
    "   maximum u128: 340282366920938463463374607431768211455 (2↑128)\n",
    "maximum u128 ++: 0\n",
    "   maximum i8: 127 (2↑7)\n",
    "maximum i8 ++: -128\n",
    "   maximum i16: 32767 (2↑15)\n",
    "maximum i16 ++: -32768\n",
    "   maximum i32: 2147483647 (2↑31)\n",
    "maximum i32 ++: -2147483648\n",
    "   maximum i64: 9223372036854775807 (2↑63)\n",
    "maximum i64 ++: -9223372036854775808\n",
    "   maximum i128: 170141183460469231731687303715884105727 (2↑127)\n",
    "maximum i128 ++: -170141183460469231731687303715884105728\n",
);

pub const OVERFLOW_POLICIES: &str = concat!(
    "u8 255 wrapping_add(1): 0\n",
    "u8 255 checked_add(1): None\n",
    "u8 255 overflowing_add(1): (0, true)\n",
    "u8 255 saturating_add(1): 255\n",
    "i8 127 wrapping_add(1): -128\n",
    "i8 127 checked_add(1): None\n",
    "i8 127 overflowing_add(1): (-128, true)\n",
    "i8 127 saturating_add(1): 127\n",
);

pub const CHAR_CONSTANTS: &str = concat!(
    "char: 65 'A' 41\n",
    r"char: 937 '\u{3a9}' 3a9",
    "\n",
);

pub const STRING_BYTES: &str = concat!(
    r#"&str: "café" "caf\u{e9}" 63 61 66 c3 a9"#,
    "\n",
    "word.len() usize: 5\n",
    "word.as_bytes()[0] u8: 0x63 // 'c' 'c'\n",
    r"word.as_bytes()[3] u8: 0xc3 // '\u{c3}' 'Ã'",
    "\n",
    r"word.as_bytes()[4] u8: 0xa9 // '\u{a9}' '©'",
    "\n",
);

pub const STRING_SLICES: &str = concat!(
    r#"&str: "café" "caf\u{e9}" 63 61 66 c3 a9"#,
    "\n",
    "word.len() usize: 5\n",
    r#"word.as_bytes()[..3] &[u8]: "caf" "caf""#,
    "\n",
    r#"word.as_bytes()[..4] &[u8]: "caf\xc3" "caf\xc3""#,
    "\n",
    r#"word.as_bytes()[2..] &[u8]: "fé" "f\u{e9}""#,
    "\n",
    "word.is_char_boundary(4) bool: false\n",
);

pub const STRING_SCALARS: &str = concat!(
    "scalars \"café\":\n",
    "    index usize: [0] → char:  99 // c\n",
    "    index usize: [1] → char:  97 // a\n",
    "    index usize: [2] → char: 102 // f\n",
    "    index usize: [3] → char: 233 // é\n",
    "scalars \"ação\":\n",
    "    index usize: [0] → char:  97 // a\n",
    "    index usize: [1] → char: 231 // ç\n",
    "    index usize: [3] → char: 227 // ã\n",
    "    index usize: [5] → char: 111 // o\n",
);
