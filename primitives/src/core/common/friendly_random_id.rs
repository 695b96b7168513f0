// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use rand::{Rng, rngs::ThreadRng};

use crate::InlineString;

const GREEK_NAMES: [&str; 12] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "theta", "kappa", "lambda",
    "sigma", "phi", "omega",
];

const FRUIT_NAMES: [&str; 12] = [
    "apple", "banana", "orange", "pear", "peach", "grape", "kiwi", "mango", "cherry",
    "lemon", "lime", "plum",
];

/// Generate a human readable random id, like `omega-kiwi-042`. This is used to name
/// temporary directories.
#[must_use]
pub fn generate_friendly_random_id() -> InlineString {
    let mut rng: ThreadRng = rand::rng();

    let greek = GREEK_NAMES[rng.random_range(0..GREEK_NAMES.len())];
    let fruit = FRUIT_NAMES[rng.random_range(0..FRUIT_NAMES.len())];
    let number: u16 = rng.random_range(0..1000);

    let mut acc = InlineString::with_capacity(
        greek.len() + fruit.len() + 3 + 2, // 3 for the number, 2 for the dashes
    );
    _ = write!(acc, "{greek}-{fruit}-{number:03}");

    acc
}
