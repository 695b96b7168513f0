// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::CommonResult;

    fn returns_unit() -> CommonResult<()> { ok!() }

    fn returns_value() -> CommonResult<u8> { ok!(u8::MAX) }

    #[test]
    fn test_ok_macro() {
        assert!(returns_unit().is_ok());
        assert_eq2!(returns_value().unwrap(), 255);
    }
}
