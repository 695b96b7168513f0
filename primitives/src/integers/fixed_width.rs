// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display};

/// A primitive integer type with a fixed number of bits.
///
/// ```
/// use r3bl_primitives::FixedWidthInt;
///
/// assert_eq!(u64::MAX.wrapping_increment(), 0);
/// assert_eq!(i64::MAX.wrapping_increment(), i64::MIN);
/// assert_eq!(<u64 as FixedWidthInt>::max_log2(), 64);
/// assert_eq!(<i64 as FixedWidthInt>::max_log2(), 63);
/// ```
pub trait FixedWidthInt:
    Copy + Debug + Display + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// The name of the type as written in source, eg: `u64`.
    const TYPE_NAME: &'static str;
    const BITS: u32;
    const IS_SIGNED: bool;
    const MAX: Self;
    const MIN: Self;
    const ONE: Self;

    /// `self + 1`, modulo `2^BITS`.
    #[must_use]
    fn wrapping_increment(self) -> Self;

    /// `self + 1`, or [`None`] on overflow.
    fn checked_increment(self) -> Option<Self>;

    /// `self + 1` with wrapping, and whether it overflowed.
    fn overflowing_increment(self) -> (Self, bool);

    /// `self + 1`, or [`Self::MAX`] on overflow.
    #[must_use]
    fn saturating_increment(self) -> Self;

    /// Nearest `f64` to `self`. Large values lose precision.
    fn to_f64(self) -> f64;

    /// The exponent `N` such that `MAX == 2^N - 1`. The sign bit of a signed type does
    /// not count towards the magnitude.
    #[must_use]
    fn max_log2() -> u32 {
        if Self::IS_SIGNED {
            Self::BITS - 1
        } else {
            Self::BITS
        }
    }
}

macro_rules! impl_fixed_width_int {
    ($($ty:ty => $is_signed:literal),* $(,)?) => {
        $(
            impl FixedWidthInt for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
                const BITS: u32 = <$ty>::BITS;
                const IS_SIGNED: bool = $is_signed;
                const MAX: Self = <$ty>::MAX;
                const MIN: Self = <$ty>::MIN;
                const ONE: Self = 1;

                fn wrapping_increment(self) -> Self { self.wrapping_add(Self::ONE) }

                fn checked_increment(self) -> Option<Self> { self.checked_add(Self::ONE) }

                fn overflowing_increment(self) -> (Self, bool) {
                    self.overflowing_add(Self::ONE)
                }

                fn saturating_increment(self) -> Self { self.saturating_add(Self::ONE) }

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_fixed_width_int! {
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    u128 => false,
    usize => false,
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn check_max_log2<T: FixedWidthInt>() {
        let from_float = T::MAX.to_f64().log2().round();
        assert_eq2!(
            f64::from(T::max_log2()),
            from_float,
            "{}",
            T::TYPE_NAME
        );
    }

    fn check_wraps_at_max<T: FixedWidthInt + From<u8>>() {
        let wrapped = T::MAX.wrapping_increment();
        if T::IS_SIGNED {
            assert_eq2!(wrapped, T::MIN, "{}", T::TYPE_NAME);
            assert!(wrapped < T::from(0), "{}", T::TYPE_NAME);
        } else {
            assert_eq2!(wrapped, T::from(0), "{}", T::TYPE_NAME);
            assert_eq2!(T::MIN, T::from(0), "{}", T::TYPE_NAME);
        }
        assert_eq2!(T::MAX.checked_increment(), None);
        assert_eq2!(T::MAX.overflowing_increment(), (wrapped, true));
        assert_eq2!(T::MAX.saturating_increment(), T::MAX);
    }

    #[test]
    fn test_max_log2_agrees_with_float_log2() {
        check_max_log2::<u8>();
        check_max_log2::<u16>();
        check_max_log2::<u32>();
        check_max_log2::<u64>();
        check_max_log2::<u128>();
        check_max_log2::<usize>();
        check_max_log2::<i8>();
        check_max_log2::<i16>();
        check_max_log2::<i32>();
        check_max_log2::<i64>();
        check_max_log2::<i128>();
        check_max_log2::<isize>();
    }

    #[test]
    fn test_wraps_at_max() {
        check_wraps_at_max::<u8>();
        check_wraps_at_max::<u16>();
        check_wraps_at_max::<u32>();
        check_wraps_at_max::<u64>();
        check_wraps_at_max::<u128>();
        check_wraps_at_max::<i16>();
        check_wraps_at_max::<i32>();
        check_wraps_at_max::<i64>();
        check_wraps_at_max::<i128>();
    }

    #[test]
    fn test_i8_wraps_to_min() {
        assert_eq2!(i8::MAX.wrapping_increment(), -128);
        assert_eq2!(i8::MAX.overflowing_increment(), (-128, true));
        assert_eq2!(i8::MAX.checked_increment(), None);
    }

    #[test]
    fn test_64_bit_values() {
        assert_eq2!(u64::MAX, 18_446_744_073_709_551_615);
        assert_eq2!(u64::MAX.wrapping_increment(), 0);
        assert_eq2!(i64::MAX, 9_223_372_036_854_775_807);
        assert_eq2!(i64::MAX.wrapping_increment(), -9_223_372_036_854_775_808);
        assert_eq2!(i64::MIN, i64::try_from(-(2_i128.pow(63))).unwrap());
    }

    #[test]
    fn test_below_max_does_not_overflow() {
        assert_eq2!(254_u8.wrapping_increment(), 255);
        assert_eq2!(254_u8.checked_increment(), Some(255));
        assert_eq2!(254_u8.overflowing_increment(), (255, false));
        assert_eq2!((-1_i32).saturating_increment(), 0);
    }

    #[test]
    fn test_type_names() {
        assert_eq2!(<u8 as FixedWidthInt>::TYPE_NAME, "u8");
        assert_eq2!(<i128 as FixedWidthInt>::TYPE_NAME, "i128");
        assert_eq2!(<usize as FixedWidthInt>::TYPE_NAME, "usize");
    }
}
