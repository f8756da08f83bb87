//! Conversion of supplied values into a sequence's element type.
//!
//! Every value entering a [`OneIndexedSequence<T>`](crate::OneIndexedSequence)
//! passes through [`Coerce<T>`]. This crate implements it for:
//!
//! - every type into itself (never fails),
//! - every primitive integer into every other, checked against the target
//!   range,
//! - every integer into `f32` and `f64`, rounding to the nearest float,
//! - `f32`/`f64` into each other, rejecting finite values beyond `f32`,
//! - `f32`/`f64` into every integer, truncating toward zero and rejecting
//!   NaN, infinities and out-of-range values,
//! - `bool` into every number (`1` or `0`),
//! - `&str` and `String` into every number and `bool`, parsed after trimming
//!   surrounding whitespace,
//! - numbers, `bool`, `char` and `&str` into `String`.
//!
//! Other conversions are supplied by implementing `Coerce<T>` in the crate
//! that owns either side, reporting failures with [`rejected`]:
//!
//! ```
//! use array1d::coerce::{rejected, Coerce};
//! use array1d::{OneIndexedSequence, SequenceError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Kelvin(f64);
//!
//! impl Coerce<Kelvin> for f64 {
//!     fn coerce(self) -> Result<Kelvin, SequenceError> {
//!         if self < 0.0 {
//!             return Err(rejected::<f64, Kelvin, _>("below absolute zero"));
//!         }
//!         Ok(Kelvin(self))
//!     }
//! }
//!
//! let mut temps: OneIndexedSequence<Kelvin> = OneIndexedSequence::new();
//! temps.append(293.15).unwrap();
//! temps.append(Kelvin(300.0)).unwrap();
//! assert!(temps.append(-1.0).is_err());
//! assert_eq!(temps.len(), 2);
//! ```

use std::any::type_name;
use std::fmt;

use crate::error::SequenceError;

/// Fallible conversion of `Self` into the element type `T`.
pub trait Coerce<T>: Sized {
    /// Convert `self` to `T`, or fail with
    /// [`SequenceError::TypeCoercionError`].
    fn coerce(self) -> Result<T, SequenceError>;
}

/// Build the error for a value of type `V` that cannot become a `T`.
pub fn rejected<V, T, E: fmt::Display>(reason: E) -> SequenceError {
    tracing::debug!(
        message = "coercion rejected",
        from = type_name::<V>(),
        to = type_name::<T>(),
        reason = %reason
    );
    SequenceError::TypeCoercionError {
        from: type_name::<V>(),
        to: type_name::<T>(),
        reason: reason.to_string(),
    }
}

/// Coerce every value of `values`, stopping at the first failure.
pub(crate) fn coerce_all<T, V, I>(values: I) -> Result<Vec<T>, SequenceError>
where
    I: IntoIterator<Item = V>,
    V: Coerce<T>,
{
    values.into_iter().map(<V as Coerce<T>>::coerce).collect()
}

impl<T> Coerce<T> for T {
    fn coerce(self) -> Result<T, SequenceError> {
        Ok(self)
    }
}

macro_rules! int_to_int {
    ($src:ty => $($dst:ty),+) => {$(
        impl Coerce<$dst> for $src {
            fn coerce(self) -> Result<$dst, SequenceError> {
                <$dst>::try_from(self).map_err(|e| rejected::<$src, $dst, _>(e))
            }
        }
    )+};
}

int_to_int!(i8 => i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
int_to_int!(i16 => i8, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
int_to_int!(i32 => i8, i16, i64, i128, isize, u8, u16, u32, u64, u128, usize);
int_to_int!(i64 => i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize);
int_to_int!(i128 => i8, i16, i32, i64, isize, u8, u16, u32, u64, u128, usize);
int_to_int!(isize => i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize);
int_to_int!(u8 => i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);
int_to_int!(u16 => i8, i16, i32, i64, i128, isize, u8, u32, u64, u128, usize);
int_to_int!(u32 => i8, i16, i32, i64, i128, isize, u8, u16, u64, u128, usize);
int_to_int!(u64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u128, usize);
int_to_int!(u128 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
int_to_int!(usize => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128);

macro_rules! int_to_float {
    ($($src:ty),+) => {$(
        impl Coerce<f32> for $src {
            fn coerce(self) -> Result<f32, SequenceError> {
                Ok(self as f32)
            }
        }

        impl Coerce<f64> for $src {
            fn coerce(self) -> Result<f64, SequenceError> {
                Ok(self as f64)
            }
        }
    )+};
}

int_to_float!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Bounds are exact powers of two (or zero) in f64, so the comparison is
// exact and the final cast never saturates.
macro_rules! float_to_int {
    ($src:ty => $($dst:ty),+) => {$(
        impl Coerce<$dst> for $src {
            fn coerce(self) -> Result<$dst, SequenceError> {
                let t = f64::from(self).trunc();
                if t.is_nan() || t < <$dst>::MIN as f64 || t >= <$dst>::MAX as f64 + 1.0 {
                    return Err(rejected::<$src, $dst, _>(format!(
                        "{} is outside the range of {}",
                        self,
                        stringify!($dst)
                    )));
                }
                Ok(t as $dst)
            }
        }
    )+};
}

float_to_int!(f32 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_to_int!(f64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Coerce<f64> for f32 {
    fn coerce(self) -> Result<f64, SequenceError> {
        Ok(f64::from(self))
    }
}

impl Coerce<f32> for f64 {
    fn coerce(self) -> Result<f32, SequenceError> {
        if self.is_finite() && self.abs() > f64::from(f32::MAX) {
            return Err(rejected::<f64, f32, _>(format!(
                "{self} is outside the range of f32"
            )));
        }
        Ok(self as f32)
    }
}

macro_rules! bool_to {
    ($($dst:ty),+) => {$(
        impl Coerce<$dst> for bool {
            fn coerce(self) -> Result<$dst, SequenceError> {
                Ok(<$dst>::from(self))
            }
        }
    )+};
}

bool_to!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! parse_to {
    ($($dst:ty),+) => {$(
        impl Coerce<$dst> for &str {
            fn coerce(self) -> Result<$dst, SequenceError> {
                self.trim()
                    .parse::<$dst>()
                    .map_err(|e| rejected::<&str, $dst, _>(format!("{:?}: {}", self, e)))
            }
        }

        impl Coerce<$dst> for String {
            fn coerce(self) -> Result<$dst, SequenceError> {
                self.as_str().coerce()
            }
        }
    )+};
}

parse_to!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);

macro_rules! display_to_string {
    ($($src:ty),+) => {$(
        impl Coerce<String> for $src {
            fn coerce(self) -> Result<String, SequenceError> {
                Ok(self.to_string())
            }
        }
    )+};
}

display_to_string!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, &str
);

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_rejected<T: fmt::Debug>(r: Result<T, SequenceError>, from: &str, to: &str) {
        match r {
            Err(SequenceError::TypeCoercionError {
                from: f, to: t, ..
            }) => {
                assert_eq!(f, from);
                assert_eq!(t, to);
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
    }

    #[test]
    fn exact_type_passes_through() {
        let v: Result<String, _> = String::from("abc").coerce();
        assert_eq!(v.unwrap(), "abc");
        let n: Result<i64, _> = i64::MAX.coerce();
        assert_eq!(n, Ok(i64::MAX));
    }

    #[test]
    fn widening_succeeds() {
        let v: i64 = 7i32.coerce().unwrap();
        assert_eq!(v, 7);
        let f: f64 = 1.5f32.coerce().unwrap();
        assert_eq!(f, 1.5);
    }

    #[test]
    fn narrowing_out_of_range_fails() {
        expect_rejected(Coerce::<u8>::coerce(300i64), "i64", "u8");
        expect_rejected(Coerce::<u32>::coerce(-1i8), "i8", "u32");
        assert_eq!(Coerce::<u8>::coerce(255i64), Ok(255u8));
    }

    #[test]
    fn wide_integers_become_floats() {
        assert_eq!(Coerce::<f64>::coerce(5i64), Ok(5.0));
        assert_eq!(Coerce::<f64>::coerce(u64::MAX), Ok(u64::MAX as f64));
        assert_eq!(Coerce::<f64>::coerce(-3isize), Ok(-3.0));
        assert_eq!(Coerce::<f32>::coerce(16_777_217i32), Ok(16_777_216.0));
    }

    #[test]
    fn floats_truncate_into_integers() {
        assert_eq!(Coerce::<i32>::coerce(1.9f64), Ok(1));
        assert_eq!(Coerce::<i32>::coerce(-1.9f64), Ok(-1));
        assert_eq!(Coerce::<u8>::coerce(255.99f32), Ok(255));
        assert_eq!(Coerce::<i64>::coerce(-9.223_372_036_854_775_808e18f64), Ok(i64::MIN));
    }

    #[test]
    fn floats_outside_integer_range_fail() {
        expect_rejected(Coerce::<u8>::coerce(256.0f64), "f64", "u8");
        expect_rejected(Coerce::<u8>::coerce(-1.0f32), "f32", "u8");
        expect_rejected(Coerce::<i64>::coerce(9.223_372_036_854_775_808e18f64), "f64", "i64");
        expect_rejected(Coerce::<i32>::coerce(f64::NAN), "f64", "i32");
        expect_rejected(Coerce::<i32>::coerce(f64::INFINITY), "f64", "i32");
    }

    #[test]
    fn f64_to_f32_range_checked() {
        assert_eq!(Coerce::<f32>::coerce(0.5f64), Ok(0.5f32));
        assert_eq!(Coerce::<f32>::coerce(f64::INFINITY), Ok(f32::INFINITY));
        expect_rejected(Coerce::<f32>::coerce(1e300f64), "f64", "f32");
    }

    #[test]
    fn bools_become_numbers() {
        assert_eq!(Coerce::<f64>::coerce(true), Ok(1.0));
        assert_eq!(Coerce::<u8>::coerce(false), Ok(0));
    }

    #[test]
    fn text_parses_into_numbers() {
        assert_eq!(Coerce::<f64>::coerce("1.5"), Ok(1.5));
        assert_eq!(Coerce::<f64>::coerce(" 2e3\n"), Ok(2000.0));
        assert_eq!(Coerce::<i32>::coerce(String::from("-42")), Ok(-42));
        assert_eq!(Coerce::<bool>::coerce("true"), Ok(true));
    }

    #[test]
    fn unparsable_text_fails() {
        expect_rejected(Coerce::<f64>::coerce("warm"), "&str", "f64");
        expect_rejected(Coerce::<i32>::coerce("1.5"), "&str", "i32");
        expect_rejected(Coerce::<u8>::coerce(String::from("300")), "&str", "u8");
        match Coerce::<f64>::coerce("warm") {
            Err(SequenceError::TypeCoercionError { reason, .. }) => {
                assert!(reason.starts_with("\"warm\""), "{reason}");
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
    }

    #[test]
    fn values_render_into_strings() {
        assert_eq!(Coerce::<String>::coerce(5i32), Ok("5".to_string()));
        assert_eq!(Coerce::<String>::coerce(2.5f64), Ok("2.5".to_string()));
        assert_eq!(Coerce::<String>::coerce('x'), Ok("x".to_string()));
        assert_eq!(Coerce::<String>::coerce("zone"), Ok("zone".to_string()));
    }

    #[test]
    fn coerce_all_stops_on_failure() {
        let r: Result<Vec<u8>, _> = coerce_all(vec![1i32, 2, -3, 4]);
        assert!(matches!(r, Err(SequenceError::TypeCoercionError { .. })));
        let ok: Vec<u8> = coerce_all(vec![1i32, 2, 3]).unwrap();
        assert_eq!(ok, vec![1, 2, 3]);
        let parsed: Vec<f64> = coerce_all(["1", "2.5"]).unwrap();
        assert_eq!(parsed, vec![1.0, 2.5]);
    }

    #[derive(Debug, PartialEq)]
    struct Celsius(f64);

    impl Coerce<Celsius> for &str {
        fn coerce(self) -> Result<Celsius, SequenceError> {
            self.strip_suffix('C')
                .and_then(|n| n.trim().parse().ok())
                .map(Celsius)
                .ok_or_else(|| rejected::<&str, Celsius, _>("not a temperature"))
        }
    }

    #[test]
    fn caller_supplied_conversion_is_picked_up() {
        let c: Celsius = "21.5 C".coerce().unwrap();
        assert_eq!(c, Celsius(21.5));
        let bad: Result<Celsius, _> = "warm".coerce();
        match bad {
            Err(SequenceError::TypeCoercionError { reason, .. }) => {
                assert_eq!(reason, "not a temperature");
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
    }
}
