//! Mensura Core - Fundamental types
//!
//! This crate provides the numeric collaborator used by the units engine:
//! - `Number`: Exact arbitrary precision rational numbers
//! - `NumberError`: Parse and arithmetic failures
//! - `codes`: Machine-readable error codes shared across the workspace

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::codes;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, NumberError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;
        use std::cmp::Ordering;

        #[test]
        fn test_from_i64() {
            let n = Number::from_i64(42);
            assert_eq!(n.to_i64(), Some(42));
        }

        #[test]
        fn test_from_u64_beyond_i64() {
            let n = Number::from(u64::MAX);
            assert_eq!(n.to_i64(), None);
            assert_eq!(n.to_i128(), Some(i128::from(u64::MAX)));
        }

        #[test]
        fn test_from_str_integer() {
            let n = Number::from_str("123").unwrap();
            assert_eq!(n.to_i64(), Some(123));
        }

        #[test]
        fn test_from_str_decimal() {
            let n = Number::from_str("3.14").unwrap();
            assert!(!n.is_integer());
            assert_eq!(n, Number::from_ratio(314, 100));
        }

        #[test]
        fn test_from_str_fraction() {
            let n = Number::from_str("5/9").unwrap();
            assert!(!n.is_integer());
            assert_eq!(n.mul(&Number::from_i64(9)), Number::from_i64(5));
        }

        #[test]
        fn test_from_str_scientific() {
            let n = Number::from_str("1.5e2").unwrap();
            assert_eq!(n.to_i64(), Some(150));

            let ev = Number::from_str("1.602176634e-19").unwrap();
            assert_eq!(ev, Number::from_decimal(1602176634, 28));
        }

        #[test]
        fn test_from_str_negative_and_signed() {
            assert_eq!(Number::from_str("-42").unwrap(), Number::from_i64(-42));
            assert_eq!(Number::from_str("+0.5").unwrap(), Number::from_ratio(1, 2));
            assert_eq!(Number::from_str(".25").unwrap(), Number::from_ratio(1, 4));
        }

        #[test]
        fn test_from_str_rejects_garbage() {
            assert!(matches!(Number::from_str("abc"), Err(NumberError::ParseError(_))));
            assert!(matches!(Number::from_str("1.2.3"), Err(NumberError::ParseError(_))));
            assert!(matches!(Number::from_str(""), Err(NumberError::ParseError(_))));
            assert!(matches!(Number::from_str("1/0"), Err(NumberError::DivisionByZero)));
        }

        #[test]
        fn test_from_ratio_zero_denominator() {
            assert!(Number::from_ratio(3, 0).is_zero());
            assert_eq!(Number::from_ratio(1, -2), Number::from_str("-0.5").unwrap());
        }

        #[test]
        fn test_decimal_arithmetic_is_exact() {
            // 0.1 + 0.2 == 0.3 exactly, unlike binary floating point
            let a = Number::from_str("0.1").unwrap();
            let b = Number::from_str("0.2").unwrap();
            assert_eq!(a.add(&b), Number::from_str("0.3").unwrap());
        }

        #[test]
        fn test_checked_div() {
            let ten = Number::from_i64(10);
            assert_eq!(ten.checked_div(&Number::from_i64(4)).unwrap(), Number::from_str("2.5").unwrap());
            assert_eq!(ten.checked_div(&Number::zero()), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_pow() {
            let two = Number::from_i64(2);
            assert_eq!(two.pow(10).unwrap(), Number::from_i64(1024));
            assert_eq!(two.pow(-2).unwrap(), Number::from_ratio(1, 4));
            assert_eq!(two.pow(0).unwrap(), Number::one());
            assert_eq!(Number::zero().pow(-1), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_pow_large_exponents() {
            assert_eq!(Number::one().pow(i32::MAX).unwrap(), Number::one());
            assert_eq!(Number::from_i64(-1).pow(i32::MAX).unwrap(), Number::from_i64(-1));
            assert_eq!(Number::from_i64(2).pow(i32::MAX), Err(NumberError::Overflow));
            assert_eq!(Number::from_ratio(1, 2).pow(i32::MIN), Err(NumberError::Overflow));

            let big = Number::from_i64(10).pow(300).unwrap();
            assert_eq!(big, Number::from_str("1e300").unwrap());
        }

        #[test]
        fn test_parse_exponent_bounds() {
            assert!(Number::from_str("1e10000").is_ok());
            assert_eq!(Number::from_str("1e2000000000"), Err(NumberError::Overflow));
            assert_eq!(Number::from_str("1e-2000000000"), Err(NumberError::Overflow));
            assert!(matches!(Number::from_str("1e99999999999"), Err(NumberError::ParseError(_))));
        }

        #[test]
        fn test_hash_matches_equality() {
            use std::collections::HashSet;
            let set: HashSet<Number> = [
                Number::from_str("0.5").unwrap(),
                Number::from_ratio(1, 2),
                Number::from_ratio(2, 4),
            ].into_iter().collect();
            assert_eq!(set.len(), 1);
        }

        #[test]
        fn test_compare() {
            let a = Number::from_str("-1.5").unwrap();
            let b = Number::from_i64(1);
            assert_eq!(a.compare(&b), Ordering::Less);
            assert_eq!(b.compare(&a), Ordering::Greater);
            assert_eq!(a.compare(&a.clone()), Ordering::Equal);
            assert!(a < b);
        }

        #[test]
        fn test_floor_and_trunc() {
            let n = Number::from_str("-2.5").unwrap();
            assert_eq!(n.floor(), Number::from_i64(-3));
            assert_eq!(n.trunc(), Number::from_i64(-2));
            assert_eq!(Number::from_str("7.9").unwrap().floor(), Number::from_i64(7));
        }

        #[test]
        fn test_abs_and_neg() {
            let n = Number::from_i64(-7);
            assert_eq!(n.abs(), Number::from_i64(7));
            assert_eq!(n.neg(), Number::from_i64(7));
            assert!(n.is_negative());
        }

        #[test]
        fn test_display_terminating() {
            assert_eq!(Number::from_str("273.15").unwrap().to_string(), "273.15");
            assert_eq!(Number::from_i64(212).to_string(), "212");
            assert_eq!(Number::from_str("-0.0009").unwrap().to_string(), "-0.0009");
            assert_eq!(Number::from_ratio(1, 8).to_string(), "0.125");
        }

        #[test]
        fn test_display_repeating() {
            assert_eq!(Number::from_ratio(1, 3).to_string(), "0.33333333333333333333");
            assert_eq!(Number::from_ratio(2, 3).to_string(), "0.66666666666666666667");
        }

        #[test]
        fn test_as_decimal() {
            let n = Number::from_ratio(5, 9);
            assert_eq!(n.as_decimal(4), "0.5556");
            assert_eq!(Number::from_i64(5).as_decimal(2), "5.00");
            assert_eq!(Number::from_str("-1.005").unwrap().as_decimal(2), "-1.01");
            assert_eq!(Number::from_str("-0.001").unwrap().as_decimal(2), "0.00");
        }

        #[test]
        fn test_to_fraction_string() {
            assert_eq!(Number::from_ratio(10, 4).to_fraction_string(), "5/2");
            assert_eq!(Number::from_i64(-3).to_fraction_string(), "-3");
        }

        #[test]
        fn test_to_f64() {
            let f = Number::from_str("0.3048").unwrap().to_f64().unwrap();
            assert!((f - 0.3048).abs() < 1e-12);
        }

        #[test]
        fn test_from_f64() {
            assert_eq!(Number::from_f64(0.25), Number::from_ratio(1, 4));
            assert!(Number::from_f64(f64::NAN).is_zero());
        }

        #[test]
        fn test_serde_string_form() {
            let n = Number::from_str("273.15").unwrap();
            let json = serde_json::to_string(&n).unwrap();
            assert_eq!(json, "\"273.15\"");

            let third = Number::from_ratio(1, 3);
            let json = serde_json::to_string(&third).unwrap();
            assert_eq!(json, "\"1/3\"");
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back, third);
        }

        #[test]
        fn test_error_codes() {
            assert_eq!(NumberError::DivisionByZero.code(), codes::DIV_ZERO);
            assert_eq!(NumberError::ParseError("x".into()).code(), codes::PARSE_ERROR);
        }
    }
}
