//! Exact arbitrary precision numbers using dashu
//!
//! Uses dashu-ratio (RBig) so every unit factor that is a terminating
//! decimal or a simple fraction (5/9, 1/60) is held exactly. Conversions
//! chain add/mul/div without ever leaving the rationals, which keeps
//! round-trips between units bit-for-bit identical.

use std::cmp::Ordering;

use dashu_int::{ops::BitTest, IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::codes;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow: result too large")]
    Overflow,
}

impl NumberError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            NumberError::ParseError(_) => codes::PARSE_ERROR,
            NumberError::DivisionByZero => codes::DIV_ZERO,
            NumberError::Overflow => codes::OVERFLOW,
        }
    }
}

/// Places used by `Display` when the decimal expansion does not terminate
const DISPLAY_PLACES: u32 = 20;

/// Largest power of ten a literal may carry (`1e10000`)
const MAX_DECIMAL_SCALE: u32 = 10_000;

/// Upper bound on the bit length `pow` may produce
const MAX_POW_BITS: u64 = 1 << 20;

/// Exact arbitrary precision rational number
///
/// All operations return Results or new Numbers - never panic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number {
    inner: RBig,
}

fn ten_pow(exp: u32) -> UBig {
    UBig::from(10u8).pow(exp as usize)
}

fn ratio(numerator: IBig, denominator: UBig) -> RBig {
    RBig::from_parts(numerator, denominator)
}

impl Number {
    // ========== Construction ==========

    /// Create from string representation
    /// Supports: "123", "3.14", "5/9", "1.5e10", "-42", "1.602176634e-19"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Handle rational format "a/b"
        if let Some((num_str, den_str)) = s.split_once('/') {
            let num = Self::parse_decimal(num_str.trim())?;
            let den = Self::parse_decimal(den_str.trim())?;
            return num.checked_div(&den);
        }

        Self::parse_decimal(s)
    }

    /// Parse `[sign]digits[.digits][e[sign]digits]` without a float detour
    fn parse_decimal(s: &str) -> Result<Self, NumberError> {
        Self::parse_parts(s).ok_or_else(|| NumberError::ParseError(s.to_string()))?
    }

    fn parse_parts(s: &str) -> Option<Result<Self, NumberError>> {
        let (mantissa, exponent) = match s.find(|c| c == 'e' || c == 'E') {
            Some(pos) => (&s[..pos], s[pos + 1..].parse::<i32>().ok()?),
            None => (s, 0),
        };

        let (negative, digits) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }

        let mut numerator: IBig = format!("{}{}", int_part, frac_part).parse().ok()?;
        if negative {
            numerator = -numerator;
        }

        let frac_len = i32::try_from(frac_part.len()).ok()?;
        let scale = exponent.checked_sub(frac_len)?;
        if scale.unsigned_abs() > MAX_DECIMAL_SCALE {
            return Some(Err(NumberError::Overflow));
        }
        let inner = if scale >= 0 {
            ratio(numerator * IBig::from(ten_pow(scale.unsigned_abs())), UBig::ONE)
        } else {
            ratio(numerator, ten_pow(scale.unsigned_abs()))
        };
        Some(Ok(Self { inner }))
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self { inner: ratio(IBig::from(n), UBig::ONE) }
    }

    /// Create from ratio (exact division). A zero denominator yields zero.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self::zero();
        }
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self { inner: ratio(num, UBig::from(den.unsigned_abs())) }
    }

    /// Create `mantissa × 10^-scale`, e.g. `from_decimal(27315, 2)` is 273.15
    pub fn from_decimal(mantissa: i64, scale: u32) -> Self {
        Self { inner: ratio(IBig::from(mantissa), ten_pow(scale)) }
    }

    /// Create from f64 (goes through the shortest round-trip decimal string)
    pub fn from_f64(f: f64) -> Self {
        if f.is_nan() || f.is_infinite() {
            return Self::zero();
        }
        Self::from_str(&format!("{:e}", f)).unwrap_or_else(|_| Self::zero())
    }

    pub fn zero() -> Self {
        Self { inner: RBig::ZERO }
    }

    pub fn one() -> Self {
        Self { inner: RBig::ONE }
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < RBig::ZERO
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        *self.inner.denominator() == UBig::ONE
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Self { inner: -self.inner.clone() }
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Integer power (exact), by repeated squaring. Zero to a negative power
    /// is a division by zero; results beyond `MAX_POW_BITS` overflow.
    pub fn pow(&self, exp: i32) -> Result<Self, NumberError> {
        let bits = self.magnitude().bit_len().max(self.inner.denominator().bit_len()) as u64;
        if bits.saturating_sub(1).saturating_mul(u64::from(exp.unsigned_abs())) > MAX_POW_BITS {
            return Err(NumberError::Overflow);
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut remaining = exp.unsigned_abs();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.mul(&base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.mul(&base);
            }
        }

        if exp < 0 {
            Self::one().checked_div(&result)
        } else {
            Ok(result)
        }
    }

    /// Three-way comparison
    pub fn compare(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }

    // ========== Conversion ==========

    /// Largest integer <= x
    pub fn floor(&self) -> Self {
        let num = self.inner.numerator();
        let den = IBig::from(self.inner.denominator().clone());
        let quotient = num / &den;
        let floored = if self.is_negative() && !self.is_integer() {
            quotient - IBig::ONE
        } else {
            quotient
        };
        Self { inner: ratio(floored, UBig::ONE) }
    }

    /// Integer toward zero (drops the fractional part)
    pub fn trunc(&self) -> Self {
        let den = IBig::from(self.inner.denominator().clone());
        Self { inner: ratio(self.inner.numerator() / &den, UBig::ONE) }
    }

    /// Try to convert to i64 (integers only)
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        self.inner.numerator().clone().try_into().ok()
    }

    /// Try to convert to i128 (integers only)
    pub fn to_i128(&self) -> Option<i128> {
        if !self.is_integer() {
            return None;
        }
        self.inner.numerator().clone().try_into().ok()
    }

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        self.as_decimal(DISPLAY_PLACES)
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
    }

    // ========== Display ==========

    /// Render as decimal string with exactly `places` decimal places,
    /// rounding half away from zero
    pub fn as_decimal(&self, places: u32) -> String {
        let negative = self.is_negative();
        let num = self.magnitude();
        let den = self.inner.denominator();
        let two = UBig::from(2u8);

        let scaled = (&num * ten_pow(places) * &two + den) / (den * &two);
        let mut digits = scaled.to_string();

        if places > 0 {
            let places = places as usize;
            if digits.len() <= places {
                digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
            }
            digits.insert(digits.len() - places, '.');
        }

        if negative && scaled != UBig::ZERO {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// |numerator| as an unsigned big integer
    fn magnitude(&self) -> UBig {
        let numerator = self.inner.numerator();
        let abs = if self.is_negative() { -numerator.clone() } else { numerator.clone() };
        UBig::try_from(abs).unwrap_or(UBig::ZERO)
    }

    /// Exact rendering as `n/d` (or just `n` for integers)
    pub fn to_fraction_string(&self) -> String {
        if self.is_integer() {
            self.inner.numerator().to_string()
        } else {
            format!("{}/{}", self.inner.numerator(), self.inner.denominator())
        }
    }

    /// Number of decimal places of the exact expansion, if it terminates
    fn terminating_places(&self) -> Option<u32> {
        let mut den = self.inner.denominator().clone();
        let mut places = [0u32; 2];

        for (count, factor) in places.iter_mut().zip([2u8, 5u8]) {
            let factor = UBig::from(factor);
            while &den % &factor == UBig::ZERO {
                den = &den / &factor;
                *count += 1;
            }
        }

        (den == UBig::ONE).then(|| places[0].max(places[1]))
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.terminating_places() {
            Some(places) => write!(f, "{}", self.as_decimal(places)),
            None => {
                let rendered = self.as_decimal(DISPLAY_PLACES);
                write!(f, "{}", rendered.trim_end_matches('0').trim_end_matches('.'))
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Fractions keep exactness on the wire; terminating decimals stay readable
        if self.terminating_places().is_some() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_str(&self.to_fraction_string())
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self { inner: ratio(IBig::from(n), UBig::ONE) }
    }
}
