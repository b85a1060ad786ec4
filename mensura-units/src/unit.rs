//! Unit representation with conversion rules

use std::fmt;
use serde::{Serialize, Deserialize};
use mensura_core::{Number, NumberError};
use crate::{Dimension, UnitError};

/// Classification tag for filtering and display; orthogonal to dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    Si,
    /// Non-SI units accepted for use with the SI (litre, tonne, hour)
    SiAccepted,
    Cgs,
    Imperial,
    UsCustomary,
    Astronomical,
    Other,
}

/// Display style for unit symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Unicode symbols (°C, µm, Ω, m²)
    #[default]
    Default,
    /// Plain ASCII symbols (degC, um, ohm, m2)
    Ascii,
}

/// How a value in a unit maps onto the base unit of its dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversion {
    /// base = value × factor
    Linear { factor: Number },
    /// base = (value + offset) × factor
    Affine { factor: Number, offset: Number },
}

/// Represents a physical unit with its dimension and conversion rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    symbol: String,
    ascii_symbol: String,
    name: String,
    dimension: Dimension,
    system: UnitSystem,
    conversion: Conversion,
}

impl Unit {
    /// Create a unit with proportional conversion (no offset)
    pub fn linear(
        symbol: &str,
        ascii_symbol: &str,
        name: &str,
        dimension: Dimension,
        system: UnitSystem,
        factor: Number,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            ascii_symbol: ascii_symbol.to_string(),
            name: name.to_string(),
            dimension,
            system,
            conversion: Conversion::Linear { factor },
        }
    }

    /// Create a unit with offset (for temperature scales)
    pub fn affine(
        symbol: &str,
        ascii_symbol: &str,
        name: &str,
        dimension: Dimension,
        system: UnitSystem,
        factor: Number,
        offset: Number,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            ascii_symbol: ascii_symbol.to_string(),
            name: name.to_string(),
            dimension,
            system,
            conversion: Conversion::Affine { factor, offset },
        }
    }

    pub fn symbol(&self, notation: Notation) -> &str {
        match notation {
            Notation::Default => &self.symbol,
            Notation::Ascii => &self.ascii_symbol,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    /// The multiplicative part of the conversion rule
    pub fn scale(&self) -> &Number {
        match &self.conversion {
            Conversion::Linear { factor } | Conversion::Affine { factor, .. } => factor,
        }
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn is_affine(&self) -> bool {
        matches!(self.conversion, Conversion::Affine { .. })
    }

    /// Check if this is the base unit of its dimension (identity conversion)
    pub fn is_base(&self) -> bool {
        match &self.conversion {
            Conversion::Linear { factor } => *factor == Number::one(),
            Conversion::Affine { factor, offset } => *factor == Number::one() && offset.is_zero(),
        }
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Convert a value from this unit to the base unit
    pub fn to_base(&self, value: &Number) -> Number {
        match &self.conversion {
            Conversion::Linear { factor } => value.mul(factor),
            // Offset first, then scale. from_base undoes exactly this.
            Conversion::Affine { factor, offset } => value.add(offset).mul(factor),
        }
    }

    /// Convert a value from the base unit to this unit
    pub fn from_base(&self, base: &Number) -> Result<Number, NumberError> {
        match &self.conversion {
            Conversion::Linear { factor } => base.checked_div(factor),
            Conversion::Affine { factor, offset } => Ok(base.checked_div(factor)?.sub(offset)),
        }
    }

    /// Multiply two units (e.g., m * m -> m·m)
    ///
    /// Affine units contribute only their scale: inside a product they
    /// stand for differences, where the offset cancels.
    pub fn multiply(&self, other: &Unit) -> Result<Unit, UnitError> {
        Ok(Unit {
            symbol: format!("{}·{}", self.symbol, other.symbol),
            ascii_symbol: format!("{}*{}", self.ascii_symbol, other.ascii_symbol),
            name: format!("{} {}", self.name, other.name),
            dimension: self.dimension.multiply(&other.dimension)?,
            system: self.shared_system(other),
            conversion: Conversion::Linear {
                factor: self.scale().mul(other.scale()),
            },
        })
    }

    /// Divide two units (e.g., m / s -> m/s)
    pub fn divide(&self, other: &Unit) -> Result<Unit, UnitError> {
        let factor = self.scale().checked_div(other.scale())?;

        Ok(Unit {
            symbol: format!("{}/{}", self.symbol, grouped(&other.symbol)),
            ascii_symbol: format!("{}/{}", self.ascii_symbol, grouped(&other.ascii_symbol)),
            name: format!("{} per {}", self.name, other.name),
            dimension: self.dimension.divide(&other.dimension)?,
            system: self.shared_system(other),
            conversion: Conversion::Linear { factor },
        })
    }

    /// Raise unit to a power (e.g., m^2, m^3)
    pub fn power(&self, exp: i32) -> Result<Unit, UnitError> {
        if exp == 1 {
            return Ok(self.clone());
        }

        // Dimension first: it bounds `exp` before the factor is raised
        let dimension = self.dimension.power(exp)?;

        Ok(Unit {
            symbol: format!("{}^{}", grouped(&self.symbol), exp),
            ascii_symbol: format!("{}^{}", grouped(&self.ascii_symbol), exp),
            name: format!("{} to the {}", self.name, exp),
            dimension,
            system: self.system,
            conversion: Conversion::Linear {
                factor: self.scale().pow(exp)?,
            },
        })
    }

    fn shared_system(&self, other: &Unit) -> UnitSystem {
        if self.system == other.system {
            self.system
        } else {
            UnitSystem::Other
        }
    }
}

/// Parenthesize compound symbols so `a/(b·c)` keeps its meaning
fn grouped(symbol: &str) -> String {
    if symbol.contains(['·', '*', '/']) {
        format!("({})", symbol)
    } else {
        symbol.to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::linear("m", "m", "metre", Dimension::LENGTH, UnitSystem::Si, Number::from_i64(1))
    }

    fn kilometer() -> Unit {
        Unit::linear("km", "km", "kilometre", Dimension::LENGTH, UnitSystem::Si, Number::from_i64(1000))
    }

    fn second() -> Unit {
        Unit::linear("s", "s", "second", Dimension::TIME, UnitSystem::Si, Number::from_i64(1))
    }

    fn fahrenheit() -> Unit {
        Unit::affine(
            "°F", "degF", "degree Fahrenheit", Dimension::TEMPERATURE, UnitSystem::UsCustomary,
            Number::from_ratio(5, 9),
            Number::from_str("459.67").unwrap(),
        )
    }

    #[test]
    fn test_base_unit() {
        assert!(meter().is_base());
        assert!(!kilometer().is_base());
        assert!(!fahrenheit().is_base());
    }

    #[test]
    fn test_symbol_notation() {
        let f = fahrenheit();
        assert_eq!(f.symbol(Notation::Default), "°F");
        assert_eq!(f.symbol(Notation::Ascii), "degF");
        assert_eq!(f.to_string(), "°F");
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn test_to_base_conversion() {
        let value = Number::from_i64(5);
        assert_eq!(kilometer().to_base(&value), Number::from_i64(5000));
    }

    #[test]
    fn test_from_base_conversion() {
        let value = kilometer().from_base(&Number::from_i64(5000)).unwrap();
        assert_eq!(value, Number::from_i64(5));
    }

    #[test]
    fn test_affine_ordering() {
        let f = fahrenheit();
        // 32 °F -> (32 + 459.67) × 5/9 = 273.15 K
        let base = f.to_base(&Number::from_i64(32));
        assert_eq!(base, Number::from_str("273.15").unwrap());
        assert_eq!(f.from_base(&base).unwrap(), Number::from_i64(32));
        assert!(f.is_affine());
        assert_eq!(f.scale(), &Number::from_ratio(5, 9));
    }

    #[test]
    fn test_unit_power() {
        let m2 = meter().power(2).unwrap();
        assert_eq!(m2.symbol(Notation::Default), "m^2");
        assert_eq!(m2.dimension(), Dimension::AREA);

        let km3 = kilometer().power(3).unwrap();
        assert_eq!(km3.scale(), &Number::from_i64(1_000_000_000));
    }

    #[test]
    fn test_unit_multiply() {
        let m2 = meter().multiply(&meter()).unwrap();
        assert_eq!(m2.dimension(), Dimension::AREA);
        assert_eq!(m2.symbol(Notation::Default), "m·m");
        assert_eq!(m2.symbol(Notation::Ascii), "m*m");
        assert_eq!(m2.system(), UnitSystem::Si);
    }

    #[test]
    fn test_unit_multiply_affine_uses_scale_only() {
        let product = fahrenheit().multiply(&second()).unwrap();
        assert!(!product.is_affine());
        assert_eq!(product.scale(), &Number::from_ratio(5, 9));
        assert_eq!(product.system(), UnitSystem::Other);
    }

    #[test]
    fn test_unit_divide() {
        let velocity = kilometer().divide(&second()).unwrap();
        assert_eq!(velocity.dimension(), Dimension::VELOCITY);
        assert_eq!(velocity.symbol(Notation::Default), "km/s");

        let nested = meter().divide(&meter().multiply(&second()).unwrap()).unwrap();
        assert_eq!(nested.symbol(Notation::Default), "m/(m·s)");
    }

    #[test]
    fn test_unit_power_exponent_overflow() {
        let m2 = meter().power(2).unwrap();
        let err = m2.power(i32::MAX).unwrap_err();
        assert_eq!(err, UnitError::Number(NumberError::Overflow));
        assert!(m2.power(50_000).unwrap().power(50_000).is_err());
    }

    #[test]
    fn test_unit_divide_by_zero_factor() {
        let broken = Unit::linear("x", "x", "broken", Dimension::LENGTH, UnitSystem::Other, Number::zero());
        assert_eq!(meter().divide(&broken), Err(UnitError::DivisionByZero));
    }
}
