//! Quantity type - a value with an associated unit

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;
use mensura_core::Number;

use crate::convert::convert;
use crate::kind::{AnyDimension, FixedUnit, Kind};
use crate::scale::Ladder;
use crate::{Dimension, Notation, Unit, UnitError, UNITS};

/// A physical quantity: a numeric value bound to a unit of kind `K`
///
/// Immutable: every operation returns a new quantity. The unit's dimension
/// is checked against `K` once, at construction.
#[derive(Debug, Clone)]
pub struct Quantity<K: Kind = AnyDimension> {
    value: Number,
    unit: Unit,
    kind: PhantomData<K>,
}

/// Display settings for [`Quantity::format`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub notation: Notation,
    /// Fixed decimal places; `None` renders the exact value
    pub places: Option<u32>,
}

impl FormatOptions {
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    pub fn with_places(mut self, places: u32) -> Self {
        self.places = Some(places);
        self
    }
}

impl<K: Kind> Quantity<K> {
    /// Create a quantity, checking that `unit` fits the kind
    pub fn of(value: Number, unit: &Unit) -> Result<Self, UnitError> {
        Self::validate(unit)?;
        Ok(Self::bind(value, unit.clone()))
    }

    /// Engine-side constructor for results whose unit the caller already
    /// derived. Still refuses a unit that does not fit the kind.
    pub(crate) fn from(value: Number, unit: Unit) -> Result<Self, UnitError> {
        Self::validate(&unit)?;
        Ok(Self::bind(value, unit))
    }

    /// Bind without checking; callers guarantee the unit fits `K`
    pub(crate) fn bind(value: Number, unit: Unit) -> Self {
        Quantity { value, unit, kind: PhantomData }
    }

    fn validate(unit: &Unit) -> Result<(), UnitError> {
        if let Some(expected) = K::DIMENSION.filter(|d| *d != unit.dimension()) {
            debug!(kind = K::NAME, unit = %unit, expected = %expected, found = %unit.dimension(), "rejected unit");
            return Err(UnitError::dimension_mismatch(expected, unit.dimension(), &unit.to_string()));
        }

        if let Some(fixed) = K::fixed_unit().filter(|fixed| *fixed != unit) {
            debug!(kind = K::NAME, unit = %unit, expected = %fixed, "rejected unit");
            return Err(UnitError::UnitMismatch {
                kind: K::NAME,
                expected: fixed.to_string(),
                found: unit.to_string(),
            });
        }

        Ok(())
    }

    pub fn value(&self) -> &Number {
        &self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension().is_dimensionless()
    }

    /// Check if two quantities have compatible dimensions
    pub fn is_compatible<K2: Kind>(&self, other: &Quantity<K2>) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// The value expressed in the base unit of its dimension
    pub fn to_base(&self) -> Number {
        self.unit.to_base(&self.value)
    }

    /// Convert to another unit of the same dimension
    pub fn convert_to(&self, target: &Unit) -> Result<Self, UnitError> {
        let value = convert(&self.value, &self.unit, target)?;
        Self::from(value, target.clone())
    }

    fn require_compatible<K2: Kind>(&self, other: &Quantity<K2>) -> Result<(), UnitError> {
        if self.is_compatible(other) {
            return Ok(());
        }
        debug!(left = %self.unit, right = %other.unit, "rejected operands of different dimensions");
        Err(UnitError::dimension_mismatch(self.dimension(), other.dimension(), &other.unit.to_string()))
    }

    /// Add a quantity of the same dimension; the result keeps `self`'s unit
    pub fn plus<K2: Kind>(&self, other: &Quantity<K2>) -> Result<Self, UnitError> {
        self.require_compatible(other)?;
        let rhs = convert(&other.value, &other.unit, &self.unit)?;
        Self::from(self.value.add(&rhs), self.unit.clone())
    }

    /// Subtract a quantity of the same dimension; the result keeps `self`'s unit
    pub fn minus<K2: Kind>(&self, other: &Quantity<K2>) -> Result<Self, UnitError> {
        self.require_compatible(other)?;
        let rhs = convert(&other.value, &other.unit, &self.unit)?;
        Self::from(self.value.sub(&rhs), self.unit.clone())
    }

    /// Multiply two quantities: values multiply, units compose
    pub fn multiply<K2: Kind>(&self, other: &Quantity<K2>) -> Result<Quantity<AnyDimension>, UnitError> {
        let unit = self.unit.multiply(&other.unit)?;
        Ok(Quantity::bind(self.value.mul(&other.value), unit))
    }

    /// Divide two quantities: values divide, units compose
    pub fn divide<K2: Kind>(&self, other: &Quantity<K2>) -> Result<Quantity<AnyDimension>, UnitError> {
        let value = self.value.checked_div(&other.value)?;
        let unit = self.unit.divide(&other.unit)?;
        Quantity::from(value, unit)
    }

    /// Scale by a dimensionless number
    pub fn times(&self, scalar: &Number) -> Self {
        Self::bind(self.value.mul(scalar), self.unit.clone())
    }

    /// Divide by a dimensionless number
    pub fn divided_by(&self, scalar: &Number) -> Result<Self, UnitError> {
        let value = self.value.checked_div(scalar)?;
        Self::from(value, self.unit.clone())
    }

    pub fn negate(&self) -> Self {
        Self::bind(self.value.neg(), self.unit.clone())
    }

    pub fn abs(&self) -> Self {
        Self::bind(self.value.abs(), self.unit.clone())
    }

    /// Raise quantity to an integer power
    pub fn pow(&self, exp: i32) -> Result<Quantity<AnyDimension>, UnitError> {
        let unit = self.unit.power(exp)?;
        let value = self.value.pow(exp)?;
        Quantity::from(value, unit)
    }

    /// Three-way comparison through the base unit; no tolerance is applied
    pub fn compare<K2: Kind>(&self, other: &Quantity<K2>) -> Result<Ordering, UnitError> {
        self.require_compatible(other)?;
        Ok(self.to_base().compare(&other.to_base()))
    }

    /// Re-tag as another kind, e.g. the `AnyDimension` product of two lengths as `Area`
    pub fn into_kind<K2: Kind>(self) -> Result<Quantity<K2>, UnitError> {
        Quantity::from(self.value, self.unit)
    }

    /// Forget the kind
    pub fn into_dynamic(self) -> Quantity<AnyDimension> {
        Quantity::bind(self.value, self.unit)
    }

    /// Replace a synthetic compound unit (m·m) by the catalogue unit that
    /// converts identically (m²). The value is unchanged.
    pub fn simplify(&self) -> Self {
        UNITS.find_equivalent(&self.unit)
            .filter(|unit| **unit != self.unit)
            .and_then(|unit| Self::from(self.value.clone(), unit.clone()).ok())
            .unwrap_or_else(|| self.clone())
    }

    /// Re-express in the ladder unit that reads most naturally
    pub fn auto_scale(&self, ladder: &Ladder) -> Result<Self, UnitError> {
        let unit = ladder.select(&self.value, &self.unit)?;
        self.convert_to(unit)
    }

    /// Render with explicit notation and precision
    pub fn format(&self, options: &FormatOptions) -> String {
        let value = match options.places {
            Some(places) => self.value.as_decimal(places),
            None => self.value.to_string(),
        };
        let symbol = self.unit.symbol(options.notation);
        if symbol.is_empty() || self.unit == *crate::units::UNITY {
            value
        } else {
            format!("{} {}", value, symbol)
        }
    }
}

impl<K: FixedUnit> Quantity<K> {
    /// Create a quantity of a single-unit kind; the unit is implied
    pub fn of_value(value: Number) -> Self {
        Self::bind(value, K::unit().clone())
    }
}

impl<K: Kind> fmt::Display for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(&FormatOptions::default()))
    }
}

impl<K: Kind, K2: Kind> PartialEq<Quantity<K2>> for Quantity<K> {
    fn eq(&self, other: &Quantity<K2>) -> bool {
        // Compare base values for equality
        self.is_compatible(other) && self.to_base() == other.to_base()
    }
}

impl<K: Kind, K2: Kind> PartialOrd<Quantity<K2>> for Quantity<K> {
    fn partial_cmp(&self, other: &Quantity<K2>) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

#[derive(Serialize)]
struct QuantityRef<'a> {
    value: &'a Number,
    unit: &'a Unit,
}

#[derive(Deserialize)]
struct QuantityRepr {
    value: Number,
    unit: Unit,
}

impl<K: Kind> Serialize for Quantity<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        QuantityRef { value: &self.value, unit: &self.unit }.serialize(serializer)
    }
}

impl<'de, K: Kind> Deserialize<'de> for Quantity<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = QuantityRepr::deserialize(deserializer)?;
        UNITS.check_known(&repr.unit).map_err(serde::de::Error::custom)?;
        Self::from(repr.value, repr.unit).map_err(serde::de::Error::custom)
    }
}
