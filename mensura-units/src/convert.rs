//! Conversion engine
//!
//! Every conversion pivots through the base unit of the shared dimension
//! using the Number type's own exact arithmetic.

use mensura_core::Number;
use tracing::{debug, trace};

use crate::{Unit, UnitError};

/// Convert `value` expressed in `from` into `to`.
///
/// Fails with [`UnitError::DimensionMismatch`] unless both units share a
/// dimension. Converting a unit into itself returns the value untouched.
pub fn convert(value: &Number, from: &Unit, to: &Unit) -> Result<Number, UnitError> {
    if !from.is_compatible(to) {
        debug!(
            from = %from,
            to = %to,
            from_dim = %from.dimension(),
            to_dim = %to.dimension(),
            "rejected conversion between incompatible dimensions"
        );
        return Err(UnitError::dimension_mismatch(to.dimension(), from.dimension(), &from.to_string()));
    }

    if from == to {
        return Ok(value.clone());
    }

    trace!(from = %from, to = %to, "converting");
    let base = from.to_base(value);
    Ok(to.from_base(&base)?)
}

/// Express `value` in the base unit of its dimension
pub fn to_base(value: &Number, unit: &Unit) -> Number {
    unit.to_base(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use crate::Dimension;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    #[test]
    fn test_linear_conversion() {
        let km = convert(&Number::from_i64(5000), &METRE, &KILOMETRE).unwrap();
        assert_eq!(km, Number::from_i64(5));

        let inches = convert(&Number::from_i64(1), &FOOT, &INCH).unwrap();
        assert_eq!(inches, Number::from_i64(12));
    }

    #[test]
    fn test_identity_conversion() {
        let v = Number::from_ratio(1, 3);
        for unit in [&*METRE, &*CELSIUS, &*FAHRENHEIT, &*KNOT] {
            assert_eq!(convert(&v, unit, unit).unwrap(), v);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        crate::test_support::init_tracing();
        let err = convert(&Number::from_i64(1), &METRE, &KILOGRAM).unwrap_err();
        assert_eq!(
            err,
            UnitError::DimensionMismatch {
                expected: Dimension::MASS,
                found: Dimension::LENGTH,
                unit: "m".to_string(),
            }
        );
    }

    #[test]
    fn test_affine_exactness() {
        assert_eq!(convert(&Number::zero(), &CELSIUS, &KELVIN).unwrap(), num("273.15"));
        assert_eq!(convert(&Number::from_i64(100), &CELSIUS, &FAHRENHEIT).unwrap(), Number::from_i64(212));
        assert_eq!(convert(&Number::from_i64(32), &FAHRENHEIT, &CELSIUS).unwrap(), Number::zero());
        assert_eq!(convert(&Number::from_i64(-40), &FAHRENHEIT, &CELSIUS).unwrap(), Number::from_i64(-40));
    }

    #[test]
    fn test_rankine_to_fahrenheit() {
        // 0 °R is absolute zero = -459.67 °F
        assert_eq!(convert(&Number::zero(), &RANKINE, &FAHRENHEIT).unwrap(), num("-459.67"));
    }

    #[test]
    fn test_round_trip_is_exact() {
        crate::test_support::init_tracing();
        let values = [num("0"), num("1"), num("-17.25"), Number::from_ratio(22, 7), num("1e12")];
        for dimension in [Dimension::LENGTH, Dimension::TEMPERATURE, Dimension::VELOCITY, Dimension::PRESSURE] {
            let units = crate::UNITS.by_dimension(dimension);
            for a in &units {
                for b in &units {
                    for v in &values {
                        let there = convert(v, a, b).unwrap();
                        let back = convert(&there, b, a).unwrap();
                        assert_eq!(&back, v, "{} -> {} -> {}", a, b, a);
                    }
                }
            }
        }
    }

    #[test]
    fn test_compound_conversion() {
        let km_per_h = KILOMETRE.divide(&HOUR).unwrap();
        let v = convert(&Number::from_i64(36), &km_per_h, &METRE_PER_SECOND).unwrap();
        assert_eq!(v, Number::from_i64(10));
    }

    #[test]
    fn test_to_base() {
        assert_eq!(to_base(&Number::from_i64(2), &HOUR), Number::from_i64(7200));
        assert_eq!(to_base(&Number::from_i64(25), &CELSIUS), num("298.15"));
    }
}
