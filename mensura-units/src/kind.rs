//! Quantity kinds: zero-sized tags that pin a `Quantity` to a dimension
//!
//! `Quantity<Length>` and `Quantity<Mass>` share one engine; the tag only
//! decides which units the constructors accept.

use std::fmt;
use crate::{units, Dimension, Unit};

/// Compile-time marker for the dimension a quantity must carry
pub trait Kind: fmt::Debug + Clone + Copy + PartialEq + Eq + Send + Sync + 'static {
    /// Human-readable kind name, used in error messages
    const NAME: &'static str;

    /// Required dimension; `None` accepts any dimension
    const DIMENSION: Option<Dimension>;

    /// The only unit this kind accepts, for single-unit kinds
    fn fixed_unit() -> Option<&'static Unit> {
        None
    }

    /// Whether a unit of `dimension` may back a quantity of this kind
    fn accepts(dimension: Dimension) -> bool {
        Self::DIMENSION.map_or(true, |d| d == dimension)
    }
}

/// Kind whose unit is implied, so values can be built without naming one
pub trait FixedUnit: Kind {
    fn unit() -> &'static Unit;
}

/// Accepts every dimension; the result kind of quantity × quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnyDimension;

impl Kind for AnyDimension {
    const NAME: &'static str = "quantity";
    const DIMENSION: Option<Dimension> = None;
}

macro_rules! kinds {
    ($($(#[$attr:meta])* $kind:ident => $dim:ident, $name:expr;)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $kind;

            impl Kind for $kind {
                const NAME: &'static str = $name;
                const DIMENSION: Option<Dimension> = Some(Dimension::$dim);
            }
        )*
    };
}

macro_rules! fixed_kinds {
    ($($(#[$attr:meta])* $kind:ident => $dim:ident, $name:expr, $unit:ident;)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $kind;

            impl Kind for $kind {
                const NAME: &'static str = $name;
                const DIMENSION: Option<Dimension> = Some(Dimension::$dim);

                fn fixed_unit() -> Option<&'static Unit> {
                    Some(<Self as FixedUnit>::unit())
                }
            }

            impl FixedUnit for $kind {
                fn unit() -> &'static Unit {
                    &units::$unit
                }
            }
        )*
    };
}

kinds! {
    Dimensionless => DIMENSIONLESS, "dimensionless";
    Length => LENGTH, "length";
    Mass => MASS, "mass";
    Time => TIME, "time";
    ElectricCurrent => CURRENT, "electric current";
    /// Thermodynamic temperature (affine units allowed)
    Temperature => TEMPERATURE, "temperature";
    LuminousIntensity => LUMINOSITY, "luminous intensity";
    AmountOfSubstance => AMOUNT, "amount of substance";
    Area => AREA, "area";
    Volume => VOLUME, "volume";
    Velocity => VELOCITY, "velocity";
    Acceleration => ACCELERATION, "acceleration";
    Force => FORCE, "force";
    Energy => ENERGY, "energy";
    Power => POWER, "power";
    Pressure => PRESSURE, "pressure";
    Frequency => FREQUENCY, "frequency";
    ElectricCharge => CHARGE, "electric charge";
    ElectricPotential => VOLTAGE, "electric potential";
    ElectricResistance => RESISTANCE, "electric resistance";
    Capacitance => CAPACITANCE, "capacitance";
}

fixed_kinds! {
    /// Magnetic flux, always in webers
    MagneticFlux => MAGNETIC_FLUX, "magnetic flux", WEBER;
    /// Catalytic activity, always in katals
    CatalyticActivity => CATALYTIC_ACTIVITY, "catalytic activity", KATAL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        assert!(Length::accepts(Dimension::LENGTH));
        assert!(!Length::accepts(Dimension::MASS));
        assert!(AnyDimension::accepts(Dimension::new([1, 2, 3, 4, 5, 6, 7])));
    }

    #[test]
    fn test_fixed_unit() {
        assert_eq!(Length::fixed_unit(), None);
        assert_eq!(MagneticFlux::fixed_unit(), Some(&*units::WEBER));
        assert_eq!(CatalyticActivity::unit().dimension(), Dimension::CATALYTIC_ACTIVITY);
    }

    #[test]
    fn test_kind_dimensions_match_names() {
        assert_eq!(Area::DIMENSION.and_then(|d| d.name()), Some(Area::NAME));
        assert_eq!(Force::DIMENSION.and_then(|d| d.name()), Some(Force::NAME));
        assert_eq!(AnyDimension::DIMENSION, None);
    }
}
