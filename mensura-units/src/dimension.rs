//! Dimensional analysis types
//!
//! Each physical quantity has dimensions represented as a 7-element vector:
//! [length, mass, time, current, temperature, luminous intensity, amount]

use std::fmt;
use serde::{Serialize, Deserialize};
use tracing::debug;
use mensura_core::NumberError;

use crate::UnitError;

/// Dimension indices for the 7 SI base quantities
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const LUMINOSITY: usize = 5;
pub const AMOUNT: usize = 6;

const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "Θ", "J", "N"];

/// Represents the dimensions of a physical quantity
/// as exponents of the 7 SI base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, luminous intensity, amount]
    pub exponents: [i32; 7],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);

    /// Luminous intensity dimension [J]
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);

    /// Area [L^2]
    pub const AREA: Dimension = Dimension::new([2, 0, 0, 0, 0, 0, 0]);

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension::new([3, 0, 0, 0, 0, 0, 0]);

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension::new([1, 0, -1, 0, 0, 0, 0]);

    /// Acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Dimension::new([1, 0, -2, 0, 0, 0, 0]);

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0]);

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0]);

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0]);

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension::new([-1, 1, -2, 0, 0, 0, 0]);

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0]);

    /// Electric charge [I T]
    pub const CHARGE: Dimension = Dimension::new([0, 0, 1, 1, 0, 0, 0]);

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension::new([2, 1, -3, -1, 0, 0, 0]);

    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension::new([2, 1, -3, -2, 0, 0, 0]);

    /// Capacitance [M^-1 L^-2 T^4 I^2]
    pub const CAPACITANCE: Dimension = Dimension::new([-2, -1, 4, 2, 0, 0, 0]);

    /// Magnetic flux [M L^2 T^-2 I^-1]
    pub const MAGNETIC_FLUX: Dimension = Dimension::new([2, 1, -2, -1, 0, 0, 0]);

    /// Catalytic activity [N T^-1]
    pub const CATALYTIC_ACTIVITY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 1]);

    /// Create a new dimension from exponents
    pub const fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Result<Dimension, UnitError> {
        self.zip_with(other, i32::checked_add)
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Result<Dimension, UnitError> {
        self.zip_with(other, i32::checked_sub)
    }

    /// Raise to integer power (multiply exponents)
    pub fn power(&self, exp: i32) -> Result<Dimension, UnitError> {
        self.map(|e| e.checked_mul(exp))
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> Result<Dimension, UnitError> {
        self.map(i32::checked_neg)
    }

    fn map(&self, op: impl Fn(i32) -> Option<i32>) -> Result<Dimension, UnitError> {
        self.zip_with(&Dimension::DIMENSIONLESS, |a, _| op(a))
    }

    /// Exponents are `i32`; leaving that range is reported, never wrapped
    fn zip_with(&self, other: &Dimension, op: impl Fn(i32, i32) -> Option<i32>) -> Result<Dimension, UnitError> {
        let mut result = [0i32; 7];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = op(self.exponents[i], other.exponents[i]).ok_or_else(|| {
                debug!(left = %self, right = %other, "dimension exponent overflow");
                UnitError::Number(NumberError::Overflow)
            })?;
        }
        Ok(Dimension { exponents: result })
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0] => Some("luminous intensity"),
            [0, 0, 0, 0, 0, 0, 1] => Some("amount"),
            [2, 0, 0, 0, 0, 0, 0] => Some("area"),
            [3, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [1, 0, -1, 0, 0, 0, 0] => Some("velocity"),
            [1, 0, -2, 0, 0, 0, 0] => Some("acceleration"),
            [1, 1, -2, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0] => Some("power"),
            [-1, 1, -2, 0, 0, 0, 0] => Some("pressure"),
            [0, 0, -1, 0, 0, 0, 0] => Some("frequency"),
            [0, 0, 1, 1, 0, 0, 0] => Some("charge"),
            [2, 1, -3, -1, 0, 0, 0] => Some("voltage"),
            [2, 1, -3, -2, 0, 0, 0] => Some("resistance"),
            [-2, -1, 4, 2, 0, 0, 0] => Some("capacitance"),
            [2, 1, -2, -1, 0, 0, 0] => Some("magnetic flux"),
            [0, 0, -1, 0, 0, 0, 1] => Some("catalytic activity"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(SYMBOLS[i].to_string());
                } else {
                    parts.push(format!("{}^{}", SYMBOLS[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
