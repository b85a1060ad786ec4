//! Unit catalogue - common units organized by dimension
//!
//! Every unit is a process-wide static, built once on first use and never
//! mutated. The `UNITS` catalogue indexes them for lookup by symbol,
//! dimension and unit system.

use std::collections::HashMap;
use std::sync::LazyLock;
use mensura_core::Number;
use tracing::debug;
use crate::{Dimension, Notation, Unit, UnitError, UnitSystem};

macro_rules! linear {
    ($(#[$attr:meta])* $id:ident: $sym:expr, $ascii:expr, $name:expr, $dim:ident, $sys:ident, $factor:expr) => {
        $(#[$attr])*
        pub static $id: LazyLock<Unit> = LazyLock::new(|| {
            Unit::linear($sym, $ascii, $name, Dimension::$dim, UnitSystem::$sys, $factor)
        });
    };
}

macro_rules! affine {
    ($(#[$attr:meta])* $id:ident: $sym:expr, $ascii:expr, $name:expr, $dim:ident, $sys:ident, $factor:expr, $offset:expr) => {
        $(#[$attr])*
        pub static $id: LazyLock<Unit> = LazyLock::new(|| {
            Unit::affine($sym, $ascii, $name, Dimension::$dim, UnitSystem::$sys, $factor, $offset)
        });
    };
}

fn one() -> Number {
    Number::one()
}

fn int(n: i64) -> Number {
    Number::from_i64(n)
}

/// `mantissa × 10^-scale`
fn dec(mantissa: i64, scale: u32) -> Number {
    Number::from_decimal(mantissa, scale)
}

fn frac(num: i64, den: i64) -> Number {
    Number::from_ratio(num, den)
}

// ========== Length ==========

linear!(METRE: "m", "m", "metre", LENGTH, Si, one());
linear!(KILOMETRE: "km", "km", "kilometre", LENGTH, Si, int(1000));
linear!(CENTIMETRE: "cm", "cm", "centimetre", LENGTH, Si, dec(1, 2));
linear!(MILLIMETRE: "mm", "mm", "millimetre", LENGTH, Si, dec(1, 3));
linear!(MICROMETRE: "µm", "um", "micrometre", LENGTH, Si, dec(1, 6));
linear!(NANOMETRE: "nm", "nm", "nanometre", LENGTH, Si, dec(1, 9));
linear!(INCH: "in", "in", "inch", LENGTH, Imperial, dec(254, 4));
linear!(FOOT: "ft", "ft", "foot", LENGTH, Imperial, dec(3048, 4));
linear!(YARD: "yd", "yd", "yard", LENGTH, Imperial, dec(9144, 4));
linear!(MILE: "mi", "mi", "mile", LENGTH, Imperial, dec(1609344, 3));
linear!(NAUTICAL_MILE: "nmi", "nmi", "nautical mile", LENGTH, Other, int(1852));
linear!(ASTRONOMICAL_UNIT: "au", "au", "astronomical unit", LENGTH, Astronomical, int(149_597_870_700));
linear!(LIGHT_YEAR: "ly", "ly", "light year", LENGTH, Astronomical, int(9_460_730_472_580_800));
linear!(PARSEC: "pc", "pc", "parsec", LENGTH, Astronomical, int(30_856_775_814_913_673));

// ========== Mass ==========

linear!(KILOGRAM: "kg", "kg", "kilogram", MASS, Si, one());
linear!(GRAM: "g", "g", "gram", MASS, Si, dec(1, 3));
linear!(MILLIGRAM: "mg", "mg", "milligram", MASS, Si, dec(1, 6));
linear!(MICROGRAM: "µg", "ug", "microgram", MASS, Si, dec(1, 9));
linear!(TONNE: "t", "t", "tonne", MASS, SiAccepted, int(1000));
linear!(POUND: "lb", "lb", "pound", MASS, Imperial, dec(45359237, 8));
linear!(OUNCE: "oz", "oz", "ounce", MASS, Imperial, dec(28349523125, 12));
linear!(STONE: "st", "st", "stone", MASS, Imperial, dec(635029318, 8));
linear!(GRAIN: "gr", "gr", "grain", MASS, Imperial, dec(6479891, 11));
linear!(SHORT_TON: "ton", "ton", "short ton", MASS, UsCustomary, dec(90718474, 5));

// ========== Time ==========

linear!(SECOND: "s", "s", "second", TIME, Si, one());
linear!(MILLISECOND: "ms", "ms", "millisecond", TIME, Si, dec(1, 3));
linear!(MICROSECOND: "µs", "us", "microsecond", TIME, Si, dec(1, 6));
linear!(NANOSECOND: "ns", "ns", "nanosecond", TIME, Si, dec(1, 9));
linear!(MINUTE: "min", "min", "minute", TIME, SiAccepted, int(60));
linear!(HOUR: "h", "h", "hour", TIME, SiAccepted, int(3600));
linear!(DAY: "d", "d", "day", TIME, SiAccepted, int(86400));
linear!(WEEK: "wk", "wk", "week", TIME, Other, int(604_800));
linear!(
    /// Mean Gregorian year (365.2425 days)
    YEAR: "yr", "yr", "year", TIME, Other, int(31_556_952));

// ========== Electric current ==========

linear!(AMPERE: "A", "A", "ampere", CURRENT, Si, one());
linear!(MILLIAMPERE: "mA", "mA", "milliampere", CURRENT, Si, dec(1, 3));
linear!(MICROAMPERE: "µA", "uA", "microampere", CURRENT, Si, dec(1, 6));
linear!(KILOAMPERE: "kA", "kA", "kiloampere", CURRENT, Si, int(1000));
linear!(BIOT: "Bi", "Bi", "biot", CURRENT, Cgs, int(10));

// ========== Temperature ==========

linear!(KELVIN: "K", "K", "kelvin", TEMPERATURE, Si, one());
affine!(CELSIUS: "°C", "degC", "degree Celsius", TEMPERATURE, Si, one(), dec(27315, 2));
affine!(FAHRENHEIT: "°F", "degF", "degree Fahrenheit", TEMPERATURE, UsCustomary, frac(5, 9), dec(45967, 2));
linear!(RANKINE: "°R", "degR", "degree Rankine", TEMPERATURE, Imperial, frac(5, 9));

// ========== Luminous intensity ==========

linear!(CANDELA: "cd", "cd", "candela", LUMINOSITY, Si, one());
linear!(MILLICANDELA: "mcd", "mcd", "millicandela", LUMINOSITY, Si, dec(1, 3));

// ========== Amount of substance ==========

linear!(MOLE: "mol", "mol", "mole", AMOUNT, Si, one());
linear!(MILLIMOLE: "mmol", "mmol", "millimole", AMOUNT, Si, dec(1, 3));
linear!(MICROMOLE: "µmol", "umol", "micromole", AMOUNT, Si, dec(1, 6));
linear!(KILOMOLE: "kmol", "kmol", "kilomole", AMOUNT, Si, int(1000));

// ========== Area ==========

linear!(SQUARE_METRE: "m²", "m2", "square metre", AREA, Si, one());
linear!(SQUARE_KILOMETRE: "km²", "km2", "square kilometre", AREA, Si, int(1_000_000));
linear!(SQUARE_CENTIMETRE: "cm²", "cm2", "square centimetre", AREA, Si, dec(1, 4));
linear!(SQUARE_MILLIMETRE: "mm²", "mm2", "square millimetre", AREA, Si, dec(1, 6));
linear!(HECTARE: "ha", "ha", "hectare", AREA, SiAccepted, int(10_000));
linear!(ACRE: "ac", "ac", "acre", AREA, Imperial, dec(40468564224, 7));
linear!(SQUARE_FOOT: "ft²", "ft2", "square foot", AREA, Imperial, dec(9290304, 8));
linear!(SQUARE_INCH: "in²", "in2", "square inch", AREA, Imperial, dec(64516, 8));

// ========== Volume ==========

linear!(CUBIC_METRE: "m³", "m3", "cubic metre", VOLUME, Si, one());
linear!(CUBIC_CENTIMETRE: "cm³", "cm3", "cubic centimetre", VOLUME, Cgs, dec(1, 6));
linear!(LITRE: "L", "L", "litre", VOLUME, SiAccepted, dec(1, 3));
linear!(MILLILITRE: "mL", "mL", "millilitre", VOLUME, SiAccepted, dec(1, 6));
linear!(US_GALLON: "gal", "gal", "US gallon", VOLUME, UsCustomary, dec(3785411784, 12));
linear!(IMPERIAL_GALLON: "imp gal", "impgal", "imperial gallon", VOLUME, Imperial, dec(454609, 8));
linear!(CUBIC_FOOT: "ft³", "ft3", "cubic foot", VOLUME, Imperial, dec(28316846592, 12));

// ========== Velocity ==========

linear!(METRE_PER_SECOND: "m/s", "m/s", "metre per second", VELOCITY, Si, one());
linear!(KILOMETRE_PER_HOUR: "km/h", "km/h", "kilometre per hour", VELOCITY, SiAccepted, frac(5, 18));
linear!(MILE_PER_HOUR: "mph", "mph", "mile per hour", VELOCITY, Imperial, dec(44704, 5));
linear!(FOOT_PER_SECOND: "ft/s", "ft/s", "foot per second", VELOCITY, Imperial, dec(3048, 4));
linear!(KNOT: "kn", "kn", "knot", VELOCITY, Other, frac(1852, 3600));

// ========== Acceleration ==========

linear!(METRE_PER_SECOND_SQUARED: "m/s²", "m/s2", "metre per second squared", ACCELERATION, Si, one());
linear!(STANDARD_GRAVITY: "g₀", "g0", "standard gravity", ACCELERATION, Other, dec(980665, 5));
linear!(GALILEO: "Gal", "Gal", "galileo", ACCELERATION, Cgs, dec(1, 2));

// ========== Force ==========

linear!(NEWTON: "N", "N", "newton", FORCE, Si, one());
linear!(KILONEWTON: "kN", "kN", "kilonewton", FORCE, Si, int(1000));
linear!(DYNE: "dyn", "dyn", "dyne", FORCE, Cgs, dec(1, 5));
linear!(POUND_FORCE: "lbf", "lbf", "pound-force", FORCE, Imperial, dec(44482216152605, 13));
linear!(KILOGRAM_FORCE: "kgf", "kgf", "kilogram-force", FORCE, Other, dec(980665, 5));

// ========== Energy ==========

linear!(JOULE: "J", "J", "joule", ENERGY, Si, one());
linear!(MILLIJOULE: "mJ", "mJ", "millijoule", ENERGY, Si, dec(1, 3));
linear!(KILOJOULE: "kJ", "kJ", "kilojoule", ENERGY, Si, int(1000));
linear!(MEGAJOULE: "MJ", "MJ", "megajoule", ENERGY, Si, int(1_000_000));
linear!(GIGAJOULE: "GJ", "GJ", "gigajoule", ENERGY, Si, int(1_000_000_000));
linear!(ERG: "erg", "erg", "erg", ENERGY, Cgs, dec(1, 7));
linear!(CALORIE: "cal", "cal", "calorie", ENERGY, Other, dec(4184, 3));
linear!(KILOCALORIE: "kcal", "kcal", "kilocalorie", ENERGY, Other, int(4184));
linear!(WATT_HOUR: "Wh", "Wh", "watt-hour", ENERGY, SiAccepted, int(3600));
linear!(KILOWATT_HOUR: "kWh", "kWh", "kilowatt-hour", ENERGY, SiAccepted, int(3_600_000));
linear!(ELECTRONVOLT: "eV", "eV", "electronvolt", ENERGY, SiAccepted, dec(1_602_176_634, 28));
linear!(BRITISH_THERMAL_UNIT: "BTU", "BTU", "British thermal unit", ENERGY, Imperial, dec(105505585262, 8));

// ========== Power ==========

linear!(WATT: "W", "W", "watt", POWER, Si, one());
linear!(MILLIWATT: "mW", "mW", "milliwatt", POWER, Si, dec(1, 3));
linear!(KILOWATT: "kW", "kW", "kilowatt", POWER, Si, int(1000));
linear!(MEGAWATT: "MW", "MW", "megawatt", POWER, Si, int(1_000_000));
linear!(GIGAWATT: "GW", "GW", "gigawatt", POWER, Si, int(1_000_000_000));
linear!(HORSEPOWER: "hp", "hp", "horsepower", POWER, Imperial, dec(745699872, 6));

// ========== Pressure ==========

linear!(PASCAL: "Pa", "Pa", "pascal", PRESSURE, Si, one());
linear!(HECTOPASCAL: "hPa", "hPa", "hectopascal", PRESSURE, Si, int(100));
linear!(KILOPASCAL: "kPa", "kPa", "kilopascal", PRESSURE, Si, int(1000));
linear!(MEGAPASCAL: "MPa", "MPa", "megapascal", PRESSURE, Si, int(1_000_000));
linear!(BAR: "bar", "bar", "bar", PRESSURE, Other, int(100_000));
linear!(MILLIBAR: "mbar", "mbar", "millibar", PRESSURE, Other, int(100));
linear!(ATMOSPHERE: "atm", "atm", "standard atmosphere", PRESSURE, Other, int(101_325));
linear!(TORR: "Torr", "Torr", "torr", PRESSURE, Other, frac(101_325, 760));
linear!(PSI: "psi", "psi", "pound per square inch", PRESSURE, Imperial, dec(6894757293168, 9));

// ========== Frequency ==========

linear!(HERTZ: "Hz", "Hz", "hertz", FREQUENCY, Si, one());
linear!(KILOHERTZ: "kHz", "kHz", "kilohertz", FREQUENCY, Si, int(1000));
linear!(MEGAHERTZ: "MHz", "MHz", "megahertz", FREQUENCY, Si, int(1_000_000));
linear!(GIGAHERTZ: "GHz", "GHz", "gigahertz", FREQUENCY, Si, int(1_000_000_000));
linear!(REVOLUTION_PER_MINUTE: "rpm", "rpm", "revolution per minute", FREQUENCY, Other, frac(1, 60));

// ========== Electrical ==========

linear!(COULOMB: "C", "C", "coulomb", CHARGE, Si, one());
linear!(MILLICOULOMB: "mC", "mC", "millicoulomb", CHARGE, Si, dec(1, 3));
linear!(AMPERE_HOUR: "Ah", "Ah", "ampere-hour", CHARGE, SiAccepted, int(3600));
linear!(MILLIAMPERE_HOUR: "mAh", "mAh", "milliampere-hour", CHARGE, SiAccepted, dec(36, 1));

linear!(VOLT: "V", "V", "volt", VOLTAGE, Si, one());
linear!(MILLIVOLT: "mV", "mV", "millivolt", VOLTAGE, Si, dec(1, 3));
linear!(KILOVOLT: "kV", "kV", "kilovolt", VOLTAGE, Si, int(1000));

linear!(OHM: "Ω", "ohm", "ohm", RESISTANCE, Si, one());
linear!(MILLIOHM: "mΩ", "mohm", "milliohm", RESISTANCE, Si, dec(1, 3));
linear!(KILOOHM: "kΩ", "kohm", "kiloohm", RESISTANCE, Si, int(1000));
linear!(MEGAOHM: "MΩ", "Mohm", "megaohm", RESISTANCE, Si, int(1_000_000));

linear!(FARAD: "F", "F", "farad", CAPACITANCE, Si, one());
linear!(MILLIFARAD: "mF", "mF", "millifarad", CAPACITANCE, Si, dec(1, 3));
linear!(MICROFARAD: "µF", "uF", "microfarad", CAPACITANCE, Si, dec(1, 6));
linear!(NANOFARAD: "nF", "nF", "nanofarad", CAPACITANCE, Si, dec(1, 9));
linear!(PICOFARAD: "pF", "pF", "picofarad", CAPACITANCE, Si, dec(1, 12));

linear!(WEBER: "Wb", "Wb", "weber", MAGNETIC_FLUX, Si, one());

linear!(KATAL: "kat", "kat", "katal", CATALYTIC_ACTIVITY, Si, one());

// ========== Dimensionless ==========

linear!(UNITY: "1", "1", "one", DIMENSIONLESS, Si, one());
linear!(PERCENT: "%", "%", "percent", DIMENSIONLESS, Other, frac(1, 100));
linear!(PERMILLE: "‰", "permille", "per mille", DIMENSIONLESS, Other, frac(1, 1000));
linear!(PARTS_PER_MILLION: "ppm", "ppm", "parts per million", DIMENSIONLESS, Other, dec(1, 6));

/// Global unit catalogue
pub static UNITS: LazyLock<UnitCatalogue> = LazyLock::new(UnitCatalogue::new);

/// Read-only index over every catalogue unit
pub struct UnitCatalogue {
    units: Vec<&'static Unit>,
    symbols: HashMap<&'static str, usize>,
}

impl UnitCatalogue {
    fn new() -> Self {
        let mut catalogue = UnitCatalogue {
            units: Vec::new(),
            symbols: HashMap::new(),
        };
        catalogue.register_all_units();
        catalogue
    }

    /// Get a unit by its symbol in either notation
    pub fn get(&self, symbol: &str) -> Option<&'static Unit> {
        self.symbols.get(symbol).map(|&i| self.units[i])
    }

    /// Every registered unit, in registration order
    pub fn all(&self) -> &[&'static Unit] {
        &self.units
    }

    /// Get all units of a dimension
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&'static Unit> {
        self.units.iter()
            .copied()
            .filter(|u| u.dimension() == dimension)
            .collect()
    }

    /// Get all units tagged with a unit system
    pub fn by_system(&self, system: UnitSystem) -> Vec<&'static Unit> {
        self.units.iter()
            .copied()
            .filter(|u| u.system() == system)
            .collect()
    }

    /// The unit whose conversion rule is the identity for this dimension
    pub fn base_unit(&self, dimension: Dimension) -> Option<&'static Unit> {
        self.units.iter()
            .copied()
            .find(|u| u.dimension() == dimension && u.is_base())
    }

    /// A catalogue unit that converts identically to `unit` (same dimension,
    /// same scale, no offset), used to name synthetic compound units
    pub fn find_equivalent(&self, unit: &Unit) -> Option<&'static Unit> {
        if unit.is_affine() {
            return None;
        }
        self.units.iter()
            .copied()
            .find(|u| !u.is_affine() && u.dimension() == unit.dimension() && u.scale() == unit.scale())
    }

    /// Accept `unit` only if it converts exactly like the catalogue entry
    /// for its symbol, or, when no entry exists, is a linear compound with a
    /// positive factor
    pub fn check_known(&self, unit: &Unit) -> Result<(), UnitError> {
        let reason = match self.get(unit.symbol(Notation::Default)) {
            Some(known) if known.dimension() == unit.dimension() && known.conversion() == unit.conversion() => {
                return Ok(());
            }
            Some(_) => "differs from the catalogue definition",
            None if unit.is_affine() => "is not a catalogue unit and carries an offset",
            None if unit.scale().is_zero() || unit.scale().is_negative() => "has a non-positive factor",
            None => return Ok(()),
        };
        debug!(unit = %unit, reason, "rejected unit definition");
        Err(UnitError::InvalidUnit(format!("'{}' {}", unit, reason)))
    }

    fn register(&mut self, unit: &'static Unit) {
        let index = self.units.len();
        self.units.push(unit);
        // First registration wins a contested symbol
        for notation in [Notation::Default, Notation::Ascii] {
            self.symbols.entry(unit.symbol(notation)).or_insert(index);
        }
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_current_units();
        self.register_temperature_units();
        self.register_luminosity_units();
        self.register_amount_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_velocity_units();
        self.register_acceleration_units();
        self.register_force_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_pressure_units();
        self.register_frequency_units();
        self.register_electrical_units();
        self.register_dimensionless_units();
    }

    fn register_length_units(&mut self) {
        self.register(&METRE);
        self.register(&KILOMETRE);
        self.register(&CENTIMETRE);
        self.register(&MILLIMETRE);
        self.register(&MICROMETRE);
        self.register(&NANOMETRE);
        self.register(&INCH);
        self.register(&FOOT);
        self.register(&YARD);
        self.register(&MILE);
        self.register(&NAUTICAL_MILE);
        self.register(&ASTRONOMICAL_UNIT);
        self.register(&LIGHT_YEAR);
        self.register(&PARSEC);
    }

    fn register_mass_units(&mut self) {
        self.register(&KILOGRAM);
        self.register(&GRAM);
        self.register(&MILLIGRAM);
        self.register(&MICROGRAM);
        self.register(&TONNE);
        self.register(&POUND);
        self.register(&OUNCE);
        self.register(&STONE);
        self.register(&GRAIN);
        self.register(&SHORT_TON);
    }

    fn register_time_units(&mut self) {
        self.register(&SECOND);
        self.register(&MILLISECOND);
        self.register(&MICROSECOND);
        self.register(&NANOSECOND);
        self.register(&MINUTE);
        self.register(&HOUR);
        self.register(&DAY);
        self.register(&WEEK);
        self.register(&YEAR);
    }

    fn register_current_units(&mut self) {
        self.register(&AMPERE);
        self.register(&MILLIAMPERE);
        self.register(&MICROAMPERE);
        self.register(&KILOAMPERE);
        self.register(&BIOT);
    }

    fn register_temperature_units(&mut self) {
        // Kelvin is the base unit
        self.register(&KELVIN);
        self.register(&CELSIUS);
        self.register(&FAHRENHEIT);
        self.register(&RANKINE);
    }

    fn register_luminosity_units(&mut self) {
        self.register(&CANDELA);
        self.register(&MILLICANDELA);
    }

    fn register_amount_units(&mut self) {
        self.register(&MOLE);
        self.register(&MILLIMOLE);
        self.register(&MICROMOLE);
        self.register(&KILOMOLE);
    }

    fn register_area_units(&mut self) {
        self.register(&SQUARE_METRE);
        self.register(&SQUARE_KILOMETRE);
        self.register(&SQUARE_CENTIMETRE);
        self.register(&SQUARE_MILLIMETRE);
        self.register(&HECTARE);
        self.register(&ACRE);
        self.register(&SQUARE_FOOT);
        self.register(&SQUARE_INCH);
    }

    fn register_volume_units(&mut self) {
        self.register(&CUBIC_METRE);
        self.register(&LITRE);
        self.register(&MILLILITRE);
        self.register(&CUBIC_CENTIMETRE);
        self.register(&US_GALLON);
        self.register(&IMPERIAL_GALLON);
        self.register(&CUBIC_FOOT);
    }

    fn register_velocity_units(&mut self) {
        self.register(&METRE_PER_SECOND);
        self.register(&KILOMETRE_PER_HOUR);
        self.register(&MILE_PER_HOUR);
        self.register(&FOOT_PER_SECOND);
        self.register(&KNOT);
    }

    fn register_acceleration_units(&mut self) {
        self.register(&METRE_PER_SECOND_SQUARED);
        self.register(&STANDARD_GRAVITY);
        self.register(&GALILEO);
    }

    fn register_force_units(&mut self) {
        self.register(&NEWTON);
        self.register(&KILONEWTON);
        self.register(&DYNE);
        self.register(&POUND_FORCE);
        self.register(&KILOGRAM_FORCE);
    }

    fn register_energy_units(&mut self) {
        self.register(&JOULE);
        self.register(&MILLIJOULE);
        self.register(&KILOJOULE);
        self.register(&MEGAJOULE);
        self.register(&GIGAJOULE);
        self.register(&ERG);
        self.register(&CALORIE);
        self.register(&KILOCALORIE);
        self.register(&WATT_HOUR);
        self.register(&KILOWATT_HOUR);
        self.register(&ELECTRONVOLT);
        self.register(&BRITISH_THERMAL_UNIT);
    }

    fn register_power_units(&mut self) {
        self.register(&WATT);
        self.register(&MILLIWATT);
        self.register(&KILOWATT);
        self.register(&MEGAWATT);
        self.register(&GIGAWATT);
        self.register(&HORSEPOWER);
    }

    fn register_pressure_units(&mut self) {
        self.register(&PASCAL);
        self.register(&HECTOPASCAL);
        self.register(&KILOPASCAL);
        self.register(&MEGAPASCAL);
        self.register(&BAR);
        self.register(&MILLIBAR);
        self.register(&ATMOSPHERE);
        self.register(&TORR);
        self.register(&PSI);
    }

    fn register_frequency_units(&mut self) {
        self.register(&HERTZ);
        self.register(&KILOHERTZ);
        self.register(&MEGAHERTZ);
        self.register(&GIGAHERTZ);
        self.register(&REVOLUTION_PER_MINUTE);
    }

    fn register_electrical_units(&mut self) {
        // Charge
        self.register(&COULOMB);
        self.register(&MILLICOULOMB);
        self.register(&AMPERE_HOUR);
        self.register(&MILLIAMPERE_HOUR);

        // Voltage
        self.register(&VOLT);
        self.register(&MILLIVOLT);
        self.register(&KILOVOLT);

        // Resistance
        self.register(&OHM);
        self.register(&MILLIOHM);
        self.register(&KILOOHM);
        self.register(&MEGAOHM);

        // Capacitance
        self.register(&FARAD);
        self.register(&MILLIFARAD);
        self.register(&MICROFARAD);
        self.register(&NANOFARAD);
        self.register(&PICOFARAD);

        self.register(&WEBER);
        self.register(&KATAL);
    }

    fn register_dimensionless_units(&mut self) {
        self.register(&UNITY);
        self.register(&PERCENT);
        self.register(&PERMILLE);
        self.register(&PARTS_PER_MILLION);
    }
}
