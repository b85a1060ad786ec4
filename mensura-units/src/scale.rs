//! Auto-scaling: pick the unit in which a value reads most naturally

use tracing::{debug, trace};
use mensura_core::Number;

use crate::convert::convert;
use crate::{Dimension, Unit, UnitError};

const DEFAULT_THRESHOLD: i64 = 1000;

/// Candidate units of one dimension, ordered by ascending scale
///
/// `select` walks the ladder from the smallest unit and keeps the first one
/// in which the magnitude lands in `[1, threshold)`. A value sitting exactly
/// on the threshold belongs to the larger unit, so 1000 g reads as 1 kg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    units: Vec<Unit>,
    threshold: Number,
}

impl Ladder {
    /// Build a ladder from units of a single dimension, in any order
    pub fn new<'a>(units: impl IntoIterator<Item = &'a Unit>) -> Result<Self, UnitError> {
        let units: Vec<Unit> = units.into_iter().cloned().collect();
        let dimension = units.first().ok_or(UnitError::EmptyLadder)?.dimension();

        if let Some(stray) = units.iter().find(|u| u.dimension() != dimension) {
            return Err(UnitError::dimension_mismatch(dimension, stray.dimension(), &stray.to_string()));
        }

        Ok(Self::sorted(units, Number::from_i64(DEFAULT_THRESHOLD)))
    }

    fn sorted(mut units: Vec<Unit>, threshold: Number) -> Self {
        units.sort_by(|a, b| a.scale().compare(b.scale()));
        units.dedup();
        Ladder { units, threshold }
    }

    /// Replace the exclusive upper bound of a rung (default 1000)
    pub fn with_threshold(mut self, threshold: Number) -> Self {
        self.threshold = threshold.abs();
        self
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn threshold(&self) -> &Number {
        &self.threshold
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.units.first().map(Unit::dimension)
    }

    /// The rung that `value` (expressed in `unit`) should be shown in
    ///
    /// Falls back to the largest unit whose magnitude is still at least one
    /// when no rung fits, and to the smallest unit when none reaches one.
    pub fn select(&self, value: &Number, unit: &Unit) -> Result<&Unit, UnitError> {
        let one = Number::one();
        let mut largest_whole = None;

        for candidate in &self.units {
            let magnitude = convert(value, unit, candidate)?.abs();
            if magnitude < one {
                continue;
            }
            if magnitude < self.threshold {
                trace!(value = %value, from = %unit, to = %candidate, "auto-scale rung");
                return Ok(candidate);
            }
            largest_whole = Some(candidate);
        }

        let candidate = match largest_whole {
            Some(candidate) => candidate,
            None => self.units.first().ok_or(UnitError::EmptyLadder)?,
        };
        debug!(value = %value, from = %unit, to = %candidate, "auto-scale fell back to extreme rung");
        Ok(candidate)
    }
}

/// Ready-made ladders for common dimensions
pub mod ladders {
    use super::*;
    use crate::units::*;

    fn preset(units: &[&Unit], threshold: i64) -> Ladder {
        let units = units.iter().map(|u| (*u).clone()).collect();
        Ladder::sorted(units, Number::from_i64(threshold))
    }

    /// nm, µm, mm, m, km
    pub fn metric_length() -> Ladder {
        preset(&[&*NANOMETRE, &*MICROMETRE, &*MILLIMETRE, &*METRE, &*KILOMETRE], DEFAULT_THRESHOLD)
    }

    /// g, kg, t
    pub fn metric_mass() -> Ladder {
        preset(&[&*GRAM, &*KILOGRAM, &*TONNE], DEFAULT_THRESHOLD)
    }

    /// s, min, h, d; rungs step at 60
    pub fn time() -> Ladder {
        preset(&[&*SECOND, &*MINUTE, &*HOUR, &*DAY], 60)
    }

    pub fn si_energy() -> Ladder {
        preset(&[&*MILLIJOULE, &*JOULE, &*KILOJOULE, &*MEGAJOULE, &*GIGAJOULE], DEFAULT_THRESHOLD)
    }

    pub fn si_power() -> Ladder {
        preset(&[&*MILLIWATT, &*WATT, &*KILOWATT, &*MEGAWATT, &*GIGAWATT], DEFAULT_THRESHOLD)
    }

    pub fn si_pressure() -> Ladder {
        preset(&[&*PASCAL, &*KILOPASCAL, &*MEGAPASCAL], DEFAULT_THRESHOLD)
    }

    pub fn si_frequency() -> Ladder {
        preset(&[&*HERTZ, &*KILOHERTZ, &*MEGAHERTZ, &*GIGAHERTZ], DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Mass, Time};
    use crate::units::*;
    use crate::Quantity;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn mass_ladder() -> Ladder {
        Ladder::new([&*TONNE, &*GRAM, &*KILOGRAM]).unwrap()
    }

    fn scaled(v: &str, unit: &Unit, ladder: &Ladder) -> Quantity<Mass> {
        Quantity::<Mass>::of(num(v), unit).unwrap().auto_scale(ladder).unwrap()
    }

    #[test]
    fn test_ladder_is_sorted() {
        let ladder = mass_ladder();
        let symbols: Vec<String> = ladder.units().iter().map(|u| u.to_string()).collect();
        assert_eq!(symbols, ["g", "kg", "t"]);
        assert_eq!(ladder.dimension(), Some(Dimension::MASS));
    }

    #[test]
    fn test_empty_ladder() {
        assert_eq!(Ladder::new(Vec::<&Unit>::new()), Err(UnitError::EmptyLadder));
    }

    #[test]
    fn test_mixed_dimension_ladder() {
        let err = Ladder::new([&*GRAM, &*METRE]).unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_below_threshold_stays() {
        let q = scaled("999", &GRAM, &mass_ladder());
        assert_eq!(q.unit(), &*GRAM);
        assert_eq!(q.value(), &Number::from_i64(999));
    }

    #[test]
    fn test_threshold_moves_up() {
        let q = scaled("1000", &GRAM, &mass_ladder());
        assert_eq!(q.unit(), &*KILOGRAM);
        assert_eq!(q.value(), &Number::one());
    }

    #[test]
    fn test_small_value_moves_down() {
        let q = scaled("0.5", &KILOGRAM, &mass_ladder());
        assert_eq!(q.unit(), &*GRAM);
        assert_eq!(q.value(), &Number::from_i64(500));
    }

    #[test]
    fn test_below_smallest_rung() {
        crate::test_support::init_tracing();
        let q = scaled("0.0009", &KILOGRAM, &mass_ladder());
        assert_eq!(q.unit(), &*GRAM);
        assert_eq!(q.value(), &num("0.9"));
    }

    #[test]
    fn test_fallback_is_logged() {
        let (q, logs) = crate::test_support::capture_logs(|| scaled("0.0009", &KILOGRAM, &mass_ladder()));
        assert_eq!(q.unit(), &*GRAM);
        assert!(logs.contains("auto-scale fell back to extreme rung"), "{}", logs);

        let (q, logs) = crate::test_support::capture_logs(|| scaled("5000000", &KILOGRAM, &mass_ladder()));
        assert_eq!(q.unit(), &*TONNE);
        assert!(logs.contains("auto-scale fell back to extreme rung"), "{}", logs);

        let (_, logs) = crate::test_support::capture_logs(|| scaled("999", &GRAM, &mass_ladder()));
        assert!(!logs.contains("fell back"), "{}", logs);
    }

    #[test]
    fn test_beyond_largest_rung() {
        let q = scaled("5000000", &KILOGRAM, &mass_ladder());
        assert_eq!(q.unit(), &*TONNE);
        assert_eq!(q.value(), &Number::from_i64(5000));
    }

    #[test]
    fn test_negative_values_scale_by_magnitude() {
        let q = scaled("-2500", &GRAM, &mass_ladder());
        assert_eq!(q.unit(), &*KILOGRAM);
        assert_eq!(q.value(), &num("-2.5"));
    }

    #[test]
    fn test_gap_falls_back_to_largest_whole_unit() {
        // µg then kg: 5 g is 5e6 µg and 0.005 kg
        let ladder = Ladder::new([&*MICROGRAM, &*KILOGRAM]).unwrap();
        let q = scaled("5", &GRAM, &ladder);
        assert_eq!(q.unit(), &*MICROGRAM);
    }

    #[test]
    fn test_custom_threshold() {
        let ladder = mass_ladder().with_threshold(Number::from_i64(10_000));
        let q = scaled("5000", &GRAM, &ladder);
        assert_eq!(q.unit(), &*GRAM);
    }

    #[test]
    fn test_time_ladder() {
        crate::test_support::init_tracing();
        let ladder = ladders::time();
        let q = Quantity::<Time>::of(Number::from_i64(90), &SECOND).unwrap();
        let q = q.auto_scale(&ladder).unwrap();
        assert_eq!(q.unit(), &*MINUTE);
        assert_eq!(q.value(), &num("1.5"));

        let q = Quantity::<Time>::of(Number::from_i64(7200), &SECOND).unwrap();
        assert_eq!(q.auto_scale(&ladder).unwrap().unit(), &*HOUR);
    }

    #[test]
    fn test_auto_scale_wrong_dimension() {
        let q = Quantity::<Time>::of(Number::one(), &SECOND).unwrap();
        assert!(q.auto_scale(&mass_ladder()).is_err());
    }

    #[test]
    fn test_presets_are_single_dimension() {
        for ladder in [
            ladders::metric_length(),
            ladders::metric_mass(),
            ladders::time(),
            ladders::si_energy(),
            ladders::si_power(),
            ladders::si_pressure(),
            ladders::si_frequency(),
        ] {
            let dimension = ladder.dimension().unwrap();
            assert!(ladder.units().iter().all(|u| u.dimension() == dimension));
            assert!(ladder.units().windows(2).all(|w| w[0].scale() < w[1].scale()));
        }
    }
}
