//! Bridge between `Quantity<Time>` and calendar-style durations

use std::fmt;
use std::time::Duration;

use mensura_core::Number;

use crate::kind::Time;
use crate::{units, Quantity, UnitError};

const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u128 = 24 * NANOS_PER_HOUR;

/// A time span split into days, hours, minutes, seconds and nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarDuration {
    pub negative: bool,
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub nanos: u32,
}

impl CalendarDuration {
    fn from_nanos(nanos: i128) -> Result<Self, UnitError> {
        let abs = nanos.unsigned_abs();
        let days = u64::try_from(abs / NANOS_PER_DAY)
            .map_err(|_| UnitError::OutOfRange(format!("{} days", abs / NANOS_PER_DAY)))?;

        // Remainders are bounded by their modulus, so the narrowing is lossless
        Ok(CalendarDuration {
            negative: nanos < 0,
            days,
            hours: ((abs % NANOS_PER_DAY) / NANOS_PER_HOUR) as u8,
            minutes: ((abs % NANOS_PER_HOUR) / NANOS_PER_MINUTE) as u8,
            seconds: ((abs % NANOS_PER_MINUTE) / NANOS_PER_SECOND) as u8,
            nanos: (abs % NANOS_PER_SECOND) as u32,
        })
    }

    /// Whole seconds across all components, ignoring the sign
    pub fn total_seconds(&self) -> u128 {
        u128::from(self.days) * 86_400
            + u128::from(self.hours) * 3600
            + u128::from(self.minutes) * 60
            + u128::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0 && self.nanos == 0
    }
}

impl fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0s");
        }

        let mut parts = Vec::new();
        if self.days > 0 {
            parts.push(format!("{}d", self.days));
        }
        if self.hours > 0 {
            parts.push(format!("{}h", self.hours));
        }
        if self.minutes > 0 {
            parts.push(format!("{}m", self.minutes));
        }
        if self.nanos > 0 {
            let fraction = format!("{:09}", self.nanos);
            parts.push(format!("{}.{}s", self.seconds, fraction.trim_end_matches('0')));
        } else if self.seconds > 0 {
            parts.push(format!("{}s", self.seconds));
        }

        let sign = if self.negative { "-" } else { "" };
        write!(f, "{}{}", sign, parts.join(" "))
    }
}

impl Quantity<Time> {
    /// Split into calendar components; sub-nanosecond remainders are truncated
    pub fn to_calendar(&self) -> Result<CalendarDuration, UnitError> {
        let nanos = self.to_base()
            .mul(&Number::from_i64(1_000_000_000))
            .trunc();
        let nanos = nanos.to_i128()
            .ok_or_else(|| UnitError::OutOfRange(format!("{} ns", nanos)))?;
        CalendarDuration::from_nanos(nanos)
    }

    /// Convert to a `std::time::Duration`, which cannot be negative
    pub fn to_std_duration(&self) -> Result<Duration, UnitError> {
        let calendar = self.to_calendar()?;
        if calendar.negative && !calendar.is_zero() {
            return Err(UnitError::OutOfRange(format!("negative duration {}", self)));
        }
        let secs = u64::try_from(calendar.total_seconds())
            .map_err(|_| UnitError::OutOfRange(format!("{} s", calendar.total_seconds())))?;
        Ok(Duration::new(secs, calendar.nanos))
    }

    /// A time quantity in seconds, exact to the nanosecond
    pub fn from_std_duration(duration: Duration) -> Self {
        let secs = Number::from(duration.as_secs());
        let nanos = Number::from_decimal(i64::from(duration.subsec_nanos()), 9);
        Quantity::bind(secs.add(&nanos), units::SECOND.clone())
    }
}
