//! Mensura Units - Physical Quantity and Unit Conversion
//!
//! Provides unit-aware quantities with dimensional analysis.
//! Every conversion runs on exact rationals, so 100 °C is exactly 212 °F
//! and converting there and back returns the value you started with.
//!
//! Building blocks:
//! - `Dimension`: exponent vector over the seven SI base dimensions
//! - `Unit`: symbol, dimension and a linear or affine conversion rule
//! - `Quantity<K>`: a value bound to a unit, tagged with a `kind` marker
//!   (`Quantity<Length>`, `Quantity<Temperature>`, ...)
//! - `UNITS`: the catalogue of named units (SI, imperial, US customary, CGS)
//! - `Ladder`: auto-scaling to the most readable unit
//!
//! ```ignore
//! use mensura_units::{units, kind::Temperature, Number, Quantity};
//!
//! let boiling = Quantity::<Temperature>::of(Number::from_i64(100), &units::CELSIUS)?;
//! assert_eq!(boiling.convert_to(&units::FAHRENHEIT)?.value(), &Number::from_i64(212));
//! ```

mod dimension;
mod unit;
mod error;
mod quantity;
mod convert;
mod duration;
pub mod kind;
pub mod scale;
pub mod units;

pub use dimension::Dimension;
pub use unit::{Conversion, Notation, Unit, UnitSystem};
pub use error::UnitError;
pub use quantity::{FormatOptions, Quantity};
pub use convert::{convert, to_base};
pub use duration::CalendarDuration;
pub use scale::{ladders, Ladder};
pub use units::{UnitCatalogue, UNITS};

pub use mensura_core::{Number, NumberError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::kind::*;
    pub use crate::{Dimension, Notation, Number, Quantity, Unit, UnitError, UNITS};
}
