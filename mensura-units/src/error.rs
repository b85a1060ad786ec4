//! Errors raised by the units engine
//!
//! All of them are precondition violations at the call site: nothing here is
//! transient, so nothing is retried or suppressed.

use mensura_core::{codes, NumberError};
use thiserror::Error;

use crate::Dimension;

/// Errors that can occur while constructing, converting or combining quantities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A unit's dimension does not match the one required by context
    #[error("dimension mismatch: expected {expected}, got {found} (unit '{unit}')")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
        unit: String,
    },

    /// Dimensionally compatible, but not the exact unit a fixed-unit kind requires
    #[error("unit mismatch: {kind} only accepts '{expected}', got '{found}'")]
    UnitMismatch {
        kind: &'static str,
        expected: String,
        found: String,
    },

    /// A unit that is neither a catalogue entry nor a well-formed compound
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Auto-scale ladder constructed without candidates
    #[error("auto-scale ladder has no units")]
    EmptyLadder,

    /// Value does not fit the requested target representation
    #[error("value out of range: {0}")]
    OutOfRange(String),

    #[error("numeric error: {0}")]
    Number(NumberError),
}

impl UnitError {
    pub(crate) fn dimension_mismatch(expected: Dimension, found: Dimension, unit: &str) -> Self {
        UnitError::DimensionMismatch {
            expected,
            found,
            unit: unit.to_string(),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            UnitError::UnitMismatch { .. } => codes::UNIT_MISMATCH,
            UnitError::InvalidUnit(_) => codes::INVALID_UNIT,
            UnitError::DivisionByZero => codes::DIV_ZERO,
            UnitError::EmptyLadder => codes::EMPTY_LADDER,
            UnitError::OutOfRange(_) => codes::OUT_OF_RANGE,
            UnitError::Number(e) => e.code(),
        }
    }
}

impl From<NumberError> for UnitError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::DivisionByZero => UnitError::DivisionByZero,
            other => UnitError::Number(other),
        }
    }
}
