//! Machine-readable error codes
//!
//! Every error surfaced by the Mensura crates maps onto one of these codes,
//! so callers can branch on a stable string instead of matching variants
//! across crate boundaries.

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const UNIT_MISMATCH: &str = "UNIT_MISMATCH";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const EMPTY_LADDER: &str = "EMPTY_LADDER";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
}
