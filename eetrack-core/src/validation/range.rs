//! Inclusive range validation for values reloaded from EEPROM
//!
//! Nothing read back through a store is checked automatically. Callers run
//! these after a read and decide what to do with a value that fails, for
//! example falling back to a default.

use crate::constants::FLOAT_TOLERANCE;

/// Check `min <= value <= max` for any ordered type
///
/// An inverted range (`min > max`) is not an error, it simply accepts nothing.
pub fn validate<T: PartialOrd>(min: T, max: T, value: T) -> bool {
    min <= value && value <= max
}

/// Validate a signed 16-bit integer against an inclusive range
pub const fn validate_int(min: i16, max: i16, value: i16) -> bool {
    min <= value && value <= max
}

/// Validate an unsigned 16-bit integer against an inclusive range
pub const fn validate_unsigned_int(min: u16, max: u16, value: u16) -> bool {
    min <= value && value <= max
}

/// Validate a signed 32-bit integer against an inclusive range
pub const fn validate_long(min: i32, max: i32, value: i32) -> bool {
    min <= value && value <= max
}

/// Validate an unsigned 32-bit integer against an inclusive range
pub const fn validate_unsigned_long(min: u32, max: u32, value: u32) -> bool {
    min <= value && value <= max
}

/// Validate a float against `[min - 0.01, max + 0.01]`
///
/// Both bounds are widened by [`FLOAT_TOLERANCE`] so a value that drifted
/// through a store/reload round trip still passes. NaN never passes.
pub fn validate_float(min: f32, max: f32, value: f32) -> bool {
    (min - FLOAT_TOLERANCE) <= value && value <= (max + FLOAT_TOLERANCE)
}
