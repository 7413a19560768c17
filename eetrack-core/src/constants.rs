//! Value widths, tolerances and version identifiers

/// Bytes occupied by a bit value (flag stored in bit 0 of one byte)
pub const BIT_SIZE: usize = 1;

/// Bytes occupied by a 16-bit integer
pub const INT_SIZE: usize = 2;

/// Bytes occupied by a 32-bit integer
pub const LONG_SIZE: usize = 4;

/// Bytes occupied by a 32-bit float
pub const FLOAT_SIZE: usize = 4;

/// Absolute slack applied to both bounds by float range validation
pub const FLOAT_TOLERANCE: f32 = 0.01;

/// Content of a freshly erased EEPROM cell
pub const ERASED_BYTE: u8 = 0xFF;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numeric version, `major * 100 + minor * 10 + patch`.
///
/// Dependent firmware can gate on this at compile time:
/// `const _: () = assert!(eetrack_core::VERSION_CODE >= 110);`
pub const VERSION_CODE: u32 = 110;
