//! Pure validation utilities
//!
//! Range checks for reloaded values, address bounds checks for the checked
//! store operations, and string parsing helpers. No I/O.

pub mod bounds;
pub mod parsing;
pub mod range;

pub use bounds::{check_access, region_end};
pub use parsing::{parse_range, parse_usize, parse_version};
pub use range::{
    validate, validate_float, validate_int, validate_long, validate_unsigned_int,
    validate_unsigned_long,
};
