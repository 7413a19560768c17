#![no_std]

//! eetrack core - address-tracked typed EEPROM access
//!
//! This crate provides the storage capability trait, the cursor-tracking
//! typed store and the range validators. It performs no I/O of its own and
//! runs on bare-metal targets.

// Trace-level access logging, compiled out without the `tracing` feature
macro_rules! trace_access {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}
pub(crate) use trace_access;

// Warn-level report of a rejected checked access
macro_rules! warn_access {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!($($arg)*);
        }
    };
}
pub(crate) use warn_access;

pub mod constants;
pub mod error;
pub mod store;
pub mod traits;
pub mod validation;

pub use constants::*;
pub use error::*;
pub use store::{StoreConfig, TrackedStore};
pub use traits::*;
pub use validation::{
    validate, validate_float, validate_int, validate_long, validate_unsigned_int,
    validate_unsigned_long,
};
