//! eetrack - typed, cursor-tracked access to EEPROM images
//!
//! Host-side companion to `eetrack-core`: concrete backends on top of the
//! core store, for tooling that prepares, inspects or edits EEPROM contents
//! outside the device.
//!
//! ## Quick Start
//!
//! ```rust
//! use eetrack::{MemoryEeprom, TrackedStore, validate_float};
//!
//! let mut store = TrackedStore::new(MemoryEeprom::new(1024), 0);
//! store.write_float(21.5);
//! store.write_long(86_400);
//!
//! store.reset_cursor();
//! let setpoint = store.read_float();
//! assert!(validate_float(5.0, 35.0, setpoint));
//!
//! // Saving the same values again costs no EEPROM writes
//! store.reset_cursor();
//! assert!(!store.write_float(21.5));
//! assert_eq!(store.storage().total_writes(), 8);
//! ```
//!
//! ## Backends
//!
//! - [`MemoryEeprom`]: heap buffer with per-address wear counters
//! - [`MmapEeprom`]: memory-mapped image file (`mmap` feature)

// Re-export core abstractions
pub use eetrack_core::{
    // Store
    StoreConfig, TrackedStore,
    // Storage and value traits
    Eeprom, StoredValue, ValueKind,
    // Error handling
    EepromError, Result,
    // Validation utilities
    validate, validate_float, validate_int, validate_long, validate_unsigned_int,
    validate_unsigned_long,
    // Constants
    ERASED_BYTE, FLOAT_TOLERANCE, VERSION, VERSION_CODE,
};
pub use eetrack_core::validation::{check_access, parse_range, parse_usize};

pub mod memory_backend;
#[cfg(feature = "mmap")]
pub mod mmap_backend;

pub use memory_backend::MemoryEeprom;
#[cfg(feature = "mmap")]
pub use mmap_backend::MmapEeprom;
