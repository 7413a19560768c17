//! Abstract interfaces for eetrack
//!
//! The storage capability a store consumes and the value types it handles.

pub mod eeprom;
pub mod value;

pub use eeprom::Eeprom;
pub use value::{StoredValue, ValueKind};
