//! Error types for eetrack operations
//!
//! The default store API never fails. These errors only come from the opt-in
//! bounds-checked operations, the parsing helpers and the file-backed images.

/// Errors that can occur during eetrack operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EepromError {
    /// Access falls outside the backend's addressable range
    AddressOutOfRange,
    /// Access crosses the end of the configured region
    RegionOverflow,
    /// Malformed range string
    InvalidRange,
    /// Malformed numeric string
    InvalidNumber,
    /// Value kind name not recognised
    UnknownValueKind,
    /// I/O failure on an image file
    ImageIo,
    /// Image file has an unusable size
    InvalidImage,
}

impl core::fmt::Display for EepromError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            EepromError::AddressOutOfRange => "Address outside EEPROM capacity",
            EepromError::RegionOverflow => "Access crosses the end of the store region",
            EepromError::InvalidRange => "Invalid range",
            EepromError::InvalidNumber => "Invalid number",
            EepromError::UnknownValueKind => "Unknown value kind",
            EepromError::ImageIo => "EEPROM image I/O failure",
            EepromError::InvalidImage => "Invalid EEPROM image",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for EepromError {}

/// Result type for eetrack operations
pub type Result<T> = core::result::Result<T, EepromError>;
