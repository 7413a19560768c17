//! Value types that can be kept in EEPROM
//!
//! This module defines the trait that constrains what a tracked store can
//! read and write, and the runtime tag describing each type.

use super::eeprom::Eeprom;
use crate::constants::{BIT_SIZE, FLOAT_SIZE, INT_SIZE, LONG_SIZE};
use crate::EepromError;

/// Runtime tag for the supported value types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    /// Single flag in bit 0 of a byte
    Bit,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// IEEE-754 single precision float
    Float32,
}

impl ValueKind {
    /// Every kind, in width order
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Bit,
        ValueKind::Int16,
        ValueKind::Int32,
        ValueKind::Float32,
    ];

    /// Bytes the cursor advances by for this kind
    pub const fn width(self) -> usize {
        match self {
            ValueKind::Bit => BIT_SIZE,
            ValueKind::Int16 => INT_SIZE,
            ValueKind::Int32 => LONG_SIZE,
            ValueKind::Float32 => FLOAT_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Bit => "bit",
            ValueKind::Int16 => "int16",
            ValueKind::Int32 => "int32",
            ValueKind::Float32 => "float32",
        }
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

impl core::str::FromStr for ValueKind {
    type Err = EepromError;

    /// Accepts the canonical names plus the short aliases `bool`, `int`,
    /// `long` and `float`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bit" | "bool" => Ok(ValueKind::Bit),
            "int16" | "int" | "i16" => Ok(ValueKind::Int16),
            "int32" | "long" | "i32" => Ok(ValueKind::Int32),
            "float32" | "float" | "f32" => Ok(ValueKind::Float32),
            _ => Err(EepromError::UnknownValueKind),
        }
    }
}

/// Trait for types a tracked store can read and write
///
/// Requirements:
/// - Copy: values are passed around by value
/// - PartialEq: write-avoidance compares the stored value with the new one
///
/// Comparison follows `PartialEq`, so a NaN is always rewritten and `-0.0`
/// counts as equal to a stored `0.0`.
pub trait StoredValue: Copy + PartialEq + Sized {
    /// Runtime tag for this type
    const KIND: ValueKind;

    /// Bytes occupied in EEPROM
    const WIDTH: usize = Self::KIND.width();

    /// Read a value of this type at `address`
    fn load<E: Eeprom + ?Sized>(eeprom: &E, address: usize) -> Self;

    /// Write this value at `address`
    fn store<E: Eeprom + ?Sized>(self, eeprom: &mut E, address: usize);
}

impl StoredValue for bool {
    const KIND: ValueKind = ValueKind::Bit;

    fn load<E: Eeprom + ?Sized>(eeprom: &E, address: usize) -> Self {
        eeprom.read_bit(address, 0)
    }

    fn store<E: Eeprom + ?Sized>(self, eeprom: &mut E, address: usize) {
        eeprom.write_bit(address, 0, self)
    }
}

impl StoredValue for i16 {
    const KIND: ValueKind = ValueKind::Int16;

    fn load<E: Eeprom + ?Sized>(eeprom: &E, address: usize) -> Self {
        eeprom.read_int16(address)
    }

    fn store<E: Eeprom + ?Sized>(self, eeprom: &mut E, address: usize) {
        eeprom.write_int16(address, self)
    }
}

impl StoredValue for i32 {
    const KIND: ValueKind = ValueKind::Int32;

    fn load<E: Eeprom + ?Sized>(eeprom: &E, address: usize) -> Self {
        eeprom.read_int32(address)
    }

    fn store<E: Eeprom + ?Sized>(self, eeprom: &mut E, address: usize) {
        eeprom.write_int32(address, self)
    }
}

impl StoredValue for f32 {
    const KIND: ValueKind = ValueKind::Float32;

    fn load<E: Eeprom + ?Sized>(eeprom: &E, address: usize) -> Self {
        eeprom.read_float32(address)
    }

    fn store<E: Eeprom + ?Sized>(self, eeprom: &mut E, address: usize) {
        eeprom.write_float32(address, self)
    }
}
