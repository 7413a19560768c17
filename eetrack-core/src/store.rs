//! Address-tracked typed store
//!
//! [`TrackedStore`] walks a region of EEPROM with a cursor. Sequential reads
//! and writes act at the cursor and advance it by the value's width, so a
//! settings block can be saved and reloaded with the same call sequence:
//!
//! ```
//! # use eetrack_core::{Eeprom, TrackedStore};
//! # struct Buf([u8; 64]);
//! # impl Eeprom for Buf {
//! #     fn read_byte(&self, a: usize) -> u8 { self.0[a] }
//! #     fn write_byte(&mut self, a: usize, v: u8) { self.0[a] = v }
//! #     fn capacity(&self) -> usize { 64 }
//! # }
//! let mut store = TrackedStore::new(Buf([0xFF; 64]), 16);
//! store.write_int(1200);
//! store.write_float(0.75);
//! store.write_bit(true);
//!
//! store.reset_cursor();
//! assert_eq!(store.read_int(), 1200);
//! assert_eq!(store.read_float(), 0.75);
//! assert!(store.read_bit());
//! assert_eq!(store.cursor(), 16 + 2 + 4 + 1);
//! ```
//!
//! Writes read the stored value first and skip the physical write when it is
//! already equal, sparing EEPROM write cycles. The unchecked operations never
//! fail; offsets advance with wrapping arithmetic and out-of-range addresses
//! are the backend's concern. The `try_*` operations add bounds assertions.

use crate::traits::{Eeprom, StoredValue};
use crate::validation::{check_access, region_end};
use crate::Result;

/// Configuration for a tracked store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreConfig {
    /// Base address of the managed region
    pub start_offset: usize,
    /// Region size in bytes, enables the checked operations' region test
    pub region_len: Option<usize>,
    /// Skip physical writes of values already stored
    pub write_avoidance: bool,
}

impl StoreConfig {
    /// Config for a region starting at `start_offset`
    pub const fn at(start_offset: usize) -> Self {
        Self {
            start_offset,
            region_len: None,
            write_avoidance: true,
        }
    }

    /// Set the region size used by the checked operations
    pub const fn with_region_len(mut self, region_len: usize) -> Self {
        self.region_len = Some(region_len);
        self
    }

    /// Enable or disable read-before-write
    pub const fn with_write_avoidance(mut self, enabled: bool) -> Self {
        self.write_avoidance = enabled;
        self
    }

    /// Address range of the region, if a size is configured
    ///
    /// A region running past `usize::MAX` is clamped to it.
    pub fn region(&self) -> Option<core::ops::Range<usize>> {
        self.region_len.map(|len| {
            let end = region_end(self.start_offset, len).unwrap_or(usize::MAX);
            self.start_offset..end
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::at(0)
    }
}

/// Typed EEPROM access with a self-advancing cursor
#[derive(Debug)]
pub struct TrackedStore<S> {
    storage: S,
    config: StoreConfig,
    cursor: usize,
}

macro_rules! typed_accessors {
    ($ty:ty, $write:ident, $read:ident, $write_at:ident) => {
        #[doc = concat!("Write a `", stringify!($ty), "` at the cursor and advance it")]
        pub fn $write(&mut self, value: $ty) -> bool {
            self.write_next(value)
        }

        #[doc = concat!("Read a `", stringify!($ty), "` at the cursor and advance it")]
        pub fn $read(&mut self) -> $ty {
            self.read_next()
        }

        #[doc = concat!("Write a `", stringify!($ty), "` at `address` and advance `address`")]
        pub fn $write_at(&mut self, address: &mut usize, value: $ty) -> bool {
            self.write_at(address, value)
        }
    };
}

impl<S: Eeprom> TrackedStore<S> {
    /// Create a store whose start and cursor are both `start_offset`
    ///
    /// The offset is not validated.
    pub fn new(storage: S, start_offset: usize) -> Self {
        Self::with_config(storage, StoreConfig::at(start_offset))
    }

    /// Create a store from an explicit configuration
    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self {
            storage,
            cursor: config.start_offset,
            config,
        }
    }

    /// Base address of the managed region
    pub fn start_offset(&self) -> usize {
        self.config.start_offset
    }

    /// Move the region start. The cursor stays where it is.
    pub fn set_start_offset(&mut self, offset: usize) {
        self.config.start_offset = offset;
    }

    /// Move the cursor back to the region start
    pub fn reset_cursor(&mut self) {
        self.cursor = self.config.start_offset;
    }

    /// Address of the next sequential access
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor anywhere, without width alignment
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset;
    }

    /// Current configuration, including the live start offset
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Borrow the backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Borrow the backend mutably, bypassing cursor tracking
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Release the backend
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Write `value` at the cursor, then advance the cursor by its width
    ///
    /// Returns `true` if a physical write happened, `false` if the stored
    /// value already matched. The cursor advances either way.
    pub fn write_next<T: StoredValue>(&mut self, value: T) -> bool {
        let address = self.cursor;
        self.cursor = address.wrapping_add(T::WIDTH);
        self.store_value(address, value)
    }

    /// Read the value at the cursor, then advance the cursor by its width
    pub fn read_next<T: StoredValue>(&mut self) -> T {
        let value = T::load(&self.storage, self.cursor);
        self.cursor = self.cursor.wrapping_add(T::WIDTH);
        value
    }

    /// Read the value at the cursor without moving it
    pub fn peek<T: StoredValue>(&self) -> T {
        T::load(&self.storage, self.cursor)
    }

    /// Write `value` at `*address`, then advance `*address` by its width
    ///
    /// Same write-avoidance as [`write_next`](Self::write_next). The store's
    /// own cursor is not touched, which lets callers run independent cursors
    /// over one backend.
    pub fn write_at<T: StoredValue>(&mut self, address: &mut usize, value: T) -> bool {
        let target = *address;
        *address = target.wrapping_add(T::WIDTH);
        self.store_value(target, value)
    }

    /// Read the value at `*address`, then advance `*address` by its width
    pub fn read_at<T: StoredValue>(&self, address: &mut usize) -> T {
        let value = T::load(&self.storage, *address);
        *address = address.wrapping_add(T::WIDTH);
        value
    }

    /// [`write_next`](Self::write_next) with bounds assertions
    ///
    /// Fails without touching the cursor or the storage when the access
    /// would leave the backend or the configured region.
    pub fn try_write_next<T: StoredValue>(&mut self, value: T) -> Result<bool> {
        self.check::<T>(self.cursor)?;
        Ok(self.write_next(value))
    }

    /// [`read_next`](Self::read_next) with bounds assertions
    pub fn try_read_next<T: StoredValue>(&mut self) -> Result<T> {
        self.check::<T>(self.cursor)?;
        Ok(self.read_next())
    }

    /// [`write_at`](Self::write_at) with bounds assertions
    pub fn try_write_at<T: StoredValue>(&mut self, address: &mut usize, value: T) -> Result<bool> {
        self.check::<T>(*address)?;
        Ok(self.write_at(address, value))
    }

    /// [`read_at`](Self::read_at) with bounds assertions
    pub fn try_read_at<T: StoredValue>(&self, address: &mut usize) -> Result<T> {
        self.check::<T>(*address)?;
        Ok(self.read_at(address))
    }

    typed_accessors!(bool, write_bit, read_bit, write_bit_at);
    typed_accessors!(i16, write_int, read_int, write_int_at);
    typed_accessors!(i32, write_long, read_long, write_long_at);
    typed_accessors!(f32, write_float, read_float, write_float_at);

    fn store_value<T: StoredValue>(&mut self, address: usize, value: T) -> bool {
        if self.config.write_avoidance && T::load(&self.storage, address) == value {
            crate::trace_access!(address, width = T::WIDTH, written = false, "eeprom write skipped");
            return false;
        }

        value.store(&mut self.storage, address);
        crate::trace_access!(address, width = T::WIDTH, written = true, "eeprom write");
        true
    }

    fn check<T: StoredValue>(&self, address: usize) -> Result<()> {
        let checked = check_access(
            address,
            T::WIDTH,
            self.config.region(),
            self.storage.capacity(),
        );

        if let Err(_error) = checked {
            crate::warn_access!(
                address,
                width = T::WIDTH,
                error = %_error,
                "eeprom access rejected"
            );
        }

        checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::eeprom::ArrayEeprom;
    use crate::EepromError;

    #[test]
    fn test_new_sets_start_and_cursor() {
        let store = TrackedStore::new(ArrayEeprom::<32>::zeroed(), 10);
        assert_eq!(store.start_offset(), 10);
        assert_eq!(store.cursor(), 10);
        assert!(store.config().write_avoidance);
    }

    #[test]
    fn test_int16_write_avoidance_scenario() {
        let mut store = TrackedStore::new(ArrayEeprom::<32>::zeroed(), 10);

        assert!(store.write_int(42));
        assert_eq!(store.cursor(), 12);

        assert!(store.write_int(42));
        assert_eq!(store.cursor(), 14);

        store.reset_cursor();
        assert!(!store.write_int(42));
        assert_eq!(store.cursor(), 12);

        store.reset_cursor();
        assert_eq!(store.read_int(), 42);
        assert_eq!(store.cursor(), 12);
    }

    #[test]
    fn test_skipped_write_touches_no_bytes() {
        let mut store = TrackedStore::new(ArrayEeprom::<16>::zeroed(), 0);
        assert!(store.write_long(-5));
        let writes = store.storage().byte_writes;

        store.reset_cursor();
        assert!(!store.write_long(-5));
        assert_eq!(store.storage().byte_writes, writes);
        assert_eq!(store.cursor(), 4);
    }

    #[test]
    fn test_each_type_advances_by_width() {
        let mut store = TrackedStore::new(ArrayEeprom::<32>::erased(), 3);
        store.write_bit(false);
        assert_eq!(store.cursor(), 4);
        store.write_int(-300);
        assert_eq!(store.cursor(), 6);
        store.write_long(1_000_000);
        assert_eq!(store.cursor(), 10);
        store.write_float(3.25);
        assert_eq!(store.cursor(), 14);

        store.reset_cursor();
        assert!(!store.read_bit());
        assert_eq!(store.read_int(), -300);
        assert_eq!(store.read_long(), 1_000_000);
        assert_eq!(store.read_float(), 3.25);
        assert_eq!(store.cursor(), 14);
    }

    #[test]
    fn test_write_at_leaves_cursor_alone() {
        let mut store = TrackedStore::new(ArrayEeprom::<32>::zeroed(), 0);
        let mut address = 20;

        assert!(store.write_float_at(&mut address, 9.5));
        assert_eq!(address, 24);
        assert_eq!(store.cursor(), 0);

        address = 20;
        assert!(!store.write_at(&mut address, 9.5f32));
        assert_eq!(address, 24);

        address = 20;
        assert_eq!(store.read_at::<f32>(&mut address), 9.5);
        assert_eq!(address, 24);
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_start_and_cursor_accessors() {
        let mut store = TrackedStore::new(ArrayEeprom::<32>::zeroed(), 4);
        store.write_long(1);
        store.set_start_offset(16);
        assert_eq!(store.cursor(), 8);

        store.reset_cursor();
        assert_eq!(store.cursor(), 16);

        store.set_cursor(5);
        assert_eq!(store.cursor(), 5);
        store.reset_cursor();
        assert_eq!(store.cursor(), 16);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut store = TrackedStore::new(ArrayEeprom::<8>::zeroed(), 0);
        store.write_int(7);
        store.reset_cursor();
        assert_eq!(store.peek::<i16>(), 7);
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_float_nan_always_rewritten() {
        let mut store = TrackedStore::new(ArrayEeprom::<8>::zeroed(), 0);
        assert!(store.write_float(f32::NAN));
        store.reset_cursor();
        assert!(store.write_float(f32::NAN));

        store.reset_cursor();
        assert!(store.write_float(0.0));
        store.reset_cursor();
        assert!(!store.write_float(-0.0));
    }

    #[test]
    fn test_write_avoidance_disabled() {
        let config = StoreConfig::at(0).with_write_avoidance(false);
        let mut store = TrackedStore::with_config(ArrayEeprom::<8>::zeroed(), config);
        assert!(store.write_int(0));
        assert_eq!(store.storage().byte_writes, 2);
    }

    #[test]
    fn test_bit_write_keeps_neighbouring_bits() {
        let mut eeprom = ArrayEeprom::<4>::zeroed();
        eeprom.bytes[0] = 0b1000_0000;
        let mut store = TrackedStore::new(eeprom, 0);

        assert!(store.write_bit(true));
        assert_eq!(store.storage().bytes[0], 0b1000_0001);
        store.reset_cursor();
        assert!(!store.write_bit(true));
    }

    #[test]
    fn test_checked_operations() {
        let config = StoreConfig::at(4).with_region_len(6);
        let mut store = TrackedStore::with_config(ArrayEeprom::<16>::zeroed(), config);

        assert_eq!(store.try_write_next(1i32), Ok(true));
        assert_eq!(store.try_write_next(2i16), Ok(true));
        assert_eq!(store.cursor(), 10);
        assert_eq!(store.try_write_next(true), Err(EepromError::RegionOverflow));
        assert_eq!(store.cursor(), 10);

        // Unchecked writes still go through
        assert!(store.write_bit(true));
        assert_eq!(store.cursor(), 11);

        store.reset_cursor();
        assert_eq!(store.try_read_next::<i32>(), Ok(1));

        let mut address = 2;
        assert_eq!(
            store.try_write_at(&mut address, 5i16),
            Err(EepromError::RegionOverflow)
        );
        assert_eq!(address, 2);

        let mut address = 14;
        assert_eq!(
            store.try_read_at::<f32>(&mut address),
            Err(EepromError::AddressOutOfRange)
        );
    }

    #[test]
    fn test_checked_without_region_uses_capacity() {
        let mut store = TrackedStore::new(ArrayEeprom::<4>::zeroed(), 0);
        let mut address = 2;
        assert_eq!(store.try_write_at(&mut address, 3i16), Ok(true));
        assert_eq!(address, 4);
        assert_eq!(
            store.try_write_at(&mut address, true),
            Err(EepromError::AddressOutOfRange)
        );
    }

    #[test]
    fn test_region_moves_with_start_offset() {
        let config = StoreConfig::at(0).with_region_len(2);
        let mut store = TrackedStore::with_config(ArrayEeprom::<16>::zeroed(), config);
        store.set_start_offset(8);
        store.reset_cursor();
        assert_eq!(store.config().region(), Some(8..10));
        assert_eq!(store.try_write_next(1i16), Ok(true));
    }
}
