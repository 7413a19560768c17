//! Storage capability consumed by the tracked store
//!
//! A backend only has to move single bytes. The typed accessors default to
//! the AVR layout: multi-byte values little-endian, bit values as flags inside
//! one byte. Backends with native typed access can override any of them.

/// Byte-addressable non-volatile storage
///
/// All accesses are synchronous and assumed to succeed for in-range
/// addresses. Behaviour for out-of-range addresses is up to the backend.
pub trait Eeprom {
    /// Read the byte at `address`
    fn read_byte(&self, address: usize) -> u8;

    /// Write the byte at `address`
    fn write_byte(&mut self, address: usize, value: u8);

    /// Number of addressable bytes
    fn capacity(&self) -> usize;

    /// Read bit `bit_index` (0-7) of the byte at `address`
    fn read_bit(&self, address: usize, bit_index: u8) -> bool {
        (self.read_byte(address) >> (bit_index & 7)) & 1 == 1
    }

    /// Set or clear bit `bit_index` of the byte at `address`
    ///
    /// The other seven bits of the byte are preserved.
    fn write_bit(&mut self, address: usize, bit_index: u8, value: bool) {
        let mask = 1u8 << (bit_index & 7);
        let byte = self.read_byte(address);
        let updated = if value { byte | mask } else { byte & !mask };
        self.write_byte(address, updated);
    }

    fn read_int16(&self, address: usize) -> i16 {
        i16::from_le_bytes(read_array(self, address))
    }

    fn write_int16(&mut self, address: usize, value: i16) {
        write_array(self, address, value.to_le_bytes());
    }

    fn read_int32(&self, address: usize) -> i32 {
        i32::from_le_bytes(read_array(self, address))
    }

    fn write_int32(&mut self, address: usize, value: i32) {
        write_array(self, address, value.to_le_bytes());
    }

    fn read_float32(&self, address: usize) -> f32 {
        f32::from_le_bytes(read_array(self, address))
    }

    fn write_float32(&mut self, address: usize, value: f32) {
        write_array(self, address, value.to_le_bytes());
    }
}

fn read_array<const N: usize, E: Eeprom + ?Sized>(eeprom: &E, address: usize) -> [u8; N] {
    let mut bytes = [0u8; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = eeprom.read_byte(address.wrapping_add(i));
    }
    bytes
}

fn write_array<const N: usize, E: Eeprom + ?Sized>(
    eeprom: &mut E,
    address: usize,
    bytes: [u8; N],
) {
    for (i, byte) in bytes.into_iter().enumerate() {
        eeprom.write_byte(address.wrapping_add(i), byte);
    }
}

// Forward every method so backend overrides survive borrowing
impl<E: Eeprom + ?Sized> Eeprom for &mut E {
    fn read_byte(&self, address: usize) -> u8 {
        (**self).read_byte(address)
    }

    fn write_byte(&mut self, address: usize, value: u8) {
        (**self).write_byte(address, value)
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn read_bit(&self, address: usize, bit_index: u8) -> bool {
        (**self).read_bit(address, bit_index)
    }

    fn write_bit(&mut self, address: usize, bit_index: u8, value: bool) {
        (**self).write_bit(address, bit_index, value)
    }

    fn read_int16(&self, address: usize) -> i16 {
        (**self).read_int16(address)
    }

    fn write_int16(&mut self, address: usize, value: i16) {
        (**self).write_int16(address, value)
    }

    fn read_int32(&self, address: usize) -> i32 {
        (**self).read_int32(address)
    }

    fn write_int32(&mut self, address: usize, value: i32) {
        (**self).write_int32(address, value)
    }

    fn read_float32(&self, address: usize) -> f32 {
        (**self).read_float32(address)
    }

    fn write_float32(&mut self, address: usize, value: f32) {
        (**self).write_float32(address, value)
    }
}

/// Fixed-size in-memory EEPROM for unit tests
#[cfg(test)]
pub(crate) struct ArrayEeprom<const N: usize> {
    pub bytes: [u8; N],
    pub byte_writes: usize,
}

#[cfg(test)]
impl<const N: usize> ArrayEeprom<N> {
    pub fn erased() -> Self {
        Self {
            bytes: [crate::ERASED_BYTE; N],
            byte_writes: 0,
        }
    }

    pub fn zeroed() -> Self {
        Self {
            bytes: [0; N],
            byte_writes: 0,
        }
    }
}

#[cfg(test)]
impl<const N: usize> Eeprom for ArrayEeprom<N> {
    fn read_byte(&self, address: usize) -> u8 {
        self.bytes[address]
    }

    fn write_byte(&mut self, address: usize, value: u8) {
        self.byte_writes += 1;
        self.bytes[address] = value;
    }

    fn capacity(&self) -> usize {
        N
    }
}
