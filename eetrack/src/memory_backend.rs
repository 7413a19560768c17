//! In-memory EEPROM backend
//!
//! A byte vector standing in for the device, used by host-side tooling and
//! tests. Every physical byte write is counted per address so callers can see
//! how much wear a save sequence causes.

use eetrack_core::{Eeprom, ERASED_BYTE};
use tracing::debug;

/// Heap-backed EEPROM image with per-address write counters
///
/// Reads beyond the end return the erased value and writes beyond the end
/// are dropped, like an unmapped EEPROM address.
#[derive(Debug, Clone)]
pub struct MemoryEeprom {
    bytes: Vec<u8>,
    writes: Vec<u32>,
    dirty: bool,
}

impl MemoryEeprom {
    /// Create an erased EEPROM of `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "creating in-memory EEPROM");
        Self::from_bytes(vec![ERASED_BYTE; capacity])
    }

    /// Wrap an existing image, such as a dump read from a device
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let writes = vec![0; bytes.len()];
        Self {
            bytes,
            writes,
            dirty: false,
        }
    }

    /// Raw image contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the backend and return the image
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Physical writes made to `address` since creation or the last reset
    pub fn write_count(&self, address: usize) -> u32 {
        self.writes.get(address).copied().unwrap_or(0)
    }

    /// Physical writes made to all addresses
    pub fn total_writes(&self) -> u64 {
        self.writes.iter().map(|&count| u64::from(count)).sum()
    }

    /// Highest per-address write count, the figure that limits endurance
    pub fn max_wear(&self) -> u32 {
        self.writes.iter().copied().max().unwrap_or(0)
    }

    /// Zero every per-address write counter
    pub fn reset_write_counts(&mut self) {
        self.writes.fill(0);
    }

    /// True if any byte was written since creation or [`mark_clean`](Self::mark_clean)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, typically after persisting the image
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Return every cell to the erased value
    ///
    /// Counts as one write per cell.
    pub fn erase(&mut self) {
        for (byte, count) in self.bytes.iter_mut().zip(self.writes.iter_mut()) {
            *byte = ERASED_BYTE;
            *count = count.saturating_add(1);
        }
        self.dirty = true;
    }
}

impl Eeprom for MemoryEeprom {
    fn read_byte(&self, address: usize) -> u8 {
        self.bytes.get(address).copied().unwrap_or(ERASED_BYTE)
    }

    fn write_byte(&mut self, address: usize, value: u8) {
        if let Some(byte) = self.bytes.get_mut(address) {
            *byte = value;
            self.writes[address] = self.writes[address].saturating_add(1);
            self.dirty = true;
        }
    }

    fn capacity(&self) -> usize {
        self.bytes.len()
    }
}
