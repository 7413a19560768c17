//! Memory-mapped EEPROM image backend
//!
//! Maps a raw EEPROM image file (the `.bin` dump a programmer reads from or
//! flashes to a device) so a tracked store can edit it in place.

use eetrack_core::{Eeprom, EepromError, Result, ERASED_BYTE};
use memmap2::{MmapMut, MmapOptions};
use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// EEPROM backed by a writable memory map of an image file
///
/// Out-of-range reads return the erased value and out-of-range writes are
/// dropped. Changes reach the file on [`flush`](Self::flush) or when the
/// mapping is dropped and the OS writes it back.
#[derive(Debug)]
pub struct MmapEeprom {
    mmap: MmapMut,
    path: PathBuf,
}

impl MmapEeprom {
    /// Create (or truncate) an image of `size` erased bytes
    pub fn create<P: AsRef<Path>>(path: P, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(EepromError::InvalidImage);
        }

        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|_| EepromError::ImageIo)?;
        file.set_len(size as u64).map_err(|_| EepromError::ImageIo)?;

        let mut image = Self::map(file, path)?;
        image.mmap.fill(ERASED_BYTE);
        image.flush()?;

        info!(path = %image.path.display(), size, "created EEPROM image");
        Ok(image)
    }

    /// Open an existing image for reading and writing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|_| EepromError::ImageIo)?;

        let len = file.metadata().map_err(|_| EepromError::ImageIo)?.len();
        if len == 0 || usize::try_from(len).is_err() {
            return Err(EepromError::InvalidImage);
        }

        let image = Self::map(file, path)?;
        info!(path = %image.path.display(), size = image.mmap.len(), "opened EEPROM image");
        Ok(image)
    }

    fn map(file: File, path: PathBuf) -> Result<Self> {
        // SAFETY: the file was opened read-write by us and stays mapped for the
        // lifetime of `mmap`; concurrent external modification is not supported
        let mmap = unsafe {
            MmapOptions::new()
                .map_mut(&file)
                .map_err(|_| EepromError::ImageIo)?
        };

        Ok(Self { mmap, path })
    }

    /// Write pending changes back to the image file
    pub fn flush(&self) -> Result<()> {
        self.mmap.flush().map_err(|_| EepromError::ImageIo)?;
        debug!(path = %self.path.display(), "flushed EEPROM image");
        Ok(())
    }

    /// Path of the mapped image file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mapped image contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }
}

impl Eeprom for MmapEeprom {
    fn read_byte(&self, address: usize) -> u8 {
        self.mmap.get(address).copied().unwrap_or(ERASED_BYTE)
    }

    fn write_byte(&mut self, address: usize, value: u8) {
        if let Some(byte) = self.mmap.get_mut(address) {
            *byte = value;
        }
    }

    fn capacity(&self) -> usize {
        self.mmap.len()
    }
}
