//! Address bounds checks for the opt-in checked store operations

use crate::EepromError;
use core::ops::Range;

/// End of a region of `len` bytes starting at `start`, if it fits in `usize`
pub const fn region_end(start: usize, len: usize) -> Option<usize> {
    start.checked_add(len)
}

/// Validate that `width` bytes at `address` lie inside the backend and region
///
/// `capacity` is the backend size in bytes. When `region` is given the access
/// must also lie entirely inside it.
pub fn check_access(
    address: usize,
    width: usize,
    region: Option<Range<usize>>,
    capacity: usize,
) -> Result<(), EepromError> {
    let end = address
        .checked_add(width)
        .ok_or(EepromError::AddressOutOfRange)?;

    if end > capacity {
        return Err(EepromError::AddressOutOfRange);
    }

    if let Some(region) = region {
        if address < region.start || end > region.end {
            return Err(EepromError::RegionOverflow);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_end() {
        assert_eq!(region_end(10, 6), Some(16));
        assert_eq!(region_end(usize::MAX, 1), None);
    }

    #[test]
    fn test_check_access_capacity() {
        assert_eq!(check_access(0, 4, None, 4), Ok(()));
        assert_eq!(check_access(1, 4, None, 4), Err(EepromError::AddressOutOfRange));
        assert_eq!(
            check_access(usize::MAX, 2, None, usize::MAX),
            Err(EepromError::AddressOutOfRange)
        );
    }

    #[test]
    fn test_check_access_region() {
        assert_eq!(check_access(10, 2, Some(10..12), 64), Ok(()));
        assert_eq!(
            check_access(11, 2, Some(10..12), 64),
            Err(EepromError::RegionOverflow)
        );
        assert_eq!(
            check_access(9, 1, Some(10..12), 64),
            Err(EepromError::RegionOverflow)
        );
        // Capacity is checked before the region
        assert_eq!(
            check_access(62, 4, Some(60..70), 64),
            Err(EepromError::AddressOutOfRange)
        );
    }
}
