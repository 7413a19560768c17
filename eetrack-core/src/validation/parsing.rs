//! Parsing helpers for offsets, address ranges and version strings
//!
//! Pure `no_std` string parsing used by tooling that drives a store from
//! text (command lines, configuration files).

use crate::EepromError;
use core::ops::Range;

/// Parse an address range in the format "start:end" or "start-end"
///
/// Both ends accept decimal or `0x`-prefixed hexadecimal. The end is
/// exclusive, so `"0:16"` covers sixteen bytes.
pub fn parse_range(range_str: &str) -> Result<Range<usize>, EepromError> {
    if range_str.is_empty() {
        return Err(EepromError::InvalidRange);
    }

    // Dash is only a separator after the first character, never a sign
    let split = range_str.find(':').or_else(|| {
        range_str
            .char_indices()
            .skip(1)
            .find(|&(_, ch)| ch == '-')
            .map(|(pos, _)| pos)
    });

    let Some(pos) = split else {
        return Err(EepromError::InvalidRange);
    };

    let start = parse_usize(&range_str[..pos]).map_err(|_| EepromError::InvalidRange)?;
    let end = parse_usize(&range_str[pos + 1..]).map_err(|_| EepromError::InvalidRange)?;

    if start > end {
        return Err(EepromError::InvalidRange);
    }

    Ok(start..end)
}

/// Parse an offset written in decimal or `0x`-prefixed hexadecimal
pub fn parse_usize(s: &str) -> Result<usize, EepromError> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    if digits.is_empty() {
        return Err(EepromError::InvalidNumber);
    }

    let mut result: usize = 0;

    for ch in digits.chars() {
        let digit = ch.to_digit(radix).ok_or(EepromError::InvalidNumber)? as usize;
        result = result
            .checked_mul(radix as usize)
            .and_then(|r| r.checked_add(digit))
            .ok_or(EepromError::InvalidNumber)?;
    }

    Ok(result)
}

/// Parse a version string in the format "major.minor.patch"
///
/// The patch component may be omitted and defaults to zero.
pub fn parse_version(version_str: &str) -> Result<(u32, u32, u32), EepromError> {
    if version_str.is_empty() {
        return Err(EepromError::InvalidNumber);
    }

    let mut version_parts = [0u32; 3];
    let mut count = 0;

    for part in version_str.split('.') {
        if count >= 3 || part.is_empty() || part.starts_with("0x") {
            return Err(EepromError::InvalidNumber);
        }

        let value = parse_usize(part)?;
        version_parts[count] = u32::try_from(value).map_err(|_| EepromError::InvalidNumber)?;
        count += 1;
    }

    if count < 2 {
        return Err(EepromError::InvalidNumber);
    }

    Ok((version_parts[0], version_parts[1], version_parts[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        // Colon format
        assert_eq!(parse_range("0:10"), Ok(0..10));
        assert_eq!(parse_range("10:12"), Ok(10..12));
        assert_eq!(parse_range("0x10:0x20"), Ok(16..32));

        // Dash format
        assert_eq!(parse_range("0-10"), Ok(0..10));
        assert_eq!(parse_range("5-15"), Ok(5..15));

        // Invalid cases
        assert_eq!(parse_range(""), Err(EepromError::InvalidRange));
        assert_eq!(parse_range("10:5"), Err(EepromError::InvalidRange)); // start > end
        assert_eq!(parse_range("abc:def"), Err(EepromError::InvalidRange));
        assert_eq!(parse_range("10"), Err(EepromError::InvalidRange)); // no separator
        assert_eq!(parse_range("10:"), Err(EepromError::InvalidRange));
        assert_eq!(parse_range(":10"), Err(EepromError::InvalidRange));
        assert_eq!(parse_range("-1:10"), Err(EepromError::InvalidRange));
    }

    #[test]
    fn test_parse_usize() {
        assert_eq!(parse_usize("0"), Ok(0));
        assert_eq!(parse_usize("1023"), Ok(1023));
        assert_eq!(parse_usize("0x3FF"), Ok(1023));
        assert_eq!(parse_usize("0Xff"), Ok(255));

        assert_eq!(parse_usize(""), Err(EepromError::InvalidNumber));
        assert_eq!(parse_usize("0x"), Err(EepromError::InvalidNumber));
        assert_eq!(parse_usize("12a"), Err(EepromError::InvalidNumber));
        assert_eq!(parse_usize("-123"), Err(EepromError::InvalidNumber));
        assert_eq!(
            parse_usize("999999999999999999999999999"),
            Err(EepromError::InvalidNumber)
        );
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.1.0"), Ok((1, 1, 0)));
        assert_eq!(parse_version("2.5.10"), Ok((2, 5, 10)));
        assert_eq!(parse_version("1.0"), Ok((1, 0, 0)));

        assert_eq!(parse_version(""), Err(EepromError::InvalidNumber));
        assert_eq!(parse_version("1"), Err(EepromError::InvalidNumber));
        assert_eq!(parse_version("1.0.0.0"), Err(EepromError::InvalidNumber));
        assert_eq!(parse_version("a.b.c"), Err(EepromError::InvalidNumber));
        assert_eq!(parse_version("1..0"), Err(EepromError::InvalidNumber));
    }
}
