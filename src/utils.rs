//! Utility functions used across the library.

use crate::aliases::SecretBytes;
use crate::error::CryptError;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Converts a UTF-8 password to UTF-16LE (NT-HASH and other Windows-derived schemes).
///
/// The output buffer is sized exactly once and scrubbed on drop.
#[inline(always)]
pub fn utf8_to_utf16le(input_utf8: &[u8]) -> Result<SecretBytes, CryptError> {
    let utf8_str = std::str::from_utf8(input_utf8)
        .map_err(|_| CryptError::Configuration("password is not valid UTF-8".into()))?;

    let mut output = Zeroizing::new(Vec::with_capacity(utf8_str.encode_utf16().count() * 2));
    for code_unit in utf8_str.encode_utf16() {
        output.extend_from_slice(&code_unit.to_le_bytes());
    }

    Ok(output)
}

/// Compares two hash buffers without early exit.
///
/// Buffers of different length are unequal immediately; equal-length buffers
/// are compared byte for byte in constant time.
#[inline]
pub fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.ct_eq(right).into()
}

/// Parses a plain decimal field (no sign, no leading `+`, no whitespace).
pub(crate) fn parse_decimal(field: &str, what: &str) -> Result<u32, CryptError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CryptError::Malformed(format!("{what} is not a decimal number: {field:?}")));
    }
    field
        .parse::<u32>()
        .map_err(|_| CryptError::Malformed(format!("{what} out of range: {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16le_ascii() {
        let out = utf8_to_utf16le(b"ab").unwrap();
        assert_eq!(out.as_slice(), &[0x61, 0x00, 0x62, 0x00]);
    }

    #[test]
    fn utf16le_rejects_invalid_utf8() {
        assert!(utf8_to_utf16le(&[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn constant_time_eq_lengths() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hell"));
        assert!(!constant_time_eq(b"", b"a"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn decimal_fields() {
        assert_eq!(parse_decimal("5000", "rounds").unwrap(), 5000);
        assert!(parse_decimal("", "rounds").is_err());
        assert!(parse_decimal("+5", "rounds").is_err());
        assert!(parse_decimal("99999999999", "rounds").is_err());
    }
}
