//! # Byte ↔ Text Codecs
//!
//! Every salt and hash field of a crypt string passes through a [`ByteTextCodec`].
//! The set of codecs is closed and addressed by [`CodecId`]:
//!
//! | Id | Alphabet | Remainder policy |
//! |---|---|---|
//! | `Base64` | `A-Za-z0-9+/` | `=` padding |
//! | `Base64Unpadded` | `A-Za-z0-9+/` | zero-filled, no padding |
//! | `AdaptedBase64` | `A-Za-z0-9./` | zero-filled, no padding |
//! | `BCrypt` | `./A-Za-z0-9` | zero-filled, no padding |
//! | `Crypt` | `./0-9A-Za-z` | zero-filled, no padding |
//! | `CryptTruncated` | `./0-9A-Za-z` | leftover bits right-aligned |
//! | `HexLower` / `HexUpper` | hex | n/a |
//! | `Raw` | bytes as characters | n/a |
//! | `Auto` | decode hex → base64 → raw, encode base64 | n/a |

mod auto;
mod base64;
mod hex;
mod raw;

use crate::error::CryptError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use self::auto::{detect, AutoCodec};
pub use self::base64::{Base64Codec, PaddingMode};
pub use self::hex::HexCodec;
pub use self::raw::RawCodec;

/// Encodes bytes to text and back under a fixed alphabet and padding policy.
pub trait ByteTextCodec: Send + Sync + fmt::Debug {
    /// Short identifier, e.g. `"base64"`.
    fn name(&self) -> &'static str;

    /// Ordered set of legal characters. Empty for codecs that accept any character.
    fn value_space(&self) -> &'static str;

    fn encode(&self, bytes: &[u8]) -> String;

    fn decode(&self, text: &str) -> Result<Vec<u8>, CryptError>;

    /// Number of characters `encode` produces for `byte_len` bytes.
    fn encoded_len(&self, byte_len: usize) -> usize;

    /// Encodes `len` bytes of `bytes` starting at `offset`.
    fn encode_range(&self, bytes: &[u8], offset: usize, len: usize) -> Result<String, CryptError> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| CryptError::Encoding("range overflow".into()))?;
        let slice = bytes.get(offset..end).ok_or_else(|| {
            CryptError::Encoding(format!(
                "range {offset}..{end} outside buffer of {} bytes",
                bytes.len()
            ))
        })?;
        Ok(self.encode(slice))
    }
}

/// How auto-detection treats text that is valid both as hex and as base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ambiguity {
    /// Resolve deterministically to hex (check path).
    Allow,
    /// Yield no result (encrypt path self-check).
    Disallow,
}

/// Closed set of codecs a configuration can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodecId {
    Base64,
    Base64Unpadded,
    AdaptedBase64,
    BCrypt,
    Crypt,
    CryptTruncated,
    HexLower,
    HexUpper,
    Raw,
    Auto,
}

static BASE64: Base64Codec = Base64Codec::standard();
static BASE64_UNPADDED: Base64Codec = Base64Codec::standard_unpadded();
static ADAPTED_BASE64: Base64Codec = Base64Codec::adapted();
static BCRYPT: Base64Codec = Base64Codec::bcrypt();
static CRYPT: Base64Codec = Base64Codec::crypt();
static CRYPT_TRUNCATED: Base64Codec = Base64Codec::crypt_truncated();
static HEX_LOWER: HexCodec = HexCodec::lower();
static HEX_UPPER: HexCodec = HexCodec::upper();
static RAW: RawCodec = RawCodec;
static AUTO: AutoCodec = AutoCodec;

impl CodecId {
    /// The shared, stateless codec instance for this id.
    pub fn codec(self) -> &'static dyn ByteTextCodec {
        match self {
            CodecId::Base64 => &BASE64,
            CodecId::Base64Unpadded => &BASE64_UNPADDED,
            CodecId::AdaptedBase64 => &ADAPTED_BASE64,
            CodecId::BCrypt => &BCRYPT,
            CodecId::Crypt => &CRYPT,
            CodecId::CryptTruncated => &CRYPT_TRUNCATED,
            CodecId::HexLower => &HEX_LOWER,
            CodecId::HexUpper => &HEX_UPPER,
            CodecId::Raw => &RAW,
            CodecId::Auto => &AUTO,
        }
    }

    /// Maps a brace-family encoding suffix (`{SSHA.HEX}`) to a codec.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_uppercase().as_str() {
            "HEX" => Some(CodecId::HexLower),
            "B64" | "BASE64" => Some(CodecId::Base64),
            "RAW" => Some(CodecId::Raw),
            _ => None,
        }
    }

    /// True when decoding this codec may face hex/base64 ambiguity.
    pub fn is_auto(self) -> bool {
        matches!(self, CodecId::Auto)
    }

    /// Decodes `text`, applying `policy` when this is the auto codec.
    pub fn decode_with(self, text: &str, policy: Ambiguity) -> Result<Vec<u8>, CryptError> {
        match self {
            CodecId::Auto => detect(text, policy).ok_or_else(|| {
                CryptError::Encoding("text is ambiguous between hex and base64".into())
            }),
            other => other.codec().decode(text),
        }
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec().name())
    }
}

/// Number of bytes a sextet-packed string decodes to.
///
/// Trailing `pad` characters are scanned from the end first so that the output
/// buffer can be allocated exactly once. Returns `None` for lengths no encoder
/// can produce (a lone sextet in the final block).
pub(crate) fn sextet_decoded_len(text: &str, pad: Option<u8>) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut end = bytes.len();
    if let Some(pad) = pad {
        while end > 0 && bytes[end - 1] == pad {
            end -= 1;
        }
    }
    match end % 4 {
        0 => Some(end / 4 * 3),
        1 => None,
        rem => Some(end / 4 * 3 + rem - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoded_len_scans_padding() {
        assert_eq!(sextet_decoded_len("QUJD", Some(b'=')), Some(3));
        assert_eq!(sextet_decoded_len("QUI=", Some(b'=')), Some(2));
        assert_eq!(sextet_decoded_len("QQ==", Some(b'=')), Some(1));
        assert_eq!(sextet_decoded_len("QQ", None), Some(1));
        assert_eq!(sextet_decoded_len("QUJDR", None), None);
        assert_eq!(sextet_decoded_len("", None), Some(0));
    }

    #[test]
    fn suffixes() {
        assert_eq!(CodecId::from_suffix("hex"), Some(CodecId::HexLower));
        assert_eq!(CodecId::from_suffix("B64"), Some(CodecId::Base64));
        assert_eq!(CodecId::from_suffix("BASE64"), Some(CodecId::Base64));
        assert_eq!(CodecId::from_suffix("ROT13"), None);
    }

    #[test]
    fn encode_range_bounds() {
        let codec = CodecId::HexLower.codec();
        assert_eq!(codec.encode_range(&[1, 2, 3, 4], 1, 2).unwrap(), "0203");
        assert!(codec.encode_range(&[1, 2], 1, 2).is_err());
        assert!(codec.encode_range(&[1, 2], usize::MAX, 2).is_err());
    }
}
