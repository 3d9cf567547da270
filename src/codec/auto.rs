//! Auto-detecting codec for brace-family payloads stored without an encoding suffix.

use super::{Ambiguity, Base64Codec, ByteTextCodec, HexCodec, RawCodec};
use crate::error::CryptError;

const HEX: HexCodec = HexCodec::lower();
static BASE64: Base64Codec = Base64Codec::standard();

/// Decodes `text` as hex, then base64, falling back to raw characters.
///
/// When the text parses as both hex and base64, `Ambiguity::Allow` picks hex and
/// `Ambiguity::Disallow` returns `None`. Text that is neither falls through to
/// the raw codec, so `None` otherwise only means the text has characters
/// outside the single-byte range.
pub fn detect(text: &str, policy: Ambiguity) -> Option<Vec<u8>> {
    let as_hex = HEX.decode(text).ok();
    let as_base64 = BASE64.decode(text).ok();
    match (as_hex, as_base64) {
        (Some(_), Some(_)) if policy == Ambiguity::Disallow => None,
        (Some(bytes), _) => Some(bytes),
        (None, Some(bytes)) => Some(bytes),
        (None, None) => RawCodec.decode(text).ok(),
    }
}

/// Encodes as padded base64; decodes with [`detect`] under `Ambiguity::Allow`.
#[derive(Debug, Clone, Copy)]
pub struct AutoCodec;

impl ByteTextCodec for AutoCodec {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn value_space(&self) -> &'static str {
        BASE64.value_space()
    }

    fn encode(&self, bytes: &[u8]) -> String {
        BASE64.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, CryptError> {
        detect(text, Ambiguity::Allow)
            .ok_or_else(|| CryptError::Encoding("auto: text is not hex, base64 or raw".into()))
    }

    fn encoded_len(&self, byte_len: usize) -> usize {
        BASE64.encoded_len(byte_len)
    }
}
