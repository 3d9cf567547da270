use super::ByteTextCodec;
use crate::error::CryptError;

/// Hexadecimal codec. Decoding accepts either case regardless of the
/// encoding case.
#[derive(Debug, Clone, Copy)]
pub struct HexCodec {
    upper: bool,
}

impl HexCodec {
    pub const fn lower() -> Self {
        Self { upper: false }
    }

    pub const fn upper() -> Self {
        Self { upper: true }
    }
}

impl ByteTextCodec for HexCodec {
    fn name(&self) -> &'static str {
        if self.upper {
            "hex-upper"
        } else {
            "hex"
        }
    }

    fn value_space(&self) -> &'static str {
        if self.upper {
            "0123456789ABCDEF"
        } else {
            "0123456789abcdef"
        }
    }

    fn encode(&self, bytes: &[u8]) -> String {
        if self.upper {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, CryptError> {
        hex::decode(text).map_err(|e| CryptError::Encoding(format!("hex: {e}")))
    }

    fn encoded_len(&self, byte_len: usize) -> usize {
        byte_len * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_follows_variant() {
        assert_eq!(HexCodec::lower().encode(&[0xAB, 0x01]), "ab01");
        assert_eq!(HexCodec::upper().encode(&[0xAB, 0x01]), "AB01");
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(HexCodec::lower().decode("AbCd").unwrap(), vec![0xAB, 0xCD]);
        assert!(HexCodec::lower().decode("abc").is_err());
        assert!(HexCodec::lower().decode("zz").is_err());
    }
}
