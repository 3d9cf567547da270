use super::ByteTextCodec;
use crate::error::CryptError;

/// Maps each byte to the character with the same code point (Latin-1).
///
/// Salts of MD5-crypt, SHA-crypt and DES-crypt are stored this way: the salt
/// text *is* the salt.
#[derive(Debug, Clone, Copy)]
pub struct RawCodec;

impl ByteTextCodec for RawCodec {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn value_space(&self) -> &'static str {
        ""
    }

    fn encode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| b as char).collect()
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, CryptError> {
        text.chars()
            .map(|c| {
                u8::try_from(u32::from(c)).map_err(|_| {
                    CryptError::Encoding(format!("raw: {c:?} is outside the single-byte range"))
                })
            })
            .collect()
    }

    fn encoded_len(&self, byte_len: usize) -> usize {
        byte_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_mapping() {
        assert_eq!(RawCodec.encode(b"saltstring"), "saltstring");
        assert_eq!(RawCodec.encode(&[0xE9]), "é");
        assert_eq!(RawCodec.decode("é").unwrap(), vec![0xE9]);
        assert!(RawCodec.decode("€").is_err());
    }
}
