//! Sextet codecs: standard base64 and the crypt(3)-era alphabets.
//!
//! `Padded` and `ZeroFill` are delegated to the `base64` crate engines.
//! `RightAligned` is hand-packed: the leftover bits of a one- or two-byte
//! remainder are written right-aligned into the final sextet, which is what
//! MD5-crypt and SHA-crypt produce once their digest has been transposed.

use super::{sextet_decoded_len, ByteTextCodec};
use crate::error::CryptError;
use ::base64::alphabet::{self, Alphabet};
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use ::base64::Engine;

const STANDARD_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const STANDARD_PADDED_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";
const ADAPTED_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789./";
const BCRYPT_SYMBOLS: &str = "./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const CRYPT_SYMBOLS: &str = "./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const ADAPTED: Alphabet = match Alphabet::new(ADAPTED_SYMBOLS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("adapted base64 alphabet is invalid"),
};

const PADDED: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(true)
    .with_decode_padding_mode(DecodePaddingMode::RequireCanonical);

const UNPADDED: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::RequireNone);

const INVALID: u8 = 0xFF;

/// Policy for the one- or two-byte remainder of the final 3-byte block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// Emit the partial sextets, then `=` up to a 4-character boundary.
    Padded,
    /// Emit the partial sextets only; unused low bits are zero.
    ZeroFill,
    /// Same length as `ZeroFill`, but the leftover bits are right-aligned in
    /// the final sextet instead of being shifted up.
    RightAligned,
}

/// A 64-symbol alphabet plus a remainder policy.
#[derive(Debug, Clone)]
pub struct Base64Codec {
    name: &'static str,
    value_space: &'static str,
    symbols: &'static [u8],
    padding: PaddingMode,
    engine: GeneralPurpose,
    decode_table: [u8; 256],
}

const fn decode_table(symbols: &[u8]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

impl Base64Codec {
    /// RFC 4648 base64 with `=` padding.
    pub const fn standard() -> Self {
        Self {
            name: "base64",
            value_space: STANDARD_PADDED_SYMBOLS,
            symbols: STANDARD_SYMBOLS.as_bytes(),
            padding: PaddingMode::Padded,
            engine: GeneralPurpose::new(&alphabet::STANDARD, PADDED),
            decode_table: decode_table(STANDARD_SYMBOLS.as_bytes()),
        }
    }

    /// RFC 4648 alphabet without padding (PHC strings).
    pub const fn standard_unpadded() -> Self {
        Self {
            name: "base64-unpadded",
            value_space: STANDARD_SYMBOLS,
            symbols: STANDARD_SYMBOLS.as_bytes(),
            padding: PaddingMode::ZeroFill,
            engine: GeneralPurpose::new(&alphabet::STANDARD, UNPADDED),
            decode_table: decode_table(STANDARD_SYMBOLS.as_bytes()),
        }
    }

    /// Base64 with `.` in place of `+`, unpadded (passlib "ab64").
    pub const fn adapted() -> Self {
        Self {
            name: "adapted-base64",
            value_space: ADAPTED_SYMBOLS,
            symbols: ADAPTED_SYMBOLS.as_bytes(),
            padding: PaddingMode::ZeroFill,
            engine: GeneralPurpose::new(&ADAPTED, UNPADDED),
            decode_table: decode_table(ADAPTED_SYMBOLS.as_bytes()),
        }
    }

    /// The OpenBSD bcrypt alphabet, unpadded.
    pub const fn bcrypt() -> Self {
        Self {
            name: "bcrypt-base64",
            value_space: BCRYPT_SYMBOLS,
            symbols: BCRYPT_SYMBOLS.as_bytes(),
            padding: PaddingMode::ZeroFill,
            engine: GeneralPurpose::new(&alphabet::BCRYPT, UNPADDED),
            decode_table: decode_table(BCRYPT_SYMBOLS.as_bytes()),
        }
    }

    /// `./0-9A-Za-z`, unpadded, zero-filled (traditional DES crypt).
    pub const fn crypt() -> Self {
        Self {
            name: "crypt-base64",
            value_space: CRYPT_SYMBOLS,
            symbols: CRYPT_SYMBOLS.as_bytes(),
            padding: PaddingMode::ZeroFill,
            engine: GeneralPurpose::new(&alphabet::CRYPT, UNPADDED),
            decode_table: decode_table(CRYPT_SYMBOLS.as_bytes()),
        }
    }

    /// `./0-9A-Za-z`, unpadded, truncated remainder (MD5-crypt, SHA-crypt).
    pub const fn crypt_truncated() -> Self {
        Self {
            name: "crypt-base64-truncated",
            value_space: CRYPT_SYMBOLS,
            symbols: CRYPT_SYMBOLS.as_bytes(),
            padding: PaddingMode::RightAligned,
            engine: GeneralPurpose::new(&alphabet::CRYPT, UNPADDED),
            decode_table: decode_table(CRYPT_SYMBOLS.as_bytes()),
        }
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    fn symbol(&self, sextet: u32) -> char {
        self.symbols[(sextet & 0x3F) as usize] as char
    }

    fn sextet(&self, c: u8) -> Result<u32, CryptError> {
        match self.decode_table[c as usize] {
            INVALID => Err(CryptError::Encoding(format!(
                "invalid {} character {:?}",
                self.name, c as char
            ))),
            v => Ok(v as u32),
        }
    }

    fn encode_right_aligned(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(self.encoded_len(bytes.len()));
        let mut blocks = bytes.chunks_exact(3);
        for block in blocks.by_ref() {
            let w = (block[0] as u32) << 16 | (block[1] as u32) << 8 | block[2] as u32;
            out.push(self.symbol(w >> 18));
            out.push(self.symbol(w >> 12));
            out.push(self.symbol(w >> 6));
            out.push(self.symbol(w));
        }
        match *blocks.remainder() {
            [x] => {
                out.push(self.symbol(x as u32 >> 2));
                out.push(self.symbol(x as u32 & 0x03));
            }
            [x, y] => {
                let w = (x as u32) << 8 | y as u32;
                out.push(self.symbol(w >> 10));
                out.push(self.symbol(w >> 4));
                out.push(self.symbol(w & 0x0F));
            }
            _ => {}
        }
        out
    }

    fn decode_right_aligned(&self, text: &str) -> Result<Vec<u8>, CryptError> {
        let expected = sextet_decoded_len(text, None).ok_or_else(|| {
            CryptError::Encoding(format!("invalid {} length {}", self.name, text.len()))
        })?;
        let mut out = Vec::with_capacity(expected);
        let mut quads = text.as_bytes().chunks_exact(4);
        for quad in quads.by_ref() {
            let w = self.sextet(quad[0])? << 18
                | self.sextet(quad[1])? << 12
                | self.sextet(quad[2])? << 6
                | self.sextet(quad[3])?;
            out.extend_from_slice(&[(w >> 16) as u8, (w >> 8) as u8, w as u8]);
        }
        match *quads.remainder() {
            [a, b] => {
                let (a, b) = (self.sextet(a)?, self.sextet(b)?);
                if b > 0x03 {
                    return Err(CryptError::Encoding("final sextet carries more than 2 bits".into()));
                }
                out.push((a << 2 | b) as u8);
            }
            [a, b, c] => {
                let (a, b, c) = (self.sextet(a)?, self.sextet(b)?, self.sextet(c)?);
                if c > 0x0F {
                    return Err(CryptError::Encoding("final sextet carries more than 4 bits".into()));
                }
                let w = a << 10 | b << 4 | c;
                out.extend_from_slice(&[(w >> 8) as u8, w as u8]);
            }
            _ => {}
        }
        debug_assert_eq!(out.len(), expected);
        Ok(out)
    }
}

impl ByteTextCodec for Base64Codec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn value_space(&self) -> &'static str {
        self.value_space
    }

    fn encode(&self, bytes: &[u8]) -> String {
        match self.padding {
            PaddingMode::RightAligned => self.encode_right_aligned(bytes),
            PaddingMode::Padded | PaddingMode::ZeroFill => self.engine.encode(bytes),
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, CryptError> {
        match self.padding {
            PaddingMode::RightAligned => self.decode_right_aligned(text),
            PaddingMode::Padded | PaddingMode::ZeroFill => self
                .engine
                .decode(text)
                .map_err(|e| CryptError::Encoding(format!("{}: {e}", self.name))),
        }
    }

    fn encoded_len(&self, byte_len: usize) -> usize {
        match self.padding {
            PaddingMode::Padded => byte_len.div_ceil(3) * 4,
            PaddingMode::ZeroFill | PaddingMode::RightAligned => {
                byte_len / 3 * 4 + [0, 2, 3][byte_len % 3]
            }
        }
    }
}
