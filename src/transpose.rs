//! # Byte Transposition
//!
//! MD5-crypt and SHA-crypt do not base64-encode their digest in natural byte
//! order. They walk a fixed table of byte triples `(B2, B1, B0)`, form the
//! 24-bit word `B2 << 16 | B1 << 8 | B0` and emit its sextets least significant
//! first. [`transpose`] reorders the digest so that a plain big-endian sextet
//! codec (`CryptTruncated`) produces exactly the same text; [`untranspose`]
//! undoes it.
//!
//! A group holding `k` real bytes yields `k + 1` sextets. They are repacked
//! big-endian into `k` output bytes; the last sextet carries only the `2k`
//! leftover bits, right-aligned.

use crate::error::CryptError;
use serde::{Deserialize, Serialize};

/// Order-table slot that contributes a zero byte.
///
/// Only valid in the leading slots of the final group.
pub const ZERO_SLOT: u8 = 0xFF;

const Z: u8 = ZERO_SLOT;

/// MD5-crypt: five full groups plus one trailing single-byte group.
pub const MD5_ORDER: [u8; 16] = [0, 6, 12, 1, 7, 13, 2, 8, 14, 3, 9, 15, 4, 10, 5, 11];

#[rustfmt::skip]
pub const SHA256_ORDER: [u8; 33] = [
    0, 10, 20,   21, 1, 11,   12, 22, 2,   3, 13, 23,   24, 4, 14,
    15, 25, 5,   6, 16, 26,   27, 7, 17,   18, 28, 8,   9, 19, 29,
    Z, 31, 30,
];

#[rustfmt::skip]
pub const SHA512_ORDER: [u8; 66] = [
    0, 21, 42,   22, 43, 1,   44, 2, 23,   3, 24, 45,   25, 46, 4,
    47, 5, 26,   6, 27, 48,   28, 49, 7,   50, 8, 29,   9, 30, 51,
    31, 52, 10,  53, 11, 32,  12, 33, 54,  34, 55, 13,  56, 14, 35,
    15, 36, 57,  37, 58, 16,  59, 17, 38,  18, 39, 60,  40, 61, 19,
    62, 20, 41,
    Z, Z, 63,
];

/// Named order tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transposition {
    Md5,
    Sha256,
    Sha512,
}

impl Transposition {
    pub fn order(self) -> &'static [u8] {
        match self {
            Transposition::Md5 => &MD5_ORDER,
            Transposition::Sha256 => &SHA256_ORDER,
            Transposition::Sha512 => &SHA512_ORDER,
        }
    }

    /// Digest length the table covers.
    pub fn block_size(self) -> usize {
        match self {
            Transposition::Md5 => 16,
            Transposition::Sha256 => 32,
            Transposition::Sha512 => 64,
        }
    }

    #[inline]
    pub fn apply(self, bytes: &[u8]) -> Result<Vec<u8>, CryptError> {
        transpose(bytes, self.order(), self.block_size())
    }

    #[inline]
    pub fn invert(self, bytes: &[u8]) -> Result<Vec<u8>, CryptError> {
        untranspose(bytes, self.order(), self.block_size())
    }
}

/// Real (non-zero) slots of a group, checking the zero-slot placement rule.
fn real_slots(group: &[u8], is_last: bool) -> Result<&[u8], CryptError> {
    let lead = group.iter().take_while(|&&slot| slot == ZERO_SLOT).count();
    let real = &group[lead..];
    if real.is_empty() || real.contains(&ZERO_SLOT) {
        return Err(CryptError::Configuration(
            "zero slot may only lead a group".into(),
        ));
    }
    if lead > 0 && !is_last {
        return Err(CryptError::Configuration(
            "zero slot outside the final group".into(),
        ));
    }
    if group.len() < 3 && !is_last {
        return Err(CryptError::Configuration(
            "order table is not a whole number of groups".into(),
        ));
    }
    Ok(real)
}

fn groups(order: &[u8]) -> impl Iterator<Item = (&[u8], bool)> {
    let count = order.len().div_ceil(3);
    order
        .chunks(3)
        .enumerate()
        .map(move |(i, group)| (group, i + 1 == count))
}

/// Packs sextets `s_0..s_k` of `word` big-endian into `k` bytes.
#[inline(always)]
fn pack(word: u32, k: usize, out: &mut Vec<u8>) {
    let tail_bits = 2 * k;
    let mut value = 0u32;
    for i in 0..k {
        value = value << 6 | (word >> (6 * i)) & 0x3F;
    }
    value = value << tail_bits | (word >> (6 * k)) & ((1 << tail_bits) - 1);
    for i in (0..k).rev() {
        out.push((value >> (8 * i)) as u8);
    }
}

/// Inverse of [`pack`].
#[inline(always)]
fn unpack(bytes: &[u8]) -> u32 {
    let k = bytes.len();
    let tail_bits = 2 * k;
    let value = bytes.iter().fold(0u32, |acc, &b| acc << 8 | b as u32);
    let mut word = (value & ((1 << tail_bits) - 1)) << (6 * k);
    let sextets = value >> tail_bits;
    for i in 0..k {
        word |= ((sextets >> (6 * (k - 1 - i))) & 0x3F) << (6 * i);
    }
    word
}

/// Reorders `bytes` per `order`, producing exactly `block_size` bytes.
pub fn transpose(bytes: &[u8], order: &[u8], block_size: usize) -> Result<Vec<u8>, CryptError> {
    let mut out = Vec::with_capacity(block_size);
    for (group, is_last) in groups(order) {
        let real = real_slots(group, is_last)?;
        let mut word = 0u32;
        for &index in real {
            let byte = *bytes.get(index as usize).ok_or_else(|| {
                CryptError::Configuration(format!(
                    "order index {index} outside a {}-byte input",
                    bytes.len()
                ))
            })?;
            word = word << 8 | byte as u32;
        }
        if group.len() == 1 {
            // lone trailing byte: low sextet first, then the top 2 bits
            out.push((word as u8).rotate_left(2));
        } else {
            pack(word, real.len(), &mut out);
        }
    }
    if out.len() != block_size {
        return Err(CryptError::Configuration(format!(
            "order table yields {} bytes, expected {block_size}",
            out.len()
        )));
    }
    Ok(out)
}

/// Restores the natural byte order from transposed `bytes`.
pub fn untranspose(bytes: &[u8], order: &[u8], block_size: usize) -> Result<Vec<u8>, CryptError> {
    if bytes.len() != block_size {
        return Err(CryptError::Configuration(format!(
            "transposed input is {} bytes, expected {block_size}",
            bytes.len()
        )));
    }
    let mut out = vec![0u8; block_size];
    let mut cursor = 0usize;
    for (group, is_last) in groups(order) {
        let real = real_slots(group, is_last)?;
        let chunk = bytes.get(cursor..cursor + real.len()).ok_or_else(|| {
            CryptError::Configuration("order table covers more bytes than the block".into())
        })?;
        cursor += real.len();
        let word = if group.len() == 1 {
            chunk[0].rotate_right(2) as u32
        } else {
            unpack(chunk)
        };
        for (shift, &index) in real.iter().rev().enumerate() {
            let slot = out.get_mut(index as usize).ok_or_else(|| {
                CryptError::Configuration(format!("order index {index} outside the block"))
            })?;
            *slot = (word >> (8 * shift)) as u8;
        }
    }
    Ok(out)
}
