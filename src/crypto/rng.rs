// src/crypto/rng.rs
//! Secure randomness for salts
//!
//! A thread-local `OsRng` serves every salt request on that thread; it is
//! stateless, so sharing it across calls is safe under concurrency.

use crate::consts::CRYPT_SALT_ALPHABET;
use crate::error::CryptError;
use rand::{rngs::OsRng, TryRngCore};
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Fills `dest` from the OS CSPRNG.
#[inline(always)]
pub fn fill_random(dest: &mut [u8]) -> Result<(), CryptError> {
    RNG.with(|rng_cell| {
        rng_cell
            .borrow_mut()
            .try_fill_bytes(dest)
            .map_err(|e| CryptError::Primitive(format!("OS random source failed: {e}")))
    })
}

/// `len` random bytes.
pub fn random_salt(len: usize) -> Result<Vec<u8>, CryptError> {
    let mut salt = vec![0u8; len];
    fill_random(&mut salt)?;
    Ok(salt)
}

/// `len` random characters from `./0-9A-Za-z`, as bytes.
///
/// 256 is a multiple of the 64-symbol alphabet, so masking keeps the choice
/// unbiased.
pub fn random_salt_chars(len: usize) -> Result<Vec<u8>, CryptError> {
    let mut salt = random_salt(len)?;
    for byte in salt.iter_mut() {
        *byte = CRYPT_SALT_ALPHABET[(*byte & 0x3F) as usize];
    }
    Ok(salt)
}
