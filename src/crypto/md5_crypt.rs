//! MD5-crypt (`$1$`) and its Apache variant (`$apr1$`).
//!
//! Returns the raw 16-byte digest in natural order; the caller applies the
//! MD5 transposition before encoding.

use crate::aliases::SecretBytes;
use crate::consts::{MD5_CRYPT_MAX_SALT_LEN, MD5_CRYPT_ROUNDS};
use md5::{Digest, Md5};
use zeroize::Zeroizing;

pub const MD5_MAGIC: &[u8] = b"$1$";
pub const APR1_MAGIC: &[u8] = b"$apr1$";

/// Salts longer than 8 bytes are truncated.
pub fn md5_crypt(password: &[u8], salt: &[u8], magic: &[u8]) -> SecretBytes {
    let salt = &salt[..salt.len().min(MD5_CRYPT_MAX_SALT_LEN)];

    let mut alternate = Md5::new();
    alternate.update(password);
    alternate.update(salt);
    alternate.update(password);
    let alternate = Zeroizing::new(alternate.finalize().to_vec());

    let mut ctx = Md5::new();
    ctx.update(password);
    ctx.update(magic);
    ctx.update(salt);
    for chunk in password.chunks(16) {
        ctx.update(&alternate[..chunk.len()]);
    }
    let mut bits = password.len();
    while bits > 0 {
        if bits & 1 == 0 {
            ctx.update(&password[..1]);
        } else {
            ctx.update([0u8]);
        }
        bits >>= 1;
    }
    let mut digest = Zeroizing::new(ctx.finalize().to_vec());

    for round in 0..MD5_CRYPT_ROUNDS {
        let mut ctx = Md5::new();
        if round % 2 == 1 {
            ctx.update(password);
        } else {
            ctx.update(&*digest);
        }
        if round % 3 != 0 {
            ctx.update(salt);
        }
        if round % 7 != 0 {
            ctx.update(password);
        }
        if round % 2 == 0 {
            ctx.update(password);
        } else {
            ctx.update(&*digest);
        }
        digest = Zeroizing::new(ctx.finalize().to_vec());
    }
    digest
}
