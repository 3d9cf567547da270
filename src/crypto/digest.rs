//! Single-pass digests for the brace family and NT-HASH.

use crate::aliases::SecretBytes;
use md4::Md4;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

fn digest_of<D: Digest>(password: &[u8], salt: &[u8]) -> SecretBytes {
    let mut ctx = D::new();
    ctx.update(password);
    ctx.update(salt);
    Zeroizing::new(ctx.finalize().to_vec())
}

/// `MD5(password ‖ salt)`
pub fn md5(password: &[u8], salt: &[u8]) -> SecretBytes {
    digest_of::<Md5>(password, salt)
}

/// `SHA1(password ‖ salt)`
pub fn sha1(password: &[u8], salt: &[u8]) -> SecretBytes {
    digest_of::<Sha1>(password, salt)
}

/// `SHA256(password ‖ salt)`
pub fn sha256(password: &[u8], salt: &[u8]) -> SecretBytes {
    digest_of::<Sha256>(password, salt)
}

/// `SHA512(password ‖ salt)`
pub fn sha512(password: &[u8], salt: &[u8]) -> SecretBytes {
    digest_of::<Sha512>(password, salt)
}

/// MD4 of the UTF-16LE password bytes.
pub fn nt_hash(password_utf16le: &[u8]) -> SecretBytes {
    digest_of::<Md4>(password_utf16le, &[])
}
