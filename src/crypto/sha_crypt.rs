//! SHA-256-crypt (`$5$`) and SHA-512-crypt (`$6$`), Drepper's algorithm.
//!
//! Returns the raw digest in natural order; the caller transposes it.

use crate::aliases::SecretBytes;
use crate::consts::{SHA_CRYPT_MAX_ROUNDS, SHA_CRYPT_MAX_SALT_LEN, SHA_CRYPT_MIN_ROUNDS};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

/// Repeats `digest` cyclically to `len` bytes.
fn stretch(digest: &[u8], len: usize) -> SecretBytes {
    Zeroizing::new(digest.iter().copied().cycle().take(len).collect())
}

fn sha_crypt<D: Digest>(password: &[u8], salt: &[u8], rounds: u32) -> SecretBytes {
    let salt = &salt[..salt.len().min(SHA_CRYPT_MAX_SALT_LEN)];
    let rounds = rounds.clamp(SHA_CRYPT_MIN_ROUNDS, SHA_CRYPT_MAX_ROUNDS);
    let size = <D as Digest>::output_size();

    let mut ctx = D::new();
    ctx.update(password);
    ctx.update(salt);
    ctx.update(password);
    let alternate = Zeroizing::new(ctx.finalize().to_vec());

    let mut ctx = D::new();
    ctx.update(password);
    ctx.update(salt);
    for chunk in password.chunks(size) {
        ctx.update(&alternate[..chunk.len()]);
    }
    let mut bits = password.len();
    while bits > 0 {
        if bits & 1 == 1 {
            ctx.update(&*alternate);
        } else {
            ctx.update(password);
        }
        bits >>= 1;
    }
    let mut digest = Zeroizing::new(ctx.finalize().to_vec());

    let mut ctx = D::new();
    for _ in 0..password.len() {
        ctx.update(password);
    }
    let p_seq = stretch(&Zeroizing::new(ctx.finalize().to_vec()), password.len());

    let mut ctx = D::new();
    for _ in 0..16 + digest[0] as usize {
        ctx.update(salt);
    }
    let s_seq = stretch(&ctx.finalize(), salt.len());

    for round in 0..rounds {
        let mut ctx = D::new();
        if round % 2 == 1 {
            ctx.update(&*p_seq);
        } else {
            ctx.update(&*digest);
        }
        if round % 3 != 0 {
            ctx.update(&*s_seq);
        }
        if round % 7 != 0 {
            ctx.update(&*p_seq);
        }
        if round % 2 == 1 {
            ctx.update(&*digest);
        } else {
            ctx.update(&*p_seq);
        }
        digest = Zeroizing::new(ctx.finalize().to_vec());
    }
    digest
}

/// Rounds are clamped to `1000..=999_999_999`; salts beyond 16 bytes are ignored.
pub fn sha256_crypt(password: &[u8], salt: &[u8], rounds: u32) -> SecretBytes {
    sha_crypt::<Sha256>(password, salt, rounds)
}

/// Rounds are clamped to `1000..=999_999_999`; salts beyond 16 bytes are ignored.
pub fn sha512_crypt(password: &[u8], salt: &[u8], rounds: u32) -> SecretBytes {
    sha_crypt::<Sha512>(password, salt, rounds)
}
