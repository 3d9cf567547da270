//! # Constants
//!
//! Defaults and limits shared by the built-in schemes.

// ─────────────────────────────────────────────────────────────────────────────
// crypt(3) MD5 / SHA-2
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed round count of MD5-crypt (`$1$`, `$apr1$`).
pub const MD5_CRYPT_ROUNDS: u32 = 1_000;

/// Maximum MD5-crypt salt length in characters.
pub const MD5_CRYPT_MAX_SALT_LEN: usize = 8;

/// Round count implied when a SHA-crypt string carries no `rounds=` segment.
pub const SHA_CRYPT_DEFAULT_ROUNDS: u32 = 5_000;

/// SHA-crypt lower bound; smaller requests are coerced up.
pub const SHA_CRYPT_MIN_ROUNDS: u32 = 1_000;

/// SHA-crypt upper bound; larger requests are coerced down.
pub const SHA_CRYPT_MAX_ROUNDS: u32 = 999_999_999;

/// Maximum SHA-crypt salt length in characters; longer salts are truncated.
pub const SHA_CRYPT_MAX_SALT_LEN: usize = 16;

/// Characters used for textual crypt(3) salts.
pub const CRYPT_SALT_ALPHABET: &[u8] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

// ─────────────────────────────────────────────────────────────────────────────
// bcrypt
// ─────────────────────────────────────────────────────────────────────────────

pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;
pub const BCRYPT_DEFAULT_COST: u32 = 12;
pub const BCRYPT_SALT_LEN: usize = 16;

/// bcrypt stores 23 of the 24 output bytes.
pub const BCRYPT_HASH_LEN: usize = 23;

/// Passwords longer than this are truncated by bcrypt.
pub const BCRYPT_MAX_PASSWORD_LEN: usize = 72;

// ─────────────────────────────────────────────────────────────────────────────
// PBKDF2
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Default iteration count for the colon family (`PBKDF2:iter:salt:hash`).
pub const COLON_PBKDF2_ITERATIONS: u32 = 10_000;

/// Default salt and hash length of the colon family.
pub const COLON_PBKDF2_LEN: usize = 24;

/// Default rounds for passlib-style `$pbkdf2-*$` hashes.
pub const PASSLIB_PBKDF2_ROUNDS: u32 = 29_000;

/// Salt length for passlib-style `$pbkdf2-*$` hashes.
pub const PASSLIB_PBKDF2_SALT_LEN: usize = 16;

// ─────────────────────────────────────────────────────────────────────────────
// Argon2
// ─────────────────────────────────────────────────────────────────────────────

/// Memory cost in KiB (19 MiB, OWASP baseline).
pub const ARGON2_DEFAULT_MEMORY_KIB: u32 = 19_456;
pub const ARGON2_DEFAULT_TIME_COST: u32 = 2;
pub const ARGON2_DEFAULT_PARALLELISM: u32 = 1;

/// Argon2 version 1.3 (`v=19`).
pub const ARGON2_VERSION_13: u32 = 0x13;

/// Argon2 version 1.0 (`v=16`), implied when a PHC string has no `v=` segment.
pub const ARGON2_VERSION_10: u32 = 0x10;

pub const ARGON2_DEFAULT_HASH_LEN: usize = 32;
pub const ARGON2_DEFAULT_SALT_LEN: usize = 16;
pub const ARGON2_MIN_SALT_LEN: usize = 8;

// ─────────────────────────────────────────────────────────────────────────────
// Brace (LDAP) digests
// ─────────────────────────────────────────────────────────────────────────────

/// Salt length for newly encrypted `{SSHA}`-style hashes.
pub const BRACE_DIGEST_SALT_LEN: usize = 8;

pub const MD5_DIGEST_LEN: usize = 16;
pub const SHA1_DIGEST_LEN: usize = 20;
pub const SHA256_DIGEST_LEN: usize = 32;
pub const SHA512_DIGEST_LEN: usize = 64;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-length family
// ─────────────────────────────────────────────────────────────────────────────

/// Total length of a traditional DES crypt string.
pub const DES_CRYPT_LEN: usize = 13;
pub const DES_SALT_LEN: usize = 2;
pub const DES_HASH_LEN: usize = 8;

/// Total length of a bare hexadecimal MD5 digest.
pub const MD5_HEX_LEN: usize = 32;

// ─────────────────────────────────────────────────────────────────────────────
// Encrypt
// ─────────────────────────────────────────────────────────────────────────────

/// Attempt cap for the retry-until-unambiguous encrypt loop.
pub const MAX_ENCRYPT_ATTEMPTS: u32 = 256;
