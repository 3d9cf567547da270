//! # Built-in Schemes
//!
//! One constructor per built-in scheme. Schemes that differ from a sibling only
//! in digest, lengths or token are derived from it.

use crate::codec::CodecId;
use crate::config::{Algorithm, Charset, ExtendedDefaults, Family, HasherConfiguration};
use crate::consts::*;
use crate::error::CryptError;
use crate::formatter::FormatterKind;
use crate::transpose::Transposition;

type Built = Result<HasherConfiguration, CryptError>;

// ─────────────────────────────────────────────────────────────────────────────
// Modular: crypt(3) MD5 / SHA-2
// ─────────────────────────────────────────────────────────────────────────────

pub fn md5_crypt() -> Built {
    HasherConfiguration::builder("1", Family::Modular, Algorithm::Md5Crypt, FormatterKind::Salted)
        .with_codec(CodecId::CryptTruncated)
        .with_salt_codec(CodecId::Raw)
        .with_salt_len(MD5_CRYPT_MAX_SALT_LEN)
        .with_transposition(Transposition::Md5)
        .build()
}

pub fn apache_md5_crypt() -> Built {
    md5_crypt()?
        .derive()
        .with_scheme("apr1")
        .with_algorithm(Algorithm::ApacheMd5Crypt)
        .build()
}

pub fn sha256_crypt() -> Built {
    HasherConfiguration::builder(
        "5",
        Family::Modular,
        Algorithm::Sha256Crypt,
        FormatterKind::IterativeSalted,
    )
    .with_codec(CodecId::CryptTruncated)
    .with_salt_codec(CodecId::Raw)
    .with_salt_len(SHA_CRYPT_MAX_SALT_LEN)
    .with_work_factor(SHA_CRYPT_DEFAULT_ROUNDS, 1, SHA_CRYPT_MAX_ROUNDS)
    .with_implicit_work_factor(SHA_CRYPT_DEFAULT_ROUNDS)
    .with_transposition(Transposition::Sha256)
    .build()
}

pub fn sha512_crypt() -> Built {
    sha256_crypt()?
        .derive()
        .with_scheme("6")
        .with_algorithm(Algorithm::Sha512Crypt)
        .with_hash_len(SHA512_DIGEST_LEN)
        .with_transposition(Transposition::Sha512)
        .build()
}

// ─────────────────────────────────────────────────────────────────────────────
// Modular: bcrypt, NT-HASH, passlib PBKDF2, Argon2
// ─────────────────────────────────────────────────────────────────────────────

pub fn bcrypt(revision: &str) -> Built {
    HasherConfiguration::builder(revision, Family::Modular, Algorithm::BCrypt, FormatterKind::BCrypt)
        .with_codec(CodecId::BCrypt)
        .with_salt_len(BCRYPT_SALT_LEN)
        .with_hash_len(BCRYPT_HASH_LEN)
        .with_work_factor(BCRYPT_DEFAULT_COST, BCRYPT_MIN_COST, BCRYPT_MAX_COST)
        .build()
}

pub fn nt_hash() -> Built {
    HasherConfiguration::builder("3", Family::Modular, Algorithm::NtHash, FormatterKind::Saltless)
        .with_codec(CodecId::HexLower)
        .with_charset(Charset::Utf16Le)
        .build()
}

pub fn passlib_pbkdf2_sha1() -> Built {
    HasherConfiguration::builder(
        "pbkdf2",
        Family::Modular,
        Algorithm::Pbkdf2Sha1,
        FormatterKind::CountedSalted,
    )
    .with_codec(CodecId::AdaptedBase64)
    .with_salt_len(PASSLIB_PBKDF2_SALT_LEN)
    .with_hash_len(SHA1_DIGEST_LEN)
    .with_work_factor(PASSLIB_PBKDF2_ROUNDS, PBKDF2_MIN_ITER, PBKDF2_MAX_ITER)
    .build()
}

pub fn passlib_pbkdf2_sha256() -> Built {
    passlib_pbkdf2_sha1()?
        .derive()
        .with_scheme("pbkdf2-sha256")
        .with_algorithm(Algorithm::Pbkdf2Sha256)
        .with_hash_len(SHA256_DIGEST_LEN)
        .build()
}

pub fn passlib_pbkdf2_sha512() -> Built {
    passlib_pbkdf2_sha1()?
        .derive()
        .with_scheme("pbkdf2-sha512")
        .with_algorithm(Algorithm::Pbkdf2Sha512)
        .with_hash_len(SHA512_DIGEST_LEN)
        .build()
}

/// `variant` is `"d"`, `"i"` or `"id"`; the token is `argon2{variant}`.
pub fn argon2(variant: &str) -> Built {
    HasherConfiguration::builder(
        format!("argon2{variant}"),
        Family::Modular,
        Algorithm::Argon2,
        FormatterKind::Extended,
    )
    .with_codec(CodecId::Base64Unpadded)
    .with_salt_len(ARGON2_DEFAULT_SALT_LEN)
    .with_hash_len(ARGON2_DEFAULT_HASH_LEN)
    .with_variant(variant)
    .with_extended(ExtendedDefaults {
        version: ARGON2_VERSION_13,
        memory_cost: ARGON2_DEFAULT_MEMORY_KIB,
        time_cost: ARGON2_DEFAULT_TIME_COST,
        parallelism: ARGON2_DEFAULT_PARALLELISM,
        key_id: None,
        associated_data: None,
    })
    .build()
}

// ─────────────────────────────────────────────────────────────────────────────
// Brace (LDAP)
// ─────────────────────────────────────────────────────────────────────────────

pub fn brace_sha1() -> Built {
    HasherConfiguration::builder("SHA", Family::Brace, Algorithm::Sha1, FormatterKind::Plain)
        .with_codec(CodecId::Auto)
        .build()
}

/// Unsalted brace digest derived from `{SHA}`.
pub fn brace_digest(scheme: &str, algorithm: Algorithm) -> Built {
    let hash_len = algorithm.digest_len().ok_or_else(|| {
        CryptError::Configuration(format!("{algorithm:?} is not a fixed-length digest"))
    })?;
    brace_sha1()?
        .derive()
        .with_scheme(scheme)
        .with_algorithm(algorithm)
        .with_hash_len(hash_len)
        .build()
}

pub fn brace_ssha1() -> Built {
    HasherConfiguration::builder("SSHA", Family::Brace, Algorithm::Sha1, FormatterKind::SaltedDigest)
        .with_codec(CodecId::Auto)
        .with_salt_len(BRACE_DIGEST_SALT_LEN)
        .build()
}

/// Salted brace digest derived from `{SSHA}`.
pub fn brace_salted_digest(scheme: &str, algorithm: Algorithm) -> Built {
    let hash_len = algorithm.digest_len().ok_or_else(|| {
        CryptError::Configuration(format!("{algorithm:?} is not a fixed-length digest"))
    })?;
    brace_ssha1()?
        .derive()
        .with_scheme(scheme)
        .with_algorithm(algorithm)
        .with_hash_len(hash_len)
        .build()
}

pub fn brace_cleartext() -> Built {
    HasherConfiguration::builder(
        "CLEARTEXT",
        Family::Brace,
        Algorithm::Cleartext,
        FormatterKind::Plain,
    )
    .with_codec(CodecId::Raw)
    .build()
}

// ─────────────────────────────────────────────────────────────────────────────
// Colon
// ─────────────────────────────────────────────────────────────────────────────

pub fn colon_pbkdf2_sha1() -> Built {
    HasherConfiguration::builder(
        "PBKDF2",
        Family::Colon,
        Algorithm::Pbkdf2Sha1,
        FormatterKind::CountedSalted,
    )
    .with_codec(CodecId::Base64)
    .with_salt_len(COLON_PBKDF2_LEN)
    .with_hash_len(COLON_PBKDF2_LEN)
    .with_work_factor(COLON_PBKDF2_ITERATIONS, PBKDF2_MIN_ITER, PBKDF2_MAX_ITER)
    .build()
}

pub fn colon_pbkdf2(scheme: &str, algorithm: Algorithm, hash_len: usize) -> Built {
    colon_pbkdf2_sha1()?
        .derive()
        .with_scheme(scheme)
        .with_algorithm(algorithm)
        .with_hash_len(hash_len)
        .build()
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed length
// ─────────────────────────────────────────────────────────────────────────────

pub fn des_crypt() -> Built {
    HasherConfiguration::builder(
        "DES",
        Family::FixedLength,
        Algorithm::DesCrypt,
        FormatterKind::PrefixSalted,
    )
    .with_codec(CodecId::Crypt)
    .with_salt_codec(CodecId::Raw)
    .with_salt_len(DES_SALT_LEN)
    .with_hash_len(DES_HASH_LEN)
    .build()
}

pub fn bare_md5() -> Built {
    HasherConfiguration::builder("MD5", Family::FixedLength, Algorithm::Md5, FormatterKind::Plain)
        .with_codec(CodecId::HexLower)
        .with_hash_len(MD5_DIGEST_LEN)
        .build()
}
