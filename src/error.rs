//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, CryptError>`](CryptError).
//!
//! A password that simply does not match is **not** an error: `check` returns
//! `Ok(false)` for that case alone.

use thiserror::Error;

/// The error type for all crypt string operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptError {
    /// The crypt string belongs to the right family and scheme but its payload
    /// violates the formatter's grammar.
    ///
    /// Typical causes:
    /// - wrong number of fields
    /// - undecodable salt or hash
    /// - non-decimal work factor
    /// - decoded salt/hash of the wrong length
    ///
    /// This is never folded into a "password did not match" result, so data
    /// corruption is not mistaken for an authentication failure.
    #[error("Malformed crypt: {0}")]
    Malformed(String),

    /// Configuration problem detected at construction time or before hashing.
    ///
    /// - the crypt's scheme token differs from the Hasher's own scheme
    /// - work factor outside the allowed range
    /// - salt or hash length not accepted by the algorithm
    /// - an Argon2 key id that the resolver does not know
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Byte/text codec failure: invalid character, bad padding, non-canonical
    /// trailing bits, or text that is ambiguous under auto-detection.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The underlying cryptographic primitive (or the OS random source) failed.
    ///
    /// Never retried; it signals an environment defect.
    #[error("Primitive error: {0}")]
    Primitive(String),

    /// No registered format/scheme recognised the crypt string.
    #[error("No hasher available for crypt: {0}")]
    NoHasher(String),

    /// Encrypt could not produce an unambiguous encoding within the attempt cap.
    #[error("Unambiguous encoding not reached after {0} attempts")]
    AmbiguousEncoding(u32),
}

impl CryptError {
    /// Re-labels a codec failure as a malformed crypt field.
    pub(crate) fn malformed_field(field: &str, err: CryptError) -> Self {
        match err {
            CryptError::Encoding(msg) => CryptError::Malformed(format!("{field}: {msg}")),
            other => other,
        }
    }
}
