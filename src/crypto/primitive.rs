//! # Primitive Hash Dispatch
//!
//! [`PrimitiveHash`] is the seam between crypt-string handling and the actual
//! cryptography: given password bytes, parsed [`Parts`] and the configuration
//! it returns the raw hash bytes, before any transposition.

use crate::aliases::SecretBytes;
use crate::config::{Algorithm, HasherConfiguration};
use crate::crypto::kdf::argon2::derive_argon2;
use crate::crypto::kdf::bcrypt::derive_bcrypt;
use crate::crypto::kdf::pbkdf2::{derive_pbkdf2, Pbkdf2Prf};
use crate::crypto::{des_crypt, digest, md5_crypt, sha_crypt};
use crate::error::CryptError;
use crate::parts::Parts;
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroizing;

/// Computes raw hash bytes for one configured algorithm.
pub trait PrimitiveHash: Send + Sync + fmt::Debug {
    fn hash(
        &self,
        password: &[u8],
        parts: &Parts,
        config: &HasherConfiguration,
    ) -> Result<SecretBytes, CryptError>;
}

/// Looks up secret keys referenced by `keyid=` in memory-hard crypts.
pub trait KeyResolver: Send + Sync + fmt::Debug {
    /// `None` when the id is unknown.
    fn resolve(&self, key_id: &str) -> Option<SecretBytes>;
}

/// The primitives shipped with this crate.
#[derive(Debug, Clone, Default)]
pub struct BuiltinPrimitives {
    keys: Option<Arc<dyn KeyResolver>>,
}

impl BuiltinPrimitives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables `keyid=` support for Argon2 crypts.
    #[must_use]
    pub fn with_key_resolver(mut self, keys: Arc<dyn KeyResolver>) -> Self {
        self.keys = Some(keys);
        self
    }

    fn secret_for(&self, key_id: &str) -> Result<SecretBytes, CryptError> {
        self.keys
            .as_ref()
            .and_then(|keys| keys.resolve(key_id))
            .ok_or_else(|| CryptError::Configuration(format!("unresolved key id {key_id:?}")))
    }
}

fn work_factor(parts: &Parts, config: &HasherConfiguration) -> Result<u32, CryptError> {
    parts.work_factor().ok_or_else(|| {
        CryptError::Configuration(format!("{}: parts carry no work factor", config.scheme()))
    })
}

/// Requested output length: the configured one, else the length of the
/// parsed hash.
fn output_len(parts: &Parts, config: &HasherConfiguration) -> Result<usize, CryptError> {
    match config.hash_len() {
        Some(len) => Ok(len),
        None if !parts.hash().is_empty() => Ok(parts.hash().len()),
        None => Err(CryptError::Configuration(format!(
            "{}: hash length unknown",
            config.scheme()
        ))),
    }
}

impl PrimitiveHash for BuiltinPrimitives {
    fn hash(
        &self,
        password: &[u8],
        parts: &Parts,
        config: &HasherConfiguration,
    ) -> Result<SecretBytes, CryptError> {
        let salt = parts.salt();
        let pbkdf2 = |prf| {
            derive_pbkdf2(
                prf,
                password,
                salt,
                work_factor(parts, config)?,
                output_len(parts, config)?,
            )
        };

        match config.algorithm() {
            Algorithm::Md5Crypt => Ok(md5_crypt::md5_crypt(password, salt, md5_crypt::MD5_MAGIC)),
            Algorithm::ApacheMd5Crypt => {
                Ok(md5_crypt::md5_crypt(password, salt, md5_crypt::APR1_MAGIC))
            }
            Algorithm::Sha256Crypt => Ok(sha_crypt::sha256_crypt(
                password,
                salt,
                work_factor(parts, config)?,
            )),
            Algorithm::Sha512Crypt => Ok(sha_crypt::sha512_crypt(
                password,
                salt,
                work_factor(parts, config)?,
            )),
            Algorithm::BCrypt => derive_bcrypt(password, salt, work_factor(parts, config)?),
            Algorithm::Pbkdf2Sha1 => pbkdf2(Pbkdf2Prf::Sha1),
            Algorithm::Pbkdf2Sha256 => pbkdf2(Pbkdf2Prf::Sha256),
            Algorithm::Pbkdf2Sha512 => pbkdf2(Pbkdf2Prf::Sha512),
            Algorithm::Argon2 => {
                let extended = parts.as_extended().ok_or_else(|| {
                    CryptError::Configuration(format!(
                        "{}: argon2 needs memory-hard parts",
                        config.scheme()
                    ))
                })?;
                let variant = config.variant().unwrap_or("id");
                let secret = extended
                    .key_id
                    .as_deref()
                    .map(|id| self.secret_for(id))
                    .transpose()?;
                derive_argon2(
                    password,
                    extended,
                    variant,
                    output_len(parts, config)?,
                    secret.as_deref().map(Vec::as_slice),
                )
            }
            Algorithm::Md5 => Ok(digest::md5(password, salt)),
            Algorithm::Sha1 => Ok(digest::sha1(password, salt)),
            Algorithm::Sha256 => Ok(digest::sha256(password, salt)),
            Algorithm::Sha512 => Ok(digest::sha512(password, salt)),
            Algorithm::NtHash => Ok(digest::nt_hash(password)),
            Algorithm::DesCrypt => des_crypt::des_crypt(password, salt),
            Algorithm::Cleartext => Ok(Zeroizing::new(password.to_vec())),
        }
    }
}
