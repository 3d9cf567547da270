use super::Hasher;
use crate::codec::{Ambiguity, CodecId};
use crate::consts::MAX_ENCRYPT_ATTEMPTS;
use crate::credentials::Credentials;
use crate::crypto::rng::{random_salt, random_salt_chars};
use crate::error::CryptError;
use crate::formatter::FormatterKind;
use crate::parts::{ExtendedParts, Parts, PlainParts, SaltedParts, WorkFactorSaltedParts};
use tracing::{debug, warn};
use zeroize::Zeroizing;

impl Hasher {
    /// Hashes the password under a fresh salt and this scheme's default
    /// parameters, returning the formatted crypt.
    ///
    /// When the hash or salt codec is auto-detecting, the crypt is re-parsed
    /// with ambiguity disallowed and regenerated under a new salt until it
    /// reads back unchanged, at most [`MAX_ENCRYPT_ATTEMPTS`] times.
    ///
    /// # Errors
    /// `AmbiguousEncoding` past the attempt cap; `Configuration` or
    /// `Primitive` from parameter checks and the primitive itself.
    pub fn encrypt(&self, credentials: &Credentials) -> Result<String, CryptError> {
        let password = credentials.password_bytes(self.config.charset())?;
        let self_check = self.config.codec().is_auto() || self.config.salt_codec().is_auto();

        for attempt in 1..=MAX_ENCRYPT_ATTEMPTS {
            let mut parts = Zeroizing::new(self.fresh_parts()?);
            let hash = self.compute(&password, &parts)?;
            parts.set_hash(hash.to_vec());
            let crypt = self.format(&parts)?;

            if !self_check || self.reads_back(&crypt, &parts) {
                return Ok(crypt);
            }
            debug!(
                scheme = self.config.scheme(),
                attempt,
                "ambiguous encoding, retrying with a fresh salt"
            );
        }

        warn!(
            scheme = self.config.scheme(),
            attempts = MAX_ENCRYPT_ATTEMPTS,
            "no unambiguous encoding found"
        );
        Err(CryptError::AmbiguousEncoding(MAX_ENCRYPT_ATTEMPTS))
    }

    fn reads_back(&self, crypt: &str, parts: &Parts) -> bool {
        self.parse_with(crypt, Ambiguity::Disallow)
            .is_ok_and(|reparsed| *Zeroizing::new(reparsed) == *parts)
    }

    fn fresh_salt(&self) -> Result<Vec<u8>, CryptError> {
        let len = self.config.salt_len();
        match self.config.salt_codec() {
            CodecId::Raw => random_salt_chars(len),
            _ => random_salt(len),
        }
    }

    fn default_work_factor(&self) -> Result<u32, CryptError> {
        self.config.default_work_factor().ok_or_else(|| {
            CryptError::Configuration(format!("{}: no default work factor", self.config.scheme()))
        })
    }

    /// Parts with a fresh salt and default parameters, hash still empty.
    fn fresh_parts(&self) -> Result<Parts, CryptError> {
        Ok(match self.config.formatter() {
            FormatterKind::Plain | FormatterKind::Saltless => Parts::Plain(PlainParts::default()),
            FormatterKind::Salted | FormatterKind::SaltedDigest | FormatterKind::PrefixSalted => {
                Parts::Salted(SaltedParts {
                    salt: self.fresh_salt()?,
                    hash: Vec::new(),
                })
            }
            FormatterKind::IterativeSalted
            | FormatterKind::CountedSalted
            | FormatterKind::BCrypt => Parts::WorkFactorSalted(WorkFactorSaltedParts {
                work_factor: self.default_work_factor()?,
                salt: self.fresh_salt()?,
                hash: Vec::new(),
            }),
            FormatterKind::Extended => {
                let defaults = self.config.extended().ok_or_else(|| {
                    CryptError::Configuration(format!(
                        "{}: no memory-hard defaults",
                        self.config.scheme()
                    ))
                })?;
                Parts::Extended(ExtendedParts {
                    version: Some(defaults.version),
                    memory_cost: defaults.memory_cost,
                    time_cost: defaults.time_cost,
                    parallelism: defaults.parallelism,
                    key_id: defaults.key_id.clone(),
                    associated_data: defaults.associated_data.clone(),
                    salt: self.fresh_salt()?,
                    hash: Vec::new(),
                })
            }
        })
    }
}
