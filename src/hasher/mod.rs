//! # Hasher
//!
//! Binds one immutable [`HasherConfiguration`] to a [`PrimitiveHash`]
//! implementation. `encrypt` and `check` live in their own files; this one
//! holds construction and the shared parse/format/compute plumbing.

mod check;
mod encrypt;

use crate::aliases::SecretBytes;
use crate::codec::Ambiguity;
use crate::config::HasherConfiguration;
use crate::consts::ARGON2_VERSION_10;
use crate::crypto::{BuiltinPrimitives, PrimitiveHash};
use crate::error::CryptError;
use crate::formatter::FormatterKind;
use crate::parts::Parts;
use std::sync::Arc;
use zeroize::Zeroizing;

/// Encrypts and checks crypt strings of one scheme.
///
/// Cheap to clone; clones share the configuration and primitives.
#[derive(Debug, Clone)]
pub struct Hasher {
    config: Arc<HasherConfiguration>,
    primitives: Arc<dyn PrimitiveHash>,
}

impl Hasher {
    /// Validates `config` and pairs it with the built-in primitives.
    pub fn new(config: HasherConfiguration) -> Result<Self, CryptError> {
        Self::with_primitives(config, Arc::new(BuiltinPrimitives::new()))
    }

    pub fn with_primitives(
        config: HasherConfiguration,
        primitives: Arc<dyn PrimitiveHash>,
    ) -> Result<Self, CryptError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            primitives,
        })
    }

    /// A checking Hasher for an existing crypt.
    ///
    /// Memory-hard output length is a parameter of the primitive call, so for
    /// those schemes the length is learned from `crypt` and fixed on a derived
    /// configuration. Other schemes are returned unchanged.
    pub fn for_crypt(config: HasherConfiguration, crypt: &str) -> Result<Self, CryptError> {
        Self::for_crypt_with(config, crypt, Arc::new(BuiltinPrimitives::new()))
    }

    pub fn for_crypt_with(
        config: HasherConfiguration,
        crypt: &str,
        primitives: Arc<dyn PrimitiveHash>,
    ) -> Result<Self, CryptError> {
        if config.formatter() != FormatterKind::Extended {
            return Self::with_primitives(config, primitives);
        }
        let probe = Self::with_primitives(config, primitives)?;
        let hash_len = probe.parse(crypt)?.hash().len();
        if probe.config.hash_len() == Some(hash_len) {
            return Ok(probe);
        }
        let config = probe.config.derive().with_hash_len(hash_len).build()?;
        Self::with_primitives(config, probe.primitives)
    }

    pub fn config(&self) -> &HasherConfiguration {
        &self.config
    }

    /// Parses `crypt` with this scheme's formatter, auto-detected fields
    /// resolving ambiguity to hex.
    pub fn parse(&self, crypt: &str) -> Result<Parts, CryptError> {
        self.parse_with(crypt, Ambiguity::Allow)
    }

    pub(crate) fn parse_with(&self, crypt: &str, policy: Ambiguity) -> Result<Parts, CryptError> {
        let inner = self.strip_envelope(crypt)?;
        self.config
            .formatter()
            .formatter()
            .parse_with(inner, &self.config, policy)
    }

    pub fn format(&self, parts: &Parts) -> Result<String, CryptError> {
        let crypt = self.config.formatter().formatter().format(parts, &self.config)?;
        Ok(match self.config.envelope() {
            Some(envelope) => format!("{envelope}{crypt}"),
            None => crypt,
        })
    }

    /// Whether `crypt` should be replaced by a fresh `encrypt`: it belongs to
    /// another scheme, or its work factor, memory-hard parameters or salt are
    /// weaker than this configuration's defaults.
    ///
    /// # Errors
    /// Malformed crypts of this scheme are still errors.
    pub fn needs_rehash(&self, crypt: &str) -> Result<bool, CryptError> {
        let parts = match self.parse(crypt) {
            Ok(parts) => parts,
            Err(CryptError::Configuration(_)) => return Ok(true),
            Err(e) => return Err(e),
        };
        if parts.salt().len() < self.config.salt_len() {
            return Ok(true);
        }
        if let Some(want) = self.config.hash_len() {
            if parts.hash().len() < want {
                return Ok(true);
            }
        }
        let weaker = match (&parts, self.config.extended()) {
            (Parts::Extended(have), Some(want)) => {
                have.version.unwrap_or(ARGON2_VERSION_10) != want.version
                    || have.memory_cost < want.memory_cost
                    || have.time_cost < want.time_cost
                    || have.parallelism < want.parallelism
            }
            _ => parts
                .work_factor()
                .zip(self.config.default_work_factor())
                .is_some_and(|(have, want)| have < want),
        };
        Ok(weaker)
    }

    fn strip_envelope<'a>(&self, crypt: &'a str) -> Result<&'a str, CryptError> {
        let Some(envelope) = self.config.envelope() else {
            return Ok(crypt);
        };
        match crypt.get(..envelope.len()) {
            Some(head) if head.eq_ignore_ascii_case(envelope) => Ok(&crypt[envelope.len()..]),
            _ => Err(CryptError::Configuration(format!(
                "{}: crypt is not wrapped in {envelope}",
                self.config.scheme()
            ))),
        }
    }

    /// Primitive output, transposed into crypt(3) byte order where configured.
    fn compute(&self, password: &[u8], parts: &Parts) -> Result<SecretBytes, CryptError> {
        let raw = self.primitives.hash(password, parts, &self.config)?;
        match self.config.transposition() {
            Some(transposition) => Ok(Zeroizing::new(transposition.apply(&raw)?)),
            None => Ok(raw),
        }
    }
}
