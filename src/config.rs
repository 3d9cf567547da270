//! # Hasher Configuration
//!
//! An immutable description of one scheme: how its crypt string is framed,
//! which codec turns its salt and hash into text, which primitive produces the
//! hash and with which defaults. Configurations are plain values; they are
//! cloned out of the [`SchemeRegistry`](crate::SchemeRegistry) and shared
//! between threads behind an `Arc` by [`Hasher`](crate::Hasher).

use crate::builders::ConfigBuilder;
use crate::codec::CodecId;
use crate::consts::{
    ARGON2_MIN_SALT_LEN, BCRYPT_HASH_LEN, BCRYPT_MAX_COST, BCRYPT_MIN_COST, BCRYPT_SALT_LEN,
};
use crate::error::CryptError;
use crate::formatter::FormatterKind;
use crate::transpose::Transposition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Framing convention shared by a group of schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// `$scheme$…`
    Modular,
    /// `{SCHEME[.ENC]}payload`
    Brace,
    /// `scheme:field:…`
    Colon,
    /// Bare token recognised by its length.
    FixedLength,
}

impl Family {
    /// Field separator inside the payload, if the family has one.
    pub fn separator(self) -> Option<char> {
        match self {
            Family::Modular => Some('$'),
            Family::Colon => Some(':'),
            Family::Brace | Family::FixedLength => None,
        }
    }

    /// Scheme tokens of this family compare case-insensitively.
    pub fn case_insensitive(self) -> bool {
        matches!(self, Family::Brace)
    }

    /// Canonical registry key for `scheme`.
    pub fn normalize(self, scheme: &str) -> String {
        if self.case_insensitive() {
            scheme.to_ascii_uppercase()
        } else {
            scheme.to_string()
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Modular => "modular",
            Family::Brace => "brace",
            Family::Colon => "colon",
            Family::FixedLength => "fixed-length",
        })
    }
}

/// How the password string is turned into bytes before hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    #[default]
    Utf8,
    Utf16Le,
}

/// Closed set of primitive hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Md5Crypt,
    ApacheMd5Crypt,
    Sha256Crypt,
    Sha512Crypt,
    BCrypt,
    Pbkdf2Sha1,
    Pbkdf2Sha256,
    Pbkdf2Sha512,
    Argon2,
    Md5,
    Sha1,
    Sha256,
    Sha512,
    NtHash,
    DesCrypt,
    Cleartext,
}

impl Algorithm {
    /// Fixed output length of a digest-style algorithm.
    pub fn digest_len(self) -> Option<usize> {
        match self {
            Algorithm::Md5 | Algorithm::NtHash | Algorithm::Md5Crypt | Algorithm::ApacheMd5Crypt => {
                Some(16)
            }
            Algorithm::Sha1 => Some(20),
            Algorithm::Sha256 | Algorithm::Sha256Crypt => Some(32),
            Algorithm::Sha512 | Algorithm::Sha512Crypt => Some(64),
            Algorithm::BCrypt => Some(BCRYPT_HASH_LEN),
            Algorithm::DesCrypt => Some(8),
            Algorithm::Pbkdf2Sha1
            | Algorithm::Pbkdf2Sha256
            | Algorithm::Pbkdf2Sha512
            | Algorithm::Argon2
            | Algorithm::Cleartext => None,
        }
    }
}

/// Memory-hard defaults used when encrypting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedDefaults {
    pub version: u32,
    /// KiB.
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
    #[serde(default)]
    pub key_id: Option<String>,
    #[serde(default)]
    pub associated_data: Option<Vec<u8>>,
}

/// Immutable per-scheme configuration.
///
/// Build one with [`HasherConfiguration::builder`] or copy an existing one with
/// overrides via [`HasherConfiguration::derive`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasherConfiguration {
    pub(crate) scheme: String,
    pub(crate) family: Family,
    pub(crate) algorithm: Algorithm,
    pub(crate) formatter: FormatterKind,
    pub(crate) charset: Charset,
    pub(crate) codec: CodecId,
    pub(crate) salt_codec: CodecId,
    pub(crate) salt_len: usize,
    pub(crate) hash_len: Option<usize>,
    pub(crate) default_work_factor: Option<u32>,
    pub(crate) implicit_work_factor: Option<u32>,
    pub(crate) min_work_factor: u32,
    pub(crate) max_work_factor: u32,
    pub(crate) variant: Option<String>,
    pub(crate) transposition: Option<Transposition>,
    pub(crate) envelope: Option<String>,
    pub(crate) encoding_suffix: Option<String>,
    pub(crate) extended: Option<ExtendedDefaults>,
}

impl HasherConfiguration {
    /// Starts a configuration for `scheme` with empty defaults.
    #[must_use]
    pub fn builder(
        scheme: impl Into<String>,
        family: Family,
        algorithm: Algorithm,
        formatter: FormatterKind,
    ) -> ConfigBuilder {
        ConfigBuilder::new(scheme.into(), family, algorithm, formatter)
    }

    /// Copy with overrides.
    #[must_use]
    pub fn derive(&self) -> ConfigBuilder {
        ConfigBuilder::from_config(self.clone())
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn formatter(&self) -> FormatterKind {
        self.formatter
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Codec of the hash field.
    pub fn codec(&self) -> CodecId {
        self.codec
    }

    pub fn salt_codec(&self) -> CodecId {
        self.salt_codec
    }

    /// Salt length in bytes for newly encrypted crypts.
    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    /// `None` until learned from a crypt (memory-hard checking hashers).
    pub fn hash_len(&self) -> Option<usize> {
        self.hash_len
    }

    pub fn default_work_factor(&self) -> Option<u32> {
        self.default_work_factor
    }

    /// Work factor implied when the crypt omits it.
    pub fn implicit_work_factor(&self) -> Option<u32> {
        self.implicit_work_factor
    }

    pub fn work_factor_range(&self) -> (u32, u32) {
        (self.min_work_factor, self.max_work_factor)
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn transposition(&self) -> Option<Transposition> {
        self.transposition
    }

    /// Literal prefix (`{CRYPT}`) wrapped around the formatted crypt.
    pub fn envelope(&self) -> Option<&str> {
        self.envelope.as_deref()
    }

    /// Brace encoding suffix re-emitted by `format` (`HEX` in `{SSHA.HEX}`).
    pub fn encoding_suffix(&self) -> Option<&str> {
        self.encoding_suffix.as_deref()
    }

    pub fn extended(&self) -> Option<&ExtendedDefaults> {
        self.extended.as_ref()
    }

    /// Registry key of the scheme (upper-cased for the brace family).
    pub fn scheme_key(&self) -> String {
        self.family.normalize(&self.scheme)
    }

    /// Checks `work_factor` against the configured bounds.
    pub fn check_work_factor(&self, work_factor: u32) -> Result<(), CryptError> {
        if work_factor < self.min_work_factor || work_factor > self.max_work_factor {
            return Err(CryptError::Configuration(format!(
                "{}: work factor {work_factor} outside {}..={}",
                self.scheme, self.min_work_factor, self.max_work_factor
            )));
        }
        Ok(())
    }

    /// Construction-time validation. Called by the builder and by `Hasher::new`.
    pub fn validate(&self) -> Result<(), CryptError> {
        let bad = |msg: String| Err(CryptError::Configuration(format!("{}: {msg}", self.scheme)));

        if self.scheme.is_empty() {
            return Err(CryptError::Configuration("scheme must not be empty".into()));
        }
        if self
            .scheme
            .chars()
            .any(|c| matches!(c, '$' | ':' | '{' | '}' | '.' | ',') || c.is_whitespace())
        {
            return bad("scheme contains a framing character".into());
        }
        if !self.formatter.supports(self.family) {
            return bad(format!("{:?} formatter cannot frame the {} family", self.formatter, self.family));
        }

        if self.min_work_factor == 0 {
            return bad("work factor lower bound must be positive".into());
        }
        if self.min_work_factor > self.max_work_factor {
            return bad("empty work factor range".into());
        }
        if self.formatter.has_work_factor() {
            match self.default_work_factor {
                None => return bad("formatter requires a default work factor".into()),
                Some(wf) => self.check_work_factor(wf)?,
            }
        }
        if let Some(implicit) = self.implicit_work_factor {
            if !matches!(self.formatter, FormatterKind::IterativeSalted) {
                return bad("only the iterative formatter has an implicit work factor".into());
            }
            self.check_work_factor(implicit)?;
        }

        if let (Some(expected), Some(actual)) = (self.algorithm.digest_len(), self.hash_len) {
            if expected != actual {
                return bad(format!("{:?} produces {expected} bytes, not {actual}", self.algorithm));
            }
        }
        if matches!(self.hash_len, Some(0)) {
            return bad("hash length must be positive".into());
        }
        if let Some(t) = self.transposition {
            if self.hash_len != Some(t.block_size()) {
                return bad(format!("{t:?} transposition needs a {}-byte hash", t.block_size()));
            }
        }

        match self.formatter {
            FormatterKind::BCrypt => {
                if self.salt_len != BCRYPT_SALT_LEN || self.hash_len != Some(BCRYPT_HASH_LEN) {
                    return bad("bcrypt needs a 16-byte salt and a 23-byte hash".into());
                }
                if self.min_work_factor < BCRYPT_MIN_COST || self.max_work_factor > BCRYPT_MAX_COST {
                    return bad(format!("bcrypt cost must stay within {BCRYPT_MIN_COST}..={BCRYPT_MAX_COST}"));
                }
            }
            FormatterKind::Extended => {
                let Some(defaults) = &self.extended else {
                    return bad("memory-hard formatter requires extended defaults".into());
                };
                if defaults.memory_cost == 0 || defaults.time_cost == 0 || defaults.parallelism == 0 {
                    return bad("memory, time and parallelism must be positive".into());
                }
                if self.salt_len < ARGON2_MIN_SALT_LEN {
                    return bad(format!("salt must be at least {ARGON2_MIN_SALT_LEN} bytes"));
                }
            }
            FormatterKind::Plain | FormatterKind::Saltless => {
                if self.salt_len != 0 {
                    return bad("unsalted formatter with a salt length".into());
                }
            }
            FormatterKind::PrefixSalted | FormatterKind::Salted => {
                if self.salt_len == 0 && self.formatter == FormatterKind::PrefixSalted {
                    return bad("prefix-salted formatter needs a salt".into());
                }
            }
            FormatterKind::SaltedDigest => {
                if self.algorithm.digest_len().is_none() {
                    return bad("salted digest needs a fixed-length digest".into());
                }
            }
            FormatterKind::IterativeSalted | FormatterKind::CountedSalted => {}
        }

        if self.family == Family::FixedLength && self.hash_len.is_none() {
            return bad("fixed-length schemes need a known hash length".into());
        }

        if self.algorithm == Algorithm::Argon2 {
            match self.variant.as_deref() {
                Some("d" | "i" | "id") => {}
                other => return bad(format!("unknown argon2 variant {other:?}")),
            }
        }
        Ok(())
    }

    /// Exact crypt length for fixed-length schemes.
    pub(crate) fn fixed_len(&self) -> Option<usize> {
        let hash_len = self.hash_len?;
        Some(
            self.salt_codec.codec().encoded_len(self.salt_len)
                + self.codec.codec().encoded_len(hash_len),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha_crypt() -> HasherConfiguration {
        HasherConfiguration::builder(
            "5",
            Family::Modular,
            Algorithm::Sha256Crypt,
            FormatterKind::IterativeSalted,
        )
        .with_codec(CodecId::CryptTruncated)
        .with_salt_codec(CodecId::Raw)
        .with_salt_len(16)
        .with_hash_len(32)
        .with_work_factor(5000, 1, 999_999_999)
        .with_implicit_work_factor(5000)
        .with_transposition(Transposition::Sha256)
        .build()
        .unwrap()
    }

    #[test]
    fn derive_keeps_base_fields() {
        let base = sha_crypt();
        let derived = base.derive().with_default_work_factor(10_000).build().unwrap();
        assert_eq!(derived.default_work_factor(), Some(10_000));
        assert_eq!(derived.codec(), base.codec());
        assert_eq!(derived.transposition(), base.transposition());
        assert_eq!(base.default_work_factor(), Some(5000));
    }

    #[test]
    fn rejects_zero_work_factor() {
        let err = sha_crypt().derive().with_work_factor(0, 0, 10).build().unwrap_err();
        assert!(matches!(err, CryptError::Configuration(_)));
    }

    #[test]
    fn rejects_mismatched_transposition() {
        let err = sha_crypt()
            .derive()
            .with_transposition(Transposition::Sha512)
            .build()
            .unwrap_err();
        assert!(matches!(err, CryptError::Configuration(_)));
    }

    #[test]
    fn rejects_formatter_family_mismatch() {
        let err = HasherConfiguration::builder(
            "SSHA",
            Family::Modular,
            Algorithm::Sha1,
            FormatterKind::SaltedDigest,
        )
        .build()
        .unwrap_err();
        assert!(matches!(err, CryptError::Configuration(_)));
    }

    #[test]
    fn brace_keys_are_upper_case() {
        assert_eq!(Family::Brace.normalize("ssha"), "SSHA");
        assert_eq!(Family::Modular.normalize("2a"), "2a");
    }
}
