//! # Crypt Formatters
//!
//! A formatter owns the grammar of a crypt string's payload: how many fields,
//! in which order, which of them are decimal and which go through a codec.
//! Family framing (`$scheme$`, `{SCHEME.ENC}`, `scheme:`) is shared and lives
//! in this module; it is also where a crypt of a different scheme is refused.
//!
//! Formatters are stateless strategy objects selected by [`FormatterKind`].

mod bcrypt;
mod digest;
mod extended;
mod salted;

use crate::codec::{Ambiguity, CodecId};
use crate::config::{Family, HasherConfiguration};
use crate::error::CryptError;
use crate::parts::Parts;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use self::bcrypt::BCryptFormatter;
pub use self::digest::{PlainFormatter, PrefixSaltedFormatter, SaltedDigestFormatter};
pub use self::extended::ExtendedFormatter;
pub use self::salted::{
    CountedSaltedFormatter, IterativeSaltedFormatter, SaltedFormatter, SaltlessFormatter,
};

/// Parses a crypt string into [`Parts`] and formats it back.
///
/// For canonical strings `format(parse(s)) == s`; for parts built directly
/// `parse(format(p)) == p`.
pub trait CryptFormatter: Send + Sync + fmt::Debug {
    /// Parses `crypt` (without any `{CRYPT}` envelope), decoding auto-codec
    /// fields under `policy`.
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError>;

    fn parse(&self, crypt: &str, config: &HasherConfiguration) -> Result<Parts, CryptError> {
        self.parse_with(crypt, config, Ambiguity::Allow)
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError>;
}

/// Closed set of payload grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatterKind {
    /// `SEP hash`
    Plain,
    /// `SEP scheme SEP salt SEP hash`
    Salted,
    /// `SEP scheme SEP [rounds=N SEP] salt SEP hash`
    IterativeSalted,
    /// `SEP scheme SEP N SEP salt SEP hash`
    CountedSalted,
    /// `SEP scheme SEP SEP hash`
    Saltless,
    /// `SEP id SEP v=V SEP m=M,t=T,p=P[,keyid=K][,data=D] SEP salt SEP hash`
    Extended,
    /// `$rev$NN$` + 22-char salt + 31-char hash
    BCrypt,
    /// `{SCHEME}` + enc(hash ‖ salt)
    SaltedDigest,
    /// salt + enc(hash), no separators
    PrefixSalted,
}

static PLAIN: PlainFormatter = PlainFormatter;
static SALTED: SaltedFormatter = SaltedFormatter;
static ITERATIVE_SALTED: IterativeSaltedFormatter = IterativeSaltedFormatter;
static COUNTED_SALTED: CountedSaltedFormatter = CountedSaltedFormatter;
static SALTLESS: SaltlessFormatter = SaltlessFormatter;
static EXTENDED: ExtendedFormatter = ExtendedFormatter;
static BCRYPT: BCryptFormatter = BCryptFormatter;
static SALTED_DIGEST: SaltedDigestFormatter = SaltedDigestFormatter;
static PREFIX_SALTED: PrefixSaltedFormatter = PrefixSaltedFormatter;

impl FormatterKind {
    pub fn formatter(self) -> &'static dyn CryptFormatter {
        match self {
            FormatterKind::Plain => &PLAIN,
            FormatterKind::Salted => &SALTED,
            FormatterKind::IterativeSalted => &ITERATIVE_SALTED,
            FormatterKind::CountedSalted => &COUNTED_SALTED,
            FormatterKind::Saltless => &SALTLESS,
            FormatterKind::Extended => &EXTENDED,
            FormatterKind::BCrypt => &BCRYPT,
            FormatterKind::SaltedDigest => &SALTED_DIGEST,
            FormatterKind::PrefixSalted => &PREFIX_SALTED,
        }
    }

    /// Whether this grammar can be framed by `family`.
    pub fn supports(self, family: Family) -> bool {
        match self {
            FormatterKind::Plain => true,
            FormatterKind::Salted
            | FormatterKind::IterativeSalted
            | FormatterKind::CountedSalted
            | FormatterKind::Saltless
            | FormatterKind::Extended => family.separator().is_some(),
            FormatterKind::BCrypt => family == Family::Modular,
            FormatterKind::SaltedDigest => family == Family::Brace,
            FormatterKind::PrefixSalted => family == Family::FixedLength,
        }
    }

    /// Whether the grammar carries a rounds/iterations/cost field.
    pub fn has_work_factor(self) -> bool {
        matches!(
            self,
            FormatterKind::IterativeSalted | FormatterKind::CountedSalted | FormatterKind::BCrypt
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Family framing
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of a crypt with the family framing removed, plus the codecs in
/// effect (a brace encoding suffix overrides the configured ones).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Framed<'a> {
    pub payload: &'a str,
    pub codec: CodecId,
    pub salt_codec: CodecId,
}

fn scheme_mismatch(found: &str, config: &HasherConfiguration) -> CryptError {
    CryptError::Configuration(format!(
        "crypt scheme {found:?} does not match hasher scheme {:?}",
        config.scheme()
    ))
}

/// Strips the family framing and refuses crypts of another scheme.
pub(crate) fn unframe<'a>(
    crypt: &'a str,
    config: &HasherConfiguration,
) -> Result<Framed<'a>, CryptError> {
    let mut framed = Framed {
        payload: crypt,
        codec: config.codec(),
        salt_codec: config.salt_codec(),
    };
    match config.family() {
        Family::Modular | Family::Colon => {
            let (lead, sep) = match config.family() {
                Family::Modular => ("$", '$'),
                _ => ("", ':'),
            };
            let rest = crypt
                .strip_prefix(lead)
                .ok_or_else(|| scheme_mismatch(crypt, config))?;
            let (token, payload) = rest.split_once(sep).unwrap_or((rest, ""));
            if token != config.scheme() {
                return Err(scheme_mismatch(token, config));
            }
            if !rest.contains(sep) {
                return Err(CryptError::Malformed(format!(
                    "{}: no fields after the scheme",
                    config.scheme()
                )));
            }
            framed.payload = payload;
        }
        Family::Brace => {
            let (token, payload) = crypt
                .strip_prefix('{')
                .and_then(|rest| rest.split_once('}'))
                .ok_or_else(|| scheme_mismatch(crypt, config))?;
            let (scheme, suffix) = match token.split_once('.') {
                Some((scheme, suffix)) => (scheme, Some(suffix)),
                None => (token, None),
            };
            if !scheme.eq_ignore_ascii_case(config.scheme()) {
                return Err(scheme_mismatch(scheme, config));
            }
            if let Some(suffix) = suffix {
                let codec = CodecId::from_suffix(suffix).ok_or_else(|| {
                    CryptError::Configuration(format!("unknown encoding suffix {suffix:?}"))
                })?;
                framed.codec = codec;
                framed.salt_codec = codec;
            }
            framed.payload = payload;
        }
        Family::FixedLength => {
            let expected = config.fixed_len().ok_or_else(|| {
                CryptError::Configuration(format!("{}: unknown crypt length", config.scheme()))
            })?;
            let found = crypt.chars().count();
            if found != expected {
                return Err(CryptError::Configuration(format!(
                    "{}-character crypt cannot belong to the {expected}-character {} scheme",
                    found,
                    config.scheme()
                )));
            }
        }
    }
    Ok(framed)
}

/// Family framing up to the first payload field.
pub(crate) fn frame(config: &HasherConfiguration) -> String {
    match config.family() {
        Family::Modular => format!("${}$", config.scheme()),
        Family::Colon => format!("{}:", config.scheme()),
        Family::Brace => match config.encoding_suffix() {
            Some(suffix) => format!("{{{}.{suffix}}}", config.scheme()),
            None => format!("{{{}}}", config.scheme()),
        },
        Family::FixedLength => String::new(),
    }
}

pub(crate) fn separator(config: &HasherConfiguration) -> Result<char, CryptError> {
    config.family().separator().ok_or_else(|| {
        CryptError::Configuration(format!("{} family has no field separator", config.family()))
    })
}

/// Splits `payload` into exactly `n` fields.
pub(crate) fn fields<'a>(
    payload: &'a str,
    sep: char,
    n: usize,
    config: &HasherConfiguration,
) -> Result<Vec<&'a str>, CryptError> {
    let fields: Vec<&str> = payload.split(sep).collect();
    if fields.len() != n {
        return Err(CryptError::Malformed(format!(
            "{}: expected {n} fields, found {}",
            config.scheme(),
            fields.len()
        )));
    }
    Ok(fields)
}

pub(crate) fn decode_field(
    codec: CodecId,
    text: &str,
    policy: Ambiguity,
    field: &str,
) -> Result<Vec<u8>, CryptError> {
    codec
        .decode_with(text, policy)
        .map_err(|e| CryptError::malformed_field(field, e))
}

/// Enforces the configured hash length on a decoded hash.
pub(crate) fn expect_hash_len(hash: &[u8], config: &HasherConfiguration) -> Result<(), CryptError> {
    match config.hash_len() {
        Some(n) if n != hash.len() => Err(CryptError::Malformed(format!(
            "{}: hash is {} bytes, expected {n}",
            config.scheme(),
            hash.len()
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn wrong_parts(kind: &str, config: &HasherConfiguration) -> CryptError {
    CryptError::Malformed(format!("{}: formatter expects {kind} parts", config.scheme()))
}
