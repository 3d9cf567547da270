//! Separated grammars with a salt field.

use super::{
    decode_field, expect_hash_len, fields, frame, separator, unframe, wrong_parts, CryptFormatter,
};
use crate::codec::Ambiguity;
use crate::config::HasherConfiguration;
use crate::error::CryptError;
use crate::parts::{Parts, PlainParts, SaltedParts, WorkFactorSaltedParts};
use crate::utils::parse_decimal;

const ROUNDS_PREFIX: &str = "rounds=";

/// `$1$salt$hash`
#[derive(Debug, Clone, Copy)]
pub struct SaltedFormatter;

impl CryptFormatter for SaltedFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let f = fields(framed.payload, separator(config)?, 2, config)?;
        let salt = decode_field(framed.salt_codec, f[0], policy, "salt")?;
        let hash = decode_field(framed.codec, f[1], policy, "hash")?;
        expect_hash_len(&hash, config)?;
        Ok(Parts::Salted(SaltedParts { salt, hash }))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::Salted(parts) = parts else {
            return Err(wrong_parts("salted", config));
        };
        let sep = separator(config)?;
        Ok(format!(
            "{}{}{sep}{}",
            frame(config),
            config.salt_codec().codec().encode(&parts.salt),
            config.codec().codec().encode(&parts.hash)
        ))
    }
}

/// `$3$$hash`: the empty salt segment is always present.
#[derive(Debug, Clone, Copy)]
pub struct SaltlessFormatter;

impl CryptFormatter for SaltlessFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let f = fields(framed.payload, separator(config)?, 2, config)?;
        if !f[0].is_empty() {
            return Err(CryptError::Malformed(format!(
                "{}: salt segment must be empty",
                config.scheme()
            )));
        }
        let hash = decode_field(framed.codec, f[1], policy, "hash")?;
        expect_hash_len(&hash, config)?;
        Ok(Parts::Plain(PlainParts { hash }))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::Plain(parts) = parts else {
            return Err(wrong_parts("plain", config));
        };
        let sep = separator(config)?;
        Ok(format!(
            "{}{sep}{}",
            frame(config),
            config.codec().codec().encode(&parts.hash)
        ))
    }
}

/// `$5$rounds=N$salt$hash`; the rounds segment is omitted when it equals the
/// implicit work factor.
#[derive(Debug, Clone, Copy)]
pub struct IterativeSaltedFormatter;

impl CryptFormatter for IterativeSaltedFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let sep = separator(config)?;
        let (work_factor, rest) = match framed.payload.split_once(sep) {
            Some((first, rest)) if first.starts_with(ROUNDS_PREFIX) => {
                (parse_decimal(&first[ROUNDS_PREFIX.len()..], "rounds")?, rest)
            }
            _ => {
                let implicit = config.implicit_work_factor().ok_or_else(|| {
                    CryptError::Malformed(format!("{}: rounds segment missing", config.scheme()))
                })?;
                (implicit, framed.payload)
            }
        };
        let f = fields(rest, sep, 2, config)?;
        let salt = decode_field(framed.salt_codec, f[0], policy, "salt")?;
        let hash = decode_field(framed.codec, f[1], policy, "hash")?;
        expect_hash_len(&hash, config)?;
        Ok(Parts::WorkFactorSalted(WorkFactorSaltedParts {
            work_factor,
            salt,
            hash,
        }))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::WorkFactorSalted(parts) = parts else {
            return Err(wrong_parts("work-factor", config));
        };
        let sep = separator(config)?;
        let mut out = frame(config);
        if config.implicit_work_factor() != Some(parts.work_factor) {
            out.push_str(&format!("{ROUNDS_PREFIX}{}{sep}", parts.work_factor));
        }
        out.push_str(&config.salt_codec().codec().encode(&parts.salt));
        out.push(sep);
        out.push_str(&config.codec().codec().encode(&parts.hash));
        Ok(out)
    }
}

/// `$pbkdf2-sha256$N$salt$hash` and `PBKDF2:N:salt:hash`; the count is always
/// emitted.
#[derive(Debug, Clone, Copy)]
pub struct CountedSaltedFormatter;

impl CryptFormatter for CountedSaltedFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let f = fields(framed.payload, separator(config)?, 3, config)?;
        let work_factor = parse_decimal(f[0], "iterations")?;
        let salt = decode_field(framed.salt_codec, f[1], policy, "salt")?;
        let hash = decode_field(framed.codec, f[2], policy, "hash")?;
        expect_hash_len(&hash, config)?;
        Ok(Parts::WorkFactorSalted(WorkFactorSaltedParts {
            work_factor,
            salt,
            hash,
        }))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::WorkFactorSalted(parts) = parts else {
            return Err(wrong_parts("work-factor", config));
        };
        let sep = separator(config)?;
        Ok(format!(
            "{}{}{sep}{}{sep}{}",
            frame(config),
            parts.work_factor,
            config.salt_codec().codec().encode(&parts.salt),
            config.codec().codec().encode(&parts.hash)
        ))
    }
}
