//! Separator-free grammars: the whole payload is one encoded field.

use super::{decode_field, expect_hash_len, frame, unframe, wrong_parts, CryptFormatter};
use crate::codec::{Ambiguity, CodecId};
use crate::config::HasherConfiguration;
use crate::consts::CRYPT_SALT_ALPHABET;
use crate::error::CryptError;
use crate::parts::{Parts, PlainParts, SaltedParts};

/// `{SHA}hash`, bare hex MD5, `{CLEARTEXT}password`.
#[derive(Debug, Clone, Copy)]
pub struct PlainFormatter;

impl CryptFormatter for PlainFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let hash = decode_field(framed.codec, framed.payload, policy, "hash")?;
        expect_hash_len(&hash, config)?;
        Ok(Parts::Plain(PlainParts { hash }))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::Plain(parts) = parts else {
            return Err(wrong_parts("plain", config));
        };
        Ok(frame(config) + &config.codec().codec().encode(&parts.hash))
    }
}

/// `{SSHA}` + enc(hash ‖ salt). The salt is whatever follows the digest.
#[derive(Debug, Clone, Copy)]
pub struct SaltedDigestFormatter;

impl CryptFormatter for SaltedDigestFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let digest_len = config.algorithm().digest_len().ok_or_else(|| {
            CryptError::Configuration(format!("{}: digest length unknown", config.scheme()))
        })?;
        let mut payload = decode_field(framed.codec, framed.payload, policy, "payload")?;
        if payload.len() < digest_len {
            return Err(CryptError::Malformed(format!(
                "{}: payload of {} bytes is shorter than the {digest_len}-byte digest",
                config.scheme(),
                payload.len()
            )));
        }
        let salt = payload.split_off(digest_len);
        Ok(Parts::Salted(SaltedParts { salt, hash: payload }))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::Salted(parts) = parts else {
            return Err(wrong_parts("salted", config));
        };
        let mut payload = Vec::with_capacity(parts.hash.len() + parts.salt.len());
        payload.extend_from_slice(&parts.hash);
        payload.extend_from_slice(&parts.salt);
        Ok(frame(config) + &config.codec().codec().encode(&payload))
    }
}

/// Fixed-width salt text immediately followed by the encoded hash (DES-crypt).
#[derive(Debug, Clone, Copy)]
pub struct PrefixSaltedFormatter;

impl CryptFormatter for PrefixSaltedFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let salt_chars = framed.salt_codec.codec().encoded_len(config.salt_len());
        let split = framed
            .payload
            .char_indices()
            .nth(salt_chars)
            .map_or(framed.payload.len(), |(i, _)| i);
        let (salt, hash) = framed.payload.split_at(split);
        let salt = decode_field(framed.salt_codec, salt, policy, "salt")?;
        if framed.salt_codec == CodecId::Raw
            && !salt.iter().all(|b| CRYPT_SALT_ALPHABET.contains(b))
        {
            return Err(CryptError::Malformed(format!(
                "{}: salt has characters outside ./0-9A-Za-z",
                config.scheme()
            )));
        }
        let hash = decode_field(framed.codec, hash, policy, "hash")?;
        expect_hash_len(&hash, config)?;
        Ok(Parts::Salted(SaltedParts { salt, hash }))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::Salted(parts) = parts else {
            return Err(wrong_parts("salted", config));
        };
        if parts.salt.len() != config.salt_len() {
            return Err(CryptError::Malformed(format!(
                "{}: salt must be {} bytes",
                config.scheme(),
                config.salt_len()
            )));
        }
        Ok(frame(config)
            + &config.salt_codec().codec().encode(&parts.salt)
            + &config.codec().codec().encode(&parts.hash))
    }
}
