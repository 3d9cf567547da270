use super::{decode_field, expect_hash_len, frame, unframe, wrong_parts, CryptFormatter};
use crate::codec::Ambiguity;
use crate::config::HasherConfiguration;
use crate::error::CryptError;
use crate::parts::{Parts, WorkFactorSaltedParts};

const SALT_CHARS: usize = 22;
const HASH_CHARS: usize = 31;

/// `$2b$NN$` followed by a 22-character salt and a 31-character hash with no
/// separator between them.
#[derive(Debug, Clone, Copy)]
pub struct BCryptFormatter;

impl CryptFormatter for BCryptFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let (cost, rest) = framed.payload.split_once('$').ok_or_else(|| {
            CryptError::Malformed(format!("{}: cost segment missing", config.scheme()))
        })?;
        if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CryptError::Malformed(format!(
                "{}: cost must be two digits, found {cost:?}",
                config.scheme()
            )));
        }
        if rest.len() != SALT_CHARS + HASH_CHARS || !rest.is_ascii() {
            return Err(CryptError::Malformed(format!(
                "{}: salt and hash must be {} characters, found {}",
                config.scheme(),
                SALT_CHARS + HASH_CHARS,
                rest.len()
            )));
        }
        let work_factor = cost
            .parse::<u32>()
            .map_err(|_| CryptError::Malformed(format!("bcrypt cost {cost:?}")))?;
        let (salt, hash) = rest.split_at(SALT_CHARS);
        let salt = decode_field(framed.salt_codec, salt, policy, "salt")?;
        let hash = decode_field(framed.codec, hash, policy, "hash")?;
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
        if parts.work_factor > 99 {
            return Err(CryptError::Configuration(format!(
                "bcrypt cost {} does not fit two digits",
                parts.work_factor
            )));
        }
        Ok(format!(
            "{}{:02}${}{}",
            frame(config),
            parts.work_factor,
            config.salt_codec().codec().encode(&parts.salt),
            config.codec().codec().encode(&parts.hash)
        ))
    }
}
