//! PHC-style memory-hard grammar:
//! `$argon2id$v=19$m=19456,t=2,p=1[,keyid=K][,data=D]$salt$hash`.

use super::{decode_field, frame, separator, unframe, wrong_parts, CryptFormatter};
use crate::codec::Ambiguity;
use crate::config::HasherConfiguration;
use crate::error::CryptError;
use crate::parts::{ExtendedParts, Parts};
use crate::utils::parse_decimal;

/// Memory-hard crypts. The hash length is not enforced here; it is learned
/// from the crypt when a checking hasher is built.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedFormatter;

fn malformed(config: &HasherConfiguration, msg: impl std::fmt::Display) -> CryptError {
    CryptError::Malformed(format!("{}: {msg}", config.scheme()))
}

impl CryptFormatter for ExtendedFormatter {
    fn parse_with(
        &self,
        crypt: &str,
        config: &HasherConfiguration,
        policy: Ambiguity,
    ) -> Result<Parts, CryptError> {
        let framed = unframe(crypt, config)?;
        let f: Vec<&str> = framed.payload.split(separator(config)?).collect();
        let (version, params, salt, hash) = match f.as_slice() {
            [v, params, salt, hash] => {
                let v = v
                    .strip_prefix("v=")
                    .ok_or_else(|| malformed(config, "version segment must start with v="))?;
                (Some(parse_decimal(v, "version")?), *params, *salt, *hash)
            }
            [params, salt, hash] => (None, *params, *salt, *hash),
            _ => return Err(malformed(config, format!("expected 3 or 4 fields, found {}", f.len()))),
        };

        let mut parts = ExtendedParts {
            version,
            ..ExtendedParts::default()
        };
        let (mut m, mut t, mut p) = (None, None, None);
        for param in params.split(',') {
            let (key, value) = param
                .split_once('=')
                .ok_or_else(|| malformed(config, format!("parameter {param:?} has no value")))?;
            let slot_taken = match key {
                "m" => m.replace(parse_decimal(value, "memory cost")?).is_some(),
                "t" => t.replace(parse_decimal(value, "time cost")?).is_some(),
                "p" => p.replace(parse_decimal(value, "parallelism")?).is_some(),
                "keyid" => parts.key_id.replace(value.to_string()).is_some(),
                "data" => parts
                    .associated_data
                    .replace(decode_field(framed.codec, value, policy, "data")?)
                    .is_some(),
                other => return Err(malformed(config, format!("unknown parameter {other:?}"))),
            };
            if slot_taken {
                return Err(malformed(config, format!("duplicate parameter {key:?}")));
            }
        }
        parts.memory_cost = m.ok_or_else(|| malformed(config, "m= missing"))?;
        parts.time_cost = t.ok_or_else(|| malformed(config, "t= missing"))?;
        parts.parallelism = p.ok_or_else(|| malformed(config, "p= missing"))?;
        parts.salt = decode_field(framed.salt_codec, salt, policy, "salt")?;
        parts.hash = decode_field(framed.codec, hash, policy, "hash")?;
        if parts.hash.is_empty() {
            return Err(malformed(config, "empty hash"));
        }
        Ok(Parts::Extended(parts))
    }

    fn format(&self, parts: &Parts, config: &HasherConfiguration) -> Result<String, CryptError> {
        let Parts::Extended(parts) = parts else {
            return Err(wrong_parts("extended", config));
        };
        let sep = separator(config)?;
        let codec = config.codec().codec();
        let mut out = frame(config);
        if let Some(version) = parts.version {
            out.push_str(&format!("v={version}{sep}"));
        }
        out.push_str(&format!(
            "m={},t={},p={}",
            parts.memory_cost, parts.time_cost, parts.parallelism
        ));
        if let Some(key_id) = &parts.key_id {
            out.push_str(&format!(",keyid={key_id}"));
        }
        if let Some(data) = &parts.associated_data {
            out.push_str(&format!(",data={}", codec.encode(data)));
        }
        out.push(sep);
        out.push_str(&config.salt_codec().codec().encode(&parts.salt));
        out.push(sep);
        out.push_str(&codec.encode(&parts.hash));
        Ok(out)
    }
}
