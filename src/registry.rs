//! # Scheme Registry
//!
//! Explicitly constructed map from `(family, scheme token)` to configuration.
//! Built once at startup, optionally adjusted from deployment overrides, then
//! shared read-only behind an `Arc` by every [`CryptFormat`](crate::CryptFormat).

use crate::codec::CodecId;
use crate::config::{Algorithm, Family, HasherConfiguration};
use crate::consts::{SHA256_DIGEST_LEN, SHA512_DIGEST_LEN};
use crate::error::CryptError;
use crate::schemes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Registered scheme configurations.
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<(Family, String), Arc<HasherConfiguration>>,
}

impl SchemeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every scheme this crate ships.
    pub fn with_builtin_schemes() -> Result<Self, CryptError> {
        use Family::*;

        let mut registry = Self::new();
        registry.register(Modular, "1", schemes::md5_crypt)?;
        registry.register(Modular, "apr1", schemes::apache_md5_crypt)?;
        registry.register(Modular, "5", schemes::sha256_crypt)?;
        registry.register(Modular, "6", schemes::sha512_crypt)?;
        for revision in ["2a", "2b", "2y"] {
            registry.register(Modular, revision, || schemes::bcrypt(revision))?;
        }
        registry.register(Modular, "3", schemes::nt_hash)?;
        registry.register(Modular, "pbkdf2", schemes::passlib_pbkdf2_sha1)?;
        registry.register(Modular, "pbkdf2-sha256", schemes::passlib_pbkdf2_sha256)?;
        registry.register(Modular, "pbkdf2-sha512", schemes::passlib_pbkdf2_sha512)?;
        for variant in ["d", "i", "id"] {
            registry.register(Modular, &format!("argon2{variant}"), || {
                schemes::argon2(variant)
            })?;
        }

        registry.register(Brace, "SHA", schemes::brace_sha1)?;
        for (scheme, algorithm) in [
            ("SHA256", Algorithm::Sha256),
            ("SHA512", Algorithm::Sha512),
            ("MD5", Algorithm::Md5),
        ] {
            registry.register(Brace, scheme, || schemes::brace_digest(scheme, algorithm))?;
        }
        registry.register(Brace, "SSHA", schemes::brace_ssha1)?;
        for (scheme, algorithm) in [
            ("SSHA256", Algorithm::Sha256),
            ("SSHA512", Algorithm::Sha512),
            ("SMD5", Algorithm::Md5),
        ] {
            registry.register(Brace, scheme, || {
                schemes::brace_salted_digest(scheme, algorithm)
            })?;
        }
        registry.register(Brace, "CLEARTEXT", schemes::brace_cleartext)?;

        registry.register(Colon, "PBKDF2", schemes::colon_pbkdf2_sha1)?;
        registry.register(Colon, "PBKDF2-SHA256", || {
            schemes::colon_pbkdf2("PBKDF2-SHA256", Algorithm::Pbkdf2Sha256, SHA256_DIGEST_LEN)
        })?;
        registry.register(Colon, "PBKDF2-SHA512", || {
            schemes::colon_pbkdf2("PBKDF2-SHA512", Algorithm::Pbkdf2Sha512, SHA512_DIGEST_LEN)
        })?;

        registry.register(FixedLength, "DES", schemes::des_crypt)?;
        registry.register(FixedLength, "MD5", schemes::bare_md5)?;
        Ok(registry)
    }

    /// Registers (or replaces) the scheme `scheme` of `family`.
    ///
    /// The factory runs once, here; its configuration must validate and must
    /// name the same family and scheme it is registered under.
    pub fn register<F>(&mut self, family: Family, scheme: &str, factory: F) -> Result<(), CryptError>
    where
        F: FnOnce() -> Result<HasherConfiguration, CryptError>,
    {
        let config = factory()?;
        config.validate()?;
        let key = family.normalize(scheme);
        if config.family() != family || config.scheme_key() != key {
            return Err(CryptError::Configuration(format!(
                "factory for {family} scheme {scheme:?} built {} scheme {:?}",
                config.family(),
                config.scheme()
            )));
        }
        if self.schemes.insert((family, key), Arc::new(config)).is_some() {
            debug!(%family, scheme, "replaced registered scheme");
        }
        Ok(())
    }

    /// Configuration registered for `scheme`, if any.
    pub fn lookup(&self, family: Family, scheme: &str) -> Option<HasherConfiguration> {
        let found = self.schemes.get(&(family, family.normalize(scheme)));
        if found.is_none() {
            trace!(%family, scheme, "no registered scheme");
        }
        found.map(|config| config.as_ref().clone())
    }

    pub fn contains(&self, family: Family, scheme: &str) -> bool {
        self.schemes.contains_key(&(family, family.normalize(scheme)))
    }

    /// Registered tokens of `family`, sorted.
    pub fn schemes(&self, family: Family) -> Vec<&str> {
        let mut tokens: Vec<&str> = self
            .schemes
            .keys()
            .filter(|(f, _)| *f == family)
            .map(|(_, scheme)| scheme.as_str())
            .collect();
        tokens.sort_unstable();
        tokens
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Applies deployment overrides. Either every override applies or none does.
    pub fn apply_overrides(&mut self, overrides: &RegistryOverrides) -> Result<(), CryptError> {
        let mut staged = Vec::with_capacity(overrides.schemes.len());
        for item in &overrides.schemes {
            let base = self.lookup(item.family, &item.scheme).ok_or_else(|| {
                CryptError::Configuration(format!(
                    "override for unregistered {} scheme {:?}",
                    item.family, item.scheme
                ))
            })?;
            staged.push(item.apply(&base)?);
        }
        for config in staged {
            debug!(family = %config.family(), scheme = config.scheme(), "applied scheme override");
            self.schemes
                .insert((config.family(), config.scheme_key()), Arc::new(config));
        }
        Ok(())
    }
}

/// Deployment-time adjustments to registered schemes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryOverrides {
    #[serde(default)]
    pub schemes: Vec<SchemeOverride>,
}

/// Adjustments to one scheme. Absent fields keep the registered value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeOverride {
    pub family: Family,
    pub scheme: String,
    #[serde(default)]
    pub default_work_factor: Option<u32>,
    #[serde(default)]
    pub salt_len: Option<usize>,
    #[serde(default)]
    pub codec: Option<CodecId>,
    #[serde(default)]
    pub memory_cost: Option<u32>,
    #[serde(default)]
    pub time_cost: Option<u32>,
    #[serde(default)]
    pub parallelism: Option<u32>,
}

impl SchemeOverride {
    fn apply(&self, base: &HasherConfiguration) -> Result<HasherConfiguration, CryptError> {
        let mut builder = base.derive();
        if let Some(work_factor) = self.default_work_factor {
            builder = builder.with_default_work_factor(work_factor);
        }
        if let Some(salt_len) = self.salt_len {
            builder = builder.with_salt_len(salt_len);
        }
        if let Some(codec) = self.codec {
            builder = builder.with_codec(codec).with_salt_codec(codec);
        }
        if self.memory_cost.is_some() || self.time_cost.is_some() || self.parallelism.is_some() {
            let mut extended = base.extended().cloned().ok_or_else(|| {
                CryptError::Configuration(format!(
                    "{} has no memory-hard parameters to override",
                    base.scheme()
                ))
            })?;
            extended.memory_cost = self.memory_cost.unwrap_or(extended.memory_cost);
            extended.time_cost = self.time_cost.unwrap_or(extended.time_cost);
            extended.parallelism = self.parallelism.unwrap_or(extended.parallelism);
            builder = builder.with_extended(extended);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogue() {
        let registry = SchemeRegistry::with_builtin_schemes().unwrap();
        assert!(registry.contains(Family::Modular, "2y"));
        assert!(registry.contains(Family::Brace, "ssha"));
        assert!(!registry.contains(Family::Modular, "2A"));
        assert_eq!(registry.schemes(Family::FixedLength), vec!["DES", "MD5"]);
    }

    #[test]
    fn register_rejects_mismatched_factory() {
        let mut registry = SchemeRegistry::new();
        let err = registry
            .register(Family::Modular, "md5", schemes::md5_crypt)
            .unwrap_err();
        assert!(matches!(err, CryptError::Configuration(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn overrides_are_all_or_nothing() {
        let mut registry = SchemeRegistry::with_builtin_schemes().unwrap();
        let overrides = RegistryOverrides {
            schemes: vec![
                SchemeOverride {
                    family: Family::Modular,
                    scheme: "6".into(),
                    default_work_factor: Some(20_000),
                    salt_len: None,
                    codec: None,
                    memory_cost: None,
                    time_cost: None,
                    parallelism: None,
                },
                SchemeOverride {
                    family: Family::Modular,
                    scheme: "6".into(),
                    default_work_factor: None,
                    salt_len: None,
                    codec: None,
                    memory_cost: Some(1024),
                    time_cost: None,
                    parallelism: None,
                },
            ],
        };
        assert!(registry.apply_overrides(&overrides).is_err());
        let sha512 = registry.lookup(Family::Modular, "6").unwrap();
        assert_eq!(sha512.default_work_factor(), Some(5000));
    }
}
