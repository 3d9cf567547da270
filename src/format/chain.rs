use super::{BraceFormat, ColonFormat, CryptFormat, FixedLengthFormat, ModularFormat};
use crate::config::HasherConfiguration;
use crate::credentials::Credentials;
use crate::crypto::{BuiltinPrimitives, PrimitiveHash};
use crate::error::CryptError;
use crate::hasher::Hasher;
use crate::registry::SchemeRegistry;
use std::sync::Arc;
use tracing::debug;

/// Caller-ordered list of families, probed first-match-wins.
#[derive(Debug, Clone)]
pub struct FormatChain {
    formats: Vec<Arc<dyn CryptFormat>>,
    primitives: Arc<dyn PrimitiveHash>,
}

impl FormatChain {
    pub fn new(formats: Vec<Arc<dyn CryptFormat>>) -> Self {
        Self {
            formats,
            primitives: Arc::new(BuiltinPrimitives::new()),
        }
    }

    /// Brace, Modular, Colon, then Fixed-length (positional detection last).
    pub fn standard(registry: Arc<SchemeRegistry>) -> Self {
        let formats: Vec<Arc<dyn CryptFormat>> = vec![
            Arc::new(BraceFormat::new(Arc::clone(&registry))),
            Arc::new(ModularFormat::new(Arc::clone(&registry))),
            Arc::new(ColonFormat::new(Arc::clone(&registry))),
            Arc::new(FixedLengthFormat::new(registry)),
        ];
        Self::new(formats)
    }

    /// Primitives handed to every Hasher this chain builds.
    #[must_use]
    pub fn with_primitives(mut self, primitives: Arc<dyn PrimitiveHash>) -> Self {
        self.primitives = primitives;
        self
    }

    pub fn formats(&self) -> &[Arc<dyn CryptFormat>] {
        &self.formats
    }

    pub fn resolve(&self, crypt: &str) -> Option<HasherConfiguration> {
        self.formats.iter().find_map(|format| format.resolve(crypt))
    }

    /// A checking Hasher for `crypt`.
    ///
    /// # Errors
    /// `NoHasher` when no family recognises the string; anything the
    /// pre-parse of a memory-hard crypt raises.
    pub fn hasher_for(&self, crypt: &str) -> Result<Hasher, CryptError> {
        let config = self.resolve(crypt).ok_or_else(|| no_hasher(crypt))?;
        Hasher::for_crypt_with(config, crypt, Arc::clone(&self.primitives))
    }

    /// Resolves the scheme of `crypt` and checks `credentials` against it.
    pub fn check(&self, credentials: &Credentials, crypt: &str) -> Result<bool, CryptError> {
        self.hasher_for(crypt)?.check(credentials, crypt)
    }
}

/// Names the crypt by its framing only; the payload never reaches the error.
fn no_hasher(crypt: &str) -> CryptError {
    let label = match crypt.chars().next() {
        Some('$') => crypt
            .splitn(3, '$')
            .nth(1)
            .map_or_else(|| "$".to_string(), |token| format!("${token}$")),
        Some('{') => crypt
            .split_once('}')
            .map_or_else(|| "{".to_string(), |(token, _)| format!("{token}}}")),
        _ => match crypt.split_once(':') {
            Some((token, _)) => format!("{token}:"),
            None => format!("{}-character token", crypt.chars().count()),
        },
    };
    debug!(crypt = %label, "no registered format recognised crypt");
    CryptError::NoHasher(label)
}
