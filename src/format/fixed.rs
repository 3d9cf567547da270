use super::CryptFormat;
use crate::config::{Family, HasherConfiguration};
use crate::consts::{DES_CRYPT_LEN, MD5_HEX_LEN};
use crate::registry::SchemeRegistry;
use std::sync::Arc;
use tracing::debug;

/// Bare tokens told apart by length alone: 13 characters is DES-crypt, 32 is
/// hex MD5. Purely positional, so put it last in a chain.
#[derive(Debug, Clone)]
pub struct FixedLengthFormat {
    registry: Arc<SchemeRegistry>,
}

impl FixedLengthFormat {
    pub fn new(registry: Arc<SchemeRegistry>) -> Self {
        Self { registry }
    }

    pub(crate) fn resolve_in(registry: &SchemeRegistry, crypt: &str) -> Option<HasherConfiguration> {
        let scheme = match crypt.chars().count() {
            DES_CRYPT_LEN => "DES",
            MD5_HEX_LEN => "MD5",
            _ => return None,
        };
        let config = registry.lookup(Family::FixedLength, scheme)?;
        debug!(family = %Family::FixedLength, scheme, "resolved crypt scheme");
        Some(config)
    }
}

impl CryptFormat for FixedLengthFormat {
    fn family(&self) -> Family {
        Family::FixedLength
    }

    fn resolve(&self, crypt: &str) -> Option<HasherConfiguration> {
        Self::resolve_in(&self.registry, crypt)
    }
}
