use super::CryptFormat;
use crate::config::{Family, HasherConfiguration};
use crate::registry::SchemeRegistry;
use std::sync::Arc;
use tracing::debug;

/// `scheme:field:…`
#[derive(Debug, Clone)]
pub struct ColonFormat {
    registry: Arc<SchemeRegistry>,
}

impl ColonFormat {
    pub fn new(registry: Arc<SchemeRegistry>) -> Self {
        Self { registry }
    }
}

impl CryptFormat for ColonFormat {
    fn family(&self) -> Family {
        Family::Colon
    }

    fn resolve(&self, crypt: &str) -> Option<HasherConfiguration> {
        let (token, _) = crypt.split_once(':')?;
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return None;
        }
        let config = self.registry.lookup(Family::Colon, token)?;
        debug!(family = %Family::Colon, scheme = token, "resolved crypt scheme");
        Some(config)
    }
}
