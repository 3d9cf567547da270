use super::CryptFormat;
use crate::config::{Family, HasherConfiguration};
use crate::registry::SchemeRegistry;
use std::sync::Arc;
use tracing::debug;

/// `$scheme$…`
#[derive(Debug, Clone)]
pub struct ModularFormat {
    registry: Arc<SchemeRegistry>,
}

impl ModularFormat {
    pub fn new(registry: Arc<SchemeRegistry>) -> Self {
        Self { registry }
    }

    pub(crate) fn resolve_in(registry: &SchemeRegistry, crypt: &str) -> Option<HasherConfiguration> {
        let (token, _) = crypt.strip_prefix('$')?.split_once('$')?;
        if token.is_empty() {
            return None;
        }
        let config = registry.lookup(Family::Modular, token)?;
        debug!(family = %Family::Modular, scheme = token, "resolved crypt scheme");
        Some(config)
    }
}

impl CryptFormat for ModularFormat {
    fn family(&self) -> Family {
        Family::Modular
    }

    fn resolve(&self, crypt: &str) -> Option<HasherConfiguration> {
        Self::resolve_in(&self.registry, crypt)
    }
}
