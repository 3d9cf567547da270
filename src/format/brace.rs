use super::{CryptFormat, FixedLengthFormat, ModularFormat};
use crate::codec::CodecId;
use crate::config::{Family, HasherConfiguration};
use crate::registry::SchemeRegistry;
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix of the reserved pseudo-scheme wrapping another crypt.
pub const CRYPT_ENVELOPE: &str = "{CRYPT}";

/// `{SCHEME[.ENC]}payload` and the `{CRYPT}` envelope.
///
/// `{CRYPT}` delegates the rest of the string one level down to the modular
/// family (or, for a bare 13/32-character token, the fixed-length family);
/// the envelope itself is recorded on the returned configuration.
#[derive(Debug, Clone)]
pub struct BraceFormat {
    registry: Arc<SchemeRegistry>,
}

impl BraceFormat {
    pub fn new(registry: Arc<SchemeRegistry>) -> Self {
        Self { registry }
    }

    fn resolve_envelope(&self, inner: &str) -> Option<HasherConfiguration> {
        let config = if inner.starts_with('$') {
            ModularFormat::resolve_in(&self.registry, inner)
        } else {
            FixedLengthFormat::resolve_in(&self.registry, inner)
        }?;
        config
            .derive()
            .with_envelope(CRYPT_ENVELOPE)
            .build()
            .map_err(|e| warn!(scheme = config.scheme(), error = %e, "envelope configuration rejected"))
            .ok()
    }
}

impl CryptFormat for BraceFormat {
    fn family(&self) -> Family {
        Family::Brace
    }

    fn resolve(&self, crypt: &str) -> Option<HasherConfiguration> {
        let (token, payload) = crypt.strip_prefix('{')?.split_once('}')?;
        let (scheme, suffix) = match token.split_once('.') {
            Some((scheme, suffix)) => (scheme, Some(suffix)),
            None => (token, None),
        };
        if scheme.is_empty() {
            return None;
        }
        if suffix.is_none() && scheme.eq_ignore_ascii_case("CRYPT") {
            return self.resolve_envelope(payload);
        }

        let config = self.registry.lookup(Family::Brace, scheme)?;
        debug!(family = %Family::Brace, scheme, suffix, "resolved crypt scheme");
        let Some(suffix) = suffix else {
            return Some(config);
        };
        let codec = CodecId::from_suffix(suffix)?;
        config
            .derive()
            .with_codec(codec)
            .with_salt_codec(codec)
            .with_encoding_suffix(suffix.to_ascii_uppercase())
            .build()
            .map_err(|e| warn!(scheme, error = %e, "encoding suffix rejected"))
            .ok()
    }
}
