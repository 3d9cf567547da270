//! Fluent builder for [`HasherConfiguration`].

use crate::codec::CodecId;
use crate::config::{Algorithm, Charset, ExtendedDefaults, Family, HasherConfiguration};
use crate::error::CryptError;
use crate::formatter::FormatterKind;
use crate::transpose::Transposition;

/// Builder returned by [`HasherConfiguration::builder`] and
/// [`HasherConfiguration::derive`].
///
/// Setting the hash codec also sets the salt codec unless the salt codec was
/// set explicitly. `build` validates the result.
///
/// # Thread Safety
///
/// Plain data; `Send + Sync`.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: HasherConfiguration,
    salt_codec_set: bool,
}

impl ConfigBuilder {
    pub(crate) fn new(
        scheme: String,
        family: Family,
        algorithm: Algorithm,
        formatter: FormatterKind,
    ) -> Self {
        Self {
            config: HasherConfiguration {
                scheme,
                family,
                algorithm,
                formatter,
                charset: Charset::Utf8,
                codec: CodecId::Base64,
                salt_codec: CodecId::Base64,
                salt_len: 0,
                hash_len: algorithm.digest_len(),
                default_work_factor: None,
                implicit_work_factor: None,
                min_work_factor: 1,
                max_work_factor: u32::MAX,
                variant: None,
                transposition: None,
                envelope: None,
                encoding_suffix: None,
                extended: None,
            },
            salt_codec_set: false,
        }
    }

    pub(crate) fn from_config(config: HasherConfiguration) -> Self {
        Self {
            config,
            salt_codec_set: true,
        }
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.scheme = scheme.into();
        self
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.config.charset = charset;
        self
    }

    /// Hash codec; also the salt codec unless one was set explicitly.
    #[must_use]
    pub fn with_codec(mut self, codec: CodecId) -> Self {
        self.config.codec = codec;
        if !self.salt_codec_set {
            self.config.salt_codec = codec;
        }
        self
    }

    #[must_use]
    pub fn with_salt_codec(mut self, codec: CodecId) -> Self {
        self.config.salt_codec = codec;
        self.salt_codec_set = true;
        self
    }

    #[must_use]
    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.config.salt_len = salt_len;
        self
    }

    #[must_use]
    pub fn with_hash_len(mut self, hash_len: usize) -> Self {
        self.config.hash_len = Some(hash_len);
        self
    }

    /// Leaves the hash length to be learned from a crypt.
    #[must_use]
    pub fn without_hash_len(mut self) -> Self {
        self.config.hash_len = None;
        self
    }

    /// Default plus inclusive bounds.
    #[must_use]
    pub fn with_work_factor(mut self, default: u32, min: u32, max: u32) -> Self {
        self.config.default_work_factor = Some(default);
        self.config.min_work_factor = min;
        self.config.max_work_factor = max;
        self
    }

    #[must_use]
    pub fn with_default_work_factor(mut self, default: u32) -> Self {
        self.config.default_work_factor = Some(default);
        self
    }

    #[must_use]
    pub fn with_implicit_work_factor(mut self, implicit: u32) -> Self {
        self.config.implicit_work_factor = Some(implicit);
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.config.variant = Some(variant.into());
        self
    }

    #[must_use]
    pub fn with_transposition(mut self, transposition: Transposition) -> Self {
        self.config.transposition = Some(transposition);
        self
    }

    #[must_use]
    pub fn with_envelope(mut self, envelope: impl Into<String>) -> Self {
        self.config.envelope = Some(envelope.into());
        self
    }

    #[must_use]
    pub fn with_encoding_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.encoding_suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn with_extended(mut self, defaults: ExtendedDefaults) -> Self {
        self.config.extended = Some(defaults);
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<HasherConfiguration, CryptError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
