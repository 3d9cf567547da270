// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod codec;
pub mod config;
pub mod consts;
pub mod credentials;
pub mod crypto;
pub mod error;
pub mod format;
pub mod formatter;
pub mod hasher;
pub mod migrate;
pub mod parts;
pub mod registry;
pub mod schemes;
pub mod transpose;
pub mod utils;

// High-level API: resolve a crypt, check it, encrypt new ones
pub use credentials::Credentials;
pub use error::CryptError;
pub use format::{CryptFormat, FormatChain};
pub use hasher::Hasher;
pub use registry::{RegistryOverrides, SchemeOverride, SchemeRegistry};

// Configuration and the pieces it names
pub use builders::ConfigBuilder;
pub use codec::{Ambiguity, ByteTextCodec, CodecId};
pub use config::{Algorithm, Charset, ExtendedDefaults, Family, HasherConfiguration};
pub use formatter::{CryptFormatter, FormatterKind};
pub use parts::{ExtendedParts, Parts, PlainParts, SaltedParts, WorkFactorSaltedParts};
pub use transpose::Transposition;

// Seams for custom cryptography
pub use crypto::{BuiltinPrimitives, KeyResolver, PrimitiveHash};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{check_batch, encrypt_batch};

pub use migrate::{upgrade, Upgrade};
