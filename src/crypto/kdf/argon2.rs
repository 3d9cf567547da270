//! src/crypto/kdf/argon2.rs

use crate::aliases::SecretBytes;
use crate::consts::ARGON2_VERSION_10;
use crate::error::CryptError;
use crate::parts::ExtendedParts;

use argon2::{Algorithm, Argon2, AssociatedData, ParamsBuilder, Version};
use zeroize::Zeroizing;

/// Maps a variant tag (`"d"`, `"i"`, `"id"`) to the argon2 algorithm.
pub fn argon2_algorithm(variant: &str) -> Result<Algorithm, CryptError> {
    match variant {
        "d" => Ok(Algorithm::Argon2d),
        "i" => Ok(Algorithm::Argon2i),
        "id" => Ok(Algorithm::Argon2id),
        other => Err(CryptError::Configuration(format!(
            "unknown argon2 variant {other:?}"
        ))),
    }
}

/// Hash `password` with the memory-hard parameters carried by `parts`.
///
/// A crypt without a `v=` segment is version 0x10. `secret` is the key
/// resolved from `parts.key_id`, if any.
pub fn derive_argon2(
    password: &[u8],
    parts: &ExtendedParts,
    variant: &str,
    out_len: usize,
    secret: Option<&[u8]>,
) -> Result<SecretBytes, CryptError> {
    let algorithm = argon2_algorithm(variant)?;
    let version = Version::try_from(parts.version.unwrap_or(ARGON2_VERSION_10))
        .map_err(|e| CryptError::Primitive(format!("argon2 version: {e}")))?;

    let mut builder = ParamsBuilder::new();
    builder
        .m_cost(parts.memory_cost)
        .t_cost(parts.time_cost)
        .p_cost(parts.parallelism)
        .output_len(out_len);
    if let Some(data) = &parts.associated_data {
        builder.data(
            AssociatedData::new(data)
                .map_err(|e| CryptError::Primitive(format!("argon2 data: {e}")))?,
        );
    }
    let params = builder
        .build()
        .map_err(|e| CryptError::Primitive(format!("argon2 parameters: {e}")))?;

    let argon2 = match secret {
        Some(secret) => Argon2::new_with_secret(secret, algorithm, version, params)
            .map_err(|e| CryptError::Primitive(format!("argon2 secret: {e}")))?,
        None => Argon2::new(algorithm, version, params),
    };

    let mut out = Zeroizing::new(vec![0u8; out_len]);
    argon2
        .hash_password_into(password, &parts.salt, &mut out)
        .map_err(|e| CryptError::Primitive(format!("argon2 failed: {e}")))?;
    Ok(out)
}
