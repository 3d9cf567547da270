//! src/crypto/kdf/bcrypt.rs

use crate::aliases::SecretBytes;
use crate::consts::{
    BCRYPT_HASH_LEN, BCRYPT_MAX_COST, BCRYPT_MAX_PASSWORD_LEN, BCRYPT_MIN_COST, BCRYPT_SALT_LEN,
};
use crate::error::CryptError;
use zeroize::Zeroizing;

/// EksBlowfish over the NUL-terminated password (truncated to 72 bytes).
///
/// Returns the 23 bytes a crypt string stores.
pub fn derive_bcrypt(password: &[u8], salt: &[u8], cost: u32) -> Result<SecretBytes, CryptError> {
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
        return Err(CryptError::Primitive(format!(
            "bcrypt cost {cost} outside {BCRYPT_MIN_COST}..={BCRYPT_MAX_COST}"
        )));
    }
    let salt: [u8; BCRYPT_SALT_LEN] = salt.try_into().map_err(|_| {
        CryptError::Configuration(format!(
            "bcrypt salt must be {BCRYPT_SALT_LEN} bytes, got {}",
            salt.len()
        ))
    })?;

    let mut key = Zeroizing::new(Vec::with_capacity(password.len() + 1));
    key.extend_from_slice(password);
    key.push(0);
    key.truncate(BCRYPT_MAX_PASSWORD_LEN);

    let output = Zeroizing::new(bcrypt::bcrypt(cost, salt, &key));
    Ok(Zeroizing::new(output[..BCRYPT_HASH_LEN].to_vec()))
}
