//! Traditional DES crypt(3), backed by `pwhash::unix_crypt`.

use crate::aliases::SecretBytes;
use crate::codec::CodecId;
use crate::consts::{CRYPT_SALT_ALPHABET, DES_SALT_LEN};
use crate::error::CryptError;
use zeroize::Zeroizing;

/// Returns the 8-byte DES block. `salt` must be two characters of `./0-9A-Za-z`.
pub fn des_crypt(password: &[u8], salt: &[u8]) -> Result<SecretBytes, CryptError> {
    if salt.len() != DES_SALT_LEN {
        return Err(CryptError::Configuration(format!(
            "DES salt must be {DES_SALT_LEN} characters"
        )));
    }
    if !salt.iter().all(|b| CRYPT_SALT_ALPHABET.contains(b)) {
        return Err(CryptError::Malformed(
            "DES salt has characters outside ./0-9A-Za-z".into(),
        ));
    }
    let salt = std::str::from_utf8(salt)
        .map_err(|_| CryptError::Malformed("DES salt is not ASCII".into()))?;
    let password = std::str::from_utf8(password)
        .map_err(|_| CryptError::Configuration("DES crypt needs a UTF-8 password".into()))?;
    // pwhash deprecates unix_crypt as insecure; stored DES crypts still need checking
    #[allow(deprecated)]
    let crypt = Zeroizing::new(
        pwhash::unix_crypt::hash_with(salt, password)
            .map_err(|e| CryptError::Primitive(format!("DES crypt failed: {e}")))?,
    );
    let encoded = crypt
        .get(DES_SALT_LEN..)
        .ok_or_else(|| CryptError::Primitive("DES crypt returned a short string".into()))?;
    Ok(Zeroizing::new(CodecId::Crypt.codec().decode(encoded)?))
}
