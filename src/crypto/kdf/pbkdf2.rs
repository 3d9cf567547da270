//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{HmacSha1, HmacSha256, HmacSha512, SecretBytes};
use crate::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::CryptError;

use pbkdf2::pbkdf2;
use zeroize::Zeroizing;

/// HMAC digest driving PBKDF2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbkdf2Prf {
    Sha1,
    Sha256,
    Sha512,
}

/// Derive `out_len` bytes of PBKDF2-HMAC-`prf` into a scrubbed buffer.
#[inline(always)]
pub fn derive_pbkdf2(
    prf: Pbkdf2Prf,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out_len: usize,
) -> Result<SecretBytes, CryptError> {
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(CryptError::Configuration(format!(
            "PBKDF2 iterations must be within {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }
    if out_len == 0 {
        return Err(CryptError::Configuration("PBKDF2 output length must be ≥1".into()));
    }

    let mut out = Zeroizing::new(vec![0u8; out_len]);
    match prf {
        Pbkdf2Prf::Sha1 => pbkdf2::<HmacSha1>(password, salt, iterations, &mut out),
        Pbkdf2Prf::Sha256 => pbkdf2::<HmacSha256>(password, salt, iterations, &mut out),
        Pbkdf2Prf::Sha512 => pbkdf2::<HmacSha512>(password, salt, iterations, &mut out),
    }
    .map_err(|e| CryptError::Primitive(format!("PBKDF2 failed: {e}")))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc6070_vector() {
        let out = derive_pbkdf2(Pbkdf2Prf::Sha1, b"password", b"salt", 2, 20).unwrap();
        assert_eq!(hex::encode(&*out), "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957");
    }

    #[test]
    fn zero_iterations_rejected() {
        assert!(matches!(
            derive_pbkdf2(Pbkdf2Prf::Sha256, b"pw", b"salt", 0, 32),
            Err(CryptError::Configuration(_))
        ));
    }
}
