#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::{CryptError, Credentials, Hasher};

/// Checks every `(credentials, crypt)` pair in parallel against one Hasher.
///
/// Results keep the input order. The first error aborts the batch.
#[cfg(feature = "batch-ops")]
pub fn check_batch(
    hasher: &Hasher,
    batch: &[(Credentials, String)],
) -> Result<Vec<bool>, CryptError> {
    batch
        .par_iter()
        .map(|(credentials, crypt)| hasher.check(credentials, crypt))
        .collect()
}

#[cfg(feature = "batch-ops")]
pub fn encrypt_batch(hasher: &Hasher, batch: &[Credentials]) -> Result<Vec<String>, CryptError> {
    batch
        .par_iter()
        .map(|credentials| hasher.encrypt(credentials))
        .collect()
}
