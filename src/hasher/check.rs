use super::Hasher;
use crate::credentials::Credentials;
use crate::error::CryptError;
use crate::formatter::FormatterKind;
use crate::utils::constant_time_eq;
use zeroize::Zeroizing;

impl Hasher {
    /// Whether `credentials` match `crypt`.
    ///
    /// A wrong password is `Ok(false)`. A crypt of another scheme is a
    /// `Configuration` error and a damaged one is `Malformed`; neither is
    /// ever reported as a mismatch.
    pub fn check(&self, credentials: &Credentials, crypt: &str) -> Result<bool, CryptError> {
        let parts = Zeroizing::new(self.parse(crypt)?);
        if let Some(work_factor) = parts.work_factor() {
            self.config.check_work_factor(work_factor)?;
        }
        if self.config.formatter() == FormatterKind::Extended
            && self.config.hash_len() != Some(parts.hash().len())
        {
            return Err(CryptError::Configuration(format!(
                "{}: {}-byte hash needs a Hasher built for that length",
                self.config.scheme(),
                parts.hash().len()
            )));
        }

        let password = credentials.password_bytes(self.config.charset())?;
        let computed = self.compute(&password, &parts)?;
        Ok(constant_time_eq(&computed, parts.hash()))
    }
}
