//! Password plus optional context handed to `encrypt` and `check`.

use crate::aliases::{PasswordString, SecretBytes};
use secure_gate::RevealSecret;
use crate::config::Charset;
use crate::error::CryptError;
use crate::utils::utf8_to_utf16le;
use std::collections::BTreeMap;
use std::fmt;
use zeroize::Zeroizing;

/// Candidate password and the identity it belongs to.
///
/// Only the password takes part in hashing; username, realm and custom fields
/// are carried for callers and custom primitives.
pub struct Credentials {
    password: PasswordString,
    username: Option<String>,
    realm: Option<String>,
    custom: BTreeMap<String, String>,
}

// `Dynamic<String>` is not `Clone` in secure-gate 0.8+, so clone field by field.
impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            password: PasswordString::new(self.password.expose_secret().clone()),
            username: self.username.clone(),
            realm: self.realm.clone(),
            custom: self.custom.clone(),
        }
    }
}

impl Credentials {
    pub fn new(password: impl Into<String>) -> Self {
        Self::from_secret(PasswordString::new(password.into()))
    }

    pub fn from_secret(password: PasswordString) -> Self {
        Self {
            password,
            username: None,
            realm: None,
            custom: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    pub fn password(&self) -> &PasswordString {
        &self.password
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.custom.get(key).map(String::as_str)
    }

    /// Password bytes in `charset`, scrubbed when the returned buffer drops.
    pub fn password_bytes(&self, charset: Charset) -> Result<SecretBytes, CryptError> {
        let utf8 = self.password.expose_secret().as_bytes();
        match charset {
            Charset::Utf8 => Ok(Zeroizing::new(utf8.to_vec())),
            Charset::Utf16Le => utf8_to_utf16le(utf8),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &"[REDACTED]")
            .field("username", &self.username)
            .field("realm", &self.realm)
            .field("custom", &self.custom)
            .finish()
    }
}
