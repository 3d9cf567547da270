//! src/migrate.rs
//! Legacy crypt upgrade on successful login
//!
//! A stored crypt of any registered scheme is verified through a
//! [`FormatChain`]; if the password matches and the stored value is weaker
//! than (or of another scheme than) the target Hasher, a fresh crypt is
//! produced for the caller to persist.

use crate::credentials::Credentials;
use crate::error::CryptError;
use crate::format::FormatChain;
use crate::hasher::Hasher;
use tracing::debug;

/// Outcome of [`upgrade`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upgrade {
    /// The password does not match the stored crypt.
    Rejected,
    /// Matches, and the stored crypt already meets the target.
    Current,
    /// Matches; replace the stored crypt with this one.
    Upgraded(String),
}

impl Upgrade {
    pub fn is_match(&self) -> bool {
        !matches!(self, Upgrade::Rejected)
    }
}

/// Verify `stored` and re-encrypt under `target` when it is due.
///
/// # Errors
/// `NoHasher` when no format recognises `stored`; whatever `check` or
/// `encrypt` raise.
pub fn upgrade(
    chain: &FormatChain,
    target: &Hasher,
    credentials: &Credentials,
    stored: &str,
) -> Result<Upgrade, CryptError> {
    let legacy = chain.hasher_for(stored)?;
    if !legacy.check(credentials, stored)? {
        return Ok(Upgrade::Rejected);
    }
    if !target.needs_rehash(stored)? {
        return Ok(Upgrade::Current);
    }

    let fresh = target.encrypt(credentials)?;
    debug!(
        from = legacy.config().scheme(),
        to = target.config().scheme(),
        "upgraded stored crypt"
    );
    Ok(Upgrade::Upgraded(fresh))
}
