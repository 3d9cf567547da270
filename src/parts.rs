//! # Parts
//!
//! Typed, call-local records bridging crypt strings and primitive parameters.
//! A formatter's `parse` fills one in; `encrypt` builds a fresh one, lets the
//! primitive fill in the hash and hands it to `format`.
//!
//! Every record derives `Zeroize`: a freshly computed hash (the password
//! itself for `{CLEARTEXT}`) is scrubbed once `encrypt` is done with it.

use zeroize::Zeroize;

/// Hash only (unsalted digests, NT-HASH, cleartext).
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize)]
pub struct PlainParts {
    pub hash: Vec<u8>,
}

/// Salt and hash (MD5-crypt, salted digests, DES-crypt).
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize)]
pub struct SaltedParts {
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Rounds, iterations or cost, plus salt and hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize)]
pub struct WorkFactorSaltedParts {
    pub work_factor: u32,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Memory-hard parameters (Argon2 PHC strings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize)]
pub struct ExtendedParts {
    /// `v=` segment; `None` when the crypt omits it (implies version 0x10).
    pub version: Option<u32>,
    /// KiB.
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
    /// Identifier of the secret key, resolved at hash time.
    pub key_id: Option<String>,
    pub associated_data: Option<Vec<u8>>,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Decomposed crypt string.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub enum Parts {
    Plain(PlainParts),
    Salted(SaltedParts),
    WorkFactorSalted(WorkFactorSaltedParts),
    Extended(ExtendedParts),
}

impl Parts {
    pub fn hash(&self) -> &[u8] {
        match self {
            Parts::Plain(p) => &p.hash,
            Parts::Salted(p) => &p.hash,
            Parts::WorkFactorSalted(p) => &p.hash,
            Parts::Extended(p) => &p.hash,
        }
    }

    pub fn set_hash(&mut self, hash: Vec<u8>) {
        match self {
            Parts::Plain(p) => p.hash = hash,
            Parts::Salted(p) => p.hash = hash,
            Parts::WorkFactorSalted(p) => p.hash = hash,
            Parts::Extended(p) => p.hash = hash,
        }
    }

    /// Empty for [`Parts::Plain`].
    pub fn salt(&self) -> &[u8] {
        match self {
            Parts::Plain(_) => &[],
            Parts::Salted(p) => &p.salt,
            Parts::WorkFactorSalted(p) => &p.salt,
            Parts::Extended(p) => &p.salt,
        }
    }

    /// Rounds/iterations/cost; the time cost for memory-hard parts.
    pub fn work_factor(&self) -> Option<u32> {
        match self {
            Parts::WorkFactorSalted(p) => Some(p.work_factor),
            Parts::Extended(p) => Some(p.time_cost),
            Parts::Plain(_) | Parts::Salted(_) => None,
        }
    }

    pub fn as_extended(&self) -> Option<&ExtendedParts> {
        match self {
            Parts::Extended(p) => Some(p),
            _ => None,
        }
    }
}
