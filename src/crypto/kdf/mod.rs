//! # Key Derivation Functions (KDF)
//!
//! Work-factor driven password hashes used by the modular and colon families.
//!
//! ## Modules
//!
//! - [`argon2`] - Argon2d/i/id (PHC `$argon2*$` strings)
//! - [`bcrypt`] - EksBlowfish (`$2a$`, `$2b$`, `$2y$`)
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA1/256/512 (passlib `$pbkdf2*$` and colon `PBKDF2:`)
//!
//! ## Usage
//!
//! Most callers go through [`Hasher`](crate::Hasher), which parses the crypt and
//! feeds these functions. They are public for callers that manage their own
//! parameters.

pub mod argon2;
pub mod bcrypt;
pub mod pbkdf2;
