//! # Secure Type Aliases
//!
//! Type aliases for secret-bearing values, built on
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate) and
//! [`zeroize`](https://docs.rs/zeroize).
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha1`] - PRF for PBKDF2-SHA1 (colon `PBKDF2:` and passlib `$pbkdf2$`)
//! - [`HmacSha256`] - PRF for PBKDF2-SHA256
//! - [`HmacSha512`] - PRF for PBKDF2-SHA512
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - password held by [`Credentials`](crate::Credentials)
//! - [`SecretBytes`] - per-call scrubbed byte buffer (password bytes, primitive output)
//!
//! ## Usage
//!
//! `PasswordString` requires an explicit `.expose_secret()`; `SecretBytes` zero-fills
//! its heap allocation on drop, on every exit path.

use secure_gate::Dynamic;

use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = Dynamic<String>;

/// Heap buffer that is zero-filled when dropped.
pub type SecretBytes = Zeroizing<Vec<u8>>;
