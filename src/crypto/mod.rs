//! Primitive hash functions.
//!
//! Sub-modules hold one algorithm family each; [`primitive`] dispatches on the
//! configured [`Algorithm`](crate::Algorithm). HMAC types are defined in
//! `aliases.rs`.

pub mod des_crypt;
pub mod digest;
pub mod kdf;
pub mod md5_crypt;
pub mod primitive;
pub mod rng;
pub mod sha_crypt;

pub use primitive::{BuiltinPrimitives, KeyResolver, PrimitiveHash};
