//! # Crypt Families
//!
//! A [`CryptFormat`] recognises one framing family and resolves the scheme
//! token through the [`SchemeRegistry`](crate::SchemeRegistry). Not belonging to
//! the family and naming an unregistered scheme both yield `None`; probing a
//! list of formats in order is the normal way to identify a crypt, see
//! [`FormatChain`].

mod brace;
mod chain;
mod colon;
mod fixed;
mod modular;

use crate::config::{Family, HasherConfiguration};
use std::fmt;

pub use self::brace::{BraceFormat, CRYPT_ENVELOPE};
pub use self::chain::FormatChain;
pub use self::colon::ColonFormat;
pub use self::fixed::FixedLengthFormat;
pub use self::modular::ModularFormat;

/// Recognises one crypt family.
pub trait CryptFormat: Send + Sync + fmt::Debug {
    fn family(&self) -> Family;

    /// Configuration of the scheme that produced `crypt`, or `None` when the
    /// string is not of this family or its scheme is not registered.
    fn resolve(&self, crypt: &str) -> Option<HasherConfiguration>;
}
