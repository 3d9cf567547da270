//! # Builders
//!
//! ## Modules
//!
//! - [`config_builder`] - fluent construction and "copy with overrides" of
//!   [`HasherConfiguration`](crate::HasherConfiguration)

pub mod config_builder;

pub use config_builder::ConfigBuilder;
