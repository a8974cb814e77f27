//! Tredumo Core - Tenant identity records, design tokens, and the pure
//! transforms over them.
//!
//! This crate contains the domain model of the platform: what a school
//! tenant *is* (`SchoolConfig`), how it looks (`DesignTokens`), and the
//! validators, serializers, and metadata generators every other crate
//! consumes. It performs no I/O.

pub mod defaults;
pub mod error;
pub mod models;
pub mod seo;
pub mod stylesheet;
pub mod tuition;
pub mod validate;

pub use error::{Result, TredumoError};
