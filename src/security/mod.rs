//! Request gating.
//!
//! The only caller authentication this proxy performs is coarse origin
//! allow-listing; there is no per-user identity.

pub mod origin;

pub use origin::OriginPolicy;
