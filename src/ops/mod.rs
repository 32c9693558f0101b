//! High-level operations.

pub mod provision;

pub use provision::{provision, unpack_into, ProvisionReport};
