//! Nufetch - a one-shot provisioner for native NuGet package assets
//!
//! This crate downloads a single NuGet package archive, unpacks it in
//! memory, and writes its headers into an `include/` directory and its
//! dynamic libraries, import libraries, and debug symbols into a `lib/`
//! directory. It exists to provision the files needed when embedding the
//! .NET runtime in a native application.

pub mod archive;
pub mod config;
pub mod fetch;
pub mod ops;
pub mod util;

pub use archive::{base_name, Destination, PackageArchive};
pub use config::ProvisionConfig;
pub use ops::provision::{provision, ProvisionReport};
