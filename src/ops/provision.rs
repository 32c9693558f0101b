//! The provisioning pipeline: fetch, unpack, write.
//!
//! A single linear pass. Nothing is retried, and files written before a
//! failing entry are left on disk.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::archive::{base_name, Destination, PackageArchive};
use crate::config::ProvisionConfig;
use crate::fetch::fetch_package;
use crate::util::fs::write_stream;

/// What a provisioning run produced.
#[derive(Debug, Default)]
pub struct ProvisionReport {
    /// Files written, in archive order.
    pub written: Vec<PathBuf>,

    /// Entries skipped because their suffix matched no destination.
    pub skipped: usize,
}

/// Download the configured package and unpack its headers and libraries
/// into the configured layout.
pub fn provision(config: &ProvisionConfig) -> Result<ProvisionReport> {
    let bytes = fetch_package(&config.registry, &config.package, &config.version)
        .with_context(|| format!("failed to download {} {}", config.package, config.version))?;

    unpack_into(bytes, config)
}

/// Unpack an already-downloaded package archive into the configured layout.
///
/// Headers land in `include_dir`, libraries and debug symbols in `lib_dir`,
/// both flattened to their base names. Everything else is skipped.
pub fn unpack_into(bytes: Vec<u8>, config: &ProvisionConfig) -> Result<ProvisionReport> {
    let mut archive = PackageArchive::open(bytes).with_context(|| {
        format!(
            "failed to open {} {} as a zip archive",
            config.package, config.version
        )
    })?;

    let mut report = ProvisionReport::default();

    archive.for_each_entry(|entry_path, reader| {
        let Some(dest) = Destination::classify(entry_path) else {
            tracing::debug!("skipping {entry_path}");
            report.skipped += 1;
            return Ok(());
        };

        let dir = match dest {
            Destination::Include => &config.include_dir,
            Destination::Lib => &config.lib_dir,
        };
        let out_path = dir.join(base_name(entry_path));

        write_stream(&out_path, reader)
            .with_context(|| format!("failed to extract {entry_path}"))?;

        tracing::info!("extracted {} -> {}", entry_path, out_path.display());
        report.written.push(out_path);
        Ok(())
    })?;

    Ok(report)
}
