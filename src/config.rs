//! Provisioning configuration.
//!
//! All knobs for a run live in [`ProvisionConfig`]; the constants below are
//! the compiled-in defaults the CLI falls back to when no flags are given.

use std::path::{Path, PathBuf};

use url::Url;

/// NuGet v2 flat-download endpoint. `GET <base>/<package>/<version>`
/// returns the nupkg (a zip archive).
pub const NUGET_V2_URL: &str = "https://www.nuget.org/api/v2/package";

/// Default package: the .NET app host for win-x64, which carries
/// `nethost.h` and the matching libraries.
pub const DEFAULT_PACKAGE: &str = "Microsoft.NETCore.App.Host.win-x64";

/// The win-x86 variant of the app host package.
pub const PACKAGE_WIN_X86: &str = "Microsoft.NETCore.App.Host.win-x86";

/// Default package version.
pub const DEFAULT_VERSION: &str = "8.0.6";

/// Everything a provisioning run needs: where to download from, what to
/// download, and where the classified files land.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Registry download endpoint.
    pub registry: Url,

    /// Package name, e.g. `Microsoft.NETCore.App.Host.win-x64`.
    pub package: String,

    /// Package version string. Not validated; the registry decides
    /// whether it exists.
    pub version: String,

    /// Destination for `.h` entries.
    pub include_dir: PathBuf,

    /// Destination for `.dll`, `.lib`, and `.pdb` entries.
    pub lib_dir: PathBuf,
}

impl ProvisionConfig {
    /// Create a config with the standard `include/` and `lib/` layout
    /// rooted at `out_dir`.
    pub fn new(
        registry: Url,
        package: impl Into<String>,
        version: impl Into<String>,
        out_dir: &Path,
    ) -> Self {
        ProvisionConfig {
            registry,
            package: package.into(),
            version: version.into(),
            include_dir: out_dir.join("include"),
            lib_dir: out_dir.join("lib"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_roots_layout_at_out_dir() {
        let registry = Url::parse(NUGET_V2_URL).unwrap();
        let config = ProvisionConfig::new(registry, DEFAULT_PACKAGE, "8.0.6", Path::new("/tmp/out"));

        assert_eq!(config.include_dir, Path::new("/tmp/out/include"));
        assert_eq!(config.lib_dir, Path::new("/tmp/out/lib"));
        assert_eq!(config.package, DEFAULT_PACKAGE);
        assert_eq!(config.version, "8.0.6");
    }
}
