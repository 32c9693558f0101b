//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use nufetch::config::{DEFAULT_PACKAGE, DEFAULT_VERSION, NUGET_V2_URL};

/// Nufetch - provisions native NuGet package assets (headers and libraries)
///
/// With no arguments, downloads the .NET app host package for win-x64 and
/// writes its headers into ./include and its libraries into ./lib.
#[derive(Parser)]
#[command(name = "nufetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Package to download
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Version of the package to download
    #[arg(long = "pkg-version", default_value = DEFAULT_VERSION)]
    pub pkg_version: String,

    /// Registry download endpoint
    #[arg(long, default_value = NUGET_V2_URL)]
    pub registry: Url,

    /// Directory to place include/ and lib/ under (defaults to the
    /// current directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
