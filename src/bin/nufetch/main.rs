//! Nufetch CLI - one-shot provisioning of native NuGet package assets

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use nufetch::{provision, ProvisionConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("nufetch=debug")
    } else {
        EnvFilter::new("nufetch=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let out_dir = match cli.out_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let config = ProvisionConfig::new(cli.registry, cli.package, cli.pkg_version, &out_dir);
    let report = provision(&config)?;

    println!(
        "provisioned {} file(s) under {} ({} entries skipped)",
        report.written.len(),
        out_dir.display(),
        report.skipped
    );

    Ok(())
}
