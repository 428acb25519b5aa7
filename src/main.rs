// src/main.rs

use anyhow::Result;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use ghdir::cli::Cli;
use ghdir::progress::ConsoleProgress;
use ghdir::{run, ConfigBuilder, Error};

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "ghdir=debug".parse()?
                } else {
                    "ghdir=warn".parse()?
                },
            ),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap exits with 2 on usage errors; every failure here is 1.
            let _ = e.print();
            match e.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                    std::process::exit(0)
                }
                _ => std::process::exit(1),
            }
        }
    };

    // --- Configuration ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e @ Error::InvalidLinkFormat { .. }) => {
            eprintln!("Error parsing repository link: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully: {:?}", config);

    println!("Repository: {}/{}", config.location.owner, config.location.repo);
    println!("Branch: {}", config.location.branch);
    println!("Path: {}", config.location.path);
    if config.destination.as_os_str() != "." {
        println!("Output Directory: {}", config.destination.display());
    }
    println!("Downloading...\n");

    // --- Execution ---
    let stdin = std::io::stdin();
    let result = run(
        &config,
        &ConsoleProgress,
        &mut stdin.lock(),
        &mut std::io::stdout(),
    );

    // --- Error Handling ---
    match result {
        Ok(target) => {
            println!("\n✓ Download completed successfully!");
            println!("Files saved to: {}", target.display());
            Ok(())
        }
        Err(Error::UserAborted) => {
            eprintln!("\nAborted: existing directory left untouched.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
