// src/main.rs

use anyhow::Result;
use clap::Parser;
use panescrub::cli::Cli;
use panescrub::run;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "panescrub=debug".parse().unwrap()
                } else {
                    "panescrub=info".parse().unwrap()
                },
            ),
        )
        .init();

    log::debug!("Starting panescrub v{}...", env!("CARGO_PKG_VERSION"));

    // No operational arguments; clap still handles --help/--version and
    // rejects stray arguments.
    let _args = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if let Err(e) = run(stdin.lock(), &mut writer) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
