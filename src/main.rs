// file: src/main.rs
// version: 1.0.0
// guid: 2f6c0d1e-7a3b-4c58-9e21-b4d7a6f0c913

//! ubuntu-drivers - Main entry point

use std::io::Write;
use tracing::debug;
use ubuntu_drivers::{
    cli::{args::Cli, commands::dispatch, help::select_renderer},
    logging::logger,
    DriversError, Result,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let renderer = select_renderer();

    let cli = match Cli::try_parse_with(renderer.as_ref(), std::env::args_os()) {
        Ok(cli) => cli,
        // Prints the diagnostic (or help) and exits with clap's status
        Err(DriversError::Usage(e)) => e.exit(),
        Err(e) => return Err(e),
    };

    // Initialize logging
    logger::init_logger(&cli.logging_config())?;
    debug!("Using {} help renderer", renderer.name());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, &mut out)?;
    out.flush()?;

    Ok(())
}
