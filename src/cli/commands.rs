// file: src/cli/commands.rs
// version: 1.0.0
// guid: 8ca9ad65-31ba-4227-8f94-6f0c359457b0

//! Command implementations for the CLI
//!
//! Driver detection and package installation are not implemented yet, so each
//! handler only reports which command ran.

use super::args::{Commands, PROGRAM_NAME};
use crate::config::{DriverSelection, InstallRequest};
use crate::logging::with_operation_span;
use crate::Result;
use std::io::Write;
use tracing::{debug, info};

/// Run the requested command, or show the device overview when none was given
pub fn dispatch<W: Write>(command: Option<Commands>, out: &mut W) -> Result<()> {
    match command {
        None => overview_command(out),
        Some(Commands::Debug) => with_operation_span("debug", || debug_command(out)),
        Some(Commands::Install(args)) => {
            let request = args.to_request();
            with_operation_span("install", || install_command(&request, out))
        }
        Some(Commands::List(args)) => {
            let selection = args.selection.to_selection();
            with_operation_span("list", || list_command(&selection, out))
        }
    }
}

/// Show detected devices and a pointer to the help text
pub fn overview_command<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Devices:")?;
    writeln!(out)?;
    writeln!(
        out,
        "For more information about usage, try `{} --help`.",
        PROGRAM_NAME
    )?;
    Ok(())
}

/// Print debugging information
pub fn debug_command<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "debug")?;
    Ok(())
}

/// Install driver packages
pub fn install_command<W: Write>(request: &InstallRequest, out: &mut W) -> Result<()> {
    info!("Installing drivers for {}", request.target());
    log_selection(&request.selection);
    if let Some(package_list) = &request.package_list {
        debug!("Installed package names go to {}", package_list.display());
    }

    writeln!(out, "install")?;
    Ok(())
}

/// List available driver packages
pub fn list_command<W: Write>(selection: &DriverSelection, out: &mut W) -> Result<()> {
    info!("Listing drivers from {} sources", selection.sources);
    log_selection(selection);

    writeln!(out, "list")?;
    Ok(())
}

fn log_selection(selection: &DriverSelection) {
    debug!(
        recommended = selection.recommended,
        gpgpu = selection.gpgpu,
        include_dkms = selection.include_dkms,
        include_oem = selection.include_oem,
        sources = %selection.sources,
        nonfree = selection.sources.allows_nonfree(),
        "Driver selection"
    );
}
