// file: src/lib.rs
// version: 1.0.0
// guid: 50548539-2436-46d8-ac43-63fcf4d96cbd

//! # ubuntu-drivers
//!
//! Command-line front end for listing and installing Ubuntu driver packages.
//! The command surface, logging setup and help output are in place; driver
//! detection and package installation are not.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{DriversError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
