// file: src/cli/mod.rs
// version: 1.0.0
// guid: 01551165-51d8-4ede-8c3f-f3857bc4972f

//! Command line interface for ubuntu-drivers

pub mod args;
pub mod commands;
pub mod help;

pub use args::Cli;
pub use commands::*;
pub use help::{select_renderer, HelpRenderer};
