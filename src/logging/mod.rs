// file: src/logging/mod.rs
// version: 1.0.0
// guid: 55293043-ed2d-4402-8a6d-653743b6e811

//! Logging system for ubuntu-drivers

pub mod logger;

pub use logger::{init_logger, with_operation_span};
