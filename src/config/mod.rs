// file: src/config/mod.rs
// version: 1.0.0
// guid: 5e90da4a-75b7-45ef-a04d-29708e44c8e2

//! Configuration values for ubuntu-drivers
//!
//! Everything here is built from the command line once per invocation and is
//! independent of clap.

pub mod selection;

pub use selection::{DriverSelection, InstallRequest};

use std::fmt;
use std::path::PathBuf;

/// Log severity, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Get the level as it is spelled on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Get the tracing filter directive for this level.
    ///
    /// tracing has no fatal level, so FATAL filters like ERROR.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Fatal | LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which archive components driver packages may come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageSources {
    Free,
    #[default]
    NonFree,
}

impl PackageSources {
    /// Get the sources value as it is spelled on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageSources::Free => "FREE",
            PackageSources::NonFree => "NONFREE",
        }
    }

    /// Whether packages outside the free archive components are allowed
    pub fn allows_nonfree(&self) -> bool {
        matches!(self, PackageSources::NonFree)
    }
}

impl fmt::Display for PackageSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging destinations and their levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub stdout_level: LogLevel,
    pub logfile_level: LogLevel,
    pub logfile: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stdout_level: LogLevel::Error,
            logfile_level: LogLevel::Info,
            logfile: None,
        }
    }
}
