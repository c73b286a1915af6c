// file: src/error.rs
// version: 1.0.0
// guid: 01110c3e-1e35-46c9-b2fc-5965df681fe0

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, DriversError>;

/// Error types for ubuntu-drivers
#[derive(Error, Debug)]
pub enum DriversError {
    /// The command line did not match the declared options
    #[error("Usage error: {0}")]
    Usage(#[from] clap::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl DriversError {
    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(e) => e.exit_code(),
            Self::Io(_) | Self::Logging(_) => 1,
        }
    }
}
