// file: src/cli/args.rs
// version: 1.0.0
// guid: e32dba31-8bad-4008-ab44-2ee160ce793b

//! Command line argument definitions

use super::help::HelpRenderer;
use crate::config::{DriverSelection, InstallRequest, LogLevel, LoggingConfig, PackageSources};
use crate::Result;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Name the tool is installed under
pub const PROGRAM_NAME: &str = "ubuntu-drivers";

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
#[command(about = "List and install Ubuntu driver packages for the detected hardware")]
#[command(version = crate::VERSION)]
#[command(args_override_self = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Minimum severity of log messages written to the console (stderr)
    #[arg(long, value_enum, value_name = "LEVEL", default_value = "ERROR")]
    pub stdout_log_level: LogLevelArg,

    /// Minimum severity of log messages written to the logfile
    #[arg(long, value_enum, value_name = "LEVEL", default_value = "INFO")]
    pub logfile_log_level: LogLevelArg,

    /// Append log messages to this file
    #[arg(long, value_name = "PATH")]
    pub logfile: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments against the command as configured by `renderer`
    pub fn try_parse_with<I, T>(renderer: &dyn HelpRenderer, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = renderer.configure(Self::command());
        let matches = command.try_get_matches_from(args)?;
        Ok(Self::from_arg_matches(&matches)?)
    }

    /// Logging settings requested on the command line
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            stdout_level: self.stdout_log_level.into(),
            logfile_level: self.logfile_log_level.into(),
            logfile: self.logfile.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install drivers for the detected hardware or a named package
    #[command(args_override_self = true)]
    Install(InstallArgs),

    /// List drivers available for the detected hardware
    #[command(args_override_self = true)]
    List(ListArgs),

    /// Print debugging information
    Debug,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Driver package to install
    #[arg(value_name = "PACKAGE_NAME")]
    pub package_name: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// File where the list of explicitly installed packages will be stored
    #[arg(long, value_name = "PATH")]
    pub package_list: Option<PathBuf>,
}

impl InstallArgs {
    pub fn to_request(&self) -> InstallRequest {
        InstallRequest {
            package_name: self.package_name.clone(),
            selection: self.selection.to_selection(),
            package_list: self.package_list.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Selection flags shared by `install` and `list`.
///
/// Paired flags override each other, so the last one given wins.
#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Automatically select the most compatible version of a driver in case there are multiple options
    #[arg(long)]
    pub recommended: bool,

    /// Select packages intended for server environments with GPGPUs and no graphical environment
    #[arg(long)]
    pub gpgpu: bool,

    /// Add DKMS packages to the selection
    #[arg(long, overrides_with = "no_dkms")]
    pub include_dkms: bool,

    /// Leave DKMS packages out of the selection [default]
    #[arg(long, overrides_with = "include_dkms")]
    pub no_dkms: bool,

    /// Include OEM packages [default]
    #[arg(long, overrides_with = "no_oem")]
    pub oem: bool,

    /// Leave OEM packages out of the selection
    #[arg(long, overrides_with = "oem")]
    pub no_oem: bool,

    /// Archive components packages may come from
    #[arg(long, value_enum, value_name = "SOURCES", default_value = "NONFREE")]
    pub sources: SourcesArg,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> DriverSelection {
        DriverSelection {
            recommended: self.recommended,
            gpgpu: self.gpgpu,
            include_dkms: self.include_dkms,
            include_oem: !self.no_oem,
            sources: self.sources.into(),
        }
    }
}

/// Log level argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevelArg {
    #[value(name = "FATAL")]
    Fatal,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "WARN")]
    Warn,
    #[value(name = "INFO")]
    Info,
    #[value(name = "DEBUG")]
    Debug,
}

impl From<LogLevelArg> for LogLevel {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Fatal => LogLevel::Fatal,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
        }
    }
}

/// Package sources argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourcesArg {
    #[value(name = "FREE")]
    Free,
    #[value(name = "NONFREE")]
    NonFree,
}

impl From<SourcesArg> for PackageSources {
    fn from(sources: SourcesArg) -> Self {
        match sources {
            SourcesArg::Free => PackageSources::Free,
            SourcesArg::NonFree => PackageSources::NonFree,
        }
    }
}
