// file: src/config/selection.rs
// version: 1.0.0
// guid: 878db6b4-5fad-4eb5-b009-771f42f8e44f

//! Driver selection criteria shared by `install` and `list`

use super::PackageSources;
use std::path::PathBuf;

/// Criteria used to pick driver packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSelection {
    /// Pick the most compatible version when several drivers match
    pub recommended: bool,
    /// Restrict to headless GPGPU packages
    pub gpgpu: bool,
    /// Add DKMS-built kernel module packages
    pub include_dkms: bool,
    /// Add OEM-specific packages
    pub include_oem: bool,
    /// Allowed archive components
    pub sources: PackageSources,
}

impl Default for DriverSelection {
    fn default() -> Self {
        Self {
            recommended: false,
            gpgpu: false,
            include_dkms: false,
            include_oem: true,
            sources: PackageSources::NonFree,
        }
    }
}

/// A parsed `install` invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallRequest {
    /// Driver package requested by name, if any
    pub package_name: Option<String>,
    pub selection: DriverSelection,
    /// Where explicitly installed package names would be recorded
    pub package_list: Option<PathBuf>,
}

impl InstallRequest {
    /// Human readable target of the request
    pub fn target(&self) -> &str {
        self.package_name.as_deref().unwrap_or("<detected devices>")
    }
}
