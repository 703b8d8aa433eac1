//! Operating system detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Darwin,
    Windows,
}

impl Os {
    /// Detect the current operating system at compile time
    #[cfg(target_os = "linux")]
    pub const fn current() -> Self {
        Os::Linux
    }

    #[cfg(target_os = "macos")]
    pub const fn current() -> Self {
        Os::Darwin
    }

    #[cfg(target_os = "windows")]
    pub const fn current() -> Self {
        Os::Windows
    }

    /// Returns the OS name as used in platform strings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Darwin => "darwin",
            Os::Windows => "windows",
        }
    }

    /// Check if this OS belongs to the Windows family
    pub const fn is_windows(&self) -> bool {
        matches!(self, Os::Windows)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
