//! Locating the pdfinfo executable
//!
//! Without an explicit path the binary is looked up in the `.bin` directory
//! of this crate, under a file name that encodes the platform:
//!
//! | platform | file name |
//! |---|---|
//! | macOS | `pdfinfo-osx` |
//! | Windows | `pdfinfo-win.exe` |
//! | Linux and other Unix | `pdfinfo-linux` |

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PdfInfoError, Result};

/// Base name shared by all bundled binaries
pub const BINARY_STEM: &str = "pdfinfo";

/// Operating systems with a bundled pdfinfo build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Platform this crate was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Suffix appended to the binary name
    pub fn suffix(&self) -> &'static str {
        match self {
            Platform::MacOs => "osx",
            Platform::Windows => "win",
            Platform::Linux => "linux",
        }
    }

    /// Executable extension, including the dot
    pub fn executable_extension(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::MacOs | Platform::Linux => "",
        }
    }

    /// File name of the bundled binary, e.g. `pdfinfo-linux`
    pub fn binary_file_name(&self) -> String {
        format!(
            "{}-{}{}",
            BINARY_STEM,
            self.suffix(),
            self.executable_extension()
        )
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Directory holding the bundled binaries
pub fn default_binary_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(".bin")
}

/// Default binary path for `platform`
pub fn default_binary_path(platform: Platform) -> PathBuf {
    default_binary_dir().join(platform.binary_file_name())
}

/// Resolve the executable to run.
///
/// Returns `explicit` when given, the bundled binary for the current
/// platform otherwise. Fails with [`PdfInfoError::BinaryNotFound`] when the
/// resulting path does not exist.
pub fn resolve_executable(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_for_platform(explicit, Platform::current())
}

pub(crate) fn resolve_for_platform(explicit: Option<&Path>, platform: Platform) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_binary_path(platform),
    };

    if !path.exists() {
        return Err(PdfInfoError::BinaryNotFound(path));
    }

    debug!(binary = %path.display(), %platform, "resolved pdfinfo binary");
    Ok(path)
}
