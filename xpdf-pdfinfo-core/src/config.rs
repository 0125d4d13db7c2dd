//! Extractor configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::locator::{self, Platform};

/// Environment variable overriding the pdfinfo binary path
pub const BINARY_ENV_VAR: &str = "XPDF_PDFINFO_BIN";

/// Where to find the pdfinfo binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfInfoConfig {
    /// Explicit binary path. `None` uses the bundled binary for `platform`.
    pub binary_path: Option<PathBuf>,

    /// Platform whose bundled binary is used when no path is set
    pub platform: Platform,
}

impl Default for PdfInfoConfig {
    fn default() -> Self {
        Self {
            binary_path: None,
            platform: Platform::current(),
        }
    }
}

impl PdfInfoConfig {
    /// Default configuration with the binary path taken from `XPDF_PDFINFO_BIN`, if set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let binary_path = lookup(BINARY_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            binary_path,
            ..Default::default()
        }
    }

    /// Use an explicit binary path
    pub fn with_binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary_path = Some(path.into());
        self
    }

    /// Resolve the bundled binary for another platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Resolve the configured binary, failing if it does not exist
    pub fn resolve_binary(&self) -> Result<PathBuf> {
        locator::resolve_for_platform(self.binary_path.as_deref(), self.platform)
    }

    /// Path that [`resolve_binary`](Self::resolve_binary) checks
    pub fn binary_candidate(&self) -> PathBuf {
        match &self.binary_path {
            Some(path) => path.clone(),
            None => locator::default_binary_path(self.platform),
        }
    }
}

impl From<&Path> for PdfInfoConfig {
    fn from(path: &Path) -> Self {
        Self::default().with_binary_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfInfoError;

    #[test]
    fn test_default_config() {
        let config = PdfInfoConfig::default();
        assert_eq!(config.binary_path, None);
        assert_eq!(config.platform, Platform::current());
        assert_eq!(
            config.binary_candidate(),
            locator::default_binary_path(Platform::current())
        );
    }

    #[test]
    fn test_env_override() {
        let config = PdfInfoConfig::from_lookup(|key| {
            assert_eq!(key, BINARY_ENV_VAR);
            Some(OsString::from("/usr/bin/pdfinfo"))
        });
        assert_eq!(config.binary_path, Some(PathBuf::from("/usr/bin/pdfinfo")));
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let config = PdfInfoConfig::from_lookup(|_| Some(OsString::new()));
        assert_eq!(config.binary_path, None);

        let config = PdfInfoConfig::from_lookup(|_| None);
        assert_eq!(config.binary_path, None);
    }

    #[test]
    fn test_builder() {
        let config = PdfInfoConfig::default()
            .with_platform(Platform::Windows)
            .with_binary_path("bin/pdfinfo.exe");
        assert_eq!(config.platform, Platform::Windows);
        assert_eq!(config.binary_candidate(), PathBuf::from("bin/pdfinfo.exe"));
    }

    #[test]
    fn test_platform_selects_bundled_binary() {
        let config = PdfInfoConfig::default().with_platform(Platform::Windows);
        assert!(config
            .binary_candidate()
            .ends_with(Path::new(".bin").join("pdfinfo-win.exe")));
    }

    #[test]
    fn test_resolve_missing_binary() {
        let config = PdfInfoConfig::from(Path::new("does/not/exist"));
        match config.resolve_binary() {
            Err(PdfInfoError::BinaryNotFound(path)) => {
                assert_eq!(path, PathBuf::from("does/not/exist"))
            }
            other => panic!("Expected BinaryNotFound, got {:?}", other),
        }
    }
}
