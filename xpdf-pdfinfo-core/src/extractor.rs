//! High-level extraction API

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::PdfInfoConfig;
use crate::error::{PdfInfoError, Result};
use crate::model::DocumentInfo;
use crate::parser::parse_output;
use crate::runner::{run_tool, ProcessRunner, ToolRunner};

/// Wrapper around one pdfinfo binary
///
/// The binary is resolved and checked once, at construction. Each call to
/// [`extract_info`](Self::extract_info) runs the tool again and returns a
/// fresh [`DocumentInfo`].
#[derive(Debug, Clone)]
pub struct PdfInfo<R = ProcessRunner> {
    binary: PathBuf,
    runner: R,
}

impl PdfInfo<ProcessRunner> {
    /// Use the bundled binary for the current platform
    pub fn new() -> Result<Self> {
        Self::from_config(&PdfInfoConfig::default())
    }

    /// Use the binary at `path`
    pub fn with_binary(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_runner(Some(path.as_ref()), ProcessRunner)
    }

    /// Use the binary described by `config`
    pub fn from_config(config: &PdfInfoConfig) -> Result<Self> {
        Self::from_config_with_runner(config, ProcessRunner)
    }
}

impl<R: ToolRunner> PdfInfo<R> {
    /// Use a custom runner with an explicit binary, or the bundled one when `binary` is `None`
    pub fn with_runner(binary: Option<&Path>, runner: R) -> Result<Self> {
        let config = match binary {
            Some(path) => PdfInfoConfig::default().with_binary_path(path),
            None => PdfInfoConfig::default(),
        };
        Self::from_config_with_runner(&config, runner)
    }

    /// Use a custom runner with the binary described by `config`
    pub fn from_config_with_runner(config: &PdfInfoConfig, runner: R) -> Result<Self> {
        let binary = config.resolve_binary()?;
        Ok(Self { binary, runner })
    }

    /// Path of the binary this extractor runs
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// The runner used to execute the binary
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run pdfinfo on `file` and parse what it prints.
    ///
    /// Passwords are passed to the tool only when non-empty.
    ///
    /// # Errors
    ///
    /// - [`PdfInfoError::FileNotFound`] if `file` does not exist; the tool is not run.
    /// - [`PdfInfoError::ToolFailed`] if the tool exits with a non-zero status,
    ///   e.g. for a protected file without the right password or for a file that
    ///   is not a PDF. Its output is discarded.
    /// - [`PdfInfoError::Spawn`] if the binary could not be started.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use xpdf_pdfinfo::PdfInfo;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let pdfinfo = PdfInfo::with_binary("/usr/bin/pdfinfo")?;
    /// let info = pdfinfo.extract_info("document.pdf", None, None)?;
    ///
    /// println!("Pages: {}", info.pages);
    /// println!(
    ///     "Page size: {} x {} pts",
    ///     info.page_size.width_pts, info.page_size.height_pts
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn extract_info(
        &self,
        file: impl AsRef<Path>,
        owner_password: Option<&str>,
        user_password: Option<&str>,
    ) -> Result<DocumentInfo> {
        let file = file.as_ref();
        if !file.exists() {
            return Err(PdfInfoError::FileNotFound(file.to_path_buf()));
        }

        let output = run_tool(
            &self.runner,
            &self.binary,
            file,
            owner_password,
            user_password,
        )?;

        let stdout = output.into_stdout().inspect_err(|err| {
            warn!(file = %file.display(), error = %err, "pdfinfo failed");
        })?;

        let info = parse_output(&stdout);
        debug!(
            file = %file.display(),
            pages = info.pages,
            version = %info.pdf_version,
            "extracted pdf info"
        );
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ToolOutput;
    use std::ffi::OsString;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct RecordingRunner {
        output: ToolOutput,
        calls: Mutex<Vec<Vec<OsString>>>,
    }

    impl RecordingRunner {
        fn replying(stdout: &str, code: i32) -> Self {
            Self {
                output: ToolOutput {
                    stdout: stdout.to_string(),
                    stderr: if code == 0 {
                        String::new()
                    } else {
                        "Command Line Error: Incorrect password".to_string()
                    },
                    code: Some(code),
                },
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<OsString>> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ToolRunner for RecordingRunner {
        fn run(&self, _program: &Path, args: &[OsString]) -> Result<ToolOutput> {
            self.calls.lock().unwrap().push(args.to_vec());
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_missing_binary() {
        let runner = RecordingRunner::default();
        let result = PdfInfo::with_runner(Some(Path::new("xxx")), runner);
        assert!(matches!(result, Err(PdfInfoError::BinaryNotFound(_))));
    }

    #[test]
    fn test_missing_file_does_not_run_tool() {
        let binary = NamedTempFile::new().unwrap();
        let pdfinfo =
            PdfInfo::with_runner(Some(binary.path()), RecordingRunner::replying("", 0)).unwrap();

        let result = pdfinfo.extract_info("test.pdf.not-exists", None, None);
        assert!(matches!(result, Err(PdfInfoError::FileNotFound(_))));
        assert!(pdfinfo.runner().calls().is_empty());
    }

    #[test]
    fn test_failed_run_is_not_parsed() {
        let binary = NamedTempFile::new().unwrap();
        let pdf = NamedTempFile::new().unwrap();
        let pdfinfo = PdfInfo::with_runner(
            Some(binary.path()),
            RecordingRunner::replying("Pages:          1", 1),
        )
        .unwrap();

        match pdfinfo.extract_info(pdf.path(), None, None) {
            Err(PdfInfoError::ToolFailed { code, stderr }) => {
                assert_eq!(code, Some(1));
                assert!(stderr.contains("Incorrect password"));
            }
            other => panic!("Expected ToolFailed, got {:?}", other),
        }
        assert_eq!(pdfinfo.runner().calls().len(), 1);
    }

    #[test]
    fn test_successful_run() {
        let binary = NamedTempFile::new().unwrap();
        let pdf = NamedTempFile::new().unwrap();
        let pdfinfo = PdfInfo::with_runner(
            Some(binary.path()),
            RecordingRunner::replying("Pages:          3\nOptimized:      yes\n", 0),
        )
        .unwrap();

        let info = pdfinfo
            .extract_info(pdf.path(), Some("secret"), None)
            .unwrap();
        assert_eq!(info.pages, 3);
        assert!(info.optimized);
        assert_eq!(info.raw, "Pages:          3\nOptimized:      yes");

        let calls = pdfinfo.runner().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0], OsString::from("-box"));
        assert_eq!(calls[0][1], OsString::from("-opw"));
        assert_eq!(calls[0][2], OsString::from("secret"));
        assert_eq!(calls[0][3].as_os_str(), pdf.path().as_os_str());
    }

    #[test]
    fn test_each_call_returns_fresh_record() {
        let binary = NamedTempFile::new().unwrap();
        let pdf = NamedTempFile::new().unwrap();
        let pdfinfo = PdfInfo::with_runner(
            Some(binary.path()),
            RecordingRunner::replying("Pages:          2", 0),
        )
        .unwrap();

        let mut first = pdfinfo.extract_info(pdf.path(), None, None).unwrap();
        first.pages = 99;
        let second = pdfinfo.extract_info(pdf.path(), None, None).unwrap();
        assert_eq!(second.pages, 2);
        assert_eq!(pdfinfo.binary(), binary.path());
    }
}
