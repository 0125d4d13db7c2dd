//! Running the pdfinfo process
//!
//! The command line is always
//! `pdfinfo -box [-opw <owner>] [-upw <user>] <file>`. Execution goes through
//! the [`ToolRunner`] trait so that callers can swap in their own process
//! handling, for example to add a timeout or run inside a sandbox.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{PdfInfoError, Result};

/// Flag asking pdfinfo to print the page boxes
pub const BOX_FLAG: &str = "-box";
/// Flag preceding the owner password
pub const OWNER_PASSWORD_FLAG: &str = "-opw";
/// Flag preceding the user password
pub const USER_PASSWORD_FLAG: &str = "-upw";

/// Captured result of one tool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Standard output, decoded with [`decode_output`]
    pub stdout: String,
    /// Standard error, decoded with [`decode_output`]
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ToolOutput {
    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a failed run into [`PdfInfoError::ToolFailed`], keeping stdout otherwise
    pub fn into_stdout(self) -> Result<String> {
        if self.success() {
            Ok(self.stdout)
        } else {
            Err(PdfInfoError::ToolFailed {
                code: self.code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Something that can execute a program and capture its output
///
/// # Example
///
/// ```rust
/// use std::ffi::OsString;
/// use std::path::Path;
/// use xpdf_pdfinfo::{Result, ToolOutput, ToolRunner};
///
/// struct CannedRunner(&'static str);
///
/// impl ToolRunner for CannedRunner {
///     fn run(&self, _program: &Path, _args: &[OsString]) -> Result<ToolOutput> {
///         Ok(ToolOutput {
///             stdout: self.0.to_string(),
///             stderr: String::new(),
///             code: Some(0),
///         })
///     }
/// }
/// ```
pub trait ToolRunner: Send + Sync {
    /// Run `program` with `args`, wait for it and capture its output
    ///
    /// A non-zero exit is not an error at this level; it is reported through
    /// [`ToolOutput::code`].
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ToolOutput>;
}

/// Runs the tool as a child process with [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ToolOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| PdfInfoError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        Ok(ToolOutput {
            stdout: decode_output(output.stdout),
            stderr: decode_output(output.stderr),
            code: output.status.code(),
        })
    }
}

/// Decode bytes printed by the tool.
///
/// UTF-8 is taken as is. Anything else is read as Latin-1, xpdf's default
/// text encoding, which maps every byte to exactly one char so the original
/// bytes can always be recovered.
pub fn decode_output(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}

/// Build the argument vector for one run.
///
/// Password flags are only added for non-empty passwords, and the target
/// file always comes last.
pub fn build_args(file: &Path, owner_password: Option<&str>, user_password: Option<&str>) -> Vec<OsString> {
    let mut args = vec![OsString::from(BOX_FLAG)];

    if let Some(password) = owner_password.filter(|p| !p.is_empty()) {
        args.push(OWNER_PASSWORD_FLAG.into());
        args.push(password.into());
    }

    if let Some(password) = user_password.filter(|p| !p.is_empty()) {
        args.push(USER_PASSWORD_FLAG.into());
        args.push(password.into());
    }

    args.push(file.as_os_str().to_os_string());
    args
}

/// Run the tool once against `file`
pub fn run_tool<R: ToolRunner + ?Sized>(
    runner: &R,
    program: &Path,
    file: &Path,
    owner_password: Option<&str>,
    user_password: Option<&str>,
) -> Result<ToolOutput> {
    let args = build_args(file, owner_password, user_password);
    debug!(
        program = %program.display(),
        file = %file.display(),
        owner_password = owner_password.is_some_and(|p| !p.is_empty()),
        user_password = user_password.is_some_and(|p| !p.is_empty()),
        "running pdfinfo"
    );
    runner.run(program, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_args_without_passwords() {
        let args = build_args(Path::new("test.pdf"), None, None);
        assert_eq!(strings(&args), vec!["-box", "test.pdf"]);
    }

    #[test]
    fn test_args_with_both_passwords() {
        let args = build_args(Path::new("test.pdf"), Some("owner"), Some("user"));
        assert_eq!(
            strings(&args),
            vec!["-box", "-opw", "owner", "-upw", "user", "test.pdf"]
        );
    }

    #[test]
    fn test_empty_passwords_are_skipped() {
        let args = build_args(Path::new("test.pdf"), Some(""), Some("user"));
        assert_eq!(strings(&args), vec!["-box", "-upw", "user", "test.pdf"]);

        let args = build_args(Path::new("test.pdf"), Some("Pass12345678"), Some(""));
        assert_eq!(strings(&args), vec!["-box", "-opw", "Pass12345678", "test.pdf"]);
    }

    #[test]
    fn test_tool_output_success() {
        let output = ToolOutput {
            stdout: "Pages: 1".to_string(),
            stderr: String::new(),
            code: Some(0),
        };
        assert!(output.success());
        assert_eq!(output.into_stdout().unwrap(), "Pages: 1");
    }

    #[test]
    fn test_tool_output_failure() {
        let output = ToolOutput {
            stdout: "partial".to_string(),
            stderr: "Command Line Error: Incorrect password\n".to_string(),
            code: Some(1),
        };
        assert!(!output.success());
        match output.into_stdout() {
            Err(PdfInfoError::ToolFailed { code, stderr }) => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "Command Line Error: Incorrect password");
            }
            other => panic!("Expected ToolFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_signal_is_failure() {
        let output = ToolOutput {
            code: None,
            ..Default::default()
        };
        assert!(!output.success());
        assert!(output.into_stdout().is_err());
    }

    #[test]
    fn test_decode_utf8_output() {
        assert_eq!(decode_output("Creator: Café".as_bytes().to_vec()), "Creator: Café");
        assert_eq!(decode_output(Vec::new()), "");
    }

    #[test]
    fn test_decode_latin1_output() {
        let bytes = b"Creator:        Caf\xe9\nProducer:       \xc6\xd8\xc5\n".to_vec();
        let text = decode_output(bytes.clone());
        assert_eq!(text, "Creator:        Café\nProducer:       ÆØÅ\n");

        let back: Vec<u8> = text.chars().map(|c| c as u8).collect();
        assert_eq!(back, bytes);
    }

    #[test]
    fn test_process_runner_spawn_error() {
        let program = PathBuf::from("/nonexistent/dir/pdfinfo-linux");
        let result = ProcessRunner.run(&program, &[]);
        match result {
            Err(PdfInfoError::Spawn { program: p, .. }) => assert_eq!(p, program),
            other => panic!("Expected Spawn error, got {:?}", other),
        }
    }
}
