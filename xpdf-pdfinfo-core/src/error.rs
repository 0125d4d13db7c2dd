use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfInfoError {
    #[error("Binary file not found: {}", .0.display())]
    BinaryNotFound(PathBuf),

    #[error("Pdf file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("pdfinfo exited with {}: {stderr}", exit_label(.code))]
    ToolFailed { code: Option<i32>, stderr: String },

    #[error("Failed to execute {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PdfInfoError>;

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl PdfInfoError {
    /// Exit code of the external tool, if this error came from a failed run.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PdfInfoError::ToolFailed { code, .. } => *code,
            _ => None,
        }
    }
}
