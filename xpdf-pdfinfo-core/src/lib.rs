//! # xpdf-pdfinfo
//!
//! A typed wrapper around the `pdfinfo` command line tool from xpdf and poppler.
//!
//! The crate does not read PDF files itself. It runs `pdfinfo -box` against a
//! file and turns the printed text block into a [`DocumentInfo`] record:
//!
//! - Creator, producer, creation and modification dates
//! - Tagged, encrypted and optimized flags, form type, page count, PDF version
//! - Page size in points, paper format and rotation
//! - Media, crop, bleed, trim and art boxes
//! - File size in bytes
//!
//! Every record keeps the exact text it was built from in a `raw` field.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xpdf_pdfinfo::PdfInfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Bundled binary from `.bin/`, or pass your own path
//! let pdfinfo = PdfInfo::with_binary("/usr/bin/pdfinfo")?;
//!
//! // Owner and user passwords are optional
//! let info = pdfinfo.extract_info("protected.pdf", Some("owner-secret"), None)?;
//!
//! println!("Pages: {}", info.pages);
//! println!("Version: {}", info.pdf_version);
//! println!("Media box: {} x {}", info.media_box.width, info.media_box.height);
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing Captured Output
//!
//! When the tool output comes from elsewhere, parse it directly:
//!
//! ```rust
//! use xpdf_pdfinfo::parse_output;
//!
//! let info = parse_output("Pages:          1\nPage size:      612 x 792 pts (letter)");
//! assert_eq!(info.pages, 1);
//! assert_eq!(info.page_size.format.as_deref(), Some("letter"));
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - Table-driven parser for pdfinfo output
//! - [`model`] - Record types
//! - [`locator`] - Bundled binary lookup per platform
//! - [`runner`] - Command line construction and process execution
//! - [`config`] - Binary configuration, including the `XPDF_PDFINFO_BIN` override
//! - [`extractor`] - The [`PdfInfo`] facade tying it all together
//!
//! ## Features
//!
//! - `serde` - derive `Serialize` and `Deserialize` for all record types

pub mod config;
pub mod error;
pub mod extractor;
pub mod locator;
pub mod model;
pub mod parser;
pub mod runner;

pub use config::{PdfInfoConfig, BINARY_ENV_VAR};
pub use error::{PdfInfoError, Result};
pub use extractor::PdfInfo;
pub use locator::{default_binary_path, resolve_executable, Platform};
pub use model::{BoxKind, DocumentInfo, FileSize, PageBox, PageSize, MM_TO_PTS};
pub use parser::parse_output;
pub use runner::{build_args, decode_output, run_tool, ProcessRunner, ToolOutput, ToolRunner};
