//! Typed records built from `pdfinfo` output
//!
//! Every record keeps the text it was derived from in a `raw` field, and its
//! `Display` implementation writes that text back unchanged.

mod document_info;
mod file_size;
mod page_box;
mod page_size;

pub use document_info::DocumentInfo;
pub use file_size::FileSize;
pub use page_box::{BoxKind, PageBox};
pub use page_size::{PageSize, MM_TO_PTS};
