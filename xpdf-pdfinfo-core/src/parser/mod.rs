//! pdfinfo Output Parser
//!
//! Turns the text block printed by `pdfinfo -box` into a [`DocumentInfo`].
//! A typical block looks like this:
//!
//! ```text
//! Creator:        Acrobat Pro DC 20.6.20034
//! Producer:       Acrobat Pro DC 20.6.20034
//! CreationDate:   Mon Feb 17 17:16:36 2020
//! ModDate:        Mon Feb 17 17:18:29 2020
//! Tagged:         no
//! Form:           none
//! Pages:          1
//! Encrypted:      no
//! Page size:      612 x 792 pts (letter) (rotated 0 degrees)
//! MediaBox:           0.00     0.00   612.00   792.00
//! CropBox:            0.00     0.00   612.00   792.00
//! BleedBox:           0.00     0.00   612.00   792.00
//! TrimBox:            0.00     0.00   612.00   792.00
//! ArtBox:             0.00     0.00   612.00   792.00
//! File size:      9146 bytes
//! Optimized:      yes
//! PDF version:    1.6
//! ```
//!
//! Every field is matched against a whole line, and the first line carrying a
//! label wins. Parsing is total: missing or malformed lines leave the
//! corresponding fields at their defaults, and the result's `raw` field is
//! always the complete trimmed input.

pub mod fields;
pub mod geometry;

use tracing::trace;

use crate::model::{BoxKind, DocumentInfo};

pub use self::fields::{FieldKind, FieldValue, ScalarField, SCALAR_FIELDS};
pub use self::geometry::parse_number;

/// Parse the complete output of `pdfinfo -box`
///
/// # Example
///
/// ```rust
/// use xpdf_pdfinfo::parse_output;
///
/// let info = parse_output("Pages:          12\nEncrypted:      no\nPDF version:    1.4\n");
/// assert_eq!(info.pages, 12);
/// assert!(!info.encrypted);
/// assert_eq!(info.pdf_version, "1.4");
/// assert_eq!(info.page_size.width_pts, 0.0);
/// ```
pub fn parse_output(output: &str) -> DocumentInfo {
    let text = output.trim();
    let mut info = DocumentInfo {
        raw: text.to_string(),
        ..Default::default()
    };

    let matched = fields::extract_scalar_fields(text, &mut info);

    if let Some(page_size) = geometry::parse_page_size(text) {
        info.page_size = page_size;
    }
    if let Some(file_size) = geometry::parse_file_size(text) {
        info.file_size = file_size;
    }

    let mut boxes = 0;
    for kind in BoxKind::ALL {
        if let Some(page_box) = geometry::parse_page_box(text, kind) {
            *info.page_box_mut(kind) = page_box;
            boxes += 1;
        }
    }

    trace!(
        scalar_fields = matched,
        boxes,
        page_size = !info.page_size.raw.is_empty(),
        "parsed pdfinfo output"
    );

    info
}
