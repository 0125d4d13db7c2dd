use std::fmt;

use chrono::{DateTime, NaiveDateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoxKind, FileSize, PageBox, PageSize};

/// Everything `pdfinfo -box` reports about one document
///
/// Fields whose line is missing from the tool output keep their defaults:
/// empty strings, `false`, `0` and zero-sized geometry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentInfo {
    /// Document title, printed only when the Info dictionary has one
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords
    pub keywords: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Application that created the original document
    pub creator: String,
    /// Application that produced the PDF
    pub producer: String,
    /// Creation date, as printed by the tool
    pub creation_date: String,
    /// Last modification date, as printed by the tool
    pub mod_date: String,
    /// Whether the PDF is tagged
    pub tagged: bool,
    /// Interactive form type (`none`, `AcroForm`, `XFA`)
    pub form: String,
    /// Number of pages
    pub pages: u64,
    /// Whether the PDF is encrypted
    pub encrypted: bool,
    /// Size of the first page
    pub page_size: PageSize,
    /// Media box of the first page
    pub media_box: PageBox,
    /// Crop box of the first page
    pub crop_box: PageBox,
    /// Bleed box of the first page
    pub bleed_box: PageBox,
    /// Trim box of the first page
    pub trim_box: PageBox,
    /// Art box of the first page
    pub art_box: PageBox,
    /// Size of the file on disk
    pub file_size: FileSize,
    /// Whether the PDF is linearized
    pub optimized: bool,
    /// PDF version, e.g. `1.6`
    pub pdf_version: String,
    /// Complete tool output, trimmed
    pub raw: String,
}

impl DocumentInfo {
    /// Look up one of the five page boxes
    pub fn page_box(&self, kind: BoxKind) -> &PageBox {
        match kind {
            BoxKind::Media => &self.media_box,
            BoxKind::Crop => &self.crop_box,
            BoxKind::Bleed => &self.bleed_box,
            BoxKind::Trim => &self.trim_box,
            BoxKind::Art => &self.art_box,
        }
    }

    pub(crate) fn page_box_mut(&mut self, kind: BoxKind) -> &mut PageBox {
        match kind {
            BoxKind::Media => &mut self.media_box,
            BoxKind::Crop => &mut self.crop_box,
            BoxKind::Bleed => &mut self.bleed_box,
            BoxKind::Trim => &mut self.trim_box,
            BoxKind::Art => &mut self.art_box,
        }
    }

    /// Iterate over all page boxes in output order
    pub fn boxes(&self) -> impl Iterator<Item = (BoxKind, &PageBox)> + '_ {
        BoxKind::ALL.into_iter().map(move |kind| (kind, self.page_box(kind)))
    }

    /// Creation date parsed into a timestamp, if the tool printed a recognised format
    pub fn creation_timestamp(&self) -> Option<NaiveDateTime> {
        parse_tool_date(&self.creation_date)
    }

    /// Modification date parsed into a timestamp, if the tool printed a recognised format
    pub fn modification_timestamp(&self) -> Option<NaiveDateTime> {
        parse_tool_date(&self.mod_date)
    }
}

impl fmt::Display for DocumentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a date in one of the layouts xpdf and poppler print.
///
/// xpdf uses `asctime` (`Mon Feb 17 17:16:36 2020`), poppler appends the zone
/// name (`Mon Feb 17 17:16:36 2020 CET`) and `-isodates` gives ISO-8601.
/// Zone information is dropped; the wall-clock time is returned.
pub(crate) fn parse_tool_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }

    const ASCTIME: &str = "%a %b %e %H:%M:%S %Y";
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, ASCTIME) {
        return Some(dt);
    }

    // Trailing zone abbreviation
    let (head, zone) = value.rsplit_once(char::is_whitespace)?;
    if zone.chars().all(|c| c.is_ascii_alphabetic()) {
        return NaiveDateTime::parse_from_str(head.trim_end(), ASCTIME).ok();
    }

    None
}
