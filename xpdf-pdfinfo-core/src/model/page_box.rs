//! Page boxes reported by `pdfinfo -box`

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five page boxes a PDF page can define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoxKind {
    /// Physical medium size
    Media,
    /// Default clipping region
    Crop,
    /// Clipping region for production output, including bleed
    Bleed,
    /// Intended dimensions of the finished page
    Trim,
    /// Extent of the meaningful content
    Art,
}

impl BoxKind {
    /// All box kinds in the order pdfinfo prints them
    pub const ALL: [BoxKind; 5] = [
        BoxKind::Media,
        BoxKind::Crop,
        BoxKind::Bleed,
        BoxKind::Trim,
        BoxKind::Art,
    ];

    /// Label used by pdfinfo for this box
    pub fn label(&self) -> &'static str {
        match self {
            BoxKind::Media => "MediaBox",
            BoxKind::Crop => "CropBox",
            BoxKind::Bleed => "BleedBox",
            BoxKind::Trim => "TrimBox",
            BoxKind::Art => "ArtBox",
        }
    }
}

impl fmt::Display for BoxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One page box, in points
///
/// The four numbers are kept in the order pdfinfo prints them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageBox {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Line this box was read from, empty if the line was missing
    pub raw: String,
}

impl PageBox {
    /// Create a box from its four numbers and source line
    pub fn new(x: f64, y: f64, width: f64, height: f64, raw: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            raw: raw.into(),
        }
    }

    /// Whether the tool output contained a line for this box
    pub fn is_present(&self) -> bool {
        !self.raw.is_empty()
    }
}

impl fmt::Display for PageBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_labels() {
        let labels: Vec<&str> = BoxKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec!["MediaBox", "CropBox", "BleedBox", "TrimBox", "ArtBox"]
        );
        assert_eq!(BoxKind::Trim.to_string(), "TrimBox");
    }

    #[test]
    fn test_default_box_is_absent() {
        let page_box = PageBox::default();
        assert_eq!(page_box.x, 0.0);
        assert_eq!(page_box.height, 0.0);
        assert!(!page_box.is_present());
        assert_eq!(page_box.to_string(), "");
    }

    #[test]
    fn test_display_is_raw_line() {
        let raw = "MediaBox:           0.00     0.00   612.00   792.00";
        let page_box = PageBox::new(0.0, 0.0, 612.0, 792.0, raw);
        assert!(page_box.is_present());
        assert_eq!(page_box.to_string(), raw);
    }
}
