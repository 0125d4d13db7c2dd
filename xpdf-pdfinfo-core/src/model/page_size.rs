use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points per millimetre
pub const MM_TO_PTS: f64 = 2.83464567;

/// Size of the first page as reported on the `Page size:` line
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageSize {
    /// Width in points
    pub width_pts: f64,
    /// Height in points
    pub height_pts: f64,
    /// Paper format recognised by pdfinfo, e.g. `letter` or `A4`
    pub format: Option<String>,
    /// Page rotation in degrees
    pub rotated_degrees: i32,
    /// Line this record was read from
    pub raw: String,
}

impl PageSize {
    /// Width in millimetres
    pub fn width_mm(&self) -> f64 {
        self.width_pts / MM_TO_PTS
    }

    /// Height in millimetres
    pub fn height_mm(&self) -> f64 {
        self.height_pts / MM_TO_PTS
    }

    /// Whether the page is rotated by a quarter turn, swapping width and height on screen
    pub fn is_landscape_rotation(&self) -> bool {
        self.rotated_degrees.rem_euclid(180) == 90
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
