//! Page size, file size and page box lines

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::model::{BoxKind, FileSize, PageBox, PageSize};

lazy_static! {
    static ref PAGE_SIZE: Regex = Regex::new(concat!(
        r"(?m)^[ \t]*Page size:[ \t]*",
        r"(?P<width>[\d.,]+) x (?P<height>[\d.,]+) pts",
        r"(?: \((?P<format>\w+)\))?",
        r"(?: \(rotated (?P<rotation>-?[\d.,]+) degrees\))?",
        r"[ \t\r]*$",
    ))
    .expect("page size pattern is valid");

    static ref FILE_SIZE: Regex =
        Regex::new(r"(?m)^[ \t]*File size:[ \t]*(?P<value>.*?)[ \t\r]*$")
            .expect("file size pattern is valid");

    static ref PAGE_ROT: Regex =
        Regex::new(r"(?m)^[ \t]*Page rot:[ \t]*(?P<rotation>-?[\d.,]+)[ \t\r]*$")
            .expect("page rotation pattern is valid");

    static ref BOX_LINES: Vec<(BoxKind, Regex)> = BoxKind::ALL
        .iter()
        .map(|&kind| (kind, box_pattern(kind)))
        .collect();
}

const NUMBER: &str = r"[-\d.,]+";

fn box_pattern(kind: BoxKind) -> Regex {
    let pattern = format!(
        r"(?m)^[ \t]*{label}:[ \t]*(?P<x>{n})[ \t]+(?P<y>{n})[ \t]+(?P<width>{n})[ \t]+(?P<height>{n})[ \t\r]*$",
        label = kind.label(),
        n = NUMBER,
    );
    Regex::new(&pattern).expect("box pattern is valid")
}

/// Parse a number as printed by pdfinfo.
///
/// Commas are treated as thousands separators. Anything that still fails to
/// parse counts as zero.
pub fn parse_number(value: &str) -> f64 {
    let cleaned: String = value.chars().filter(|&c| c != ',').collect();
    cleaned.trim().parse().unwrap_or(0.0)
}

fn number(caps: &Captures<'_>, name: &str) -> f64 {
    caps.name(name).map_or(0.0, |m| parse_number(m.as_str()))
}

/// Parse the `Page size:` line
///
/// The rotation comes from its `(rotated N degrees)` suffix. poppler prints
/// it on a separate `Page rot:` line instead, which is used when the suffix
/// is absent.
pub fn parse_page_size(text: &str) -> Option<PageSize> {
    let caps = PAGE_SIZE.captures(text)?;
    let rotation = match caps.name("rotation") {
        Some(m) => parse_number(m.as_str()),
        None => PAGE_ROT
            .captures(text)
            .map_or(0.0, |rot| number(&rot, "rotation")),
    };

    Some(PageSize {
        width_pts: number(&caps, "width"),
        height_pts: number(&caps, "height"),
        format: caps.name("format").map(|m| m.as_str().to_string()),
        rotated_degrees: rotation.round() as i32,
        raw: caps[0].trim().to_string(),
    })
}

/// Parse the `File size:` line, accepting both `byte` and `bytes`
pub fn parse_file_size(text: &str) -> Option<FileSize> {
    let caps = FILE_SIZE.captures(text)?;
    let value = caps.name("value").map_or("", |m| m.as_str());
    let digits = value
        .strip_suffix("bytes")
        .or_else(|| value.strip_suffix("byte"))
        .unwrap_or(value);
    let cleaned: String = digits.chars().filter(|&c| c != ',').collect();

    Some(FileSize {
        bytes: cleaned.trim().parse().unwrap_or(0),
        raw: caps[0].trim().to_string(),
    })
}

/// Parse the line for one page box
pub fn parse_page_box(text: &str, kind: BoxKind) -> Option<PageBox> {
    let (_, pattern) = BOX_LINES.iter().find(|(k, _)| *k == kind)?;
    let caps = pattern.captures(text)?;
    Some(PageBox::new(
        number(&caps, "x"),
        number(&caps, "y"),
        number(&caps, "width"),
        number(&caps, "height"),
        caps[0].trim(),
    ))
}
