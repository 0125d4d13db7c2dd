//! Scalar `Label: value` fields
//!
//! Each field is described once in a table: the label pdfinfo prints, how the
//! value is coerced, and where it lands in [`DocumentInfo`]. Fields whose line
//! is absent are left at the record's defaults.

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::DocumentInfo;

/// How the text after a label is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Verbatim string up to end of line
    Text,
    /// `yes` is true, anything else is false
    Flag,
    /// Unsigned integer. Unparseable values count as zero, oversized ones saturate
    Count,
}

/// A coerced field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Count(u64),
}

impl FieldKind {
    /// Convert the captured value text
    pub fn coerce(self, value: &str) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(value.to_string()),
            // poppler appends permissions after the token: `yes (print:yes copy:no ...)`
            FieldKind::Flag => FieldValue::Flag(value.split_whitespace().next() == Some("yes")),
            FieldKind::Count => FieldValue::Count(parse_count(value)),
        }
    }
}

fn parse_count(value: &str) -> u64 {
    let value = value.trim();
    match value.parse() {
        Ok(n) => n,
        Err(_) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => u64::MAX,
        Err(_) => 0,
    }
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            _ => String::new(),
        }
    }

    fn into_optional_text(self) -> Option<String> {
        Some(self.into_text()).filter(|s| !s.is_empty())
    }

    fn into_flag(self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    fn into_count(self) -> u64 {
        match self {
            FieldValue::Count(n) => n,
            _ => 0,
        }
    }
}

/// One entry of the field table
pub struct ScalarField {
    label: &'static str,
    kind: FieldKind,
    matcher: Regex,
    assign: fn(&mut DocumentInfo, FieldValue),
}

impl ScalarField {
    fn new(label: &'static str, kind: FieldKind, assign: fn(&mut DocumentInfo, FieldValue)) -> Self {
        Self {
            label,
            kind,
            matcher: line_pattern(label),
            assign,
        }
    }

    /// Label as printed by pdfinfo, without the colon
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Value of the first line carrying this label
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.matcher
            .captures(text)
            .and_then(|caps| caps.name("value"))
            .map(|m| m.as_str())
    }

    /// Look the field up in `text` and store it in `info` when present
    pub fn extract(&self, text: &str, info: &mut DocumentInfo) -> bool {
        match self.find(text) {
            Some(value) => {
                (self.assign)(info, self.kind.coerce(value));
                true
            }
            None => false,
        }
    }
}

/// Pattern matching one whole `Label: value` line
fn line_pattern(label: &str) -> Regex {
    let pattern = format!(
        r"(?m)^[ \t]*{}:[ \t]*(?P<value>.*?)[ \t\r]*$",
        regex::escape(label)
    );
    Regex::new(&pattern).expect("field label pattern is valid")
}

lazy_static! {
    /// The scalar fields, in the order pdfinfo prints them
    pub static ref SCALAR_FIELDS: Vec<ScalarField> = vec![
        ScalarField::new("Title", FieldKind::Text, |info, v| info.title = v.into_optional_text()),
        ScalarField::new("Subject", FieldKind::Text, |info, v| info.subject = v.into_optional_text()),
        ScalarField::new("Keywords", FieldKind::Text, |info, v| info.keywords = v.into_optional_text()),
        ScalarField::new("Author", FieldKind::Text, |info, v| info.author = v.into_optional_text()),
        ScalarField::new("Creator", FieldKind::Text, |info, v| info.creator = v.into_text()),
        ScalarField::new("Producer", FieldKind::Text, |info, v| info.producer = v.into_text()),
        ScalarField::new("CreationDate", FieldKind::Text, |info, v| info.creation_date = v.into_text()),
        ScalarField::new("ModDate", FieldKind::Text, |info, v| info.mod_date = v.into_text()),
        ScalarField::new("Tagged", FieldKind::Flag, |info, v| info.tagged = v.into_flag()),
        ScalarField::new("Form", FieldKind::Text, |info, v| info.form = v.into_text()),
        ScalarField::new("Pages", FieldKind::Count, |info, v| info.pages = v.into_count()),
        ScalarField::new("Encrypted", FieldKind::Flag, |info, v| info.encrypted = v.into_flag()),
        ScalarField::new("Optimized", FieldKind::Flag, |info, v| info.optimized = v.into_flag()),
        ScalarField::new("PDF version", FieldKind::Text, |info, v| info.pdf_version = v.into_text()),
    ];
}

/// Fill every scalar field found in `text`, returning how many matched
pub fn extract_scalar_fields(text: &str, info: &mut DocumentInfo) -> usize {
    SCALAR_FIELDS
        .iter()
        .filter(|field| field.extract(text, info))
        .count()
}
