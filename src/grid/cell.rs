use std::fmt::Display;

/// A single raw cell value as handed in by the upload collaborator.
///
/// Spreadsheet decoders produce strings, numbers, or nothing at all. The
/// engine never inspects the raw shapes directly; every pattern test goes
/// through [`CellValue::normalized`], which collapses all three into one
/// trimmed string view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    /// Missing or blank cell
    #[default]
    Empty,
    /// Numeric cell as decoded from the source file
    Number(f64),
    /// Text cell, kept verbatim
    Text(String),
}

impl CellValue {
    /// Returns the canonical trimmed string view used for all pattern tests.
    /// Blank and missing cells normalize to the empty string; numbers use
    /// their shortest display form (a numeric 2005 normalizes to "2005").
    pub fn normalized(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(value) => value.to_string(),
            CellValue::Text(value) => value.trim().to_owned(),
        }
    }

    /// Returns the lower-cased text content, or an empty string for non-text
    /// cells. Header detection only ever looks at text cells.
    pub(crate) fn lowered_text(&self) -> String {
        match self {
            CellValue::Text(value) => value.to_lowercase(),
            _ => String::new(),
        }
    }

    /// True when the cell normalizes to the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(_) => false,
            CellValue::Text(value) => value.trim().is_empty(),
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}
