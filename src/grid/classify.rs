//! Junk-row classification and field cleanup.
//!
//! Real-world schedules embed rows that must never reach the output: blank
//! separators, repeated header lines, section labels that group tractors and
//! trailers, and subtotal or grand-total lines. The rules run in a fixed
//! order and the first matching rule wins.

use crate::grid::cell::CellValue;
use crate::grid::ColumnAssignment;
use crate::schedule::VehicleRecord;

/// Section labels that group vehicle rows in multi-part schedules.
const SECTION_WORDS: [&str; 2] = ["tractor", "trailer"];

/// Marker that identifies subtotal and grand-total lines.
const TOTAL_WORD: &str = "total";

/// Why a candidate row was excluded from the output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// All four resolved field cells are blank.
    Blank,
    /// The row repeats the header labels inside the data region.
    HeaderEcho,
    /// A section label such as "TRACTORS" or "TRAILERS".
    SectionLabel,
    /// A subtotal or grand-total line.
    TotalLine,
}

/// Applies the skip rules in order and returns the first that matches, or
/// None when the row is real data.
pub(crate) fn skip_reason(row: &[CellValue], columns: &ColumnAssignment) -> Option<SkipReason> {
    let year = normalized_at(row, columns.year);
    let make = normalized_at(row, columns.make);
    let vin = normalized_at(row, columns.vin);
    let cost = normalized_at(row, columns.cost);

    if year.is_empty() && make.is_empty() && vin.is_empty() && cost.is_empty() {
        return Some(SkipReason::Blank);
    }
    if year.eq_ignore_ascii_case("year")
        && make.eq_ignore_ascii_case("make")
        && vin.eq_ignore_ascii_case("vin")
    {
        return Some(SkipReason::HeaderEcho);
    }
    let make_lowered = make.to_lowercase();
    if SECTION_WORDS.iter().any(|word| make_lowered.contains(word)) {
        return Some(SkipReason::SectionLabel);
    }
    // Total lines are caught anywhere in the row, not just in the resolved
    // columns; subtotal labels often sit in otherwise unmapped cells.
    if row
        .iter()
        .any(|cell| cell.normalized().to_lowercase().contains(TOTAL_WORD))
    {
        return Some(SkipReason::TotalLine);
    }
    None
}

/// Builds the cleaned output record from an accepted row.
pub(crate) fn extract(row: &[CellValue], columns: &ColumnAssignment) -> VehicleRecord {
    VehicleRecord {
        year: normalized_at(row, columns.year),
        make: normalized_at(row, columns.make),
        vin: normalized_at(row, columns.vin),
        cost: digits_only(&normalized_at(row, columns.cost)),
    }
}

/// Reduces a cost value to whole dollars: the fraction is discarded (no
/// rounding) and every remaining non-digit character is stripped, so
/// "$20,000.00" becomes "20000".
fn digits_only(value: &str) -> String {
    let dollars = value.split_once('.').map_or(value, |(dollars, _)| dollars);
    dollars
        .chars()
        .filter(|character| character.is_ascii_digit())
        .collect()
}

/// Normalized view of the cell at the index, blank when the row is short.
fn normalized_at(row: &[CellValue], index: usize) -> String {
    row.get(index).map(CellValue::normalized).unwrap_or_default()
}
