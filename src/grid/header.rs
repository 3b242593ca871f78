//! Header row location and label-based column lookup.

use crate::grid::cell::CellValue;
use crate::grid::matcher::Field;
use crate::grid::Grid;

/// Marker words that identify the four fields in header labels. "stated" is
/// an accepted alias for the cost column (stated-value schedules).
const YEAR_MARKER: &str = "year";
const MAKE_MARKER: &str = "make";
const VIN_MARKER: &str = "vin";
const COST_MARKERS: [&str; 2] = ["cost", "stated"];

/// Scans all rows top-to-bottom and returns the index of the first row whose
/// text cells collectively mention year, make, vin, and cost (or stated).
/// Non-text cells contribute nothing to the test.
pub(crate) fn locate(grid: &Grid) -> Option<usize> {
    (0..grid.row_count()).find(|&index| {
        let row = grid.row(index);
        Field::ALL
            .iter()
            .all(|&field| find_label(row, field).is_some())
    })
}

/// Returns the index of the first cell in the row whose lower-cased text
/// contains the field's marker word.
pub(crate) fn find_label(row: &[CellValue], field: Field) -> Option<usize> {
    row.iter().position(|cell| {
        let lowered = cell.lowered_text();
        match field {
            Field::Year => lowered.contains(YEAR_MARKER),
            Field::Make => lowered.contains(MAKE_MARKER),
            Field::Vin => lowered.contains(VIN_MARKER),
            Field::Cost => COST_MARKERS.iter().any(|marker| lowered.contains(marker)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<&str>>) -> Grid {
        Grid::from(rows)
    }

    #[test]
    fn locates_qualifying_row() {
        let grid = grid(vec![
            vec!["Fleet Schedule 2024", "", ""],
            vec!["Year", "Make", "VIN", "Cost"],
            vec!["2005", "FORD", "1HGCM82633A123456", "$1,000"],
        ]);
        assert_eq!(locate(&grid), Some(1));
    }

    #[test]
    fn first_qualifying_row_wins() {
        let grid = grid(vec![
            vec!["Model Year", "Make", "VIN Number", "Stated Value"],
            vec!["Year", "Make", "VIN", "Cost"],
        ]);
        assert_eq!(locate(&grid), Some(0));
    }

    #[test]
    fn stated_is_a_cost_alias() {
        let grid = grid(vec![vec!["Year", "Make", "VIN", "Stated Amount"]]);
        assert_eq!(locate(&grid), Some(0));
    }

    #[test]
    fn markers_are_case_insensitive_substrings() {
        let grid = grid(vec![vec![
            "MODEL YEAR",
            "Vehicle Make",
            "Full VIN",
            "Cost New",
        ]]);
        assert_eq!(locate(&grid), Some(0));
    }

    #[test]
    fn incomplete_rows_do_not_qualify() {
        let grid = grid(vec![
            vec!["Year", "Make", "VIN"], // no cost label
            vec!["Year", "Make", "Cost"], // no vin label
        ]);
        assert_eq!(locate(&grid), None);
    }

    #[test]
    fn numeric_cells_are_ignored() {
        let grid = Grid::new(vec![vec![
            CellValue::Number(2005.0),
            CellValue::from("Make"),
            CellValue::from("VIN"),
            CellValue::from("Cost"),
        ]]);
        // The numeric cell cannot carry the "year" marker.
        assert_eq!(locate(&grid), None);
    }

    #[test]
    fn find_label_returns_first_match_per_field() {
        let row: Vec<CellValue> = vec![
            CellValue::from("Veh #"),
            CellValue::from("Cost New"),
            CellValue::from("Stated Amount"),
        ];
        assert_eq!(find_label(&row, Field::Cost), Some(1));
        assert_eq!(find_label(&row, Field::Year), None);
    }
}
