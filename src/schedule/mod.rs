//! # Fixed Output Layout
//!
//! The downstream consumer of a standardized schedule expects a 40-column
//! sheet with the four extracted fields at fixed positions: Year in E,
//! Make in F, VIN in J, and Cost New in V. The remaining columns are carried
//! as labeled blanks so the layout lines up with the rating sheets that
//! consume it. These positions are an external contract and must not move.

use crate::grid::reference::range_reference;

/// Fixed 0-based target column for the model year (column E).
pub const YEAR_COLUMN: usize = 4;
/// Fixed 0-based target column for the make (column F).
pub const MAKE_COLUMN: usize = 5;
/// Fixed 0-based target column for the VIN (column J).
pub const VIN_COLUMN: usize = 9;
/// Fixed 0-based target column for the cost new (column V).
pub const COST_COLUMN: usize = 21;

/// The fixed, ordered header of the standardized schedule (columns A..AN).
pub const OUTPUT_HEADERS: [&str; 40] = [
    "Veh #",
    "Location #",
    "State",
    "Territory",
    "Year",
    "Make",
    "Model",
    "Body Type",
    "GVW",
    "VIN",
    "Class Code",
    "Secondary Class",
    "Radius",
    "Use",
    "Special Industry Class",
    "Seating Capacity",
    "Garaged Zip",
    "Garaged City",
    "Lienholder",
    "Purchase Date",
    "New / Used",
    "Cost New",
    "Stated Amount",
    "Collision Ded",
    "Comprehensive Ded",
    "Liability Limit",
    "Medical Payments",
    "PIP",
    "UM/UIM",
    "Towing",
    "Rental Reimbursement",
    "Driver Name",
    "Driver DOB",
    "License #",
    "License State",
    "MVR Date",
    "Experience",
    "Points",
    "Premium",
    "Notes",
];

/// One cleaned vehicle row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleRecord {
    /// Model year, trimmed as found
    pub year: String,
    /// Make, trimmed as found
    pub make: String,
    /// VIN, trimmed as found
    pub vin: String,
    /// Whole dollars, digits only
    pub cost: String,
}

/// The standardized output grid: the fixed header plus accepted records.
#[derive(Clone, Debug, Default)]
pub struct ScheduleGrid {
    records: Vec<VehicleRecord>,
}

impl ScheduleGrid {
    pub(crate) fn push(&mut self, record: VehicleRecord) {
        self.records.push(record);
    }

    /// Number of accepted records below the header.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Accepted records in input order.
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Materializes the full grid: one header row plus one 40-column row per
    /// record, each field at its fixed target column.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.records.len() + 1);
        rows.push(
            OUTPUT_HEADERS
                .iter()
                .map(|label| (*label).to_owned())
                .collect(),
        );
        for record in &self.records {
            let mut row = vec![String::new(); OUTPUT_HEADERS.len()];
            row[YEAR_COLUMN] = record.year.to_owned();
            row[MAKE_COLUMN] = record.make.to_owned();
            row[VIN_COLUMN] = record.vin.to_owned();
            row[COST_COLUMN] = record.cost.to_owned();
            rows.push(row);
        }
        rows
    }

    /// Declared extent of the grid in A1 notation, spanning the header row
    /// through the last record and the last fixed column (e.g. "A1:AN12").
    pub fn extent(&self) -> String {
        range_reference(0, 0, self.records.len(), OUTPUT_HEADERS.len() - 1)
    }
}
