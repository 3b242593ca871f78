//! Content-pattern column scoring for grids without a usable header.
//!
//! A small sample of data rows is scored against the four field predicates,
//! one counter record per column, and each field independently claims the
//! column with the highest count. The counters live only for the duration of
//! one resolution and are discarded afterwards.

use crate::grid::cell::CellValue;
use crate::grid::matcher;
use crate::grid::matcher::Field;

/// Number of data rows sampled when scoring columns.
pub(crate) const SAMPLE_ROWS: usize = 5;

/// Minimum per-column match counts before a field is trusted.
pub(crate) const MIN_YEAR_MATCHES: usize = 2;
pub(crate) const MIN_MAKE_MATCHES: usize = 2;
pub(crate) const MIN_VIN_MATCHES: usize = 1;
pub(crate) const MIN_COST_MATCHES: usize = 1;

/// Match counters for one column across the sampled rows.
#[derive(Copy, Clone, Debug, Default)]
struct ColumnScore {
    year: usize,
    make: usize,
    vin: usize,
    cost: usize,
    total: usize,
}

impl ColumnScore {
    fn count(&self, field: Field) -> usize {
        match field {
            Field::Year => self.year,
            Field::Make => self.make,
            Field::Vin => self.vin,
            Field::Cost => self.cost,
        }
    }
}

/// Per-column scores over a sample of data rows.
#[derive(Debug)]
pub(crate) struct ColumnScores {
    columns: Vec<ColumnScore>,
}

impl ColumnScores {
    /// Tallies the four predicates over up to [`SAMPLE_ROWS`] rows. The
    /// column range is the widest sampled row, so ragged samples score every
    /// column that actually appears.
    pub(crate) fn tally(rows: &[&[CellValue]]) -> Self {
        let sample = &rows[..rows.len().min(SAMPLE_ROWS)];
        let width = sample.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut columns = vec![ColumnScore::default(); width];
        for row in sample {
            for (index, cell) in row.iter().enumerate() {
                let value = cell.normalized();
                let score = &mut columns[index];
                if matcher::is_year(&value) {
                    score.year += 1;
                }
                if matcher::is_vin(&value) {
                    score.vin += 1;
                }
                if matcher::is_make(&value) {
                    score.make += 1;
                }
                if matcher::is_cost(&value) {
                    score.cost += 1;
                }
                score.total += 1;
            }
        }
        ColumnScores { columns }
    }

    /// Total number of cells tallied across the sample.
    pub(crate) fn sampled_cells(&self) -> usize {
        self.columns.iter().map(|score| score.total).sum()
    }

    /// Returns the column with the strictly greatest count for the field,
    /// provided the count clears the field's minimum threshold. Only a
    /// strictly greater count displaces the leader, so ties keep the lowest
    /// column index.
    pub(crate) fn best_column(&self, field: Field) -> Option<usize> {
        let mut best_index = None;
        let mut best_count = 0;
        for (index, score) in self.columns.iter().enumerate() {
            let count = score.count(field);
            if count > best_count {
                best_count = count;
                best_index = Some(index);
            }
        }
        if best_count >= minimum_matches(field) {
            best_index
        } else {
            None
        }
    }
}

/// Minimum confidence threshold for a field.
fn minimum_matches(field: Field) -> usize {
    match field {
        Field::Year => MIN_YEAR_MATCHES,
        Field::Make => MIN_MAKE_MATCHES,
        Field::Vin => MIN_VIN_MATCHES,
        Field::Cost => MIN_COST_MATCHES,
    }
}
