//! # Standardization Pipeline
//!
//! Orchestrates one run of the engine: read the grid, locate the header,
//! resolve the four columns, classify every candidate row, and emit the
//! fixed-layout schedule. Each stage has a distinct failure exit and a
//! failed run produces no output at all. The whole pipeline is a pure,
//! synchronous transformation; concurrent runs share nothing.

use crate::grid::cell::CellValue;
use crate::grid::classify;
use crate::grid::criteria::Criteria;
use crate::grid::criteria::HeaderPolicy;
use crate::grid::header;
use crate::grid::is_blank_row;
use crate::grid::matcher::Field;
use crate::grid::score::ColumnScores;
use crate::grid::ColumnAssignment;
use crate::grid::Grid;
use crate::schedule::ScheduleGrid;
use thiserror::Error;

/// Failures of one standardization run.
///
/// Every variant aborts the run before any output is produced and carries a
/// distinct caller-visible message; the serving layer maps them 1:1 onto
/// responses.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input grid has no rows at all
    #[error("Uploaded grid is empty")]
    EmptyGrid,

    /// A caller-imposed size bound was exceeded
    #[error("Uploaded grid exceeds the {dimension} limit of {limit}")]
    LimitExceeded {
        dimension: &'static str,
        limit: usize,
    },

    /// A header row was required but none qualifies
    #[error("Input grid is missing a header row containing Year, Make, VIN, and Cost or Stated Value")]
    HeaderNotFound,

    /// A header row was found with nothing below it
    #[error("No data found after the header row")]
    NoDataAfterHeader,

    /// One field could not be resolved to a column with enough confidence
    #[error("Cannot reliably find the {0} column")]
    ColumnNotFound(Field),

    /// Every candidate row was classified as junk
    #[error("No valid data rows (Year/Make/VIN/Cost) were found")]
    NoValidRows,
}

/// Which criteria picked the four columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Substring match against the located header row's labels.
    HeaderLabels,
    /// Content-pattern scoring over sampled data rows.
    ContentPatterns,
}

/// How a grid was (or would be) interpreted, without emitting any output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// Index of the located header row, if any
    pub header_row: Option<usize>,
    /// The strategy that resolved the columns
    pub strategy: ResolutionStrategy,
    /// The resolved column indices
    pub columns: ColumnAssignment,
}

/// Result of a full standardization run.
#[derive(Clone, Debug)]
pub struct Normalized {
    /// The emitted fixed-layout grid
    pub schedule: ScheduleGrid,
    /// Candidate rows accepted into the schedule
    pub accepted_rows: usize,
    /// Candidate rows classified as junk
    pub skipped_rows: usize,
}

/// Runs the pipeline through column resolution and reports how the grid
/// would be interpreted, without classifying rows or emitting output.
pub fn analyze(grid: &Grid, criteria: &Criteria) -> Result<Analysis, NormalizeError> {
    let (analysis, _) = resolve(grid, criteria)?;
    Ok(analysis)
}

/// Runs the full pipeline and emits the standardized schedule.
pub fn normalize(grid: &Grid, criteria: &Criteria) -> Result<Normalized, NormalizeError> {
    let (analysis, data_rows) = resolve(grid, criteria)?;

    let mut schedule = ScheduleGrid::default();
    let mut skipped_rows = 0;
    for row in &data_rows {
        match classify::skip_reason(row, &analysis.columns) {
            Some(reason) => {
                log::trace!("skipping row: {:?}", reason);
                skipped_rows += 1;
            }
            None => schedule.push(classify::extract(row, &analysis.columns)),
        }
    }

    let accepted_rows = schedule.record_count();
    if accepted_rows == 0 {
        return Err(NormalizeError::NoValidRows);
    }
    log::debug!(
        "standardized {} rows ({} skipped), extent {}",
        accepted_rows,
        skipped_rows,
        schedule.extent()
    );
    Ok(Normalized {
        schedule,
        accepted_rows,
        skipped_rows,
    })
}

/// Shared front half of the pipeline: precondition checks, header location,
/// data-region selection, and column resolution. Returns the interpretation
/// together with the borrowed data-region rows.
fn resolve<'a>(
    grid: &'a Grid,
    criteria: &Criteria,
) -> Result<(Analysis, Vec<&'a [CellValue]>), NormalizeError> {
    if grid.row_count() == 0 {
        return Err(NormalizeError::EmptyGrid);
    }
    check_limits(grid, criteria)?;

    let (analysis, data_rows) = match header::locate(grid) {
        Some(header_row) => {
            log::debug!("header row located at index {}", header_row);
            let data_rows: Vec<&[CellValue]> = (header_row + 1..grid.row_count())
                .map(|index| grid.row(index))
                .collect();
            if data_rows.is_empty() {
                return Err(NormalizeError::NoDataAfterHeader);
            }
            let columns = resolve_by_labels(grid.row(header_row))?;
            let analysis = Analysis {
                header_row: Some(header_row),
                strategy: ResolutionStrategy::HeaderLabels,
                columns,
            };
            (analysis, data_rows)
        }
        None if criteria.header_policy == HeaderPolicy::Require => {
            return Err(NormalizeError::HeaderNotFound);
        }
        None => {
            let data_rows: Vec<&[CellValue]> = grid
                .rows()
                .iter()
                .map(Vec::as_slice)
                .filter(|row| !is_blank_row(row))
                .collect();
            let columns = resolve_by_patterns(&data_rows)?;
            let analysis = Analysis {
                header_row: None,
                strategy: ResolutionStrategy::ContentPatterns,
                columns,
            };
            (analysis, data_rows)
        }
    };

    log::debug!(
        "columns resolved via {:?}: year={} make={} vin={} cost={}",
        analysis.strategy,
        analysis.columns.year,
        analysis.columns.make,
        analysis.columns.vin,
        analysis.columns.cost
    );
    Ok((analysis, data_rows))
}

/// Resolves each field to the first header cell naming it.
fn resolve_by_labels(header_row: &[CellValue]) -> Result<ColumnAssignment, NormalizeError> {
    let year = resolved_label(header_row, Field::Year)?;
    let make = resolved_label(header_row, Field::Make)?;
    let vin = resolved_label(header_row, Field::Vin)?;
    let cost = resolved_label(header_row, Field::Cost)?;
    Ok(ColumnAssignment {
        year,
        make,
        vin,
        cost,
    })
}

fn resolved_label(header_row: &[CellValue], field: Field) -> Result<usize, NormalizeError> {
    header::find_label(header_row, field).ok_or(NormalizeError::ColumnNotFound(field))
}

/// Resolves each field by scoring sampled data rows against the content
/// predicates.
fn resolve_by_patterns(rows: &[&[CellValue]]) -> Result<ColumnAssignment, NormalizeError> {
    let scores = ColumnScores::tally(rows);
    log::debug!("scored {} cells across the sample", scores.sampled_cells());
    let year = resolved_column(&scores, Field::Year)?;
    let make = resolved_column(&scores, Field::Make)?;
    let vin = resolved_column(&scores, Field::Vin)?;
    let cost = resolved_column(&scores, Field::Cost)?;
    Ok(ColumnAssignment {
        year,
        make,
        vin,
        cost,
    })
}

fn resolved_column(scores: &ColumnScores, field: Field) -> Result<usize, NormalizeError> {
    scores
        .best_column(field)
        .ok_or(NormalizeError::ColumnNotFound(field))
}

/// Enforces the caller-imposed size bounds before the engine runs.
fn check_limits(grid: &Grid, criteria: &Criteria) -> Result<(), NormalizeError> {
    if let Some(limit) = criteria.row_limit {
        if grid.row_count() > limit {
            return Err(NormalizeError::LimitExceeded {
                dimension: "row",
                limit,
            });
        }
    }
    if let Some(limit) = criteria.column_limit {
        let widest = grid.rows().iter().map(Vec::len).max().unwrap_or(0);
        if widest > limit {
            return Err(NormalizeError::LimitExceeded {
                dimension: "column",
                limit,
            });
        }
    }
    if let Some(limit) = criteria.cell_limit {
        let oversized = grid.rows().iter().flatten().any(|cell| match cell {
            CellValue::Text(value) => value.chars().count() > limit,
            _ => false,
        });
        if oversized {
            return Err(NormalizeError::LimitExceeded {
                dimension: "cell length",
                limit,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{COST_COLUMN, MAKE_COLUMN, VIN_COLUMN, YEAR_COLUMN};

    fn grid(rows: Vec<Vec<&str>>) -> Grid {
        Grid::from(rows)
    }

    fn default_criteria() -> Criteria {
        Criteria::default()
    }

    #[test]
    fn standardizes_a_headed_grid() {
        let grid = grid(vec![
            vec!["VIN", "Year", "Make", "Cost"],
            vec!["1G1JC124567890123", "2005", "FORD", "$1,000"],
            vec!["", "", "", ""],
        ]);
        let normalized = normalize(&grid, &default_criteria()).unwrap();

        assert_eq!(normalized.accepted_rows, 1);
        assert_eq!(normalized.skipped_rows, 1);

        let rows = normalized.schedule.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][YEAR_COLUMN], "2005");
        assert_eq!(rows[1][MAKE_COLUMN], "FORD");
        assert_eq!(rows[1][VIN_COLUMN], "1G1JC124567890123");
        assert_eq!(rows[1][COST_COLUMN], "1000");
        assert_eq!(normalized.schedule.extent(), "A1:AN2");
    }

    #[test]
    fn analyze_reports_header_resolution() {
        let grid = grid(vec![
            vec!["VIN", "Year", "Make", "Cost"],
            vec!["1G1JC124567890123", "2005", "FORD", "$1,000"],
        ]);
        let analysis = analyze(&grid, &default_criteria()).unwrap();

        assert_eq!(analysis.header_row, Some(0));
        assert_eq!(analysis.strategy, ResolutionStrategy::HeaderLabels);
        assert_eq!(
            analysis.columns,
            ColumnAssignment {
                year: 1,
                make: 2,
                vin: 0,
                cost: 3,
            }
        );
    }

    #[test]
    fn header_rows_below_junk_are_found() {
        let grid = grid(vec![
            vec!["ACME HAULING - FLEET LIST", "", "", ""],
            vec!["", "", "", ""],
            vec!["Year", "Make", "VIN", "Stated Value"],
            vec!["2005", "FORD", "1HGCM82633A123456", "$20,000.00"],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "$82,500.00"],
        ]);
        let normalized = normalize(&grid, &default_criteria()).unwrap();

        assert_eq!(normalized.accepted_rows, 2);
        let rows = normalized.schedule.rows();
        assert_eq!(rows[1][COST_COLUMN], "20000");
        assert_eq!(rows[2][COST_COLUMN], "82500");
    }

    #[test]
    fn junk_rows_are_classified_out() {
        let grid = grid(vec![
            vec!["Year", "Make", "VIN", "Cost"],
            vec!["", "TRACTORS", "", ""],
            vec!["2005", "FORD", "1HGCM82633A123456", "$1,000"],
            vec!["Year", "Make", "VIN", "Cost"],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "$2,500"],
            vec!["", "", "", "TOTAL: $3,500"],
        ]);
        let normalized = normalize(&grid, &default_criteria()).unwrap();

        assert_eq!(normalized.accepted_rows, 2);
        assert_eq!(normalized.skipped_rows, 3);
        let rows = normalized.schedule.rows();
        assert_eq!(rows[1][MAKE_COLUMN], "FORD");
        assert_eq!(rows[2][MAKE_COLUMN], "VOLVO");
    }

    #[test]
    fn total_marker_anywhere_skips_the_row() {
        let grid = grid(vec![
            vec!["Year", "Make", "VIN", "Cost", "Note"],
            vec!["2005", "FORD", "1HGCM82633A123456", "$1,000", ""],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "$2,500", "running total"],
        ]);
        let normalized = normalize(&grid, &default_criteria()).unwrap();

        assert_eq!(normalized.accepted_rows, 1);
        assert_eq!(normalized.skipped_rows, 1);
    }

    #[test]
    fn empty_grid_fails_first() {
        let grid = Grid::new(Vec::new());
        let error = normalize(&grid, &default_criteria()).unwrap_err();
        assert_eq!(error, NormalizeError::EmptyGrid);
    }

    #[test]
    fn header_with_no_data_below_fails() {
        let grid = grid(vec![
            vec!["Fleet List", "", "", ""],
            vec!["Year", "Make", "VIN", "Cost"],
        ]);
        let error = normalize(&grid, &default_criteria()).unwrap_err();
        assert_eq!(error, NormalizeError::NoDataAfterHeader);
    }

    #[test]
    fn all_junk_rows_fail() {
        let grid = grid(vec![
            vec!["Year", "Make", "VIN", "Cost"],
            vec!["", "", "", ""],
            vec!["", "TRAILERS", "", ""],
            vec!["", "", "", "Grand Total"],
        ]);
        let error = normalize(&grid, &default_criteria()).unwrap_err();
        assert_eq!(error, NormalizeError::NoValidRows);
    }

    #[test]
    fn unlabeled_cost_column_fails_by_content() {
        // The first row looks like a header but never names the cost field,
        // so it cannot qualify; resolution falls back to content scoring and
        // the cost column never matches either money pattern.
        let grid = grid(vec![
            vec!["Year", "Make", "VIN", "Value"],
            vec!["2005", "FORD", "1HGCM82633A123456", "n/a"],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "n/a"],
            vec!["2010", "MACK", "1M1AN07Y1AN123456", "n/a"],
        ]);
        let error = normalize(&grid, &default_criteria()).unwrap_err();
        assert_eq!(error, NormalizeError::ColumnNotFound(Field::Cost));
    }

    #[test]
    fn headerless_grid_resolves_by_content() {
        let grid = grid(vec![
            vec!["", "", "", ""],
            vec!["2005", "FORD", "1HGCM82633A123456", "$1,000"],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "$2,500"],
            vec!["2010", "MACK", "1M1AN07Y1AN123456", "61000"],
        ]);
        let analysis = analyze(&grid, &default_criteria()).unwrap();
        assert_eq!(analysis.header_row, None);
        assert_eq!(analysis.strategy, ResolutionStrategy::ContentPatterns);
        assert_eq!(
            analysis.columns,
            ColumnAssignment {
                year: 0,
                make: 1,
                vin: 2,
                cost: 3,
            }
        );

        let normalized = normalize(&grid, &default_criteria()).unwrap();
        assert_eq!(normalized.accepted_rows, 3);
        assert_eq!(normalized.skipped_rows, 0);
    }

    #[test]
    fn headerless_grid_under_require_policy_fails() {
        let grid = grid(vec![
            vec!["2005", "FORD", "1HGCM82633A123456", "$1,000"],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "$2,500"],
        ]);
        let criteria = Criteria {
            header_policy: HeaderPolicy::Require,
            ..Criteria::default()
        };
        let error = normalize(&grid, &criteria).unwrap_err();
        assert_eq!(error, NormalizeError::HeaderNotFound);
    }

    #[test]
    fn row_limit_is_enforced_before_the_engine() {
        let grid = grid(vec![
            vec!["Year", "Make", "VIN", "Cost"],
            vec!["2005", "FORD", "1HGCM82633A123456", "$1,000"],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "$2,500"],
        ]);
        let criteria = Criteria {
            row_limit: Some(2),
            ..Criteria::default()
        };
        let error = normalize(&grid, &criteria).unwrap_err();
        assert_eq!(
            error,
            NormalizeError::LimitExceeded {
                dimension: "row",
                limit: 2,
            }
        );
    }

    #[test]
    fn cell_length_limit_is_enforced() {
        let grid = grid(vec![
            vec!["Year", "Make", "VIN", "Cost"],
            vec!["2005", "FORD", "1HGCM82633A123456", "$1,000"],
        ]);
        let criteria = Criteria {
            cell_limit: Some(8),
            ..Criteria::default()
        };
        let error = normalize(&grid, &criteria).unwrap_err();
        assert_eq!(
            error,
            NormalizeError::LimitExceeded {
                dimension: "cell length",
                limit: 8,
            }
        );
    }

    #[test]
    fn error_messages_are_distinct_per_field() {
        assert_eq!(
            NormalizeError::ColumnNotFound(Field::Year).to_string(),
            "Cannot reliably find the Year column"
        );
        assert_eq!(
            NormalizeError::ColumnNotFound(Field::Vin).to_string(),
            "Cannot reliably find the VIN column"
        );
    }

    #[test]
    fn emitted_schedule_survives_a_second_run() {
        // Feeding the output back through the pipeline must not crash. The
        // fixed header resolves straight to the fixed columns, so the
        // records survive a second run unchanged (cost is already digits
        // only): the schedule is a fixpoint of the pipeline.
        let grid = grid(vec![
            vec!["Year", "Make", "VIN", "Cost"],
            vec!["2005", "FORD", "1HGCM82633A123456", "$20,000.00"],
            vec!["2007", "VOLVO", "4V4NC9EH5EN123456", "$2,500"],
        ]);
        let first = normalize(&grid, &default_criteria()).unwrap();

        let echoed = Grid::from(first.schedule.rows());
        let second = normalize(&echoed, &default_criteria()).unwrap();

        assert_eq!(
            second.schedule.records(),
            first.schedule.records()
        );
        let analysis = analyze(&echoed, &default_criteria()).unwrap();
        assert_eq!(analysis.header_row, Some(0));
        assert_eq!(
            analysis.columns,
            ColumnAssignment {
                year: YEAR_COLUMN,
                make: MAKE_COLUMN,
                vin: VIN_COLUMN,
                cost: COST_COLUMN,
            }
        );
    }
}
