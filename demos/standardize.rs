//! Reads a plain comma-separated schedule and prints the standardized grid.
//!
//! Stands in for the upload plumbing: file in, fixed-layout rows out. Real
//! deployments decode spreadsheet uploads into a [`Grid`] the same way.

use anyhow::Context;
use anyhow::Result;
use fleetsheet::normalize;
use fleetsheet::CellValue;
use fleetsheet::Criteria;
use fleetsheet::Grid;
use std::env;
use std::fs;

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("usage: standardize <schedule.csv>")?;
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read '{}'", path))?;

    let rows: Vec<Vec<CellValue>> = content
        .lines()
        .map(|line| line.split(',').map(CellValue::from).collect())
        .collect();
    let grid = Grid::new(rows);

    let normalized = normalize(&grid, &Criteria::default())?;
    for row in normalized.schedule.rows() {
        println!("{}", row.join(","));
    }
    eprintln!(
        "{} rows standardized ({} skipped), extent {}",
        normalized.accepted_rows,
        normalized.skipped_rows,
        normalized.schedule.extent()
    );
    Ok(())
}
