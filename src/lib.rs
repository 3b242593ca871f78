//! # Fleetsheet
//!
//! A column-identification and row-classification engine for messy vehicle
//! schedules. An upload collaborator hands in a raw 2-D grid of cell values
//! with an unknown header position, unknown column order, possibly no
//! header at all, and embedded junk rows; the engine finds the Year, Make,
//! VIN, and Cost columns and emits a fixed 40-column standardized grid.
//!
//! ## Features
//!
//! - **Header location**: finds the first row whose labels name all four
//!   fields ("Stated Value" counts as a cost label)
//! - **Two resolution strategies**: substring match on a located header
//!   row, or content-pattern scoring over sampled data rows when no header
//!   exists; never a blend of the two
//! - **Junk-row classification**: blank separators, repeated header lines,
//!   tractor/trailer section labels, and subtotal/total lines are skipped
//! - **Fixed output contract**: Year, Make, VIN, and Cost land in columns
//!   E, F, J, and V of a 40-column layout with an A1-style declared extent
//! - **Typed failures**: every abort is a distinct [`NormalizeError`]
//!   variant that a serving layer can map 1:1 onto responses
//!
//! The engine is a pure, synchronous transformation: one grid in, one grid
//! (or error) out. It performs no I/O and keeps no state across runs.

pub mod grid;
pub mod normalize;
pub mod schedule;

pub use crate::grid::cell::CellValue;
pub use crate::grid::criteria::Criteria;
pub use crate::grid::criteria::HeaderPolicy;
pub use crate::grid::matcher::Field;
pub use crate::grid::ColumnAssignment;
pub use crate::grid::Grid;
pub use crate::normalize::analyze;
pub use crate::normalize::normalize;
pub use crate::normalize::Analysis;
pub use crate::normalize::NormalizeError;
pub use crate::normalize::Normalized;
pub use crate::normalize::ResolutionStrategy;
pub use crate::schedule::ScheduleGrid;
pub use crate::schedule::VehicleRecord;
pub use crate::schedule::COST_COLUMN;
pub use crate::schedule::MAKE_COLUMN;
pub use crate::schedule::OUTPUT_HEADERS;
pub use crate::schedule::VIN_COLUMN;
pub use crate::schedule::YEAR_COLUMN;
