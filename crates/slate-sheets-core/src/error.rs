//! Error types for slate-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in slate-sheets-core
///
/// These report misuse of the cell store itself (bad labels, out-of-grid
/// access). Formula-level errors are carried as display strings from
/// [`crate::messages`] instead, never as `Err` values.
#[derive(Debug, Error)]
pub enum Error {
    /// Cell label does not match the letter-group/digit-group grammar
    #[error("Invalid cell label: {0}")]
    InvalidLabel(String),

    /// Label is well-formed but addresses a cell outside the sheet
    #[error("Cell {label} outside sheet bounds ({columns} columns x {rows} rows)")]
    CellOutOfBounds {
        label: String,
        columns: usize,
        rows: usize,
    },
}
