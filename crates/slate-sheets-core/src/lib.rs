//! # slate-sheets-core
//!
//! Core data structures for the slate-sheets spreadsheet engine.
//!
//! This crate provides the passive collaborators of the formula evaluator:
//! - [`Cell`] - A single cell: formula tokens, cached value, error state
//! - [`SheetMemory`] - A fixed-size grid of cells addressed by A1-style labels
//! - [`messages`] - The canonical error strings shown in cells
//!
//! ## Example
//!
//! ```rust
//! use slate_sheets_core::{Cell, SheetMemory};
//!
//! let mut memory = SheetMemory::new(5, 5);
//! let cell = memory.get_cell_by_label_mut("A1").unwrap();
//! cell.set_formula(vec!["5".to_string()]);
//! cell.set_value(5.0);
//!
//! assert_eq!(memory.get_cell_by_label("A1").unwrap().value(), 5.0);
//! ```

pub mod cell;
pub mod error;
pub mod memory;
pub mod messages;

// Re-exports for convenience
pub use cell::{coordinates_to_label, label_to_coordinates, Cell, Formula, Token};
pub use error::{Error, Result};
pub use memory::SheetMemory;
