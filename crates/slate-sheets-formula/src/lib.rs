//! # slate-sheets-formula
//!
//! Formula evaluation for slate-sheets.
//!
//! This crate evaluates already-tokenized arithmetic formulas (numeric
//! literals, cell references, `+ - * /`, parentheses) against a
//! [`slate_sheets_core::SheetMemory`]. Tokenizing formula text is the
//! front end's job; this crate consumes the token sequence it produces.
//!
//! ## Example
//!
//! ```rust
//! use slate_sheets_core::SheetMemory;
//! use slate_sheets_formula::FormulaEvaluator;
//!
//! let memory = SheetMemory::new(5, 5);
//! let mut evaluator = FormulaEvaluator::new(&memory);
//!
//! let formula: Vec<String> = ["2", "+", "3", "*", "4"]
//!     .iter()
//!     .map(|t| t.to_string())
//!     .collect();
//! evaluator.evaluate(&formula);
//!
//! assert_eq!(evaluator.result(), 14.0);
//! assert_eq!(evaluator.error(), "");
//! ```

pub mod evaluator;

pub use evaluator::FormulaEvaluator;
