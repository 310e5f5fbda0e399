//! Canonical error strings displayed in cells
//!
//! The evaluator and the cell store only select among these by name; the
//! rendered text is opaque to them. Several distinct conditions deliberately
//! share the generic `#ERR` rendering.

/// Formula could only be partially parsed
pub const PARTIAL: &str = "#ERR";

/// Division with a zero divisor
pub const DIVIDE_BY_ZERO: &str = "#DIV/0!";

/// Reference to an empty or unusable cell
pub const INVALID_CELL: &str = "#REF!";

/// Formula is structurally invalid
pub const INVALID_FORMULA: &str = "#ERR";

/// An operator was applied without enough operands
pub const INVALID_NUMBER: &str = "#ERR";

/// Unrecognized operator token
pub const INVALID_OPERATOR: &str = "#ERR";

/// Unbalanced parentheses or leftover operands
pub const MISSING_PARENTHESES: &str = "#ERR";

/// Cell has no formula to evaluate
pub const EMPTY_FORMULA: &str = "#EMPTY!";
