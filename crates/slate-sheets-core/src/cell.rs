//! Cell data and A1-style label handling

use crate::error::{Error, Result};
use lazy_regex::regex_is_match;
use std::fmt;

/// Atomic textual unit of a formula (literal, cell label, operator, or
/// parenthesis). Classification is by predicate, not by tag.
pub type Token = String;

/// An ordered token sequence. Empty means "no formula".
pub type Formula = Vec<Token>;

/// A single spreadsheet cell
///
/// A cell carries its formula as the token sequence the tokenizer produced,
/// the value cached by the last evaluation, and the error string to display
/// in place of the value (empty string when the cell is healthy).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    formula: Formula,
    value: f64,
    error: String,
    label: Option<String>,
}

impl Cell {
    /// Create a new empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored formula tokens
    pub fn formula(&self) -> &[Token] {
        &self.formula
    }

    /// Replace the stored formula tokens
    pub fn set_formula(&mut self, formula: Formula) {
        self.formula = formula;
    }

    /// The cached numeric value from the last evaluation
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Cache a newly evaluated value
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// The display error string, empty when the cell is healthy
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Record an error string for display
    pub fn set_error<S: Into<String>>(&mut self, error: S) {
        self.error = error.into();
    }

    /// The cell's own A1-style label, if it has been placed in a sheet
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Attach an A1-style label to this cell
    pub fn set_label<S: Into<String>>(&mut self, label: S) {
        self.label = Some(label.into());
    }

    /// What a grid front end shows for this cell: the error when one is
    /// recorded, otherwise the cached value rendered as text
    pub fn display_string(&self) -> String {
        if !self.error.is_empty() {
            self.error.clone()
        } else {
            format!("{}", self.value)
        }
    }

    /// Check whether a token is syntactically a cell label
    ///
    /// A label is one or more ASCII letters followed by one or more digits,
    /// case-insensitive (`A1`, `aa10`, `ZZZ999`). Grid bounds are not
    /// checked here; that is [`crate::SheetMemory`]'s concern.
    ///
    /// # Examples
    /// ```
    /// use slate_sheets_core::Cell;
    ///
    /// assert!(Cell::is_valid_cell_label("A1"));
    /// assert!(Cell::is_valid_cell_label("aa10"));
    /// assert!(!Cell::is_valid_cell_label("1A"));
    /// assert!(!Cell::is_valid_cell_label("A"));
    /// ```
    pub fn is_valid_cell_label(label: &str) -> bool {
        regex_is_match!(r"^[A-Za-z]+[0-9]+$", label)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

/// Parse an A1-style label into 0-based (column, row) coordinates
///
/// Column letters are base-26 (A=0, Z=25, AA=26); rows are 1-based in the
/// label and 0-based in the result.
///
/// # Examples
/// ```
/// use slate_sheets_core::label_to_coordinates;
///
/// assert_eq!(label_to_coordinates("A1").unwrap(), (0, 0));
/// assert_eq!(label_to_coordinates("B3").unwrap(), (1, 2));
/// assert_eq!(label_to_coordinates("AA1").unwrap(), (26, 0));
/// ```
pub fn label_to_coordinates(label: &str) -> Result<(usize, usize)> {
    if !Cell::is_valid_cell_label(label) {
        return Err(Error::InvalidLabel(label.to_string()));
    }

    let digits_start = label
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| Error::InvalidLabel(label.to_string()))?;
    let (letters, digits) = label.split_at(digits_start);

    let mut col: usize = 0;
    for c in letters.chars() {
        let ordinal = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
        col = col
            .checked_mul(26)
            .and_then(|n| n.checked_add(ordinal))
            .ok_or_else(|| Error::InvalidLabel(label.to_string()))?;
    }
    let col = col - 1; // 1-based accumulator to 0-based index

    let row: usize = digits
        .parse()
        .map_err(|_| Error::InvalidLabel(label.to_string()))?;
    if row == 0 {
        return Err(Error::InvalidLabel(label.to_string()));
    }

    Ok((col, row - 1))
}

/// Format 0-based (column, row) coordinates as an A1-style label
///
/// # Examples
/// ```
/// use slate_sheets_core::coordinates_to_label;
///
/// assert_eq!(coordinates_to_label(0, 0), "A1");
/// assert_eq!(coordinates_to_label(26, 9), "AA10");
/// ```
pub fn coordinates_to_label(col: usize, row: usize) -> String {
    let mut letters = String::new();
    let mut n = col + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        letters.insert(0, c);
        n /= 26;
    }

    format!("{}{}", letters, row + 1)
}
