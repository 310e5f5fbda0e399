//! Sheet memory: the grid of cells behind a worksheet

use crate::cell::{coordinates_to_label, label_to_coordinates, Cell};
use crate::error::{Error, Result};

/// A fixed-size two-dimensional grid of [`Cell`]s
///
/// Cells are addressed either by 0-based (column, row) coordinates or by
/// A1-style labels. The grid never grows; a label that parses but falls
/// outside the constructed dimensions is an error.
#[derive(Debug, Clone)]
pub struct SheetMemory {
    /// Row-major: `cells[row][col]`
    cells: Vec<Vec<Cell>>,
    columns: usize,
    rows: usize,
}

impl SheetMemory {
    /// Create a sheet with the given dimensions, every cell empty and
    /// labeled with its own address
    pub fn new(columns: usize, rows: usize) -> Self {
        let cells = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|col| {
                        let mut cell = Cell::new();
                        cell.set_label(coordinates_to_label(col, row));
                        cell
                    })
                    .collect()
            })
            .collect();

        Self {
            cells,
            columns,
            rows,
        }
    }

    /// Number of columns in the grid
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get a cell by 0-based (column, row) coordinates
    pub fn get_cell_by_coordinates(&self, col: usize, row: usize) -> Result<&Cell> {
        if col >= self.columns || row >= self.rows {
            return Err(self.out_of_bounds(col, row));
        }
        Ok(&self.cells[row][col])
    }

    /// Get a mutable cell by 0-based (column, row) coordinates
    pub fn get_cell_by_coordinates_mut(&mut self, col: usize, row: usize) -> Result<&mut Cell> {
        if col >= self.columns || row >= self.rows {
            return Err(self.out_of_bounds(col, row));
        }
        Ok(&mut self.cells[row][col])
    }

    /// Get a cell by A1-style label
    ///
    /// # Examples
    /// ```
    /// use slate_sheets_core::SheetMemory;
    ///
    /// let memory = SheetMemory::new(5, 5);
    /// let cell = memory.get_cell_by_label("B2").unwrap();
    /// assert_eq!(cell.label(), Some("B2"));
    /// assert!(memory.get_cell_by_label("Z99").is_err());
    /// ```
    pub fn get_cell_by_label(&self, label: &str) -> Result<&Cell> {
        let (col, row) = label_to_coordinates(label)?;
        self.get_cell_by_coordinates(col, row)
    }

    /// Get a mutable cell by A1-style label
    pub fn get_cell_by_label_mut(&mut self, label: &str) -> Result<&mut Cell> {
        let (col, row) = label_to_coordinates(label)?;
        self.get_cell_by_coordinates_mut(col, row)
    }

    /// Replace the cell at the given label
    ///
    /// The stored cell's own label is rewritten to match its new position.
    pub fn set_cell_by_label(&mut self, label: &str, cell: Cell) -> Result<()> {
        let slot = self.get_cell_by_label_mut(label)?;
        *slot = cell;
        slot.set_label(label.to_ascii_uppercase());
        Ok(())
    }

    fn out_of_bounds(&self, col: usize, row: usize) -> Error {
        Error::CellOutOfBounds {
            label: coordinates_to_label(col, row),
            columns: self.columns,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_sheet_is_empty_and_labeled() {
        let memory = SheetMemory::new(3, 2);
        assert_eq!(memory.columns(), 3);
        assert_eq!(memory.rows(), 2);

        let cell = memory.get_cell_by_coordinates(2, 1).unwrap();
        assert_eq!(cell.label(), Some("C2"));
        assert_eq!(cell.value(), 0.0);
        assert_eq!(cell.error(), "");
        assert!(cell.formula().is_empty());
    }

    #[test]
    fn test_get_set_by_label() {
        let mut memory = SheetMemory::new(5, 5);

        {
            let cell = memory.get_cell_by_label_mut("a1").unwrap();
            cell.set_formula(vec!["5".to_string()]);
            cell.set_value(5.0);
        }
        assert_eq!(memory.get_cell_by_label("A1").unwrap().value(), 5.0);

        let mut replacement = Cell::new();
        replacement.set_value(7.0);
        memory.set_cell_by_label("B2", replacement).unwrap();

        let stored = memory.get_cell_by_label("B2").unwrap();
        assert_eq!(stored.value(), 7.0);
        assert_eq!(stored.label(), Some("B2"));
    }

    #[test]
    fn test_out_of_bounds_label() {
        let memory = SheetMemory::new(2, 2);
        assert!(matches!(
            memory.get_cell_by_label("C1"),
            Err(Error::CellOutOfBounds { .. })
        ));
        assert!(matches!(
            memory.get_cell_by_label("A3"),
            Err(Error::CellOutOfBounds { .. })
        ));
        assert!(matches!(
            memory.get_cell_by_label("not-a-label"),
            Err(Error::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_coordinate_bounds() {
        let mut memory = SheetMemory::new(2, 2);
        assert!(memory.get_cell_by_coordinates(1, 1).is_ok());
        assert!(memory.get_cell_by_coordinates(2, 0).is_err());
        assert!(memory.get_cell_by_coordinates_mut(0, 2).is_err());
    }
}
