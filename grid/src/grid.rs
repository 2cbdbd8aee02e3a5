//! FILENAME: grid/src/grid.rs
//! PURPOSE: Sparse container for the cells of one worksheet.
//! CONTEXT: Uses a HashMap keyed by (row, col) so mostly-empty sheets
//! cost only their populated cells. Row and Col are 0-based indices.

use std::collections::HashMap;

use crate::cell::CellValue;

/// The Grid holds the loaded values of a single worksheet.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Sparse storage: keys are (row, col), values are cell contents.
    cells: HashMap<(u32, u32), CellValue>,

    /// Tracks the highest row index currently in use.
    pub max_row: u32,

    /// Tracks the highest column index currently in use.
    pub max_col: u32,
}

impl Grid {
    /// Creates a new, empty Grid.
    pub fn new() -> Self {
        Grid {
            cells: HashMap::new(),
            max_row: 0,
            max_col: 0,
        }
    }

    /// Sets a cell at the specified coordinates.
    /// Updates max_row/max_col boundaries automatically.
    /// Empty values are not stored.
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        if value.is_empty() {
            return;
        }
        if row > self.max_row {
            self.max_row = row;
        }
        if col > self.max_col {
            self.max_col = col;
        }
        self.cells.insert((row, col), value);
    }

    /// Retrieves a reference to a cell's value.
    /// Returns None if the cell is empty (not stored).
    pub fn get(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Extracts a rectangular window of `height` x `width` cells whose
    /// top-left corner is at (row, col). Cells outside the populated
    /// area come back as None, mirroring how a sheet reads.
    pub fn window(&self, row: u32, col: u32, height: u32, width: u32) -> Vec<Vec<Option<&CellValue>>> {
        let mut rows = Vec::with_capacity(height as usize);
        for r in row..row + height {
            let mut row_vals = Vec::with_capacity(width as usize);
            for c in col..col + width {
                row_vals.push(self.get(r, c));
            }
            rows.push(row_vals);
        }
        rows
    }
}
