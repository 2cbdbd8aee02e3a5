//! FILENAME: grid/src/lib.rs
//! PURPOSE: Main library entry point for the sheet-grid model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod coord;
pub mod grid;

// Re-export commonly used types at the crate root
pub use cell::CellValue;
pub use coord::{a1_to_coord, col_to_index, coord_to_a1, index_to_col, parse_a1, parse_range, CellCoord};
pub use grid::Grid;
