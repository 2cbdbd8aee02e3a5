//! FILENAME: grid/src/cell.rs
//! PURPOSE: Defines the value a single sheet cell can hold.
//! CONTEXT: The table source is opened read-only with computed values,
//! so a cell is just data: no formulas, no styles.

use serde::{Deserialize, Serialize};

/// The computed content of a cell in the table source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// A cell-level error reported by the source (e.g., "#DIV/0!").
    Error(String),
}

impl CellValue {
    /// Numeric view of the cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            // Numeric-looking text shows up when a sheet stores sizes
            // as labels ("9.5" next to "19").
            CellValue::Text(s) => s.trim().replace(',', ".").parse().ok(),
            _ => None,
        }
    }

    /// Trimmed textual view of the cell, numbers formatted without
    /// trailing zeros so "19" and 19.0 compare equal as labels.
    pub fn as_label(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    None
                } else {
                    Some(t.to_string())
                }
            }
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{:.0}", n))
                } else {
                    Some(format!("{}", n))
                }
            }
            CellValue::Boolean(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}
