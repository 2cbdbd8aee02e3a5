//! FILENAME: tables/src/schema.rs
//! PURPOSE: Declarative description of where each reference table sits
//! in the workbook and which labels its headers must carry.
//! CONTEXT: Extraction never indexes the sheet directly; it goes
//! through this schema so a layout mismatch fails loudly at load time
//! instead of silently reading the wrong cells.

use grid::CellValue;
use serde::{Deserialize, Serialize};

use crate::{TableError, XlsxSource};

/// Where one table lives in the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Anchor {
    /// Fixed rectangle: 0-based top-left corner plus extent.
    Window {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },
    /// A workbook defined name; extent comes from the name itself.
    Named(String),
}

impl Anchor {
    /// Resolves the anchor against a source, yielding the cell window
    /// as owned values (missing cells become `CellValue::Empty`).
    pub fn extract(&self, source: &XlsxSource) -> Result<Vec<Vec<CellValue>>, TableError> {
        let (row, col, height, width) = match self {
            Anchor::Window {
                row,
                col,
                height,
                width,
            } => (*row, *col, *height, *width),
            Anchor::Named(name) => {
                let (start, end) = source.named_range(name)?;
                (start.0, start.1, end.0 - start.0 + 1, end.1 - start.1 + 1)
            }
        };

        let window = source.grid().window(row, col, height, width);
        Ok(window
            .into_iter()
            .map(|cells| {
                cells
                    .into_iter()
                    .map(|c| c.cloned().unwrap_or(CellValue::Empty))
                    .collect()
            })
            .collect())
    }
}

/// The full layout contract for one workbook: five anchors plus the
/// label sets the headers are checked against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Worksheet holding the tables; the first sheet is used when absent.
    pub sheet: String,
    pub limits: Anchor,
    pub water: Anchor,
    pub gravel_fraction: Anchor,
    pub std_deviation: Anchor,
    pub gravel_classes: Anchor,
    /// Aggressiveness classes expected in the limits header, in order.
    pub class_labels: Vec<String>,
    /// Preparation conditions expected in the Sd header, in order.
    pub condition_labels: Vec<String>,
}

impl Default for TableSchema {
    /// Anchors of the reference workbook's "ABCP" sheet.
    fn default() -> Self {
        TableSchema {
            sheet: "ABCP".to_string(),
            // Corner label + I..IV; a/c max, fck min (two rows each,
            // reinforced then plain), cc min.
            limits: Anchor::Window {
                row: 1,
                col: 1,
                height: 6,
                width: 5,
            },
            // Corner + five Dmax columns; one row per slump band.
            water: Anchor::Window {
                row: 9,
                col: 1,
                height: 4,
                width: 6,
            },
            // Corner + five Dmax columns; one row per fineness modulus.
            gravel_fraction: Anchor::Window {
                row: 15,
                col: 1,
                height: 5,
                width: 6,
            },
            // Condition header row + value row.
            std_deviation: Anchor::Window {
                row: 2,
                col: 8,
                height: 2,
                width: 3,
            },
            // Header + one row per gravel class.
            gravel_classes: Anchor::Window {
                row: 19,
                col: 8,
                height: 6,
                width: 3,
            },
            class_labels: vec!["I", "II", "III", "IV"]
                .into_iter()
                .map(String::from)
                .collect(),
            condition_labels: vec!["A", "B", "C"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
