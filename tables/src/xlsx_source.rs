//! FILENAME: tables/src/xlsx_source.rs
//! PURPOSE: Opens the XLSX workbook that carries the reference tables.
//! CONTEXT: Reads computed cell values ("data only") from one
//! worksheet into a sparse `grid::Grid` and collects the workbook's
//! defined names so schema anchors can be expressed as named ranges.

use calamine::{open_workbook, Data, Reader, Xlsx};
use grid::{parse_range, CellCoord, CellValue, Grid};
use log::debug;
use std::collections::HashMap;
use std::path::Path;

use crate::TableError;

/// One opened table source: a single worksheet plus the workbook's
/// defined names. Immutable after `open`.
#[derive(Debug, Clone)]
pub struct XlsxSource {
    /// Name of the worksheet that was loaded.
    pub sheet_name: String,
    grid: Grid,
    /// Defined name -> (sheet, top-left, bottom-right), 0-based.
    named_ranges: HashMap<String, (Option<String>, CellCoord, CellCoord)>,
}

impl XlsxSource {
    /// Opens `path` and loads `preferred_sheet` (or the first sheet
    /// when the preferred one does not exist, matching the reference
    /// workbook convention).
    pub fn open(path: &Path, preferred_sheet: &str) -> Result<Self, TableError> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let sheet_names = workbook.sheet_names().to_vec();

        if sheet_names.is_empty() {
            return Err(TableError::MalformedSource(
                "workbook contains no sheets".to_string(),
            ));
        }

        let sheet_name = if sheet_names.iter().any(|n| n == preferred_sheet) {
            preferred_sheet.to_string()
        } else {
            sheet_names[0].clone()
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| TableError::MalformedSource(e.to_string()))?;

        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let mut grid = Grid::new();

        for (row_idx, row) in range.rows().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let value = match cell {
                    Data::Empty => continue,
                    Data::String(s) => CellValue::Text(s.clone()),
                    Data::Float(f) => CellValue::Number(*f),
                    Data::Int(i) => CellValue::Number(*i as f64),
                    Data::Bool(b) => CellValue::Boolean(*b),
                    Data::Error(e) => CellValue::Error(format!("{:?}", e)),
                    Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
                    Data::DateTimeIso(s) => CellValue::Text(s.clone()),
                    Data::DurationIso(s) => CellValue::Text(s.clone()),
                };
                grid.set(start_row + row_idx as u32, start_col + col_idx as u32, value);
            }
        }

        let mut named_ranges = HashMap::new();
        for (name, destination) in workbook.defined_names() {
            // Some writers keep a leading '=' on the destination.
            if let Some(parsed) = parse_range(destination.trim_start_matches('=')) {
                named_ranges.insert(name.clone(), parsed);
            }
        }

        debug!(
            "loaded sheet '{}': {} cells, {} defined names",
            sheet_name,
            grid.len(),
            named_ranges.len()
        );

        Ok(XlsxSource {
            sheet_name,
            grid,
            named_ranges,
        })
    }

    /// The loaded worksheet.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Resolves a defined name to (top-left, bottom-right) corners on
    /// the loaded sheet. Names pointing at another sheet are rejected
    /// since only one sheet is loaded.
    pub fn named_range(&self, name: &str) -> Result<(CellCoord, CellCoord), TableError> {
        let (sheet, start, end) = self
            .named_ranges
            .get(name)
            .ok_or_else(|| TableError::NamedRangeNotFound(name.to_string()))?;

        if let Some(sheet) = sheet {
            if sheet != &self.sheet_name {
                return Err(TableError::MalformedSource(format!(
                    "named range '{}' refers to sheet '{}', but '{}' was loaded",
                    name, sheet, self.sheet_name
                )));
            }
        }

        Ok((*start, *end))
    }
}
