//! FILENAME: tables/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Workbook does not match the expected table layout: {0}")]
    MalformedSource(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Named range not found: {0}")]
    NamedRangeNotFound(String),
}
