//! FILENAME: tables/src/lib.rs
//! ABCP Table Repository
//!
//! Loads an XLSX workbook carrying the five ABCP reference tables
//! (aggressiveness limits, water consumption, gravel volumetric
//! fraction, standard deviation, gravel classes) and extracts them
//! into an immutable `TableSet`. Pure extraction: no mix arithmetic
//! lives here.

mod cache;
mod error;
mod repository;
mod schema;
mod xlsx_source;

pub use cache::load_cached;
pub use error::TableError;
pub use repository::{
    GravelClass, GravelClassTable, GravelFractionTable, LimitsTable, StdDeviationTable, TableSet,
    WaterTable,
};
pub use schema::{Anchor, TableSchema};
pub use xlsx_source::XlsxSource;
