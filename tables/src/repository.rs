//! FILENAME: tables/src/repository.rs
//! PURPOSE: Extraction of the five ABCP reference tables into a
//! structured, immutable `TableSet`.
//! CONTEXT: Works on the cell windows the schema anchors resolve to.
//! Every header is validated against the schema's expected labels and
//! every data cell must coerce to the documented type; anything else
//! aborts the whole load with `MalformedSource`.

use grid::CellValue;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{TableError, TableSchema, XlsxSource};

// ============================================================================
// TABLE TYPES
// ============================================================================

/// Aggressiveness/type limits: per class, the max water/cement ratio
/// and minimum strength class for each concrete type, plus the
/// minimum cement content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsTable {
    /// Class labels in table order (I..IV).
    pub classes: Vec<String>,
    pub ac_max_reinforced: Vec<f64>,
    pub ac_max_plain: Vec<f64>,
    /// Minimum strength class in MPa, parsed from "C25"-style codes.
    pub fck_min_reinforced: Vec<u32>,
    pub fck_min_plain: Vec<u32>,
    /// Minimum cement content in kg/m³.
    pub cc_min: Vec<f64>,
}

impl LimitsTable {
    pub fn class_index(&self, class: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == class)
    }
}

/// Water consumption in liters per m³, keyed by max aggregate size
/// (columns) and slump band (rows).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTable {
    pub sizes: Vec<f64>,
    pub slumps: Vec<String>,
    /// liters[slump][size]
    pub liters: Vec<Vec<f64>>,
}

/// Volumetric gravel fraction (0-1), keyed by fineness modulus (rows)
/// and max aggregate size (columns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravelFractionTable {
    pub sizes: Vec<f64>,
    pub moduli: Vec<f64>,
    /// fractions[modulus][size]
    pub fractions: Vec<Vec<f64>>,
}

/// Standard deviation (MPa) per preparation condition, in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdDeviationTable {
    pub conditions: Vec<String>,
    pub values: Vec<f64>,
}

impl StdDeviationTable {
    pub fn value_for(&self, condition: &str) -> Option<f64> {
        self.conditions
            .iter()
            .position(|c| c == condition)
            .map(|i| self.values[i])
    }
}

/// One named gravel class with its nominal size and accepted range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravelClass {
    pub name: String,
    pub nominal_size: f64,
    pub size_range: String,
}

/// Metadata listing of the commercial gravel classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravelClassTable {
    pub classes: Vec<GravelClass>,
}

/// The five reference tables, extracted once per source and
/// read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSet {
    pub limits: LimitsTable,
    pub water: WaterTable,
    pub gravel_fraction: GravelFractionTable,
    pub std_deviation: StdDeviationTable,
    pub gravel_classes: GravelClassTable,
}

// ============================================================================
// CELL COERCION HELPERS
// ============================================================================

fn number_at(window: &[Vec<CellValue>], row: usize, col: usize, what: &str) -> Result<f64, TableError> {
    window
        .get(row)
        .and_then(|r| r.get(col))
        .and_then(|c| c.as_number())
        .ok_or_else(|| {
            TableError::MalformedSource(format!(
                "{}: expected a number at window cell ({}, {})",
                what, row, col
            ))
        })
}

fn label_at(window: &[Vec<CellValue>], row: usize, col: usize, what: &str) -> Result<String, TableError> {
    window
        .get(row)
        .and_then(|r| r.get(col))
        .and_then(|c| c.as_label())
        .ok_or_else(|| {
            TableError::MalformedSource(format!(
                "{}: expected a label at window cell ({}, {})",
                what, row, col
            ))
        })
}

/// Parses a strength-class code like "C25" into its MPa value.
fn parse_class_code(code: &str, what: &str) -> Result<u32, TableError> {
    code.trim()
        .strip_prefix('C')
        .and_then(|rest| rest.parse::<u32>().ok())
        .ok_or_else(|| {
            TableError::MalformedSource(format!(
                "{}: '{}' does not match the C<integer> strength-class pattern",
                what, code
            ))
        })
}

/// Checks a header row (starting one cell right of the corner)
/// against the expected label set.
fn check_header(
    window: &[Vec<CellValue>],
    expected: &[String],
    start_col: usize,
    what: &str,
) -> Result<(), TableError> {
    for (i, label) in expected.iter().enumerate() {
        let found = label_at(window, 0, start_col + i, what)?;
        if &found != label {
            return Err(TableError::MalformedSource(format!(
                "{}: header label '{}' found where '{}' was expected",
                what, found, label
            )));
        }
    }
    Ok(())
}

// ============================================================================
// EXTRACTION
// ============================================================================

impl TableSet {
    /// Extracts all five tables from a source according to `schema`.
    /// Any shape, label, or coercion mismatch aborts the whole load.
    pub fn load(source: &XlsxSource, schema: &TableSchema) -> Result<TableSet, TableError> {
        let limits = extract_limits(source, schema)?;
        let water = extract_water(source, schema)?;
        let gravel_fraction = extract_gravel_fraction(source, schema)?;
        let std_deviation = extract_std_deviation(source, schema)?;
        let gravel_classes = extract_gravel_classes(source, schema)?;

        debug!(
            "extracted tables: {} classes, {} water rows, {} modulus rows, {} gravel classes",
            limits.classes.len(),
            water.slumps.len(),
            gravel_fraction.moduli.len(),
            gravel_classes.classes.len()
        );

        Ok(TableSet {
            limits,
            water,
            gravel_fraction,
            std_deviation,
            gravel_classes,
        })
    }
}

fn extract_limits(source: &XlsxSource, schema: &TableSchema) -> Result<LimitsTable, TableError> {
    let what = "limits table";
    let window = schema.limits.extract(source)?;
    check_header(&window, &schema.class_labels, 1, what)?;

    let n = schema.class_labels.len();
    let mut ac_max_reinforced = Vec::with_capacity(n);
    let mut ac_max_plain = Vec::with_capacity(n);
    let mut fck_min_reinforced = Vec::with_capacity(n);
    let mut fck_min_plain = Vec::with_capacity(n);
    let mut cc_min = Vec::with_capacity(n);

    for i in 0..n {
        let col = 1 + i;
        ac_max_reinforced.push(number_at(&window, 1, col, what)?);
        ac_max_plain.push(number_at(&window, 2, col, what)?);
        fck_min_reinforced.push(parse_class_code(&label_at(&window, 3, col, what)?, what)?);
        fck_min_plain.push(parse_class_code(&label_at(&window, 4, col, what)?, what)?);
        cc_min.push(number_at(&window, 5, col, what)?);
    }

    Ok(LimitsTable {
        classes: schema.class_labels.clone(),
        ac_max_reinforced,
        ac_max_plain,
        fck_min_reinforced,
        fck_min_plain,
        cc_min,
    })
}

/// Reads the size axis from a header row: every non-empty cell right
/// of the corner must be numeric.
fn extract_size_axis(window: &[Vec<CellValue>], what: &str) -> Result<Vec<f64>, TableError> {
    let header = window.first().ok_or_else(|| {
        TableError::MalformedSource(format!("{}: anchor window is empty", what))
    })?;

    let mut sizes = Vec::new();
    for cell in header.iter().skip(1) {
        if cell.is_empty() {
            break;
        }
        sizes.push(cell.as_number().ok_or_else(|| {
            TableError::MalformedSource(format!(
                "{}: non-numeric aggregate-size label '{:?}' in header",
                what, cell
            ))
        })?);
    }

    if sizes.is_empty() {
        return Err(TableError::MalformedSource(format!(
            "{}: no aggregate-size labels in header row",
            what
        )));
    }
    Ok(sizes)
}

fn extract_water(source: &XlsxSource, schema: &TableSchema) -> Result<WaterTable, TableError> {
    let what = "water-consumption table";
    let window = schema.water.extract(source)?;
    let sizes = extract_size_axis(&window, what)?;

    let mut slumps = Vec::new();
    let mut liters = Vec::new();
    for (r, row) in window.iter().enumerate().skip(1) {
        // The anchor may be taller than the populated rows.
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }
        slumps.push(label_at(&window, r, 0, what)?);
        let mut values = Vec::with_capacity(sizes.len());
        for c in 0..sizes.len() {
            values.push(number_at(&window, r, 1 + c, what)?);
        }
        liters.push(values);
    }

    if slumps.is_empty() {
        return Err(TableError::MalformedSource(format!(
            "{}: no slump-band rows",
            what
        )));
    }

    Ok(WaterTable {
        sizes,
        slumps,
        liters,
    })
}

fn extract_gravel_fraction(
    source: &XlsxSource,
    schema: &TableSchema,
) -> Result<GravelFractionTable, TableError> {
    let what = "gravel-fraction table";
    let window = schema.gravel_fraction.extract(source)?;
    let sizes = extract_size_axis(&window, what)?;

    let mut moduli = Vec::new();
    let mut fractions = Vec::new();
    for (r, row) in window.iter().enumerate().skip(1) {
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }
        moduli.push(number_at(&window, r, 0, what)?);
        let mut values = Vec::with_capacity(sizes.len());
        for c in 0..sizes.len() {
            let v = number_at(&window, r, 1 + c, what)?;
            if !(0.0..=1.0).contains(&v) {
                return Err(TableError::MalformedSource(format!(
                    "{}: fraction {} outside [0, 1]",
                    what, v
                )));
            }
            values.push(v);
        }
        fractions.push(values);
    }

    if moduli.is_empty() {
        return Err(TableError::MalformedSource(format!(
            "{}: no fineness-modulus rows",
            what
        )));
    }

    Ok(GravelFractionTable {
        sizes,
        moduli,
        fractions,
    })
}

fn extract_std_deviation(
    source: &XlsxSource,
    schema: &TableSchema,
) -> Result<StdDeviationTable, TableError> {
    let what = "standard-deviation table";
    let window = schema.std_deviation.extract(source)?;

    // Unlike the other tables there is no corner cell: the condition
    // labels start in the first window column.
    for (i, label) in schema.condition_labels.iter().enumerate() {
        let found = label_at(&window, 0, i, what)?;
        if &found != label {
            return Err(TableError::MalformedSource(format!(
                "{}: header label '{}' found where '{}' was expected",
                what, found, label
            )));
        }
    }

    let mut values = Vec::with_capacity(schema.condition_labels.len());
    for i in 0..schema.condition_labels.len() {
        values.push(number_at(&window, 1, i, what)?);
    }

    Ok(StdDeviationTable {
        conditions: schema.condition_labels.clone(),
        values,
    })
}

fn extract_gravel_classes(
    source: &XlsxSource,
    schema: &TableSchema,
) -> Result<GravelClassTable, TableError> {
    let what = "gravel-class table";
    let window = schema.gravel_classes.extract(source)?;

    let mut classes = Vec::new();
    for (r, row) in window.iter().enumerate().skip(1) {
        // Rows without a class name are skipped, so the listing may
        // have gaps inside the anchor window.
        let Some(name) = row.first().and_then(|c| c.as_label()) else {
            continue;
        };
        classes.push(GravelClass {
            name,
            nominal_size: number_at(&window, r, 1, what)?,
            size_range: label_at(&window, r, 2, what)?,
        });
    }

    if classes.is_empty() {
        return Err(TableError::MalformedSource(format!(
            "{}: no gravel-class rows",
            what
        )));
    }

    Ok(GravelClassTable { classes })
}
