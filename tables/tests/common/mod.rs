//! FILENAME: tables/tests/common/mod.rs
//! PURPOSE: Shared fixture builder: writes a workbook shaped like the
//! reference ABCP sheet, matching `TableSchema::default()` anchors.

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

/// Values that vary between fixture variants.
pub struct FixtureOptions {
    /// Label written where the limits header expects "IV".
    pub fourth_class_label: &'static str,
    /// Strength-class code written for reinforced class I.
    pub first_fck_code: &'static str,
    /// Water liters for slump "40-60" at 9.5 mm.
    pub first_water_value: f64,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        FixtureOptions {
            fourth_class_label: "IV",
            first_fck_code: "C20",
            first_water_value: 220.0,
        }
    }
}

/// Writes the reference workbook to `path`. All anchors line up with
/// `TableSchema::default()`; a defined name "WaterTable" covers the
/// water-consumption window for named-anchor tests.
pub fn write_reference_workbook(path: &Path, options: &FixtureOptions) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("ABCP")?;

    // Limits table: window (1, 1), 6 rows x 5 cols.
    sheet.write_string(1, 1, "Classe")?;
    for (i, label) in ["I", "II", "III"].iter().enumerate() {
        sheet.write_string(1, 2 + i as u16, *label)?;
    }
    sheet.write_string(1, 5, options.fourth_class_label)?;

    sheet.write_string(2, 1, "a/c máx (CA)")?;
    for (i, v) in [0.65, 0.60, 0.55, 0.45].iter().enumerate() {
        sheet.write_number(2, 2 + i as u16, *v)?;
    }
    sheet.write_string(3, 1, "a/c máx (CP)")?;
    for (i, v) in [0.65, 0.60, 0.50, 0.45].iter().enumerate() {
        sheet.write_number(3, 2 + i as u16, *v)?;
    }
    sheet.write_string(4, 1, "fck mín (CA)")?;
    sheet.write_string(4, 2, options.first_fck_code)?;
    for (i, code) in ["C25", "C30", "C40"].iter().enumerate() {
        sheet.write_string(4, 3 + i as u16, *code)?;
    }
    sheet.write_string(5, 1, "fck mín (CP)")?;
    for (i, code) in ["C15", "C20", "C25", "C30"].iter().enumerate() {
        sheet.write_string(5, 2 + i as u16, *code)?;
    }
    sheet.write_string(6, 1, "Cc mín")?;
    for (i, v) in [260.0, 280.0, 320.0, 360.0].iter().enumerate() {
        sheet.write_number(6, 2 + i as u16, *v)?;
    }

    // Water-consumption table: window (9, 1), 4 rows x 6 cols.
    let sizes = [9.5, 19.0, 25.0, 32.0, 38.0];
    sheet.write_string(9, 1, "Slump")?;
    for (i, size) in sizes.iter().enumerate() {
        sheet.write_number(9, 2 + i as u16, *size)?;
    }
    let water_rows: [(&str, [f64; 5]); 3] = [
        (
            "40-60",
            [options.first_water_value, 195.0, 190.0, 185.0, 180.0],
        ),
        ("60-80", [225.0, 200.0, 195.0, 190.0, 185.0]),
        ("80-100", [230.0, 205.0, 200.0, 195.0, 190.0]),
    ];
    for (r, (slump, values)) in water_rows.iter().enumerate() {
        let row = 10 + r as u32;
        sheet.write_string(row, 1, *slump)?;
        for (c, v) in values.iter().enumerate() {
            sheet.write_number(row, 2 + c as u16, *v)?;
        }
    }

    // Gravel-fraction table: window (15, 1), 5 rows x 6 cols.
    sheet.write_string(15, 1, "MF")?;
    for (i, size) in sizes.iter().enumerate() {
        sheet.write_number(15, 2 + i as u16, *size)?;
    }
    let fraction_rows: [(f64, [f64; 5]); 4] = [
        (1.8, [0.645, 0.770, 0.795, 0.820, 0.845]),
        (2.2, [0.605, 0.730, 0.755, 0.780, 0.805]),
        (2.6, [0.565, 0.690, 0.715, 0.740, 0.765]),
        (3.0, [0.525, 0.650, 0.675, 0.700, 0.725]),
    ];
    for (r, (mf, values)) in fraction_rows.iter().enumerate() {
        let row = 16 + r as u32;
        sheet.write_number(row, 1, *mf)?;
        for (c, v) in values.iter().enumerate() {
            sheet.write_number(row, 2 + c as u16, *v)?;
        }
    }

    // Standard-deviation table: window (2, 8), 2 rows x 3 cols.
    for (i, cond) in ["A", "B", "C"].iter().enumerate() {
        sheet.write_string(2, 8 + i as u16, *cond)?;
    }
    for (i, v) in [4.0, 5.5, 7.0].iter().enumerate() {
        sheet.write_number(3, 8 + i as u16, *v)?;
    }

    // Gravel-class table: window (19, 8), 6 rows x 3 cols.
    sheet.write_string(19, 8, "Brita")?;
    sheet.write_string(19, 9, "Dmáx (mm)")?;
    sheet.write_string(19, 10, "Faixa (mm)")?;
    let classes: [(&str, f64, &str); 5] = [
        ("Brita 0", 9.5, "4,8-9,5"),
        ("Brita 1", 19.0, "9,5-19"),
        ("Brita 2", 25.0, "19-25"),
        ("Brita 3", 38.0, "25-50"),
        ("Brita 4", 64.0, "50-76"),
    ];
    for (r, (name, size, range)) in classes.iter().enumerate() {
        let row = 20 + r as u32;
        sheet.write_string(row, 8, *name)?;
        sheet.write_number(row, 9, *size)?;
        sheet.write_string(row, 10, *range)?;
    }

    // Named range over the water window for named-anchor tests.
    workbook.define_name("WaterTable", "=ABCP!$B$10:$G$13")?;

    workbook.save(path)?;
    Ok(())
}
