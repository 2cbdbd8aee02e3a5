//! FILENAME: mix/src/materials.rs
//! PURPOSE: Manually measured material properties and their physical
//! validation.
//! CONTEXT: These come from the lab, not the tables. Densities are
//! kg/m³; moisture, absorption, and bulking are percentages. Defaults
//! carry the reference workbook's typical values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A material property outside its physically valid range.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid input '{field}' = {value}: {reason}")]
pub struct InvalidInputError {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

/// Lab-measured properties of the four materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProperties {
    // Grain (true) densities, kg/m³.
    pub water_density: f64,
    pub cement_density: f64,
    pub sand_grain_density: f64,
    pub small_gravel_grain_density: f64,
    pub large_gravel_grain_density: f64,

    // Bulk (apparent, compacted-dry) densities, kg/m³.
    pub sand_bulk_density: f64,
    pub small_gravel_bulk_density: f64,
    pub large_gravel_bulk_density: f64,

    // Sand state, %.
    pub sand_moisture_pct: f64,
    pub sand_absorption_pct: f64,
    pub sand_bulking_pct: f64,

    // Gravel state, %.
    pub gravel_moisture_pct: f64,
    pub gravel_absorption_pct: f64,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties {
            water_density: 1000.0,
            cement_density: 3100.0,
            sand_grain_density: 2650.0,
            small_gravel_grain_density: 2700.0,
            large_gravel_grain_density: 2700.0,
            sand_bulk_density: 1470.0,
            small_gravel_bulk_density: 1430.0,
            large_gravel_bulk_density: 1430.0,
            sand_moisture_pct: 6.0,
            sand_absorption_pct: 0.0,
            sand_bulking_pct: 20.0,
            gravel_moisture_pct: 0.0,
            gravel_absorption_pct: 1.0,
        }
    }
}

impl MaterialProperties {
    /// Rejects physically impossible values before any calculation.
    /// Densities must be strictly positive; percentages must not be
    /// negative.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let densities = [
            ("water_density", self.water_density),
            ("cement_density", self.cement_density),
            ("sand_grain_density", self.sand_grain_density),
            ("small_gravel_grain_density", self.small_gravel_grain_density),
            ("large_gravel_grain_density", self.large_gravel_grain_density),
            ("sand_bulk_density", self.sand_bulk_density),
            ("small_gravel_bulk_density", self.small_gravel_bulk_density),
            ("large_gravel_bulk_density", self.large_gravel_bulk_density),
        ];
        for (field, value) in densities {
            if !(value > 0.0) || !value.is_finite() {
                return Err(InvalidInputError {
                    field,
                    value,
                    reason: "density must be a strictly positive number",
                });
            }
        }

        let percentages = [
            ("sand_moisture_pct", self.sand_moisture_pct),
            ("sand_absorption_pct", self.sand_absorption_pct),
            ("sand_bulking_pct", self.sand_bulking_pct),
            ("gravel_moisture_pct", self.gravel_moisture_pct),
            ("gravel_absorption_pct", self.gravel_absorption_pct),
        ];
        for (field, value) in percentages {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(InvalidInputError {
                    field,
                    value,
                    reason: "percentage must not be negative",
                });
            }
        }

        Ok(())
    }
}
