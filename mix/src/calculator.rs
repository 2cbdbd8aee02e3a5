//! FILENAME: mix/src/calculator.rs
//! PURPOSE: The absolute-volume closure: resolved parameters plus
//! material properties in, a complete per-m³ mix composition out.
//! CONTEXT: Stateless and deterministic. All table resolution happens
//! upstream; this module only does arithmetic on plain numbers.
//! Moisture/absorption terms default to zero when unknown, which is
//! equivalent to omitting them.

use serde::{Deserialize, Serialize};

use crate::materials::{InvalidInputError, MaterialProperties};

/// Guards the cement division against a degenerate w/c ratio of 0.
const MIN_RATIO: f64 = 1e-9;

/// Everything the calculator needs, already resolved to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixInput {
    /// Design water consumption, liters per m³.
    pub water_content_liters: f64,
    /// Design water/cement ratio.
    pub water_cement_ratio: f64,
    /// Minimum cement content, kg/m³.
    pub min_cement_content: f64,
    /// Volumetric gravel fraction (0-1) of the mix.
    pub gravel_volume_fraction: f64,
    /// Percentage [0, 100] of gravel mass in the smaller fraction.
    pub small_gravel_pct: f64,
    pub materials: MaterialProperties,
}

/// A complete per-m³ mix. A fresh standalone value: no references
/// back into the inputs or the tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixResult {
    // Masses, kg/m³.
    pub water_mass: f64,
    pub cement_mass: f64,
    pub small_gravel_mass: f64,
    pub large_gravel_mass: f64,
    pub total_gravel_mass: f64,
    pub dry_sand_mass: f64,
    pub wet_sand_mass: f64,

    // Absolute volumes, m³ per m³ of concrete.
    pub cement_volume: f64,
    pub water_volume: f64,
    pub gravel_volume: f64,
    pub sand_volume: f64,
    /// True when cement + water + gravel already exceeded 1 m³ and
    /// the sand residual was clamped to zero (over-specified mix).
    pub sand_clamped: bool,

    // Water balance, kg/m³.
    pub sand_moisture_water: f64,
    pub gravel_moisture_water: f64,
    pub absorbed_water: f64,
    /// Water to actually add at mixing; can be negative when the
    /// aggregates carry more water than the design target.
    pub net_water_mass: f64,

    // Site-measurable sand volume, bulking-corrected.
    pub site_sand_volume_m3: f64,
    pub site_sand_volume_liters: f64,
}

impl MixInput {
    fn validate(&self) -> Result<(), InvalidInputError> {
        self.materials.validate()?;

        if !(self.water_content_liters >= 0.0) || !self.water_content_liters.is_finite() {
            return Err(InvalidInputError {
                field: "water_content_liters",
                value: self.water_content_liters,
                reason: "water content must not be negative",
            });
        }
        if !(self.water_cement_ratio >= 0.0) || !self.water_cement_ratio.is_finite() {
            return Err(InvalidInputError {
                field: "water_cement_ratio",
                value: self.water_cement_ratio,
                reason: "w/c ratio must not be negative",
            });
        }
        if !(0.0..=1.0).contains(&self.gravel_volume_fraction) {
            return Err(InvalidInputError {
                field: "gravel_volume_fraction",
                value: self.gravel_volume_fraction,
                reason: "gravel volume fraction must be within [0, 1]",
            });
        }
        if !(0.0..=100.0).contains(&self.small_gravel_pct) {
            return Err(InvalidInputError {
                field: "small_gravel_pct",
                value: self.small_gravel_pct,
                reason: "small-gravel percentage must be within [0, 100]",
            });
        }
        Ok(())
    }
}

/// Closes the mix by the method of absolute volumes on a 1 m³ basis.
pub fn compute(input: &MixInput) -> Result<MixResult, InvalidInputError> {
    input.validate()?;
    let m = &input.materials;

    // Design water mass from liters and water density.
    let water_mass = input.water_content_liters * (m.water_density / 1000.0);

    // Cement from the w/c ratio, floored at the minimum content.
    let cement_mass = (water_mass / input.water_cement_ratio.max(MIN_RATIO))
        .max(input.min_cement_content);

    // Gravel masses from the volumetric fraction and bulk densities.
    // An interior split divides the fraction by bulk-density-weighted
    // shares; at the boundaries the single present fraction takes the
    // whole volume fraction with its own bulk density.
    let small_share = input.small_gravel_pct / 100.0;
    let (small_gravel_mass, large_gravel_mass) = if small_share <= 0.0 {
        (0.0, input.gravel_volume_fraction * m.large_gravel_bulk_density)
    } else if small_share >= 1.0 {
        (input.gravel_volume_fraction * m.small_gravel_bulk_density, 0.0)
    } else {
        (
            input.gravel_volume_fraction * m.small_gravel_bulk_density * small_share,
            input.gravel_volume_fraction * m.large_gravel_bulk_density * (1.0 - small_share),
        )
    };
    let total_gravel_mass = small_gravel_mass + large_gravel_mass;

    // Absolute volumes use grain densities; bulk densities only ever
    // feed the site-measurement conversion below.
    let cement_volume = cement_mass / m.cement_density;
    let water_volume = water_mass / m.water_density;
    let gravel_volume = small_gravel_mass / m.small_gravel_grain_density
        + large_gravel_mass / m.large_gravel_grain_density;

    // Sand is the residual of the unit volume, clamped at zero.
    let sand_residual = 1.0 - (cement_volume + water_volume + gravel_volume);
    let sand_clamped = sand_residual < 0.0;
    let sand_volume = sand_residual.max(0.0);

    let dry_sand_mass = sand_volume * m.sand_grain_density;
    let wet_sand_mass = dry_sand_mass * (1.0 + m.sand_moisture_pct / 100.0);
    let sand_moisture_water = wet_sand_mass - dry_sand_mass;

    let gravel_moisture_water = total_gravel_mass * (m.gravel_moisture_pct / 100.0);

    let absorbed_water = dry_sand_mass * (m.sand_absorption_pct / 100.0)
        + total_gravel_mass * (m.gravel_absorption_pct / 100.0);

    // Moist aggregates offset the design water; absorbed water is
    // unavailable for workability and must be added back.
    let net_water_mass =
        water_mass + absorbed_water - (sand_moisture_water + gravel_moisture_water);

    // Sand as measured on site: apparent (bulk) volume plus bulking.
    let site_sand_volume_m3 =
        (dry_sand_mass / m.sand_bulk_density) * (1.0 + m.sand_bulking_pct / 100.0);
    let site_sand_volume_liters = site_sand_volume_m3 * 1000.0;

    Ok(MixResult {
        water_mass,
        cement_mass,
        small_gravel_mass,
        large_gravel_mass,
        total_gravel_mass,
        dry_sand_mass,
        wet_sand_mass,
        cement_volume,
        water_volume,
        gravel_volume,
        sand_volume,
        sand_clamped,
        sand_moisture_water,
        gravel_moisture_water,
        absorbed_water,
        net_water_mass,
        site_sand_volume_m3,
        site_sand_volume_liters,
    })
}
