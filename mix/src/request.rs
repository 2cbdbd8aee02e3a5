//! FILENAME: mix/src/request.rs
//! PURPOSE: The single calculation entry point: bundles criteria,
//! material properties, and manual overrides, resolves the table
//! parameters, and runs the calculator.
//! CONTEXT: This is where lookup misses become hard errors. The core
//! never substitutes a default on its own; a caller that wants a
//! fallback states it as an override.

use serde::{Deserialize, Serialize};
use tables::TableSet;
use thiserror::Error;

use crate::calculator::{compute, MixInput, MixResult};
use crate::criteria::SelectionCriteria;
use crate::materials::{InvalidInputError, MaterialProperties};
use crate::resolver::{
    resolve_gravel_fraction, resolve_limits, resolve_std_deviation, resolve_water_content,
    target_strength, Limits, LookupError,
};

#[derive(Error, Debug)]
pub enum MixError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Input(#[from] InvalidInputError),
}

/// Manual overrides for any table-resolved value. A present override
/// bypasses the table path entirely for that parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    pub water_content_liters: Option<f64>,
    pub gravel_volume_fraction: Option<f64>,
    pub max_water_cement_ratio: Option<f64>,
    pub min_cement_content: Option<f64>,
    pub std_deviation: Option<f64>,
}

/// One self-contained calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixRequest {
    pub criteria: SelectionCriteria,
    pub materials: MaterialProperties,
    #[serde(default)]
    pub overrides: Overrides,
}

/// The resolved parameters beside the computed mix, so a report can
/// show where every number came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixOutcome {
    pub limits: Limits,
    pub std_deviation: f64,
    /// fck + 1.65 · Sd, MPa at 28 days.
    pub target_strength: f64,
    pub water_content_liters: f64,
    pub gravel_volume_fraction: f64,
    /// The caller-chosen w/c ratio exceeds the table limit. A design
    /// warning, not an error: the mix is still computed.
    pub ratio_exceeds_limit: bool,
    pub result: MixResult,
}

/// Resolves every table parameter for `request` (honoring overrides)
/// and closes the mix.
pub fn compute_mix(tables: &TableSet, request: &MixRequest) -> Result<MixOutcome, MixError> {
    let criteria = &request.criteria;
    let overrides = &request.overrides;

    let mut limits = resolve_limits(
        tables,
        criteria.concrete_type,
        criteria.aggressiveness_class,
    )?;
    if let Some(ac_max) = overrides.max_water_cement_ratio {
        limits.max_water_cement_ratio = ac_max;
    }
    if let Some(cc_min) = overrides.min_cement_content {
        limits.min_cement_content = cc_min;
    }

    let std_deviation = match overrides.std_deviation {
        Some(sd) => sd,
        None => resolve_std_deviation(tables, criteria.preparation_condition)?,
    };

    let water_content_liters = match overrides.water_content_liters {
        Some(liters) => liters,
        None => resolve_water_content(tables, criteria.max_aggregate_size, &criteria.slump_range)
            .ok_or_else(|| LookupError {
                table: "water-consumption",
                key: format!(
                    "size {} mm / slump {}",
                    criteria.max_aggregate_size, criteria.slump_range
                ),
            })?,
    };

    let gravel_volume_fraction = match overrides.gravel_volume_fraction {
        Some(fraction) => fraction,
        None => resolve_gravel_fraction(
            tables,
            criteria.fineness_modulus,
            criteria.max_aggregate_size,
        )
        .ok_or_else(|| LookupError {
            table: "gravel-fraction",
            key: format!("size {} mm", criteria.max_aggregate_size),
        })?,
    };

    let ratio_exceeds_limit = criteria.water_cement_ratio > limits.max_water_cement_ratio + 1e-9;

    let result = compute(&MixInput {
        water_content_liters,
        water_cement_ratio: criteria.water_cement_ratio,
        min_cement_content: limits.min_cement_content,
        gravel_volume_fraction,
        small_gravel_pct: criteria.small_gravel_pct,
        materials: request.materials.clone(),
    })?;

    Ok(MixOutcome {
        target_strength: target_strength(limits.min_strength_class, std_deviation),
        limits,
        std_deviation,
        water_content_liters,
        gravel_volume_fraction,
        ratio_exceeds_limit,
        result,
    })
}
