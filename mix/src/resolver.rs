//! FILENAME: mix/src/resolver.rs
//! PURPOSE: Resolves scalar design parameters from the reference
//! tables for a given set of selection criteria.
//! CONTEXT: Pure functions over a `TableSet`. Lookups never
//! interpolate: the tables are normative engineering references, so a
//! lookup either picks an existing entry (exact, or nearest on the
//! fineness-modulus axis only) or reports a miss for the caller to
//! handle.

use serde::{Deserialize, Serialize};
use tables::TableSet;
use thiserror::Error;

use crate::criteria::{AggressivenessClass, ConcreteType, PreparationCondition};

/// A criterion combination with no table entry. Recoverable by the
/// caller via an explicit manual override; never silently defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("no entry in the {table} table for {key}")]
pub struct LookupError {
    pub table: &'static str,
    pub key: String,
}

/// Limits resolved from the aggressiveness/type table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub max_water_cement_ratio: f64,
    /// Minimum strength class, MPa.
    pub min_strength_class: u32,
    /// Minimum cement content, kg/m³.
    pub min_cement_content: f64,
}

/// Exact position of `value` on a numeric table axis. Sizes and
/// moduli round-trip through XLSX floats, so "exact" tolerates 1e-9.
fn axis_position(axis: &[f64], value: f64) -> Option<usize> {
    axis.iter().position(|v| (v - value).abs() < 1e-9)
}

/// Max w/c ratio, minimum strength class, and minimum cement content
/// for a concrete type and aggressiveness class.
pub fn resolve_limits(
    tables: &TableSet,
    concrete_type: ConcreteType,
    class: AggressivenessClass,
) -> Result<Limits, LookupError> {
    let j = tables
        .limits
        .class_index(class.as_label())
        .ok_or_else(|| LookupError {
            table: "limits",
            key: format!("class {}", class.as_label()),
        })?;

    let (ac_max, fck_min) = match concrete_type {
        ConcreteType::Reinforced => (
            tables.limits.ac_max_reinforced[j],
            tables.limits.fck_min_reinforced[j],
        ),
        ConcreteType::Plain => (
            tables.limits.ac_max_plain[j],
            tables.limits.fck_min_plain[j],
        ),
    };

    Ok(Limits {
        max_water_cement_ratio: ac_max,
        min_strength_class: fck_min,
        min_cement_content: tables.limits.cc_min[j],
    })
}

/// Standard deviation (MPa) for a preparation condition.
pub fn resolve_std_deviation(
    tables: &TableSet,
    condition: PreparationCondition,
) -> Result<f64, LookupError> {
    tables
        .std_deviation
        .value_for(condition.as_label())
        .ok_or_else(|| LookupError {
            table: "standard-deviation",
            key: format!("condition {}", condition.as_label()),
        })
}

/// Water consumption in liters/m³ for an aggregate size and slump
/// band. Both axes are exact-matched; `None` when either misses.
pub fn resolve_water_content(tables: &TableSet, size: f64, slump: &str) -> Option<f64> {
    let i = tables
        .water
        .slumps
        .iter()
        .position(|s| s == slump.trim())?;
    let j = axis_position(&tables.water.sizes, size)?;
    Some(tables.water.liters[i][j])
}

/// Volumetric gravel fraction for a fineness modulus and aggregate
/// size. The size axis is always exact-matched; the modulus axis
/// prefers an exact entry, otherwise the row with the smallest
/// absolute difference wins, first table order breaking ties.
pub fn resolve_gravel_fraction(tables: &TableSet, fineness_modulus: f64, size: f64) -> Option<f64> {
    let j = axis_position(&tables.gravel_fraction.sizes, size)?;

    let moduli = &tables.gravel_fraction.moduli;
    let i = match axis_position(moduli, fineness_modulus) {
        Some(i) => i,
        None => nearest_row(moduli, fineness_modulus)?,
    };

    Some(tables.gravel_fraction.fractions[i][j])
}

/// Index of the axis entry closest to `value`; strict `<` keeps the
/// first occurrence on an exact tie. A non-finite value has no
/// nearest entry and reports a miss.
fn nearest_row(axis: &[f64], value: f64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in axis.iter().enumerate() {
        let diff = (v - value).abs();
        match best {
            Some((_, best_diff)) if diff < best_diff => best = Some((i, diff)),
            None => best = Some((i, diff)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

/// Target design strength at 28 days: fck + 1.65 · Sd.
pub fn target_strength(min_strength_class: u32, std_deviation: f64) -> f64 {
    min_strength_class as f64 + 1.65 * std_deviation
}
