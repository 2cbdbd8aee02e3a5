//! FILENAME: mix/src/criteria.rs
//! PURPOSE: The selection criteria that pick which table rows and
//! columns a calculation resolves against.
//! CONTEXT: Criteria originate as labels in a form and get printed
//! back into reports, so each enum carries a label round-trip.

use serde::{Deserialize, Serialize};

/// Concrete type, which selects the row group in the limits table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcreteType {
    /// Reinforced concrete ("CA" in the reference workbook).
    Reinforced,
    /// Plain concrete ("CP").
    Plain,
}

impl ConcreteType {
    pub fn as_label(&self) -> &'static str {
        match self {
            ConcreteType::Reinforced => "CA",
            ConcreteType::Plain => "CP",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "CA" => Some(ConcreteType::Reinforced),
            "CP" => Some(ConcreteType::Plain),
            _ => None,
        }
    }
}

/// Environmental aggressiveness class, the column axis of the
/// limits table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggressivenessClass {
    I,
    II,
    III,
    IV,
}

impl AggressivenessClass {
    pub fn as_label(&self) -> &'static str {
        match self {
            AggressivenessClass::I => "I",
            AggressivenessClass::II => "II",
            AggressivenessClass::III => "III",
            AggressivenessClass::IV => "IV",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "I" => Some(AggressivenessClass::I),
            "II" => Some(AggressivenessClass::II),
            "III" => Some(AggressivenessClass::III),
            "IV" => Some(AggressivenessClass::IV),
            _ => None,
        }
    }
}

/// Preparation condition, the key of the standard-deviation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreparationCondition {
    A,
    B,
    C,
}

impl PreparationCondition {
    pub fn as_label(&self) -> &'static str {
        match self {
            PreparationCondition::A => "A",
            PreparationCondition::B => "B",
            PreparationCondition::C => "C",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "A" => Some(PreparationCondition::A),
            "B" => Some(PreparationCondition::B),
            "C" => Some(PreparationCondition::C),
            _ => None,
        }
    }
}

/// Everything the caller chooses before a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionCriteria {
    pub concrete_type: ConcreteType,
    pub aggressiveness_class: AggressivenessClass,
    pub preparation_condition: PreparationCondition,
    /// Max aggregate size in mm; must hit the table axis exactly.
    pub max_aggregate_size: f64,
    /// Slump band label, e.g. "40-60".
    pub slump_range: String,
    /// Sand fineness modulus; nearest table row is used when no exact
    /// entry exists.
    pub fineness_modulus: f64,
    /// Percentage [0, 100] of total gravel assigned to the smaller
    /// fraction.
    pub small_gravel_pct: f64,
    /// Design water/cement ratio chosen by the caller, checked
    /// against the table limit.
    pub water_cement_ratio: f64,
}
