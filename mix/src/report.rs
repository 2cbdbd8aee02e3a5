//! FILENAME: mix/src/report.rs
//! PURPOSE: Projects a computed mix into the ordered list of
//! (label, value, unit) lines a report renderer consumes.
//! CONTEXT: Identification fields are free text with no effect on the
//! calculation. Rendering the document itself is out of scope.

use serde::{Deserialize, Serialize};

use crate::request::{MixOutcome, MixRequest};

/// Project identification metadata printed at the top of the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub project: String,
    pub technician: String,
    pub usage: String,
    pub fabricated_at: String,
}

/// One printable line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
    pub unit: String,
}

fn line(label: &str, value: String, unit: &str) -> ReportLine {
    ReportLine {
        label: label.to_string(),
        value,
        unit: unit.to_string(),
    }
}

/// The full report projection, ordered: identification, criteria,
/// material inputs, table-resolved parameters, masses, volumes.
pub fn report_lines(
    info: &ProjectInfo,
    request: &MixRequest,
    outcome: &MixOutcome,
) -> Vec<ReportLine> {
    let c = &request.criteria;
    let m = &request.materials;
    let r = &outcome.result;

    vec![
        // Identification.
        line("Project", info.project.clone(), ""),
        line("Technician", info.technician.clone(), ""),
        line("Usage", info.usage.clone(), ""),
        line("Fabricated at", info.fabricated_at.clone(), ""),
        // Selection criteria.
        line("Concrete type", c.concrete_type.as_label().to_string(), ""),
        line(
            "Aggressiveness class",
            c.aggressiveness_class.as_label().to_string(),
            "",
        ),
        line(
            "Preparation condition",
            c.preparation_condition.as_label().to_string(),
            "",
        ),
        line("Max aggregate size", format!("{:.1}", c.max_aggregate_size), "mm"),
        line("Slump range", c.slump_range.clone(), "mm"),
        line("Fineness modulus", format!("{:.2}", c.fineness_modulus), ""),
        line("Small gravel share", format!("{:.0}", c.small_gravel_pct), "%"),
        line("Water/cement ratio", format!("{:.2}", c.water_cement_ratio), ""),
        // Material inputs.
        line("Water density", format!("{:.0}", m.water_density), "kg/m³"),
        line("Cement grain density", format!("{:.0}", m.cement_density), "kg/m³"),
        line("Sand grain density", format!("{:.0}", m.sand_grain_density), "kg/m³"),
        line(
            "Small gravel grain density",
            format!("{:.0}", m.small_gravel_grain_density),
            "kg/m³",
        ),
        line(
            "Large gravel grain density",
            format!("{:.0}", m.large_gravel_grain_density),
            "kg/m³",
        ),
        line("Sand bulk density", format!("{:.0}", m.sand_bulk_density), "kg/m³"),
        line(
            "Small gravel bulk density",
            format!("{:.0}", m.small_gravel_bulk_density),
            "kg/m³",
        ),
        line(
            "Large gravel bulk density",
            format!("{:.0}", m.large_gravel_bulk_density),
            "kg/m³",
        ),
        line("Sand moisture", format!("{:.1}", m.sand_moisture_pct), "%"),
        line("Sand absorption", format!("{:.1}", m.sand_absorption_pct), "%"),
        line("Sand bulking", format!("{:.0}", m.sand_bulking_pct), "%"),
        line("Gravel moisture", format!("{:.1}", m.gravel_moisture_pct), "%"),
        line("Gravel absorption", format!("{:.1}", m.gravel_absorption_pct), "%"),
        // Table-resolved parameters.
        line(
            "Max w/c ratio (table)",
            format!("{:.2}", outcome.limits.max_water_cement_ratio),
            "",
        ),
        line(
            "Min strength class (table)",
            format!("C{}", outcome.limits.min_strength_class),
            "",
        ),
        line(
            "Min cement content (table)",
            format!("{:.0}", outcome.limits.min_cement_content),
            "kg/m³",
        ),
        line("Standard deviation Sd", format!("{:.2}", outcome.std_deviation), "MPa"),
        line("Target strength (28d)", format!("{:.1}", outcome.target_strength), "MPa"),
        line(
            "Water content (table)",
            format!("{:.1}", outcome.water_content_liters),
            "L/m³",
        ),
        line(
            "Gravel volume fraction (table)",
            format!("{:.3}", outcome.gravel_volume_fraction),
            "",
        ),
        line(
            "w/c ratio check",
            if outcome.ratio_exceeds_limit {
                "above table limit".to_string()
            } else {
                "within table limit".to_string()
            },
            "",
        ),
        line(
            "Volume closure",
            if r.sand_clamped {
                "over-specified, sand clamped to zero".to_string()
            } else {
                "closed at 1.000 m³".to_string()
            },
            "",
        ),
        // Masses per m³.
        line("Design water mass", format!("{:.2}", r.water_mass), "kg/m³"),
        line("Cement", format!("{:.2}", r.cement_mass), "kg/m³"),
        line("Small gravel", format!("{:.2}", r.small_gravel_mass), "kg/m³"),
        line("Large gravel", format!("{:.2}", r.large_gravel_mass), "kg/m³"),
        line("Total gravel", format!("{:.2}", r.total_gravel_mass), "kg/m³"),
        line("Sand (dry)", format!("{:.2}", r.dry_sand_mass), "kg/m³"),
        line("Sand (wet)", format!("{:.2}", r.wet_sand_mass), "kg/m³"),
        line("Sand moisture water", format!("{:.2}", r.sand_moisture_water), "kg/m³"),
        line(
            "Gravel moisture water",
            format!("{:.2}", r.gravel_moisture_water),
            "kg/m³",
        ),
        line("Absorbed water", format!("{:.2}", r.absorbed_water), "kg/m³"),
        line("Water to add", format!("{:.2}", r.net_water_mass), "kg/m³"),
        // Volumes per m³.
        line("Cement volume", format!("{:.4}", r.cement_volume), "m³"),
        line("Water volume", format!("{:.4}", r.water_volume), "m³"),
        line("Gravel volume", format!("{:.4}", r.gravel_volume), "m³"),
        line("Sand volume", format!("{:.4}", r.sand_volume), "m³"),
        line(
            "Sand to measure (bulked)",
            format!("{:.4}", r.site_sand_volume_m3),
            "m³",
        ),
        line(
            "Sand to measure (bulked)",
            format!("{:.1}", r.site_sand_volume_liters),
            "L",
        ),
    ]
}
