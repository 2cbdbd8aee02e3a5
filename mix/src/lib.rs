//! FILENAME: mix/src/lib.rs
//! ABCP Mix Design Engine
//!
//! Resolves design parameters from the reference tables
//! (`LookupResolver`) and closes the per-m³ mix by the method of
//! absolute volumes (`MixCalculator`). Everything here is pure and
//! deterministic; table loading lives in the `tables` crate and
//! report rendering is a downstream concern fed by `report`.

pub mod calculator;
pub mod criteria;
pub mod materials;
pub mod report;
pub mod request;
pub mod resolver;

pub use calculator::{MixInput, MixResult};
pub use criteria::{AggressivenessClass, ConcreteType, PreparationCondition, SelectionCriteria};
pub use materials::{InvalidInputError, MaterialProperties};
pub use report::{report_lines, ProjectInfo, ReportLine};
pub use request::{compute_mix, MixError, MixOutcome, MixRequest, Overrides};
pub use resolver::{Limits, LookupError};
