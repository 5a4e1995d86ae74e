//! Isotope aware comparison of NMR spin systems.
//!
//! This crate decides whether two spin systems describe the same residue,
//! even when they were measured on differently labeled samples:
//!
//! - Resolving every resonance to a protonated and a deuterated shift,
//!   estimating the missing one with the isotope correction table
//! - Pairing resonances of the same atom type across two spin systems
//! - Scoring each pair and reducing the scores to a deviation and a verdict
//! - Comparing every spin system of a project against every other one
//!
//! # Example
//!
//! ```no_run
//! use spinmatch_compare::{CompareSettings, CompareSpinSystems};
//! use spinmatch_core::models::{NmrProject, ShiftListId};
//! use spinmatch_isotope::IsotopeCorrectionTable;
//!
//! let project = NmrProject::try_from("project.json").unwrap();
//! let table = IsotopeCorrectionTable::talos().unwrap();
//! let settings = CompareSettings::new(ShiftListId(1), ShiftListId(2));
//!
//! let a = project.get(1).unwrap();
//! let b = project.get(2).unwrap();
//! let result = a.compare_with(b, &table, &settings).unwrap();
//!
//! println!("deviation: {:?}, match: {}", result.deviation, result.is_match);
//! ```

pub mod aggregate;
pub mod comparator;
pub mod comparison;
pub mod errors;
pub mod matrix;
pub mod resolver;
pub mod settings;

// re-exports
pub use aggregate::{CompareSpinSystems, SpinSystemComparisonResult, compare_spin_systems};
pub use comparator::{Partition, compare};
pub use comparison::{MatchedPair, PairComparison, ResonanceLabel, UniqueResonance};
pub use errors::{CompareError, CompareResult};
pub use matrix::{SimilarityMatrix, compare_to_all};
pub use resolver::{ShiftEstimate, ShiftResolver};
pub use settings::CompareSettings;

pub mod consts {
    /// Two shifts closer than this (ppm) are considered a match.
    pub const MATCH_CUTOFF: f64 = 0.5;
}
