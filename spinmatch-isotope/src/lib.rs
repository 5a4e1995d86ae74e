//! # spinmatch-isotope
//!
//! Deuterium isotope shift correction for backbone carbon chemical shifts.
//!
//! ## Purpose
//!
//! Deuterating a protein moves the observed CA and CB resonances upfield by
//! a residue specific amount. Given a shift measured in one sample, this
//! crate estimates the shift the same nucleus would show in the other
//! sample, so spin systems measured in protonated and deuterated samples
//! can be compared with each other.
//!
//! ## Main Components
//!
//! - **`IsotopeCorrectionTable`**: versioned, TOML backed table of per residue
//!   CA/CB offsets. The built-in table holds the TALOS+ values.
//! - **`correct`**: the shift corrector, mapping a shift to its estimate under
//!   the opposite isotopic condition.
//! - **`venters`**: the per-deuteron prediction model of Venters et al., which
//!   can produce an alternative table.
//!
//! ## Example
//!
//! ```rust
//! use spinmatch_core::models::{AtomType, IsotopicCondition, ResidueType};
//! use spinmatch_isotope::{IsotopeCorrectionTable, correct};
//!
//! let table = IsotopeCorrectionTable::talos().unwrap();
//!
//! let deuterated = correct(
//!     &table,
//!     &ResidueType::from("Ala"),
//!     &AtomType::from("CA"),
//!     52.0,
//!     IsotopicCondition::Protonated,
//! )
//! .unwrap();
//!
//! assert!((deuterated - 51.527).abs() < 1e-9);
//! ```
//!
pub mod atoms;
pub mod corrector;
pub mod errors;
pub mod table;
pub mod venters;

// re-export things
pub use atoms::CorrectableAtom;
pub use corrector::correct;
pub use errors::*;
pub use table::{IsotopeCorrectionTable, ResidueOffsets};

// contants
pub mod consts {
    /// Only table version this crate understands.
    pub const TABLE_VERSION: u32 = 1;

    /// The built-in correction table.
    pub const TALOS_TABLE: &str = include_str!("../data/talos_isotope_shifts.toml");
}
