//! Core data model for comparing NMR spin systems.
//!
//! A [`SpinSystem`](models::SpinSystem) groups the [`Resonance`](models::Resonance)s
//! believed to belong to one residue. Every resonance carries at most one
//! chemical shift per shift list; two of those shift lists are designated as
//! the protonated and the deuterated measurement of the sample.
//!
//! The comparison crates never read the models directly. They go through the
//! narrow, total read contract in [`traits`], so any other molecular data
//! repository can be plugged in by implementing [`ResonanceView`] and
//! [`SpinSystemView`].
//!
//! # Example
//!
//! ```no_run
//! use spinmatch_core::models::NmrProject;
//! use std::path::Path;
//!
//! let project = NmrProject::try_from(Path::new("project.json")).unwrap();
//!
//! for spin_system in project.iter_spin_systems() {
//!     println!("{}\t{}", spin_system.serial, spin_system.describe());
//! }
//! ```

pub mod errors;
pub mod models;
pub mod traits;
pub mod utils;

// re-exports
pub use errors::ProjectError;
pub use traits::{ResonanceView, SpinSystemView};
