//! Isotope aware comparison of NMR spin systems.
//!
//! Each concern lives in its own crate and is re-exported here behind a
//! cargo feature of the same name:
//!
//! - `core`: the data model, project loading and the read traits
//! - `isotope`: the isotope correction table and the shift corrector
//! - `compare`: resolution, pairing and scoring of spin systems

#[cfg(feature = "core")]
#[doc(inline)]
pub use spinmatch_core as core;

#[cfg(feature = "isotope")]
#[doc(inline)]
pub use spinmatch_isotope as isotope;

#[cfg(feature = "compare")]
#[doc(inline)]
pub use spinmatch_compare as compare;
