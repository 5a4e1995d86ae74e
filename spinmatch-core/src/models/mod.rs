pub mod atom;
pub mod isotope;
pub mod project;
pub mod residue;
pub mod resonance;
pub mod shift_list;
pub mod spin_system;

// re-export for cleaner imports
pub use self::atom::AtomType;
pub use self::isotope::IsotopicCondition;
pub use self::project::NmrProject;
pub use self::residue::{AssignedResidue, ResidueProbability, ResidueType};
pub use self::resonance::{Resonance, Shift};
pub use self::shift_list::{ShiftList, ShiftListId};
pub use self::spin_system::{ResonanceInGroup, SpinSystem};
