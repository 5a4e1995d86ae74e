//! Read-only query contract between the comparison core and whatever holds
//! the molecular data. Every query is total: absence is an `Option`, never
//! a missing attribute.

use crate::models::{AtomType, ResidueType, ShiftListId};

/// One observed atom as seen by the comparison core.
pub trait ResonanceView {
    /// Serial identifying the resonance within its project.
    fn serial(&self) -> u32;

    /// Atom label of the resonance, `None` if unassigned.
    fn atom_type(&self) -> Option<&AtomType>;

    /// Residue type the resonance belongs to, after any fallback through
    /// the owning grouping. `None` means unknown.
    fn residue_type(&self) -> Option<&ResidueType>;

    /// Shift value recorded for this resonance in the given source.
    fn shift_under(&self, source: ShiftListId) -> Option<f64>;

    /// Display name of the resonance.
    fn name(&self) -> String {
        match self.atom_type() {
            Some(atom) if !atom.is_empty() => atom.to_string(),
            _ => format!("[{}]", self.serial()),
        }
    }
}

/// A set of resonances believed to belong to one residue.
pub trait SpinSystemView {
    type Resonance<'a>: ResonanceView
    where
        Self: 'a;

    fn serial(&self) -> u32;

    /// All resonances of the spin system. Order carries no meaning.
    fn resonances(&self) -> Vec<Self::Resonance<'_>>;
}

impl<T: ResonanceView + ?Sized> ResonanceView for &T {
    fn serial(&self) -> u32 {
        (**self).serial()
    }

    fn atom_type(&self) -> Option<&AtomType> {
        (**self).atom_type()
    }

    fn residue_type(&self) -> Option<&ResidueType> {
        (**self).residue_type()
    }

    fn shift_under(&self, source: ShiftListId) -> Option<f64> {
        (**self).shift_under(source)
    }
}

impl ResonanceView for crate::models::Resonance {
    fn serial(&self) -> u32 {
        self.serial
    }

    fn atom_type(&self) -> Option<&AtomType> {
        self.atom_type.as_ref()
    }

    fn residue_type(&self) -> Option<&ResidueType> {
        self.residue_type.as_ref()
    }

    fn shift_under(&self, source: ShiftListId) -> Option<f64> {
        self.find_first_shift(source)
    }
}
