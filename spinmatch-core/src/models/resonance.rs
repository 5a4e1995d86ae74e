use serde::{Deserialize, Serialize};

use crate::models::{AtomType, ResidueType, ShiftListId};

///
/// One measured chemical shift value of a resonance.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub shift_list: ShiftListId,
    pub value: f64,
}

///
/// Resonance struct, one observed atom within a spin system, with at most
/// one meaningful shift per shift list.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resonance {
    pub serial: u32,
    #[serde(default)]
    pub atom_type: Option<AtomType>,
    #[serde(default)]
    pub residue_type: Option<ResidueType>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Resonance {
    pub fn new(serial: u32, atom_type: Option<&str>) -> Self {
        Resonance {
            serial,
            atom_type: atom_type.map(AtomType::from),
            residue_type: None,
            shifts: Vec::new(),
        }
    }

    ///
    /// Builder style helper to attach a shift value.
    ///
    pub fn with_shift(mut self, shift_list: ShiftListId, value: f64) -> Self {
        self.shifts.push(Shift { shift_list, value });
        self
    }

    pub fn with_residue_type(mut self, residue_type: &str) -> Self {
        self.residue_type = Some(ResidueType::from(residue_type));
        self
    }

    ///
    /// First shift value recorded in the given shift list, if any.
    ///
    pub fn find_first_shift(&self, shift_list: ShiftListId) -> Option<f64> {
        self.shifts
            .iter()
            .find(|shift| shift.shift_list == shift_list)
            .map(|shift| shift.value)
    }

    ///
    /// Whether the resonance has a value in at least one of the given lists.
    ///
    pub fn in_any_shift_list(&self, shift_lists: &[ShiftListId]) -> bool {
        shift_lists
            .iter()
            .any(|list| self.find_first_shift(*list).is_some())
    }

    ///
    /// Atom label when assigned, otherwise the serial in brackets.
    ///
    pub fn name(&self) -> String {
        match &self.atom_type {
            Some(atom) if !atom.is_empty() => atom.to_string(),
            _ => format!("[{}]", self.serial),
        }
    }
}
