use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{
    AssignedResidue, AtomType, ResidueProbability, ResidueType, Resonance, ShiftListId,
};
use crate::traits::{ResonanceView, SpinSystemView};

///
/// SpinSystem struct, a group of resonances believed to originate from one
/// residue (a "resonance group").
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinSystem {
    pub serial: u32,
    /// Residue type guessed for the group as a whole (ccp code).
    #[serde(default)]
    pub residue_type: Option<ResidueType>,
    /// Sequence residue the group is assigned to.
    #[serde(default)]
    pub residue: Option<AssignedResidue>,
    #[serde(default)]
    pub residue_probabilities: Vec<ResidueProbability>,
    #[serde(default)]
    pub resonances: Vec<Resonance>,
}

impl SpinSystem {
    pub fn new(serial: u32) -> Self {
        SpinSystem {
            serial,
            residue_type: None,
            residue: None,
            residue_probabilities: Vec::new(),
            resonances: Vec::new(),
        }
    }

    pub fn with_residue_type(mut self, residue_type: &str) -> Self {
        self.residue_type = Some(ResidueType::from(residue_type));
        self
    }

    pub fn with_resonance(mut self, resonance: Resonance) -> Self {
        self.resonances.push(resonance);
        self
    }

    pub fn len(&self) -> usize {
        self.resonances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resonances.is_empty()
    }

    ///
    /// Residue type of the group: its own ccp code, else the code of the
    /// residue it is assigned to.
    ///
    pub fn effective_residue_type(&self) -> Option<&ResidueType> {
        self.residue_type
            .as_ref()
            .or_else(|| self.residue.as_ref().map(|r| &r.residue_type))
    }

    ///
    /// All shift lists any resonance of this group has a value in,
    /// highest serial first.
    ///
    pub fn shift_lists(&self) -> Vec<ShiftListId> {
        let lists: BTreeSet<ShiftListId> = self
            .resonances
            .iter()
            .flat_map(|r| r.shifts.iter().map(|s| s.shift_list))
            .collect();

        lists.into_iter().rev().collect()
    }

    ///
    /// Human readable description of the residue this group belongs to.
    ///
    /// `"<seq> <Res>"` when assigned, the non-zero weighted guesses as
    /// `"<seq> <Res> ?"` joined by `" / "`, else the ccp code, else `"-"`.
    ///
    pub fn describe(&self) -> String {
        if let Some(residue) = &self.residue {
            return format!("{} {}", residue.seq_code, residue.residue_type);
        }

        let guesses: Vec<String> = self
            .residue_probabilities
            .iter()
            .filter(|p| p.weight != 0.0)
            .map(|p| format!("{} {} ?", p.seq_code, p.residue_type))
            .collect();

        if !guesses.is_empty() {
            return guesses.join(" / ");
        }

        match &self.residue_type {
            Some(residue_type) => residue_type.to_string(),
            None => "-".to_string(),
        }
    }
}

///
/// A resonance read through its owning spin system, so the residue type
/// falls back to the group when the resonance itself has none.
///
#[derive(Clone, Copy, Debug)]
pub struct ResonanceInGroup<'a> {
    pub resonance: &'a Resonance,
    pub group: &'a SpinSystem,
}

impl ResonanceView for ResonanceInGroup<'_> {
    fn serial(&self) -> u32 {
        self.resonance.serial
    }

    fn atom_type(&self) -> Option<&AtomType> {
        self.resonance.atom_type.as_ref()
    }

    fn residue_type(&self) -> Option<&ResidueType> {
        self.resonance
            .residue_type
            .as_ref()
            .or_else(|| self.group.effective_residue_type())
    }

    fn shift_under(&self, source: ShiftListId) -> Option<f64> {
        self.resonance.find_first_shift(source)
    }
}

impl SpinSystemView for SpinSystem {
    type Resonance<'a> = ResonanceInGroup<'a>;

    fn serial(&self) -> u32 {
        self.serial
    }

    fn resonances(&self) -> Vec<ResonanceInGroup<'_>> {
        self.resonances
            .iter()
            .map(|resonance| ResonanceInGroup {
                resonance,
                group: self,
            })
            .collect()
    }
}
