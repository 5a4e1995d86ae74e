use spinmatch_core::models::{IsotopicCondition, NmrProject, ShiftListId};

///
/// Which shift lists hold the protonated and the deuterated measurement,
/// and whether missing values are estimated by isotope correction.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareSettings {
    pub protonated: ShiftListId,
    pub deuterated: ShiftListId,
    pub apply_correction: bool,
}

impl CompareSettings {
    pub fn new(protonated: ShiftListId, deuterated: ShiftListId) -> Self {
        CompareSettings {
            protonated,
            deuterated,
            apply_correction: true,
        }
    }

    pub fn with_correction(mut self, apply_correction: bool) -> Self {
        self.apply_correction = apply_correction;
        self
    }

    ///
    /// Settings taken from the conditions a project declares on its shift
    /// lists, if it declares both.
    ///
    pub fn from_project(project: &NmrProject) -> Option<Self> {
        let protonated = project.shift_list_for(IsotopicCondition::Protonated)?;
        let deuterated = project.shift_list_for(IsotopicCondition::Deuterated)?;
        Some(CompareSettings::new(protonated, deuterated))
    }

    pub fn source(&self, condition: IsotopicCondition) -> ShiftListId {
        match condition {
            IsotopicCondition::Protonated => self.protonated,
            IsotopicCondition::Deuterated => self.deuterated,
        }
    }

    pub fn sources(&self) -> [ShiftListId; 2] {
        [self.protonated, self.deuterated]
    }
}
