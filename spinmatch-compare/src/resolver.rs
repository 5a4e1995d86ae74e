use std::fmt::{self, Display};

use log::debug;
use serde::Serialize;

use spinmatch_core::models::IsotopicCondition;
use spinmatch_core::traits::ResonanceView;
use spinmatch_isotope::{CorrectableAtom, IsotopeCorrectionTable, IsotopeError, correct};

use crate::errors::{CompareError, CompareResult};
use crate::settings::CompareSettings;

///
/// A chemical shift under one isotopic condition. `estimated` is set when
/// the value was computed by isotope correction instead of measured.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftEstimate {
    pub value: f64,
    pub condition: IsotopicCondition,
    pub estimated: bool,
}

impl ShiftEstimate {
    pub fn measured(value: f64, condition: IsotopicCondition) -> Self {
        ShiftEstimate {
            value,
            condition,
            estimated: false,
        }
    }

    pub fn estimated(value: f64, condition: IsotopicCondition) -> Self {
        ShiftEstimate {
            value,
            condition,
            estimated: true,
        }
    }
}

/// Value with three decimals, followed by a question mark when estimated.
impl Display for ShiftEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.estimated {
            true => write!(f, "{:.3}?", self.value),
            false => write!(f, "{:.3}", self.value),
        }
    }
}

///
/// Resolves the protonated and deuterated shift of resonances, reading
/// measured values from the two configured shift lists and estimating
/// missing CA/CB values with the isotope correction table.
///
#[derive(Debug, Clone, Copy)]
pub struct ShiftResolver<'a> {
    table: &'a IsotopeCorrectionTable,
    settings: CompareSettings,
}

impl<'a> ShiftResolver<'a> {
    pub fn new(table: &'a IsotopeCorrectionTable, settings: CompareSettings) -> Self {
        ShiftResolver { table, settings }
    }

    ///
    /// Measured value of the resonance under the given condition.
    ///
    pub fn measured<R: ResonanceView>(
        &self,
        resonance: &R,
        condition: IsotopicCondition,
    ) -> Option<f64> {
        resonance.shift_under(self.settings.source(condition))
    }

    ///
    /// Whether the resonance has a value in at least one of the two lists.
    ///
    pub fn is_resolvable<R: ResonanceView>(&self, resonance: &R) -> bool {
        self.settings
            .sources()
            .iter()
            .any(|source| resonance.shift_under(*source).is_some())
    }

    ///
    /// Resolve the shift estimates of a resonance, protonated first.
    ///
    /// Measured values are returned as they are. When correction is enabled
    /// and the atom type is CA or CB, a value missing under one condition is
    /// estimated from the other and flagged as such. Without correction, or
    /// for any other atom type, only measured values are returned.
    ///
    /// # Errors
    /// [`CompareError::MissingShiftData`] when neither list has a value.
    ///
    pub fn resolve<R: ResonanceView>(&self, resonance: &R) -> CompareResult<Vec<ShiftEstimate>> {
        let protonated = self.measured(resonance, IsotopicCondition::Protonated);
        let deuterated = self.measured(resonance, IsotopicCondition::Deuterated);

        let measured: Vec<ShiftEstimate> = [
            protonated.map(|v| ShiftEstimate::measured(v, IsotopicCondition::Protonated)),
            deuterated.map(|v| ShiftEstimate::measured(v, IsotopicCondition::Deuterated)),
        ]
        .into_iter()
        .flatten()
        .collect();

        match measured.len() {
            0 => Err(CompareError::MissingShiftData {
                serial: resonance.serial(),
                protonated: self.settings.protonated.0,
                deuterated: self.settings.deuterated.0,
            }),
            1 if self.correctable(resonance) => {
                let known = measured[0];
                match self.estimate_opposite(resonance, known)? {
                    Some(estimate) => {
                        let mut estimates = vec![known, estimate];
                        estimates.sort_by_key(|e| e.condition);
                        Ok(estimates)
                    }
                    None => Ok(measured),
                }
            }
            _ => Ok(measured),
        }
    }

    fn correctable<R: ResonanceView>(&self, resonance: &R) -> bool {
        self.settings.apply_correction
            && resonance
                .atom_type()
                .is_some_and(|atom| CorrectableAtom::try_from(atom).is_ok())
    }

    ///
    /// Estimate the value under the condition opposite to `known`. `None`
    /// when the table has no offset for this atom of the residue type.
    ///
    fn estimate_opposite<R: ResonanceView>(
        &self,
        resonance: &R,
        known: ShiftEstimate,
    ) -> CompareResult<Option<ShiftEstimate>> {
        let Some(atom) = resonance.atom_type() else {
            return Ok(None);
        };
        let residue = self.table.residue_or_fallback(resonance.residue_type());

        match correct(self.table, residue, atom, known.value, known.condition) {
            Ok(value) => {
                debug!(
                    "Estimated {} shift of resonance {} ({} {}): {:.3} from {:.3}",
                    known.condition.opposite(),
                    resonance.serial(),
                    residue,
                    atom,
                    value,
                    known.value
                );
                Ok(Some(ShiftEstimate::estimated(value, known.condition.opposite())))
            }
            Err(IsotopeError::MissingOffset { .. }) => {
                debug!(
                    "No {} offset for {}, resonance {} is not corrected",
                    atom,
                    residue,
                    resonance.serial()
                );
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
