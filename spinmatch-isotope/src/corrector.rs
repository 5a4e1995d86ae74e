use spinmatch_core::models::{AtomType, IsotopicCondition, ResidueType};

use crate::atoms::CorrectableAtom;
use crate::errors::IsotopeResult;
use crate::table::IsotopeCorrectionTable;

///
/// Return the expected chemical shift under the opposite isotopic
/// condition of the one the shift was measured under.
///
/// A protonated shift is moved by the table offset, a deuterated shift is
/// moved back by it, so correcting twice returns the input.
///
/// # Arguments
/// * `table` - isotope correction offsets
/// * `residue` - residue type; must be in the table (pick the fallback beforehand)
/// * `atom` - atom type, `CA` or `CB`
/// * `shift` - measured shift
/// * `measured` - condition the shift was measured under
///
/// # Errors
/// [`IsotopeError::UnsupportedAtom`](crate::IsotopeError::UnsupportedAtom) for
/// any atom type other than `CA` and `CB`, and
/// [`IsotopeError::UnknownResidue`](crate::IsotopeError::UnknownResidue) if the
/// table has no entry for `residue`.
///
pub fn correct(
    table: &IsotopeCorrectionTable,
    residue: &ResidueType,
    atom: &AtomType,
    shift: f64,
    measured: IsotopicCondition,
) -> IsotopeResult<f64> {
    let atom = CorrectableAtom::try_from(atom)?;
    let offset = table.offset(residue, atom)?;

    let corrected = match measured {
        IsotopicCondition::Protonated => shift + offset,
        IsotopicCondition::Deuterated => shift - offset,
    };

    Ok(corrected)
}
