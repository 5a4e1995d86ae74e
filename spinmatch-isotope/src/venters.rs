//! Per-deuteron prediction of CA and CB isotope shifts.
//!
//! Venters, Farmer, Fierke & Spicer (1996) J Mol Biol 264(5):1101-1116
//! predict the isotope shift of a carbon from the number of deuterons one,
//! two and three bonds away. The same paper lists how far the experimental
//! values deviate from that prediction per residue type.

use spinmatch_core::models::ResidueType;

use crate::atoms::CorrectableAtom;
use crate::errors::{IsotopeError, IsotopeResult};
use crate::table::{IsotopeCorrectionTable, ResidueOffsets};

/// Isotope effect of a single deuteron one bond away (ppm).
pub const ONE_BOND_EFFECT: f64 = -0.29;
/// Isotope effect of a single deuteron two bonds away (ppm).
pub const TWO_BOND_EFFECT: f64 = -0.13;
/// Isotope effect of a single deuteron three bonds away (ppm).
pub const THREE_BOND_EFFECT: f64 = -0.07;

/// Residue types the model has deuteron counts for.
pub const RESIDUES: [&str; 19] = [
    "Asn", "Asp", "Ser", "His", "Phe", "Trp", "Tyr", "Cys", "Lys", "Arg", "Pro", "Gln", "Glu",
    "Met", "Leu", "Ile", "Val", "Thr", "Ala",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeuteronCounts {
    pub one_bond: u8,
    pub two_bond: u8,
    pub three_bond: u8,
}

impl DeuteronCounts {
    const fn new(one_bond: u8, two_bond: u8, three_bond: u8) -> Self {
        DeuteronCounts {
            one_bond,
            two_bond,
            three_bond,
        }
    }

    pub fn isotope_shift(&self) -> f64 {
        ONE_BOND_EFFECT * self.one_bond as f64
            + TWO_BOND_EFFECT * self.two_bond as f64
            + THREE_BOND_EFFECT * self.three_bond as f64
    }
}

/// Deuteron counts around CA and CB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueDeuterons {
    pub ca: DeuteronCounts,
    pub cb: DeuteronCounts,
}

impl ResidueDeuterons {
    const fn new(ca: (u8, u8, u8), cb: (u8, u8, u8)) -> Self {
        ResidueDeuterons {
            ca: DeuteronCounts::new(ca.0, ca.1, ca.2),
            cb: DeuteronCounts::new(cb.0, cb.1, cb.2),
        }
    }

    pub fn get(&self, atom: CorrectableAtom) -> DeuteronCounts {
        match atom {
            CorrectableAtom::CA => self.ca,
            CorrectableAtom::CB => self.cb,
        }
    }
}

// residues sharing a side chain deuteration pattern
const GROUP_A: ResidueDeuterons = ResidueDeuterons::new((1, 2, 0), (2, 1, 0));
const GROUP_B: ResidueDeuterons = ResidueDeuterons::new((1, 2, 2), (2, 3, 2));
const GROUP_C: ResidueDeuterons = ResidueDeuterons::new((1, 2, 2), (2, 3, 0));
const LEU: ResidueDeuterons = ResidueDeuterons::new((1, 2, 1), (2, 2, 6));
const ILE: ResidueDeuterons = ResidueDeuterons::new((1, 1, 5), (1, 6, 3));
const VAL: ResidueDeuterons = ResidueDeuterons::new((1, 1, 6), (1, 7, 0));
const THR: ResidueDeuterons = ResidueDeuterons::new((1, 1, 3), (1, 4, 0));
const ALA: ResidueDeuterons = ResidueDeuterons::new((1, 3, 0), (3, 1, 0));

pub fn deuterons(residue: &ResidueType) -> Option<ResidueDeuterons> {
    match residue.code() {
        "Asn" | "Asp" | "Ser" | "His" | "Phe" | "Trp" | "Tyr" | "Cys" => Some(GROUP_A),
        "Lys" | "Arg" | "Pro" => Some(GROUP_B),
        "Gln" | "Glu" | "Met" => Some(GROUP_C),
        "Leu" => Some(LEU),
        "Ile" => Some(ILE),
        "Val" => Some(VAL),
        "Thr" => Some(THR),
        "Ala" => Some(ALA),
        _ => None,
    }
}

///
/// Deviation of the experimental CA and CB isotope shifts from the
/// prediction, as reported by Venters et al.
///
pub fn reported_deviation(residue: &ResidueType) -> Option<(f64, f64)> {
    let deviation = match residue.code() {
        "Asn" => (0.06, 0.15),
        "Asp" => (0.09, 0.16),
        "Ser" => (0.13, 0.3),
        "His" => (0.07, 0.03),
        "Phe" => (0.1, 0.34),
        "Trp" => (0.16, 0.17),
        "Tyr" => (0.14, 0.27),
        "Cys" => (0.11, -0.01),
        "Lys" => (-0.03, -0.06),
        "Arg" => (-0.01, 0.04),
        "Pro" => (0.01, -0.09),
        "Gln" => (-0.01, -0.07),
        "Glu" => (0.03, -0.09),
        "Met" => (0.05, -0.05),
        "Leu" => (0.07, 0.06),
        "Ile" => (-0.08, -0.08),
        "Val" => (-0.09, -0.04),
        "Thr" => (0.09, -0.04),
        "Ala" => (0.01, -0.01),
        _ => return None,
    };
    Some(deviation)
}

///
/// Predicted `(CA, CB)` isotope shifts of a residue type.
///
pub fn predict_isotope_shifts(residue: &ResidueType) -> IsotopeResult<(f64, f64)> {
    let counts =
        deuterons(residue).ok_or_else(|| IsotopeError::UnknownResidue(residue.to_string()))?;
    Ok((counts.ca.isotope_shift(), counts.cb.isotope_shift()))
}

///
/// Predicted shift corrected by the reported experimental deviation.
///
pub fn adjusted_isotope_shifts(residue: &ResidueType) -> IsotopeResult<(f64, f64)> {
    let (ca, cb) = predict_isotope_shifts(residue)?;
    let (dev_ca, dev_cb) = reported_deviation(residue)
        .ok_or_else(|| IsotopeError::UnknownResidue(residue.to_string()))?;
    Ok((ca + dev_ca, cb + dev_cb))
}

///
/// Build a correction table from the model, so it can be used in place of
/// the TALOS+ values. The fallback entry is the mean over all residues.
///
/// # Arguments
/// * `adjusted` - add the reported experimental deviation to each prediction
///
pub fn predicted_table(adjusted: bool) -> IsotopeResult<IsotopeCorrectionTable> {
    let mut offsets = Vec::with_capacity(RESIDUES.len() + 1);
    let (mut sum_ca, mut sum_cb) = (0.0, 0.0);

    for code in RESIDUES {
        let residue = ResidueType::from(code);
        let (ca, cb) = match adjusted {
            true => adjusted_isotope_shifts(&residue)?,
            false => predict_isotope_shifts(&residue)?,
        };
        sum_ca += ca;
        sum_cb += cb;
        offsets.push((residue, ResidueOffsets::new(ca, cb)));
    }

    let n = RESIDUES.len() as f64;
    offsets.push((
        ResidueType::average(),
        ResidueOffsets::new(sum_ca / n, sum_cb / n),
    ));

    let source = match adjusted {
        true => "Venters et al. 1996, per-deuteron model with reported deviations",
        false => "Venters et al. 1996, per-deuteron model",
    };

    IsotopeCorrectionTable::from_offsets(Some(source.to_string()), ResidueType::average(), offsets)
}

///
/// One residue of the model versus table report.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ModelComparison {
    pub residue: ResidueType,
    pub predicted: f64,
    pub adjusted: f64,
    pub table: f64,
}

impl ModelComparison {
    pub fn difference(&self) -> f64 {
        self.predicted - self.table
    }

    pub fn adjusted_difference(&self) -> f64 {
        self.adjusted - self.table
    }
}

///
/// Compare the model against a correction table for one atom type.
/// Residues missing from either side are skipped.
///
pub fn compare_models(
    table: &IsotopeCorrectionTable,
    atom: CorrectableAtom,
) -> Vec<ModelComparison> {
    RESIDUES
        .iter()
        .filter_map(|code| {
            let residue = ResidueType::from(*code);
            let counts = deuterons(&residue)?;
            let (dev_ca, dev_cb) = reported_deviation(&residue)?;
            let table_value = table.offset(&residue, atom).ok()?;

            let predicted = counts.get(atom).isotope_shift();
            let deviation = match atom {
                CorrectableAtom::CA => dev_ca,
                CorrectableAtom::CB => dev_cb,
            };

            Some(ModelComparison {
                residue,
                predicted,
                adjusted: predicted + deviation,
                table: table_value,
            })
        })
        .collect()
}
