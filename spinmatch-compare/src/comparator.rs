//! Pairing of resonances across two spin systems.
//!
//! Every resonance of one spin system is tried against every resonance of
//! the other. Two resonances pair up when they carry the same non-empty atom
//! label and share at least one isotopic condition after resolution.
//! Duplicate labels are not deduplicated: a resonance can end up in several
//! pairs.

use log::debug;

use spinmatch_core::traits::{ResonanceView, SpinSystemView};

use crate::comparison::{MatchedPair, PairComparison, ResonanceLabel, UniqueResonance};
use crate::errors::CompareResult;
use crate::resolver::{ShiftEstimate, ShiftResolver};

///
/// Resonances of two spin systems split into pairs and leftovers.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partition {
    pub matched: Vec<MatchedPair>,
    pub unique_a: Vec<UniqueResonance>,
    pub unique_b: Vec<UniqueResonance>,
}

///
/// Resolve every resonance that has a value in one of the two lists;
/// `None` marks the ones that have none and can not be matched.
///
fn resolve_all<R: ResonanceView>(
    resonances: &[R],
    resolver: &ShiftResolver,
) -> CompareResult<Vec<Option<Vec<ShiftEstimate>>>> {
    resonances
        .iter()
        .map(|resonance| {
            if resolver.is_resolvable(resonance) {
                resolver.resolve(resonance).map(Some)
            } else {
                debug!(
                    "Resonance {} has no shift in the compared lists, left unmatched",
                    resonance.serial()
                );
                Ok(None)
            }
        })
        .collect()
}

fn leftovers<R: ResonanceView>(
    resonances: &[R],
    resolved: Vec<Option<Vec<ShiftEstimate>>>,
    used: &[bool],
) -> Vec<UniqueResonance> {
    resonances
        .iter()
        .zip(resolved)
        .zip(used)
        .filter(|(_, used)| !**used)
        .map(|((resonance, estimates), _)| UniqueResonance {
            resonance: ResonanceLabel::of(resonance),
            estimates: estimates.unwrap_or_default(),
        })
        .collect()
}

///
/// Split the resonances of two spin systems into matched atom type pairs
/// and the resonances unique to either side.
///
/// # Arguments
/// * `a` - first spin system
/// * `b` - second spin system
/// * `resolver` - shift lists, correction mode and correction table
///
pub fn compare<A, B>(a: &A, b: &B, resolver: &ShiftResolver) -> CompareResult<Partition>
where
    A: SpinSystemView,
    B: SpinSystemView,
{
    let resonances_a = a.resonances();
    let resonances_b = b.resonances();

    let resolved_a = resolve_all(&resonances_a, resolver)?;
    let resolved_b = resolve_all(&resonances_b, resolver)?;

    let mut used_a = vec![false; resonances_a.len()];
    let mut used_b = vec![false; resonances_b.len()];
    let mut matched = Vec::new();

    for (i, res_a) in resonances_a.iter().enumerate() {
        let Some(estimates_a) = &resolved_a[i] else {
            continue;
        };
        let Some(atom) = res_a.atom_type().filter(|atom| !atom.is_empty()) else {
            continue;
        };

        for (j, res_b) in resonances_b.iter().enumerate() {
            let Some(estimates_b) = &resolved_b[j] else {
                continue;
            };
            if res_b.atom_type() != Some(atom) {
                continue;
            }

            let comparisons = PairComparison::pair_up(estimates_a, estimates_b);
            if comparisons.is_empty() {
                debug!(
                    "Resonances {} and {} ({}) share no isotopic condition",
                    res_a.serial(),
                    res_b.serial(),
                    atom
                );
                continue;
            }

            matched.push(MatchedPair {
                atom_type: atom.clone(),
                a: ResonanceLabel::of(res_a),
                b: ResonanceLabel::of(res_b),
                comparisons,
            });
            used_a[i] = true;
            used_b[j] = true;
        }
    }

    Ok(Partition {
        matched,
        unique_a: leftovers(&resonances_a, resolved_a, &used_a),
        unique_b: leftovers(&resonances_b, resolved_b, &used_b),
    })
}
