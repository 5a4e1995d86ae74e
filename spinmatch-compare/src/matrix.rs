//! All-against-all comparison of the spin systems of a project.

use std::cmp::Ordering;

use fxhash::{FxHashMap, FxHashSet};
use log::info;
use rayon::prelude::*;

use spinmatch_core::traits::SpinSystemView;
use spinmatch_isotope::IsotopeCorrectionTable;

use crate::aggregate::{SpinSystemComparisonResult, compare_spin_systems};
use crate::errors::{CompareError, CompareResult};
use crate::settings::CompareSettings;

/// Order by deviation ascending, undefined deviations last.
fn by_deviation(a: &SpinSystemComparisonResult, b: &SpinSystemComparisonResult) -> Ordering {
    match (a.deviation, b.deviation) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

///
/// Compare one spin system against every other one and rank the results
/// by deviation, best first. Results without a deviation come last.
///
/// # Arguments
/// * `query` - the spin system to find partners for
/// * `spin_systems` - candidates; an entry with the serial of `query` is skipped
/// * `table` - isotope correction table
/// * `settings` - shift lists and correction mode
///
pub fn compare_to_all<Q, S>(
    query: &Q,
    spin_systems: &[S],
    table: &IsotopeCorrectionTable,
    settings: &CompareSettings,
) -> CompareResult<Vec<SpinSystemComparisonResult>>
where
    Q: SpinSystemView + Sync,
    S: SpinSystemView + Sync,
{
    let mut results = spin_systems
        .par_iter()
        .filter(|other| other.serial() != query.serial())
        .map(|other| compare_spin_systems(query, other, table, settings))
        .collect::<CompareResult<Vec<_>>>()?;

    results.sort_by(by_deviation);
    Ok(results)
}

///
/// Comparison results for every ordered pair of distinct, non-empty spin
/// systems.
///
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    serials: Vec<u32>,
    results: FxHashMap<(u32, u32), SpinSystemComparisonResult>,
}

impl SimilarityMatrix {
    ///
    /// Compare every spin system with every other one. Rows are computed
    /// in parallel. Spin systems without resonances are left out.
    ///
    /// # Errors
    /// [`CompareError::DuplicateSpinSystem`] when two spin systems share a
    /// serial, since results are keyed by serial pair.
    ///
    pub fn build<S>(
        spin_systems: &[S],
        table: &IsotopeCorrectionTable,
        settings: &CompareSettings,
    ) -> CompareResult<Self>
    where
        S: SpinSystemView + Sync,
    {
        let mut seen = FxHashSet::default();
        if let Some(duplicate) = spin_systems.iter().find(|s| !seen.insert(s.serial())) {
            return Err(CompareError::DuplicateSpinSystem(duplicate.serial()));
        }

        let members: Vec<&S> = spin_systems
            .iter()
            .filter(|s| !s.resonances().is_empty())
            .collect();

        info!(
            "Comparing {} spin systems ({} skipped as empty), {} pairs",
            members.len(),
            spin_systems.len() - members.len(),
            members.len() * members.len().saturating_sub(1)
        );

        let rows = members
            .par_iter()
            .map(|a| {
                members
                    .iter()
                    .filter(|b| b.serial() != a.serial())
                    .map(|b| compare_spin_systems(*a, *b, table, settings))
                    .collect::<CompareResult<Vec<_>>>()
            })
            .collect::<CompareResult<Vec<_>>>()?;

        let results = rows
            .into_iter()
            .flatten()
            .map(|result| ((result.spin_system_a, result.spin_system_b), result))
            .collect();

        Ok(SimilarityMatrix {
            serials: members.iter().map(|s| s.serial()).collect(),
            results,
        })
    }

    /// Serials of the compared spin systems, in input order.
    pub fn serials(&self) -> &[u32] {
        &self.serials
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, a: u32, b: u32) -> Option<&SpinSystemComparisonResult> {
        self.results.get(&(a, b))
    }

    ///
    /// All results with `a` on side A, in the order of [`Self::serials`].
    ///
    pub fn row(&self, a: u32) -> Vec<&SpinSystemComparisonResult> {
        self.serials
            .iter()
            .filter_map(|b| self.get(a, *b))
            .collect()
    }

    ///
    /// Number of other spin systems each spin system matches.
    ///
    pub fn match_counts(&self) -> Vec<(u32, usize)> {
        self.serials
            .iter()
            .map(|a| {
                let count = self.row(*a).iter().filter(|r| r.is_match).count();
                (*a, count)
            })
            .collect()
    }

    ///
    /// Matching partners of `a`, closest first.
    ///
    pub fn candidates(&self, a: u32) -> Vec<&SpinSystemComparisonResult> {
        let mut candidates: Vec<_> = self.row(a).into_iter().filter(|r| r.is_match).collect();
        candidates.sort_by(|x, y| by_deviation(x, y));
        candidates
    }

    /// Every result, ordered by the serials of both sides.
    pub fn iter(&self) -> impl Iterator<Item = &SpinSystemComparisonResult> {
        self.serials.iter().flat_map(move |a| self.row(*a))
    }
}
