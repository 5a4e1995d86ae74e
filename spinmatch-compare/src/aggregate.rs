use serde::Serialize;

use spinmatch_core::traits::SpinSystemView;
use spinmatch_isotope::IsotopeCorrectionTable;

use crate::comparator::{Partition, compare};
use crate::comparison::{MatchedPair, PairComparison, UniqueResonance};
use crate::errors::CompareResult;
use crate::resolver::ShiftResolver;
use crate::settings::CompareSettings;

///
/// Everything known about the similarity of two spin systems.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinSystemComparisonResult {
    pub spin_system_a: u32,
    pub spin_system_b: u32,
    pub matched: Vec<MatchedPair>,
    pub unique_a: Vec<UniqueResonance>,
    pub unique_b: Vec<UniqueResonance>,
    /// Root mean square of the per pair mean distances, `None` without pairs.
    pub deviation: Option<f64>,
    /// True when there is at least one pair and every comparison matches.
    pub is_match: bool,
}

impl SpinSystemComparisonResult {
    ///
    /// All per-condition comparisons of all matched pairs.
    ///
    pub fn intersection(&self) -> impl Iterator<Item = &PairComparison> {
        self.matched.iter().flat_map(|pair| pair.comparisons.iter())
    }

    ///
    /// Comparisons whose shifts differ by more than the match cut-off.
    ///
    pub fn violations(&self) -> impl Iterator<Item = &PairComparison> {
        self.intersection().filter(|c| !c.is_match())
    }
}

///
/// Root mean square of the mean distance of each matched pair.
///
pub fn deviation(matched: &[MatchedPair]) -> Option<f64> {
    if matched.is_empty() {
        return None;
    }

    let sum_of_squares: f64 = matched
        .iter()
        .map(|pair| pair.mean_distance().powi(2))
        .sum();

    Some((sum_of_squares / matched.len() as f64).sqrt())
}

///
/// Reduce a partition to a comparison result.
///
pub fn aggregate(
    partition: Partition,
    spin_system_a: u32,
    spin_system_b: u32,
) -> SpinSystemComparisonResult {
    let deviation = deviation(&partition.matched);
    let is_match =
        !partition.matched.is_empty() && partition.matched.iter().all(|pair| pair.is_match());

    SpinSystemComparisonResult {
        spin_system_a,
        spin_system_b,
        matched: partition.matched,
        unique_a: partition.unique_a,
        unique_b: partition.unique_b,
        deviation,
        is_match,
    }
}

///
/// Compare two spin systems. Any resolution failure aborts the comparison.
///
pub fn compare_spin_systems<A, B>(
    a: &A,
    b: &B,
    table: &IsotopeCorrectionTable,
    settings: &CompareSettings,
) -> CompareResult<SpinSystemComparisonResult>
where
    A: SpinSystemView,
    B: SpinSystemView,
{
    let resolver = ShiftResolver::new(table, *settings);
    let partition = compare(a, b, &resolver)?;
    Ok(aggregate(partition, a.serial(), b.serial()))
}

/// Comparison of one spin system against another.
pub trait CompareSpinSystems {
    /// Compare `self` (side A) against `other` (side B).
    fn compare_with<B: SpinSystemView>(
        &self,
        other: &B,
        table: &IsotopeCorrectionTable,
        settings: &CompareSettings,
    ) -> CompareResult<SpinSystemComparisonResult>;
}

impl<S: SpinSystemView> CompareSpinSystems for S {
    fn compare_with<B: SpinSystemView>(
        &self,
        other: &B,
        table: &IsotopeCorrectionTable,
        settings: &CompareSettings,
    ) -> CompareResult<SpinSystemComparisonResult> {
        compare_spin_systems(self, other, table, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CompareError;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use spinmatch_core::models::{
        AtomType, IsotopicCondition, NmrProject, ResidueType, Resonance, ShiftListId, SpinSystem,
    };
    use spinmatch_core::traits::ResonanceView;

    const TOLERANCE: f64 = 1e-9;
    const H: ShiftListId = ShiftListId(1);
    const D: ShiftListId = ShiftListId(2);

    #[fixture]
    fn table() -> IsotopeCorrectionTable {
        IsotopeCorrectionTable::talos().unwrap()
    }

    #[fixture]
    fn settings() -> CompareSettings {
        CompareSettings::new(H, D)
    }

    fn get_test_path(file_name: &str) -> std::path::PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/projects")
            .join(file_name)
    }

    #[rstest]
    fn test_no_pairs_no_deviation_no_match(
        table: IsotopeCorrectionTable,
        settings: CompareSettings,
    ) {
        let a = SpinSystem::new(1).with_resonance(Resonance::new(1, Some("CA")).with_shift(H, 52.0));
        let b = SpinSystem::new(2).with_resonance(Resonance::new(2, Some("N")).with_shift(H, 120.0));

        let result = a.compare_with(&b, &table, &settings).unwrap();

        assert!(result.matched.is_empty());
        assert_eq!(result.deviation, None);
        assert_eq!(result.is_match, false);
        assert_eq!(result.unique_a.len(), 1);
        assert_eq!(result.unique_b.len(), 1);
    }

    #[rstest]
    fn test_serialize_result(table: IsotopeCorrectionTable, settings: CompareSettings) {
        let a = SpinSystem::new(1).with_resonance(Resonance::new(1, Some("CA")).with_shift(H, 52.0));
        let result = a.compare_with(&SpinSystem::new(2), &table, &settings).unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["deviation"], serde_json::Value::Null);
        assert_eq!(value["is_match"], false);
        assert_eq!(value["unique_a"][0]["estimates"][1]["condition"], "deuterated");
        assert_eq!(value["unique_a"][0]["estimates"][1]["estimated"], true);
    }

    #[rstest]
    fn test_empty_spin_systems(table: IsotopeCorrectionTable, settings: CompareSettings) {
        let result = SpinSystem::new(1)
            .compare_with(&SpinSystem::new(2), &table, &settings)
            .unwrap();
        assert_eq!(result.deviation, None);
        assert_eq!(result.is_match, false);
    }

    #[rstest]
    fn test_protonated_against_deuterated_ala(
        table: IsotopeCorrectionTable,
        settings: CompareSettings,
    ) {
        let a = SpinSystem::new(1).with_resonance(
            Resonance::new(1, Some("CA"))
                .with_residue_type("Ala")
                .with_shift(H, 52.0),
        );
        let b = SpinSystem::new(2).with_resonance(
            Resonance::new(2, Some("CA"))
                .with_residue_type("Ala")
                .with_shift(D, 52.4),
        );

        let result = compare_spin_systems(&a, &b, &table, &settings).unwrap();

        assert_eq!(result.matched.len(), 1);
        let comparisons = &result.matched[0].comparisons;
        assert_eq!(comparisons.len(), 2);

        let protonated = comparisons[0];
        assert_eq!(protonated.condition(), IsotopicCondition::Protonated);
        assert_eq!(protonated.a.estimated, false);
        assert_eq!(protonated.a.value, 52.0);
        assert_eq!(protonated.b.estimated, true);
        assert!((protonated.b.value - 52.873).abs() < TOLERANCE);

        let deuterated = comparisons[1];
        assert_eq!(deuterated.condition(), IsotopicCondition::Deuterated);
        assert_eq!(deuterated.a.estimated, true);
        assert!((deuterated.a.value - 51.527).abs() < TOLERANCE);
        assert_eq!(deuterated.b.estimated, false);
        assert_eq!(deuterated.b.value, 52.4);

        // both sides differ by 0.873 after correction
        assert!((protonated.distance() - deuterated.distance()).abs() < TOLERANCE);
        assert!((result.deviation.unwrap() - 0.873).abs() < TOLERANCE);
        assert_eq!(result.is_match, false);
    }

    #[rstest]
    fn test_consistent_isotope_shift_matches(
        table: IsotopeCorrectionTable,
        settings: CompareSettings,
    ) {
        let a = SpinSystem::new(1).with_resonance(
            Resonance::new(1, Some("CA"))
                .with_residue_type("Ala")
                .with_shift(H, 52.0),
        );
        let b = SpinSystem::new(2).with_resonance(
            Resonance::new(2, Some("CA"))
                .with_residue_type("Ala")
                .with_shift(D, 51.6),
        );

        let result = compare_spin_systems(&a, &b, &table, &settings).unwrap();

        assert_eq!(result.intersection().count(), 2);
        assert!(result.intersection().all(|c| c.distance() < 0.1));
        assert_eq!(result.violations().count(), 0);
        assert_eq!(result.is_match, true);
    }

    #[rstest]
    fn test_deviation_is_rms_of_pair_means() {
        let make_pair = |distances: &[f64]| MatchedPair {
            atom_type: AtomType::from("CA"),
            a: crate::comparison::ResonanceLabel::of(&Resonance::new(1, Some("CA"))),
            b: crate::comparison::ResonanceLabel::of(&Resonance::new(2, Some("CA"))),
            comparisons: distances
                .iter()
                .map(|d| PairComparison {
                    a: crate::resolver::ShiftEstimate::measured(10.0, IsotopicCondition::Protonated),
                    b: crate::resolver::ShiftEstimate::measured(
                        10.0 + d,
                        IsotopicCondition::Protonated,
                    ),
                })
                .collect(),
        };

        // pair means 0.2 and 0.6 -> sqrt((0.04 + 0.36) / 2)
        let matched = vec![make_pair(&[0.1, 0.3]), make_pair(&[0.6])];
        let expected = (0.2f64).sqrt();
        assert!((deviation(&matched).unwrap() - expected).abs() < 1e-6);
        assert_eq!(deviation(&[]), None);
    }

    #[rstest]
    fn test_one_violation_breaks_match(table: IsotopeCorrectionTable, settings: CompareSettings) {
        let a = SpinSystem::new(1)
            .with_resonance(Resonance::new(1, Some("H")).with_shift(H, 8.0))
            .with_resonance(Resonance::new(2, Some("N")).with_shift(H, 120.0));
        let b = SpinSystem::new(2)
            .with_resonance(Resonance::new(3, Some("H")).with_shift(H, 8.3))
            .with_resonance(Resonance::new(4, Some("N")).with_shift(H, 120.6));

        let result = compare_spin_systems(&a, &b, &table, &settings).unwrap();

        assert_eq!(result.matched.len(), 2);
        assert_eq!(result.violations().count(), 1);
        assert_eq!(result.is_match, false);
        let expected = ((0.3f64.powi(2) + 0.6f64.powi(2)) / 2.0).sqrt();
        assert!((result.deviation.unwrap() - expected).abs() < 1e-6);
    }

    // spin system view whose resonance has no shift in any list
    struct Inconsistent;

    struct InconsistentResonance {
        atom: AtomType,
    }

    impl ResonanceView for InconsistentResonance {
        fn serial(&self) -> u32 {
            77
        }

        fn atom_type(&self) -> Option<&AtomType> {
            Some(&self.atom)
        }

        fn residue_type(&self) -> Option<&ResidueType> {
            None
        }

        fn shift_under(&self, _source: ShiftListId) -> Option<f64> {
            None
        }
    }

    impl SpinSystemView for Inconsistent {
        type Resonance<'a> = InconsistentResonance;

        fn serial(&self) -> u32 {
            99
        }

        fn resonances(&self) -> Vec<InconsistentResonance> {
            vec![InconsistentResonance {
                atom: AtomType::from("CA"),
            }]
        }
    }

    #[rstest]
    fn test_resonance_without_shift(table: IsotopeCorrectionTable, settings: CompareSettings) {
        let resolver = ShiftResolver::new(&table, settings);
        let resonance = InconsistentResonance {
            atom: AtomType::from("CA"),
        };
        assert!(matches!(
            resolver.resolve(&resonance),
            Err(CompareError::MissingShiftData { serial: 77, .. })
        ));

        // not resolvable, so the comparator leaves it unmatched
        let other = SpinSystem::new(1).with_resonance(Resonance::new(1, Some("CA")).with_shift(H, 50.0));
        let result = Inconsistent.compare_with(&other, &table, &settings).unwrap();
        assert_eq!(result.unique_a.len(), 1);
        assert!(result.unique_a[0].estimates.is_empty());
    }

    #[rstest]
    fn test_project_file(table: IsotopeCorrectionTable) {
        let project = NmrProject::try_from(get_test_path("small.json").as_path()).unwrap();
        let settings = CompareSettings::from_project(&project).unwrap();

        let a = project.get(1).unwrap();
        let b = project.get(2).unwrap();
        let result = a.compare_with(b, &table, &settings).unwrap();

        // CA, CB and H pair up, N is unique to the first spin system
        assert_eq!(result.matched.len(), 3);
        assert_eq!(result.unique_a.len(), 1);
        assert_eq!(result.unique_a[0].resonance.name, "N");
        assert!(result.unique_b.is_empty());
        assert_eq!(result.is_match, true);
    }
}
