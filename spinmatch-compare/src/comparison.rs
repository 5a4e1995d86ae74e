use serde::Serialize;

use spinmatch_core::models::{AtomType, IsotopicCondition};
use spinmatch_core::traits::ResonanceView;

use crate::consts::MATCH_CUTOFF;
use crate::resolver::ShiftEstimate;

///
/// Identity of a resonance inside a comparison result.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceLabel {
    pub serial: u32,
    pub name: String,
    pub atom_type: Option<AtomType>,
}

impl ResonanceLabel {
    pub fn of<R: ResonanceView>(resonance: &R) -> Self {
        ResonanceLabel {
            serial: resonance.serial(),
            name: resonance.name(),
            atom_type: resonance.atom_type().cloned(),
        }
    }

    ///
    /// Name that tells the protonated and deuterated shift apart.
    ///
    pub fn name_under(&self, condition: IsotopicCondition) -> String {
        match condition {
            IsotopicCondition::Protonated => self.name.clone(),
            IsotopicCondition::Deuterated => format!("{} (D)", self.name),
        }
    }
}

///
/// Two shifts of the same atom type under the same isotopic condition.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairComparison {
    pub a: ShiftEstimate,
    pub b: ShiftEstimate,
}

impl PairComparison {
    pub fn condition(&self) -> IsotopicCondition {
        self.a.condition
    }

    /// Absolute difference between the two shifts.
    pub fn distance(&self) -> f64 {
        (self.a.value - self.b.value).abs()
    }

    /// True if the shifts agree within [`MATCH_CUTOFF`].
    pub fn is_match(&self) -> bool {
        self.distance() < MATCH_CUTOFF
    }

    pub fn is_estimated(&self) -> bool {
        self.a.estimated || self.b.estimated
    }

    ///
    /// One comparison per isotopic condition both sides have an estimate
    /// for, protonated first.
    ///
    pub fn pair_up(a: &[ShiftEstimate], b: &[ShiftEstimate]) -> Vec<PairComparison> {
        IsotopicCondition::ALL
            .iter()
            .filter_map(|condition| {
                let a = a.iter().find(|e| e.condition == *condition)?;
                let b = b.iter().find(|e| e.condition == *condition)?;
                Some(PairComparison { a: *a, b: *b })
            })
            .collect()
    }
}

///
/// Two resonances of equal atom type, one from each spin system, with
/// their per-condition comparisons.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedPair {
    pub atom_type: AtomType,
    pub a: ResonanceLabel,
    pub b: ResonanceLabel,
    pub comparisons: Vec<PairComparison>,
}

impl MatchedPair {
    ///
    /// Mean distance over the comparisons of this pair.
    ///
    pub fn mean_distance(&self) -> f64 {
        if self.comparisons.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.comparisons.iter().map(|c| c.distance()).sum();
        sum / self.comparisons.len() as f64
    }

    pub fn is_match(&self) -> bool {
        self.comparisons.iter().all(|c| c.is_match())
    }
}

///
/// A resonance without a partner in the other spin system. `estimates` is
/// empty when the resonance has no shift in either list.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueResonance {
    pub resonance: ResonanceLabel,
    pub estimates: Vec<ShiftEstimate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use spinmatch_core::models::Resonance;

    const TOLERANCE: f64 = 1e-9;

    fn protonated(value: f64) -> ShiftEstimate {
        ShiftEstimate::measured(value, IsotopicCondition::Protonated)
    }

    fn deuterated(value: f64) -> ShiftEstimate {
        ShiftEstimate::measured(value, IsotopicCondition::Deuterated)
    }

    #[rstest]
    #[case(10.0, 10.3, true)]
    #[case(10.0, 10.6, false)]
    #[case(10.3, 10.0, true)]
    #[case(10.0, 10.5, false)]
    fn test_distance_and_match(#[case] a: f64, #[case] b: f64, #[case] is_match: bool) {
        let comparison = PairComparison {
            a: protonated(a),
            b: protonated(b),
        };
        assert!((comparison.distance() - (a - b).abs()).abs() < TOLERANCE);
        assert_eq!(comparison.is_match(), is_match);
    }

    #[rstest]
    fn test_distance_example() {
        let comparison = PairComparison {
            a: protonated(10.0),
            b: protonated(10.3),
        };
        assert!((comparison.distance() - 0.3).abs() < TOLERANCE);
    }

    #[rstest]
    fn test_pair_up_common_conditions() {
        let a = vec![protonated(52.0), deuterated(51.5)];
        let b = vec![deuterated(51.6)];
        let pairs = PairComparison::pair_up(&a, &b);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].condition(), IsotopicCondition::Deuterated);
    }

    #[rstest]
    fn test_pair_up_both_conditions_protonated_first() {
        let a = vec![protonated(52.0), deuterated(51.5)];
        let b = vec![protonated(52.1), deuterated(51.6)];
        let conditions: Vec<_> = PairComparison::pair_up(&a, &b)
            .iter()
            .map(|p| p.condition())
            .collect();
        assert_eq!(
            conditions,
            vec![IsotopicCondition::Protonated, IsotopicCondition::Deuterated]
        );
    }

    #[rstest]
    fn test_pair_up_disjoint() {
        let pairs = PairComparison::pair_up(&[protonated(52.0)], &[deuterated(52.0)]);
        assert!(pairs.is_empty());
    }

    #[rstest]
    fn test_mean_distance() {
        let pair = MatchedPair {
            atom_type: "CA".into(),
            a: ResonanceLabel::of(&Resonance::new(1, Some("CA"))),
            b: ResonanceLabel::of(&Resonance::new(2, Some("CA"))),
            comparisons: vec![
                PairComparison {
                    a: protonated(52.0),
                    b: protonated(52.2),
                },
                PairComparison {
                    a: deuterated(51.5),
                    b: deuterated(51.9),
                },
            ],
        };
        assert!((pair.mean_distance() - 0.3).abs() < TOLERANCE);
        assert_eq!(pair.is_match(), true);
    }

    #[rstest]
    fn test_name_under() {
        let label = ResonanceLabel::of(&Resonance::new(1, Some("CB")));
        assert_eq!(label.name_under(IsotopicCondition::Protonated), "CB");
        assert_eq!(label.name_under(IsotopicCondition::Deuterated), "CB (D)");
    }
}
