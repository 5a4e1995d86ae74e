use std::fmt::{self, Display};
use std::str::FromStr;

use spinmatch_core::models::AtomType;

use crate::errors::IsotopeError;

///
/// The atom types isotope correction data exists for.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum CorrectableAtom {
    CA,
    CB,
}

impl CorrectableAtom {
    pub const ALL: [CorrectableAtom; 2] = [CorrectableAtom::CA, CorrectableAtom::CB];

    pub fn label(&self) -> &'static str {
        match self {
            CorrectableAtom::CA => "CA",
            CorrectableAtom::CB => "CB",
        }
    }
}

impl FromStr for CorrectableAtom {
    type Err = IsotopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CA" => Ok(CorrectableAtom::CA),
            "CB" => Ok(CorrectableAtom::CB),
            _ => Err(IsotopeError::UnsupportedAtom(s.to_string())),
        }
    }
}

impl TryFrom<&AtomType> for CorrectableAtom {
    type Error = IsotopeError;

    fn try_from(value: &AtomType) -> Result<Self, Self::Error> {
        CorrectableAtom::from_str(value.as_str())
    }
}

impl Display for CorrectableAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("CA", CorrectableAtom::CA)]
    #[case("CB", CorrectableAtom::CB)]
    fn test_supported(#[case] label: &str, #[case] expected: CorrectableAtom) {
        let atom = CorrectableAtom::try_from(&AtomType::from(label)).unwrap();
        assert_eq!(atom, expected);
        assert_eq!(atom.label(), label);
    }

    #[rstest]
    #[case("CD1")]
    #[case("N")]
    #[case("ca")]
    #[case("")]
    fn test_unsupported(#[case] label: &str) {
        let atom = CorrectableAtom::try_from(&AtomType::from(label));
        assert!(matches!(atom, Err(IsotopeError::UnsupportedAtom(_))));
    }
}
