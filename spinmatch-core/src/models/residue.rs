use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

///
/// Residue type identifier, the three letter code of an amino acid
/// (e.g. `Ala`, `Gly`). Only used as a lookup key.
///
/// Every constructor maps the spellings of the average residue
/// (`Average`, `average`, `AVG`, `avg`) to [`ResidueType::AVERAGE`].
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResidueType(String);

impl ResidueType {
    /// Code of the fallback entry used when the residue type is unknown.
    pub const AVERAGE: &'static str = "Avg";

    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        match code.as_str() {
            "Average" | "average" | "AVG" | "avg" => ResidueType::average(),
            _ => ResidueType(code),
        }
    }

    ///
    /// The designated fallback residue type.
    ///
    pub fn average() -> Self {
        ResidueType(Self::AVERAGE.to_string())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn is_average(&self) -> bool {
        self.0 == Self::AVERAGE
    }
}

impl From<&str> for ResidueType {
    fn from(value: &str) -> Self {
        ResidueType::new(value)
    }
}

impl FromStr for ResidueType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResidueType::new(s))
    }
}

impl<'de> Deserialize<'de> for ResidueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ResidueType::new)
    }
}

impl Display for ResidueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// The sequence residue a spin system has been assigned to.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignedResidue {
    pub seq_code: i32,
    pub residue_type: ResidueType,
}

///
/// A weighted guess of which sequence residue a spin system belongs to.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResidueProbability {
    pub seq_code: i32,
    pub residue_type: ResidueType,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Average")]
    #[case("avg")]
    #[case("Avg")]
    fn test_parse_average_aliases(#[case] code: &str) {
        let residue: ResidueType = code.parse().unwrap();
        assert_eq!(residue.is_average(), true);
        assert_eq!(residue, ResidueType::average());
    }

    #[rstest]
    #[case("Average")]
    #[case("AVG")]
    fn test_every_constructor_maps_average(#[case] code: &str) {
        assert_eq!(ResidueType::from(code), ResidueType::average());
        assert_eq!(ResidueType::new(code.to_string()), ResidueType::average());

        let json = format!("\"{}\"", code);
        let residue: ResidueType = serde_json::from_str(&json).unwrap();
        assert_eq!(residue, ResidueType::average());
        assert_eq!(serde_json::to_string(&residue).unwrap(), "\"Avg\"");
    }

    #[rstest]
    fn test_parse_regular_code() {
        let residue: ResidueType = "Leu".parse().unwrap();
        assert_eq!(residue.code(), "Leu");
        assert_eq!(residue.is_average(), false);
    }
}
