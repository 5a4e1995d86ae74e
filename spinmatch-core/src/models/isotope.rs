use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

///
/// Isotopic labeling state of the sample a shift was measured in.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsotopicCondition {
    Protonated,
    Deuterated,
}

impl IsotopicCondition {
    /// Both conditions, protonated first.
    pub const ALL: [IsotopicCondition; 2] =
        [IsotopicCondition::Protonated, IsotopicCondition::Deuterated];

    pub fn opposite(&self) -> Self {
        match self {
            IsotopicCondition::Protonated => IsotopicCondition::Deuterated,
            IsotopicCondition::Deuterated => IsotopicCondition::Protonated,
        }
    }
}

impl FromStr for IsotopicCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protonated" | "h" => Ok(IsotopicCondition::Protonated),
            "deuterated" | "d" => Ok(IsotopicCondition::Deuterated),
            _ => Err(format!("Invalid isotopic condition: {}", s)),
        }
    }
}

impl Display for IsotopicCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsotopicCondition::Protonated => write!(f, "protonated"),
            IsotopicCondition::Deuterated => write!(f, "deuterated"),
        }
    }
}
