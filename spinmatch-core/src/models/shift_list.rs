use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::models::IsotopicCondition;

///
/// Serial of a shift list; the handle a resonance's shifts are looked up by.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftListId(pub u32);

impl Display for ShiftListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// A named list of measured chemical shifts. `condition` records which
/// sample the list was measured on, when the project knows it.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftList {
    pub serial: ShiftListId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub condition: Option<IsotopicCondition>,
}
