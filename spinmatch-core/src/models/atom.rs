use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// Label of the observed atom within a residue (`CA`, `CB`, `H`, `N`, ...).
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomType(String);

impl AtomType {
    pub fn new(label: impl Into<String>) -> Self {
        AtomType(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AtomType {
    fn from(value: &str) -> Self {
        AtomType::new(value)
    }
}

impl Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
