//! Positions within a version tuple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four numeric positions of a version tuple, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// Major version, the most significant byte.
    Major,
    /// Revision.
    Revision,
    /// Modification.
    Modification,
    /// Patch level, the least significant byte.
    Patch,
}

impl Component {
    /// Returns all components in significance order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Major, Self::Revision, Self::Modification, Self::Patch]
    }

    /// Bit offset of this component inside a packed version.
    #[must_use]
    pub const fn shift(self) -> u32 {
        match self {
            Self::Major => 24,
            Self::Revision => 16,
            Self::Modification => 8,
            Self::Patch => 0,
        }
    }

    /// Returns the component name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Revision => "revision",
            Self::Modification => "modification",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
