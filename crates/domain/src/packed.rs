//! Packed version integers.
//!
//! A version tuple is stored as the four bytes of a big-endian `u32`, major
//! version in the most significant byte and patch level in the least
//! significant one. Integer order on the packed value is therefore the same
//! as lexicographic order on the tuple, which turns "is this at least
//! X.Y.Z.W" into a single comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::component::Component;
use crate::tuple::VersionTuple;

/// Packs a version tuple into one comparable integer.
///
/// `major * 2^24 + revision * 2^16 + modification * 2^8 + patch`
///
/// The `u8` parameters keep every component inside its byte, so the result
/// is never ambiguous. Usable in `const` items:
///
/// ```
/// use relstamp_domain::pack;
///
/// const MINIMUM: u32 = pack(7, 0, 3, 0);
/// assert_eq!(MINIMUM, 0x0700_0300);
/// ```
#[must_use]
pub const fn pack(major: u8, revision: u8, modification: u8, patch: u8) -> u32 {
    u32::from_be_bytes([major, revision, modification, patch])
}

/// A packed version integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PackedVersion(u32);

impl PackedVersion {
    /// The smallest packed version, `0.0.0.0`.
    pub const MIN: Self = Self(0);

    /// The largest packed version, `255.255.255.255`.
    pub const MAX: Self = Self(u32::MAX);

    /// Wraps a raw packed integer.
    ///
    /// Every `u32` decodes to exactly one tuple, so no validation is needed.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Decodes the packed integer back into its tuple.
    #[must_use]
    pub const fn unpack(self) -> VersionTuple {
        let [major, revision, modification, patch] = self.0.to_be_bytes();
        VersionTuple::new(major, revision, modification, patch)
    }

    /// Extracts a single component.
    #[must_use]
    pub const fn component(self, component: Component) -> u8 {
        let [low, ..] = (self.0 >> component.shift()).to_le_bytes();
        low
    }
}

impl From<u32> for PackedVersion {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedVersion> for u32 {
    fn from(packed: PackedVersion) -> Self {
        packed.0
    }
}

impl From<VersionTuple> for PackedVersion {
    fn from(tuple: VersionTuple) -> Self {
        tuple.packed()
    }
}

impl fmt::Display for PackedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for PackedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for PackedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
