//! The four-part version tuple.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::error::{DomainError, DomainResult};
use crate::packed::{PackedVersion, pack};

/// A release identity as `major.revision.modification.patch`.
///
/// Each component is a byte, so every tuple packs into a unique `u32`.
/// The derived ordering compares fields in declaration order, which is the
/// same lexicographic order the packed integer preserves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct VersionTuple {
    /// Major version.
    pub major: u8,
    /// Revision.
    pub revision: u8,
    /// Modification.
    pub modification: u8,
    /// Patch level.
    pub patch: u8,
}

impl VersionTuple {
    /// Creates a new tuple.
    #[must_use]
    pub const fn new(major: u8, revision: u8, modification: u8, patch: u8) -> Self {
        Self {
            major,
            revision,
            modification,
            patch,
        }
    }

    /// Creates a tuple from wider integers, rejecting values above 255.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ComponentOutOfRange`] naming the first
    /// component that does not fit in a byte.
    pub fn try_new(major: u32, revision: u32, modification: u32, patch: u32) -> DomainResult<Self> {
        Ok(Self::new(
            narrow(Component::Major, u64::from(major))?,
            narrow(Component::Revision, u64::from(revision))?,
            narrow(Component::Modification, u64::from(modification))?,
            narrow(Component::Patch, u64::from(patch))?,
        ))
    }

    /// Returns the value of a single component.
    #[must_use]
    pub const fn get(self, component: Component) -> u8 {
        match component {
            Component::Major => self.major,
            Component::Revision => self.revision,
            Component::Modification => self.modification,
            Component::Patch => self.patch,
        }
    }

    /// Packs this tuple into its comparable integer form.
    #[must_use]
    pub const fn packed(self) -> PackedVersion {
        PackedVersion::new(pack(
            self.major,
            self.revision,
            self.modification,
            self.patch,
        ))
    }

    /// Returns true if this tuple is the same as or newer than `minimum`.
    #[must_use]
    pub const fn is_at_least(self, minimum: Self) -> bool {
        self.packed().value() >= minimum.packed().value()
    }
}

fn narrow(component: Component, value: u64) -> DomainResult<u8> {
    u8::try_from(value).map_err(|_| DomainError::out_of_range(component, value))
}

impl From<PackedVersion> for VersionTuple {
    fn from(packed: PackedVersion) -> Self {
        packed.unpack()
    }
}

impl From<[u8; 4]> for VersionTuple {
    fn from([major, revision, modification, patch]: [u8; 4]) -> Self {
        Self::new(major, revision, modification, patch)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.revision, self.modification, self.patch
        )
    }
}

impl FromStr for VersionTuple {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != Component::all().len() {
            return Err(DomainError::invalid_version(trimmed));
        }

        let mut bytes = [0u8; 4];
        for ((slot, part), component) in bytes.iter_mut().zip(&parts).zip(Component::all()) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DomainError::invalid_version(trimmed));
            }
            // All digits, so the only possible failure is overflow.
            let value = part.parse::<u64>().unwrap_or(u64::MAX);
            *slot = narrow(*component, value)?;
        }

        Ok(Self::from(bytes))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(VersionTuple::new(7, 0, 7, 0).to_string(), "7.0.7.0");
        assert_eq!(VersionTuple::new(10, 200, 3, 45).to_string(), "10.200.3.45");
    }

    #[test]
    fn test_from_str() {
        let tuple: VersionTuple = "6.3.1.0".parse().unwrap();
        assert_eq!(tuple, VersionTuple::new(6, 3, 1, 0));
    }

    #[test]
    fn test_from_str_trims_whitespace() {
        let tuple: VersionTuple = "  1.2.3.4\n".parse().unwrap();
        assert_eq!(tuple, VersionTuple::new(1, 2, 3, 4));
    }

    #[test]
    fn test_from_str_accepts_leading_zeros() {
        let tuple: VersionTuple = "07.00.07.00".parse().unwrap();
        assert_eq!(tuple, VersionTuple::new(7, 0, 7, 0));
    }

    #[test]
    fn test_from_str_rejects_wrong_arity() {
        for input in ["", "7", "7.0", "7.0.7", "7.0.7.0.1"] {
            let result = input.parse::<VersionTuple>();
            assert!(
                matches!(result, Err(DomainError::InvalidVersionString(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str_rejects_non_digits() {
        for input in ["7..7.0", "7.0.7.x", "+7.0.7.0", "7.0.-1.0", "7.0.7.0 beta"] {
            assert!(input.parse::<VersionTuple>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_from_str_out_of_range() {
        let err = "7.256.0.0".parse::<VersionTuple>().unwrap_err();
        assert_eq!(err, DomainError::out_of_range(Component::Revision, 256));
    }

    #[test]
    fn test_from_str_huge_component() {
        let err = "99999999999999999999999.0.0.0"
            .parse::<VersionTuple>()
            .unwrap_err();
        assert_eq!(err, DomainError::out_of_range(Component::Major, u64::MAX));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            VersionTuple::try_new(255, 0, 1, 2).unwrap(),
            VersionTuple::new(255, 0, 1, 2)
        );
        assert_eq!(
            VersionTuple::try_new(1, 2, 3, 300).unwrap_err(),
            DomainError::out_of_range(Component::Patch, 300)
        );
    }

    #[test]
    fn test_get() {
        let tuple = VersionTuple::new(9, 8, 7, 6);
        let values: Vec<u8> = Component::all().iter().map(|c| tuple.get(*c)).collect();
        assert_eq!(values, vec![9, 8, 7, 6]);
    }

    #[test]
    fn test_lexicographic_not_magnitude() {
        let older = VersionTuple::new(6, 3, 1, 0);
        let newer = VersionTuple::new(7, 0, 0, 0);
        assert!(older < newer);
        assert!(older.packed() < newer.packed());
        assert!(newer.is_at_least(older));
        assert!(!older.is_at_least(newer));
    }

    #[test]
    fn test_is_at_least_is_reflexive() {
        let tuple = VersionTuple::new(7, 0, 7, 0);
        assert!(tuple.is_at_least(tuple));
    }
}
