//! Release identity: the version tuple plus its labels and derived strings.

use std::fmt;

use crate::packed::PackedVersion;
use crate::report::VersionReport;
use crate::tuple::VersionTuple;

/// The identity of one release.
///
/// Values are immutable; the `with_*` builders return a new value. Derived
/// strings and the packed integer are computed from the fields on demand and
/// never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionInfo {
    product: &'static str,
    tuple: VersionTuple,
    dev_snapshot: &'static str,
    site: &'static str,
}

impl VersionInfo {
    /// Creates a release identity with empty snapshot and site labels.
    #[must_use]
    pub const fn new(product: &'static str, tuple: VersionTuple) -> Self {
        Self {
            product,
            tuple,
            dev_snapshot: "",
            site: "",
        }
    }

    /// Returns a copy marked with a development snapshot label.
    ///
    /// An empty label means "not a snapshot".
    #[must_use]
    pub const fn with_dev_snapshot(self, dev_snapshot: &'static str) -> Self {
        Self {
            dev_snapshot,
            ..self
        }
    }

    /// Returns a copy marked with a distribution site label.
    #[must_use]
    pub const fn with_site(self, site: &'static str) -> Self {
        Self { site, ..self }
    }

    /// Product name used as the display prefix.
    #[must_use]
    pub const fn product(&self) -> &'static str {
        self.product
    }

    /// The numeric version tuple.
    #[must_use]
    pub const fn tuple(&self) -> VersionTuple {
        self.tuple
    }

    /// Major version.
    #[must_use]
    pub const fn major_version(&self) -> u8 {
        self.tuple.major
    }

    /// Revision.
    #[must_use]
    pub const fn revision(&self) -> u8 {
        self.tuple.revision
    }

    /// Modification.
    #[must_use]
    pub const fn modification(&self) -> u8 {
        self.tuple.modification
    }

    /// Patch level.
    #[must_use]
    pub const fn patch_level(&self) -> u8 {
        self.tuple.patch
    }

    /// Development snapshot label, empty for releases.
    #[must_use]
    pub const fn dev_snapshot_label(&self) -> &'static str {
        self.dev_snapshot
    }

    /// Distribution site label, empty when not repackaged.
    #[must_use]
    pub const fn site_label(&self) -> &'static str {
        self.site
    }

    /// Returns true if this is an unreleased snapshot build.
    #[must_use]
    pub const fn is_dev_snapshot(&self) -> bool {
        !self.dev_snapshot.is_empty()
    }

    /// Returns true if this build carries a distribution site label.
    #[must_use]
    pub const fn has_site_label(&self) -> bool {
        !self.site.is_empty()
    }

    /// `major.revision.modification.patch`, no padding.
    #[must_use]
    pub fn short_version_string(&self) -> String {
        self.tuple.to_string()
    }

    /// Currently the same as [`Self::short_version_string`]; the labels are
    /// exposed separately and not folded in.
    #[must_use]
    pub fn full_version_string(&self) -> String {
        self.short_version_string()
    }

    /// Product name, a space, then the full version string.
    #[must_use]
    pub fn display_string(&self) -> String {
        format!("{} {}", self.product, self.full_version_string())
    }

    /// The machine-comparable identity.
    #[must_use]
    pub const fn packed_version(&self) -> PackedVersion {
        self.tuple.packed()
    }

    /// Returns true if this release is the same as or newer than the given tuple.
    #[must_use]
    pub const fn is_at_least(&self, minimum: VersionTuple) -> bool {
        self.tuple.is_at_least(minimum)
    }

    /// Captures every field and derived value in a serializable report.
    #[must_use]
    pub fn report(&self) -> VersionReport {
        VersionReport {
            product: self.product.to_string(),
            major_version: self.major_version(),
            revision: self.revision(),
            modification: self.modification(),
            patch_level: self.patch_level(),
            dev_snapshot: self.dev_snapshot.to_string(),
            site: self.site.to_string(),
            short_version: self.short_version_string(),
            full_version: self.full_version_string(),
            display: self.display_string(),
            packed_version: self.packed_version(),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.product, self.tuple)
    }
}
