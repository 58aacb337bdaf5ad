//! Identity of this distribution, fixed at compile time.
//!
//! The numeric fields are literals so the display strings can be assembled
//! with `concat!` and need no runtime construction. The snapshot and site
//! labels come from the `RELSTAMP_DEV_SNAPSHOT` and `RELSTAMP_SITE_VERSION`
//! environment variables at build time and are empty when unset.

use crate::info::VersionInfo;
use crate::packed::pack;
use crate::tuple::VersionTuple;

macro_rules! release_identity {
    (
        $product:literal,
        $major:literal,
        $revision:literal,
        $modification:literal,
        $patch:literal
    ) => {
        /// Product name used in [`DISPLAY_VERSION`].
        pub const PRODUCT_NAME: &str = $product;

        /// Major version.
        pub const MAJOR_VERSION: u8 = $major;

        /// Revision.
        pub const REVISION: u8 = $revision;

        /// Modification.
        pub const MODIFICATION: u8 = $modification;

        /// Patch level.
        pub const PATCH_LEVEL: u8 = $patch;

        /// `major.revision.modification.patch`.
        pub const SHORT_VERSION: &str =
            concat!($major, ".", $revision, ".", $modification, ".", $patch);

        /// Same as [`SHORT_VERSION`]; labels are not folded in.
        pub const FULL_VERSION: &str = SHORT_VERSION;

        /// Product name followed by [`FULL_VERSION`].
        pub const DISPLAY_VERSION: &str = concat!(
            $product, " ", $major, ".", $revision, ".", $modification, ".", $patch
        );
    };
}

release_identity!("Relstamp", 7, 0, 7, 0);

/// Development snapshot label, empty for release builds.
pub const DEV_SNAPSHOT: &str = match option_env!("RELSTAMP_DEV_SNAPSHOT") {
    Some(label) => label,
    None => "",
};

/// Distribution site label, empty for upstream builds.
pub const SITE_VERSION: &str = match option_env!("RELSTAMP_SITE_VERSION") {
    Some(label) => label,
    None => "",
};

/// The packed form of this build's version tuple.
pub const PACKED_VERSION: u32 = pack(MAJOR_VERSION, REVISION, MODIFICATION, PATCH_LEVEL);

/// This build's identity.
pub const CURRENT: VersionInfo = VersionInfo::new(
    PRODUCT_NAME,
    VersionTuple::new(MAJOR_VERSION, REVISION, MODIFICATION, PATCH_LEVEL),
)
.with_dev_snapshot(DEV_SNAPSHOT)
.with_site(SITE_VERSION);

const _: () = assert!(CURRENT.packed_version().value() == PACKED_VERSION);

/// Returns true if this build is at least `major.revision.modification.patch`.
///
/// Usable in `const` contexts as a feature gate:
///
/// ```
/// use relstamp_domain::current;
///
/// const HAS_NEW_FORMAT: bool = current::is_at_least(7, 0, 3, 0);
/// assert!(HAS_NEW_FORMAT);
/// ```
#[must_use]
pub const fn is_at_least(major: u8, revision: u8, modification: u8, patch: u8) -> bool {
    PACKED_VERSION >= pack(major, revision, modification, patch)
}
