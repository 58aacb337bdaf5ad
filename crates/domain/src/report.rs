//! Serializable snapshot of a release identity.

use serde::{Deserialize, Serialize};

use crate::packed::PackedVersion;

/// Every field and derived value of a [`crate::VersionInfo`], owned.
///
/// Used for diagnostics output; it is not a persisted format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionReport {
    /// Product name.
    pub product: String,
    /// Major version.
    pub major_version: u8,
    /// Revision.
    pub revision: u8,
    /// Modification.
    pub modification: u8,
    /// Patch level.
    pub patch_level: u8,
    /// Development snapshot label, empty for releases.
    #[serde(default)]
    pub dev_snapshot: String,
    /// Distribution site label.
    #[serde(default)]
    pub site: String,
    /// Short version string.
    pub short_version: String,
    /// Full version string.
    pub full_version: String,
    /// Display string.
    pub display: String,
    /// Packed version integer.
    pub packed_version: PackedVersion,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{VersionInfo, VersionTuple};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_json_shape() {
        let report = VersionInfo::new("Relstamp", VersionTuple::new(7, 0, 7, 0))
            .with_site("ppa")
            .report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["product"], "Relstamp");
        assert_eq!(json["majorVersion"], 7);
        assert_eq!(json["patchLevel"], 0);
        assert_eq!(json["devSnapshot"], "");
        assert_eq!(json["site"], "ppa");
        assert_eq!(json["shortVersion"], "7.0.7.0");
        assert_eq!(json["fullVersion"], "7.0.7.0");
        assert_eq!(json["display"], "Relstamp 7.0.7.0");
        assert_eq!(json["packedVersion"], 117_442_304);
    }

    #[test]
    fn test_report_deserializes() {
        let report = VersionInfo::new("Relstamp", VersionTuple::new(1, 2, 3, 4)).report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: super::VersionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
