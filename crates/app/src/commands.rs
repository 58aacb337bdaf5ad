//! Command implementations.
//!
//! Every command writes to the given writer and reports through
//! [`Outcome`] whether the process should exit successfully.

use std::cmp::Ordering;
use std::io::Write;

use relstamp_domain::{PackedVersion, VersionInfo, VersionTuple};

use crate::config::OutputFormat;
use crate::error::AppResult;

/// Result of a command that completed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Success,
    /// A `check` found the build older than required.
    Unsatisfied,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn exit_status(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Unsatisfied => 1,
        }
    }
}

/// Prints the display string.
pub fn show<W: Write>(identity: &VersionInfo, out: &mut W) -> AppResult<Outcome> {
    writeln!(out, "{}", identity.display_string())?;
    Ok(Outcome::Success)
}

/// Prints the full identity report.
pub fn info<W: Write>(
    identity: &VersionInfo,
    format: OutputFormat,
    out: &mut W,
) -> AppResult<Outcome> {
    let report = identity.report();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "product: {}", report.product)?;
            writeln!(out, "major_version: {}", report.major_version)?;
            writeln!(out, "revision: {}", report.revision)?;
            writeln!(out, "modification: {}", report.modification)?;
            writeln!(out, "patch_level: {}", report.patch_level)?;
            writeln!(out, "dev_snapshot: {}", or_none(&report.dev_snapshot))?;
            writeln!(out, "site: {}", or_none(&report.site))?;
            writeln!(out, "short_version: {}", report.short_version)?;
            writeln!(out, "full_version: {}", report.full_version)?;
            writeln!(out, "display: {}", report.display)?;
            writeln!(
                out,
                "packed_version: {} ({:#010x})",
                report.packed_version, report.packed_version
            )?;
        }
    }
    Ok(Outcome::Success)
}

fn or_none(label: &str) -> &str {
    if label.is_empty() { "(none)" } else { label }
}

/// Prints the packed integer of a version.
pub fn pack<W: Write>(version: VersionTuple, hex: bool, out: &mut W) -> AppResult<Outcome> {
    let packed = version.packed();
    if hex {
        writeln!(out, "{packed:#010x}")?;
    } else {
        writeln!(out, "{packed}")?;
    }
    Ok(Outcome::Success)
}

/// Prints the version a packed integer decodes to.
pub fn unpack<W: Write>(packed: PackedVersion, out: &mut W) -> AppResult<Outcome> {
    writeln!(out, "{}", packed.unpack())?;
    Ok(Outcome::Success)
}

/// Tests the identity against a minimum version.
pub fn check<W: Write>(
    identity: &VersionInfo,
    minimum: VersionTuple,
    quiet: bool,
    out: &mut W,
) -> AppResult<Outcome> {
    let satisfied = identity.is_at_least(minimum);
    tracing::debug!(
        current = %identity.tuple(),
        minimum = %minimum,
        satisfied,
        "version check"
    );
    if !quiet {
        writeln!(out, "{}", if satisfied { "yes" } else { "no" })?;
    }
    Ok(if satisfied {
        Outcome::Success
    } else {
        Outcome::Unsatisfied
    })
}

/// Prints how two versions order.
pub fn compare<W: Write>(
    left: VersionTuple,
    right: VersionTuple,
    out: &mut W,
) -> AppResult<Outcome> {
    let symbol = match left.packed().cmp(&right.packed()) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    writeln!(out, "{symbol}")?;
    Ok(Outcome::Success)
}
