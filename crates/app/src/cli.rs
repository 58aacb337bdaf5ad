//! CLI argument definitions using clap
//!
//! Commands:
//! - relstamp [show]
//! - relstamp info [--format text|json]
//! - relstamp pack <VERSION> [--hex]
//! - relstamp unpack <PACKED>
//! - relstamp check <VERSION> [--quiet]
//! - relstamp compare <LEFT> <RIGHT>

use clap::{Parser, Subcommand};
use relstamp_domain::{PackedVersion, VersionTuple};

use crate::config::OutputFormat;
use crate::error::{AppError, AppResult};

/// Relstamp - report and compare release identities
#[derive(Parser, Debug)]
#[command(name = "relstamp")]
#[command(version = relstamp_domain::current::FULL_VERSION, about, long_about = None)]
pub struct Cli {
    /// Command to run; prints the display string when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the product name and version
    Show,

    /// Print every field of the build identity
    Info {
        /// Output format; defaults to RELSTAMP_FORMAT, then text
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Pack a `major.revision.modification.patch` version into one integer
    Pack {
        /// Version to pack
        version: VersionTuple,

        /// Print as `0x` prefixed hexadecimal
        #[arg(long)]
        hex: bool,
    },

    /// Decode a packed integer (decimal or `0x` hex) into its version
    Unpack {
        /// Packed version
        #[arg(value_parser = parse_packed)]
        packed: PackedVersion,
    },

    /// Exit successfully if this build is at least the given version
    Check {
        /// Minimum required version
        version: VersionTuple,

        /// Only set the exit status
        #[arg(short, long)]
        quiet: bool,
    },

    /// Compare two versions and print `<`, `=` or `>`
    Compare {
        /// Left-hand version
        left: VersionTuple,

        /// Right-hand version
        right: VersionTuple,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, falling back to `show`.
    #[must_use]
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }
}

/// Parses a packed version written in decimal or `0x`-prefixed hexadecimal.
///
/// # Errors
///
/// Returns [`AppError::InvalidPacked`] if the text is not a `u32`.
pub fn parse_packed(input: &str) -> AppResult<PackedVersion> {
    let trimmed = input.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    // from_str_radix tolerates a leading sign, so check the digits first.
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| {
            if radix == 16 {
                b.is_ascii_hexdigit()
            } else {
                b.is_ascii_digit()
            }
        });
    if !well_formed {
        return Err(AppError::InvalidPacked(trimmed.to_string()));
    }

    u32::from_str_radix(digits, radix)
        .map(PackedVersion::new)
        .map_err(|e| AppError::InvalidPacked(format!("{trimmed}: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_show() {
        let cli = Cli::try_parse_from(["relstamp"]).unwrap();
        assert_eq!(cli.command_or_default(), Command::Show);
    }

    #[test]
    fn test_pack_parses_version() {
        let cli = Cli::try_parse_from(["relstamp", "pack", "7.0.3.0", "--hex"]).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Command::Pack {
                version: VersionTuple::new(7, 0, 3, 0),
                hex: true,
            }
        );
    }

    #[test]
    fn test_pack_rejects_bad_version() {
        assert!(Cli::try_parse_from(["relstamp", "pack", "7.0.300.0"]).is_err());
        assert!(Cli::try_parse_from(["relstamp", "pack", "7.0"]).is_err());
    }

    #[test]
    fn test_info_format_flag() {
        let cli = Cli::try_parse_from(["relstamp", "info", "--format", "json"]).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Command::Info {
                format: Some(OutputFormat::Json)
            }
        );
    }

    #[test]
    fn test_parse_packed_decimal_and_hex() {
        assert_eq!(parse_packed("117442304").unwrap().value(), 117_442_304);
        assert_eq!(parse_packed("0x07000700").unwrap().value(), 117_442_304);
        assert_eq!(parse_packed("0XFF").unwrap().value(), 255);
        assert_eq!(parse_packed(" 5 ").unwrap().value(), 5);
    }

    #[test]
    fn test_parse_packed_rejects_garbage() {
        let rejected = [
            "", "-1", "4294967296", "0x", "0x1G", "seven", "+5", "0x+FF", "0x-1",
        ];
        for input in rejected {
            assert!(parse_packed(input).is_err(), "{input:?}");
        }
    }
}
