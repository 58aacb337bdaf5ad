//! Relstamp - release identity reporter
//!
//! Command line front end over `relstamp-domain`: prints the build identity,
//! packs and unpacks version tuples, and answers minimum-version checks.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use relstamp_domain::VersionInfo;

pub use cli::{Cli, Command};
pub use commands::Outcome;
pub use config::{AppConfig, OutputFormat};
pub use error::{AppError, AppResult};

/// Exit status for any error, matching clap's usage errors.
pub const ERROR_EXIT_STATUS: u8 = 2;

/// Parses `args` (program name first), runs the command and returns the
/// process exit status.
///
/// Command output, `--help` and `--version` go to `out`. Usage errors and
/// command failures are written to `err` and yield [`ERROR_EXIT_STATUS`].
pub fn execute<I, T, W, E>(
    args: I,
    config: &AppConfig,
    identity: &VersionInfo,
    out: &mut W,
    err: &mut E,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let sink: &mut dyn Write = if e.use_stderr() { err } else { out };
            // Nothing sensible is left to report to if this write fails.
            let _ = write!(sink, "{e}");
            return u8::try_from(e.exit_code()).unwrap_or(ERROR_EXIT_STATUS);
        }
    };

    match run(&cli, config, identity, out) {
        Ok(outcome) => outcome.exit_status(),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = writeln!(err, "error: {e}");
            ERROR_EXIT_STATUS
        }
    }
}

/// Runs one command against the given identity.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn run<W: Write>(
    cli: &Cli,
    config: &AppConfig,
    identity: &VersionInfo,
    out: &mut W,
) -> AppResult<Outcome> {
    tracing::info!(
        version = %identity.full_version_string(),
        packed = identity.packed_version().value(),
        snapshot = identity.dev_snapshot_label(),
        site = identity.site_label(),
        "release identity"
    );

    let command = cli.command_or_default();
    tracing::debug!(?command, "dispatching command");

    match command {
        Command::Show => commands::show(identity, out),
        Command::Info { format } => {
            commands::info(identity, config.info_format(format), out)
        }
        Command::Pack { version, hex } => commands::pack(version, hex, out),
        Command::Unpack { packed } => commands::unpack(packed, out),
        Command::Check { version, quiet } => commands::check(identity, version, quiet, out),
        Command::Compare { left, right } => commands::compare(left, right, out),
    }
}
