//! Relstamp CLI entry point

use std::process::ExitCode;

use relstamp::{AppConfig, ERROR_EXIT_STATUS, logging};
use relstamp_domain::CURRENT;

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("error: {e}");
        return ExitCode::from(ERROR_EXIT_STATUS);
    }

    let status = relstamp::execute(
        std::env::args_os(),
        &config,
        &CURRENT,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    ExitCode::from(status)
}
