//! restake-authz-ledger entrypoint.
//!
//! Prints the authz grant commands a Ledger user needs to run to enable
//! REStake for their delegations.

use std::process::ExitCode;

use clap::Parser;
use restake_authz_ledger::cli::{self, Cli};
use restake_authz_ledger::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    // anyhow only captures backtraces when asked to at error creation time
    if verbose && std::env::var_os("RUST_LIB_BACKTRACE").is_none() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1");
    }

    let mut logging = LoggingConfig::from_env();
    logging.debug |= verbose;
    init_logging(&logging);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            cli::report_error(&anyhow::Error::new(e).context("Failed to start runtime"), verbose);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(cli::run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err, verbose);
            ExitCode::FAILURE
        }
    }
}
