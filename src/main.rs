//! # `StageStatus`
//!
//! `StageStatus` inspects the status codes shared by pipeline stages and
//! demonstrates their exit-on-error contract.
//!
//! ## Usage
//!
//! ```sh
//! stagestatus list --format json
//! stagestatus text 3
//! stagestatus fail --code 3 --message "timeout" --context "fetching rates"
//! ```
//!
//! Exit status is the status code of the failure (0 on success, 6 when the
//! failure carries no code).

use clap::Parser as _;
use stagestatus::cli::Args;
use stagestatus::status::Code;
use stagestatus::{exit_from_error, exit_with};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // RUST_LOG takes precedence over the verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match stagestatus::run(args) {
        Ok(()) => exit_with(Code::OK),
        Err(err) => exit_from_error(err),
    }
}
