//! Binary entrypoint for the `rnlink` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; it only supplies RNLINK_LOG.
    let _ = dotenvy::dotenv();
    match rnlink::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
