//! Binary entrypoint for the `devteam` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // API keys for the chat adapter may live in a local .env file.
    dotenvy::dotenv().ok();

    match devteam::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
