//! Binary entrypoint for the `taskboard` CLI.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // ServiceContext::from_settings picks recording or replay from TASKBOARD_RECORD / TASKBOARD_REPLAY.
    match taskboard::run(std::env::args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
