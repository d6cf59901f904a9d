mod bootstrap;
mod config;
mod loop_runner;
mod session;

use std::process::ExitCode;

pub(crate) fn run() -> ExitCode {
    match bootstrap::build_app() {
        Ok(wiring) => loop_runner::run(wiring),
        Err(error) => {
            tracing::error!(error = %error, "startup_failed");
            ExitCode::FAILURE
        }
    }
}
