use annfetch_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("annfetch error: {:#}", err);
        std::process::exit(1);
    }
}
