use rsget_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; if the state dir is
    // unwritable, log to stderr instead of crashing.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch. Per-item fetch/write failures are reported on
    // stderr inside the run and do not reach this error path.
    if let Err(err) = cli::run_from_args() {
        eprintln!("rsget error: {:#}", err);
        std::process::exit(1);
    }
}
