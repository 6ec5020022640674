use lotedl_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and run the batch. Per-URL failures are not errors here;
    // only fatal setup conditions reach this branch.
    if let Err(err) = cli::run_from_args() {
        tracing::error!("fatal: {:#}", err);
        eprintln!("lotedl error: {:#}", err);
        std::process::exit(1);
    }
}
