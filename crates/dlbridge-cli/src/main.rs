use dlbridge_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr(&err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("dlbridge error: {:#}", err);
        std::process::exit(1);
    }
}
