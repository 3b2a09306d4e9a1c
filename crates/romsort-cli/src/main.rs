use romsort_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state-dir file when possible, stderr otherwise.
    if logging::init().is_err() {
        logging::init_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("romsort error: {:#}", err);
        std::process::exit(1);
    }
}
