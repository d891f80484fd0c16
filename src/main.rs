use std::{io, process::ExitCode};

use clap::Parser;
use repfinder::cli::{self, args::Args};
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();

    repfinder::init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli::run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(target: "main", "{:?}", e);
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
