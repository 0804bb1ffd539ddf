//! Decomment CLI

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use decomment_cli::{init_tracing, run, Args};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&args, &mut out);
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
