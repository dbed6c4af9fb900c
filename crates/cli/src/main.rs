// crates/cli/src/main.rs
use std::process::ExitCode;

use clap::Parser;
use wcc_cli::args::Args;
use wcc_core::{count_reader, format, input};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wcc: error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> wcc_core::Result<String> {
    let selection = args.selection();
    let reader = input::open(args.path())?;
    let counts = count_reader(reader, selection)?;
    Ok(format::render(&counts, args.path()))
}
