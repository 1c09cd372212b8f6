#![forbid(unsafe_code)]

//! `sheet-replay`: replay a sheet script and print a JSONL trace.
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `warn`).

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use sheetkit_harness::error::Result;
use sheetkit_harness::replay;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sheet-replay",
    about = "Replay a bottom-sheet event script and print a JSONL trace",
    version
)]
struct Args {
    /// Script file; omit or pass `-` to read stdin.
    script: Option<PathBuf>,
}

impl Args {
    fn reads_stdin(&self) -> bool {
        self.script.as_deref().is_none_or(|p| p == Path::new("-"))
    }
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sheet-replay: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let input = match &args.script {
        Some(path) if !args.reads_stdin() => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let script = replay::parse(&input)?;
    let outcome = replay::run(script)?;
    outcome.write_jsonl(&mut io::stdout().lock())?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
