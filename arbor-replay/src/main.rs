mod scenario;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use scenario::{ReplayError, Scenario};

/// Replay a recorded list/dropdown interaction and print every notification
/// as one JSON line.
#[derive(Debug, Parser)]
#[command(name = "arbor-replay", version)]
struct Args {
    /// Scenario file (JSON with `config` and `steps`).
    scenario: PathBuf,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log state transitions (debug level).
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(args: &Args) -> Result<(), ReplayError> {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| ReplayError::Io {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), ReplayError> {
    init_logging(args)?;
    let scenario = Scenario::from_path(&args.scenario)?;
    for line in scenario.replay() {
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
