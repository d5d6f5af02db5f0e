use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process::ExitCode;
use streamlog::StreamEngine;
use streamlog::cli::{Cli, run_interpreter};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // `RUST_LOG` wins over `--log-level`; logs go to stderr so stdout only
    // carries command output.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let engine = StreamEngine::new();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = match &cli.script {
        Some(path) => match File::open(path) {
            Ok(file) => {
                info!(script = %path.display(), "running script");
                run_interpreter(
                    &engine,
                    BufReader::new(file),
                    &mut stdout.lock(),
                    &mut stderr.lock(),
                )
            }
            Err(err) => {
                eprintln!("Error: cannot open script {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Type HELP for the command list, Ctrl-D to quit.");
            }
            run_interpreter(&engine, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "interpreter stopped");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
