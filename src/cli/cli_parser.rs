use crate::cli::HELP_TEMPLATE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    // Obtain during build time, not runtime
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,
    after_help = HELP_TEMPLATE.replace("%BINARY_NAME%", env!("CARGO_PKG_NAME"))
)]
pub struct Cli {
    /// File of commands to execute, one per line.
    #[arg(
        value_name = "script",
        help = "Path to a file of commands, one per line. Reads standard input when omitted."
    )]
    pub script: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level or filter directive (e.g. debug, streamlog=trace). RUST_LOG takes precedence."
    )]
    pub log_level: String,
}
