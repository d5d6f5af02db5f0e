pub mod cli_parser;
pub use cli_parser::Cli;

pub mod command_error;
pub use command_error::CommandError;

pub mod command_parser;
pub use command_parser::parse_command;

pub mod commands;
pub use commands::Commands;

pub mod execute_command;
pub use execute_command::execute_command;

pub mod help_template;
pub use help_template::{COMMAND_HELP, HELP_TEMPLATE};

pub mod interpreter;
pub use interpreter::{execute_line, run_interpreter};
