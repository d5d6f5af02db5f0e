use crate::cli::{CommandError, execute_command, parse_command};
use crate::stream_engine::StreamEngine;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Tokenizes, parses and executes a single command line.
///
/// Tokens are split with shell-style quoting, so `XADD s msg "hello world"`
/// stores the value `hello world`.
pub fn execute_line<W: Write>(
    engine: &StreamEngine,
    line: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let tokens = shlex::split(line).ok_or(CommandError::InvalidQuoting)?;
    let command = parse_command(&tokens)?;

    execute_command(engine, &command, out)
}

/// Executes every line of `input` in order against `engine`.
///
/// Blank lines and `#` comments are skipped. A failing command is reported as
/// `(error) <message>` on `err` and does not stop the run.
///
/// # Errors
/// Only I/O failures (reading `input`, writing `out` or `err`) end the run
/// early.
pub fn run_interpreter<R, W, E>(
    engine: &StreamEngine,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for (line_number, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match execute_line(engine, trimmed, &mut *out) {
            Ok(()) => {}
            Err(CommandError::Io(e)) => return Err(e),
            Err(e) => {
                debug!(line = line_number + 1, error = %e, "command failed");
                writeln!(err, "(error) {e}")?;
            }
        }

        out.flush()?;
    }

    Ok(())
}
