use crate::cli::{COMMAND_HELP, CommandError, Commands};
use crate::stream_engine::traits::{StreamReader, StreamWriter};
use crate::stream_engine::{Entry, ReadOptions, ReadResult, StreamEngine};
use std::io::Write;

/// Runs one parsed command against `engine` and renders its result to `out`.
pub fn execute_command<W: Write>(
    engine: &StreamEngine,
    command: &Commands,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        Commands::Add { stream, fields } => {
            let id = engine.append(stream, fields.clone())?;
            writeln!(out, "{id}")?;
        }

        Commands::Read {
            count,
            block,
            streams,
            ids,
        } => {
            let mut options = ReadOptions::new();
            if let Some(count) = *count {
                options = options.count(count);
            }
            if let Some(block) = *block {
                options = options.block(block);
            }

            let result = engine.read(streams.as_slice(), ids, &options)?;
            write_read_result(out, &result)?;
        }

        Commands::Range {
            stream,
            start,
            end,
            count,
        } => {
            let entries = engine.range(stream, *start, *end, *count)?;
            write_range(out, &entries)?;
        }

        Commands::Len { stream } => {
            writeln!(out, "{}", engine.length(stream)?)?;
        }

        Commands::Del { stream, ids } => {
            writeln!(out, "{}", engine.delete(stream, ids)?)?;
        }

        Commands::Trim { stream, strategy } => {
            writeln!(out, "{}", engine.trim(stream, *strategy)?)?;
        }

        Commands::Help => {
            write!(out, "{COMMAND_HELP}")?;
        }
    }

    Ok(())
}

/// Streams with no matching entries are left out of the listing.
fn write_read_result<W: Write>(out: &mut W, result: &ReadResult) -> std::io::Result<()> {
    let mut printed = 0;

    for (name, entries) in result.iter().filter(|(_, entries)| !entries.is_empty()) {
        printed += 1;
        writeln!(out, "{printed}) \"{name}\"")?;

        for (position, entry) in entries.iter().enumerate() {
            writeln!(out, "\t{position}) {}", entry.id())?;
            write_fields(out, entry, "\t\t")?;
        }
    }

    if printed == 0 {
        writeln!(out, "(empty)")?;
    }

    Ok(())
}

fn write_range<W: Write>(out: &mut W, entries: &[Entry]) -> std::io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "(empty)");
    }

    for (position, entry) in entries.iter().enumerate() {
        writeln!(out, "{}) {}", position + 1, entry.id())?;
        write_fields(out, entry, "\t")?;
        writeln!(out)?;
    }

    Ok(())
}

#[inline]
fn write_fields<W: Write>(out: &mut W, entry: &Entry, indent: &str) -> std::io::Result<()> {
    for (position, (field, value)) in entry.fields().iter().enumerate() {
        writeln!(out, "{indent}{}) {field}:{value}", position + 1)?;
    }
    Ok(())
}
