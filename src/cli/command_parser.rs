use crate::cli::{CommandError, Commands};
use crate::stream_engine::{StreamId, TrimStrategy};
use crate::utils::{parse_block_duration, parse_count, parse_range_bound, parse_stream_id};

/// Converts a tokenized command line into a [`Commands`] value.
///
/// Command names and keywords (`COUNT`, `BLOCK`, `STREAMS`, `MAXLEN`,
/// `MINID`) are case-insensitive; stream names, fields and values are taken
/// verbatim.
pub fn parse_command(tokens: &[String]) -> Result<Commands, CommandError> {
    let (name, args) = tokens.split_first().ok_or(CommandError::Empty)?;

    match name.to_ascii_uppercase().as_str() {
        "XADD" => parse_xadd(args),
        "XREAD" => parse_xread(args),
        "XRANGE" => parse_xrange(args),
        "XLEN" => parse_xlen(args),
        "XDEL" => parse_xdel(args),
        "XTRIM" => parse_xtrim(args),
        "HELP" => Ok(Commands::Help),
        _ => Err(CommandError::UnknownCommand(name.clone())),
    }
}

fn parse_xadd(args: &[String]) -> Result<Commands, CommandError> {
    let (stream, pairs) = args.split_first().ok_or(CommandError::WrongArity {
        command: "XADD",
        expected: "a key",
    })?;

    if pairs.len() % 2 != 0 {
        return Err(CommandError::WrongArity {
            command: "XADD",
            expected: "field/value pairs",
        });
    }

    let fields = pairs
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();

    Ok(Commands::Add {
        stream: stream.clone(),
        fields,
    })
}

fn parse_xread(args: &[String]) -> Result<Commands, CommandError> {
    const STREAMS_EXPECTED: CommandError = CommandError::WrongArity {
        command: "XREAD",
        expected: "STREAMS followed by an equal number of keys and ids",
    };

    let mut count = None;
    let mut block = None;
    let mut streams_at = None;

    let mut i = 0;
    while i < args.len() {
        let keyword = args[i].to_ascii_uppercase();
        match keyword.as_str() {
            "COUNT" | "BLOCK" => {
                let value = args.get(i + 1).ok_or(CommandError::WrongArity {
                    command: "XREAD",
                    expected: "a number after COUNT/BLOCK",
                })?;

                if keyword == "COUNT" {
                    count = Some(parse_count(value).map_err(CommandError::InvalidValue)?);
                } else {
                    block = Some(parse_block_duration(value).map_err(CommandError::InvalidValue)?);
                }
                i += 2;
            }
            "STREAMS" => {
                streams_at = Some(i + 1);
                break;
            }
            _ => {
                return Err(CommandError::UnknownOption {
                    command: "XREAD",
                    option: args[i].clone(),
                });
            }
        }
    }

    let rest = &args[streams_at.ok_or(STREAMS_EXPECTED)?..];
    if rest.is_empty() || rest.len() % 2 != 0 {
        return Err(STREAMS_EXPECTED);
    }

    let (names, ids) = rest.split_at(rest.len() / 2);
    let ids = ids
        .iter()
        .map(|token| parse_stream_id(token))
        .collect::<Result<Vec<StreamId>, String>>()
        .map_err(CommandError::InvalidValue)?;

    Ok(Commands::Read {
        count,
        block,
        streams: names.to_vec(),
        ids,
    })
}

fn parse_xrange(args: &[String]) -> Result<Commands, CommandError> {
    let wrong_arity = || CommandError::WrongArity {
        command: "XRANGE",
        expected: "key, start, and end",
    };

    if args.len() != 3 && args.len() != 5 {
        return Err(wrong_arity());
    }

    let start = parse_range_bound(&args[1]).map_err(CommandError::InvalidValue)?;
    let end = parse_range_bound(&args[2]).map_err(CommandError::InvalidValue)?;

    let count = match args.get(3..) {
        Some([keyword, value]) if keyword.eq_ignore_ascii_case("COUNT") => {
            Some(parse_count(value).map_err(CommandError::InvalidValue)?)
        }
        Some([option, _]) => {
            return Err(CommandError::UnknownOption {
                command: "XRANGE",
                option: option.clone(),
            });
        }
        _ => None,
    };

    Ok(Commands::Range {
        stream: args[0].clone(),
        start,
        end,
        count,
    })
}

fn parse_xlen(args: &[String]) -> Result<Commands, CommandError> {
    match args {
        [stream] => Ok(Commands::Len {
            stream: stream.clone(),
        }),
        _ => Err(CommandError::WrongArity {
            command: "XLEN",
            expected: "exactly one key",
        }),
    }
}

fn parse_xdel(args: &[String]) -> Result<Commands, CommandError> {
    let (stream, ids) = match args.split_first() {
        Some((stream, ids)) if !ids.is_empty() => (stream, ids),
        _ => {
            return Err(CommandError::WrongArity {
                command: "XDEL",
                expected: "a key and at least one id",
            });
        }
    };

    let ids = ids
        .iter()
        .map(|token| parse_stream_id(token))
        .collect::<Result<Vec<StreamId>, String>>()
        .map_err(CommandError::InvalidValue)?;

    Ok(Commands::Del {
        stream: stream.clone(),
        ids,
    })
}

fn parse_xtrim(args: &[String]) -> Result<Commands, CommandError> {
    let [stream, strategy, threshold] = args else {
        return Err(CommandError::WrongArity {
            command: "XTRIM",
            expected: "key, strategy, and threshold",
        });
    };

    let strategy = match strategy.to_ascii_uppercase().as_str() {
        "MAXLEN" => TrimStrategy::MaxLen(parse_count(threshold).map_err(CommandError::InvalidValue)?),
        "MINID" => {
            TrimStrategy::MinId(parse_stream_id(threshold).map_err(CommandError::InvalidValue)?)
        }
        _ => {
            return Err(CommandError::UnknownOption {
                command: "XTRIM",
                option: strategy.clone(),
            });
        }
    };

    Ok(Commands::Trim {
        stream: stream.clone(),
        strategy,
    })
}
