use crate::stream_engine::{MAX_STREAM_ID, MIN_STREAM_ID, StreamId};
use crate::utils::parse_stream_id;

/// Parses a range bound, accepting `-` for the smallest possible id and `+`
/// for the largest.
pub fn parse_range_bound(token: &str) -> Result<StreamId, String> {
    match token.trim() {
        "-" => Ok(MIN_STREAM_ID),
        "+" => Ok(MAX_STREAM_ID),
        other => parse_stream_id(other),
    }
}
