use crate::stream_engine::StreamId;

/// Parses a signed 64-bit stream id.
///
/// Negative ids are accepted; they are valid bounds even though no entry is
/// ever assigned one.
///
/// # Examples
/// ```
/// use streamlog::utils::parse_stream_id;
///
/// assert_eq!(parse_stream_id("42"), Ok(42));
/// assert_eq!(parse_stream_id("-1"), Ok(-1));
/// assert!(parse_stream_id("4x").is_err());
/// ```
pub fn parse_stream_id(token: &str) -> Result<StreamId, String> {
    token
        .trim()
        .parse::<StreamId>()
        .map_err(|_| format!("Invalid stream id: {}", token))
}
