use crate::utils::parse_count;
use std::time::Duration;

/// Parses a `BLOCK` argument given in milliseconds.
///
/// `0` is valid and means "do not block".
pub fn parse_block_duration(token: &str) -> Result<Duration, String> {
    let millis = parse_count(token).map_err(|_| format!("Invalid block time: {}", token))?;
    Ok(Duration::from_millis(millis as u64))
}
