/// Parses a non-negative entry count (`COUNT`, `MAXLEN`).
pub fn parse_count(token: &str) -> Result<usize, String> {
    let token = token.trim();

    if token.starts_with('-') {
        return Err(format!("Count must not be negative: {}", token));
    }

    token
        .parse::<usize>()
        .map_err(|_| format!("Invalid count: {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_and_positive() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("17"), Ok(17));
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(parse_count("-1").unwrap_err().contains("negative"));
        assert!(parse_count("ten").is_err());
        assert!(parse_count("1.5").is_err());
    }
}
