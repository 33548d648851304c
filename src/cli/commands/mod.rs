//! CLI commands

pub mod analyze;
pub mod play;
pub mod solve;

use crate::{Error, Result};

/// Parse a comma-separated pile list such as `3,4,2`.
pub(crate) fn parse_piles(input: &str) -> Result<Vec<usize>> {
    if input.trim().is_empty() {
        return Err(Error::ParsePiles {
            input: input.to_string(),
            reason: "no pile sizes given".to_string(),
        });
    }

    input
        .split(',')
        .map(|token| {
            token.trim().parse::<usize>().map_err(|_| Error::ParsePiles {
                input: input.to_string(),
                reason: format!("'{}' is not a pile size", token.trim()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_sizes() {
        assert_eq!(parse_piles("3,4,2").unwrap(), vec![3, 4, 2]);
        assert_eq!(parse_piles(" 1 , 2 ").unwrap(), vec![1, 2]);
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(parse_piles("3,x").is_err());
        assert!(parse_piles("").is_err());
    }
}
