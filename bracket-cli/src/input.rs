use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a currency amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a currency amount, accepting commas as thousands separators
/// (e.g. `"1,234.56"`) and surrounding whitespace.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = s.trim().replace(',', "");
    normalized.parse().map_err(|source| {
        tracing::warn!(input = %s, "unparseable amount");
        ParseAmountError {
            input: s.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_number() {
        assert_eq!(parse_amount("50000").unwrap(), dec!(50000));
    }

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("2,000,000").unwrap(), dec!(2000000));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_amount_keeps_sign() {
        // Negative amounts parse here; the calculator rejects them.
        assert_eq!(parse_amount("-100").unwrap(), dec!(-100));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
    }
}
