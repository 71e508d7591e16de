//! Amount-string parsing
//!
//! Raw user input like `"$1,200.50"` is normalized before the ledger ever
//! sees it: currency symbols, thousands separators, and whitespace are
//! stripped, and whatever remains must parse as a finite number. Sign is
//! preserved; rejecting negative amounts is the ledger's job.

use crate::error::ParseError;

/// Parse a raw amount string into a number
///
/// Strips `$`, `,`, and all whitespace, then parses the remainder as a
/// float. An empty or non-numeric remainder fails with
/// [`ParseError::NotANumber`], as does any input that would produce a
/// non-finite value.
///
/// # Examples
/// ```
/// use outlay::models::parse_amount;
/// assert_eq!(parse_amount("$1,200.50").unwrap(), 1200.5);
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<f64, ParseError> {
    let normalized: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    if normalized.is_empty() {
        return Err(ParseError::NotANumber(raw.to_string()));
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::NotANumber(raw.to_string())),
    }
}
