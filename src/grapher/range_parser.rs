//! "min,max" range texts into validated intervals

use crate::error::GrapherError;
use crate::grapher::domain::Interval;

/// Parses a textual range like "-10, 10" into an [`Interval`].
///
/// The text must split on a comma into exactly two tokens
/// ([`GrapherError::InvalidRangeFormat`] otherwise); both tokens must be
/// finite numbers with min <= max ([`GrapherError::InvalidRangeValue`]).
pub fn parse_range(text: &str) -> Result<Interval, GrapherError> {
    let tokens: Vec<&str> = text.split(',').map(|t| t.trim()).collect();
    if tokens.len() != 2 {
        return Err(GrapherError::InvalidRangeFormat(format!(
            "expected 'min,max', got '{}'",
            text.trim()
        )));
    }
    let min = parse_bound(tokens[0])?;
    let max = parse_bound(tokens[1])?;
    if min > max {
        return Err(GrapherError::InvalidRangeValue(format!(
            "min {} is greater than max {}",
            min, max
        )));
    }
    Ok(Interval { min, max })
}

fn parse_bound(token: &str) -> Result<f64, GrapherError> {
    let value: f64 = token
        .parse()
        .map_err(|_| GrapherError::InvalidRangeValue(format!("'{}' is not a number", token)))?;
    if !value.is_finite() {
        return Err(GrapherError::InvalidRangeValue(format!(
            "'{}' is not finite",
            token
        )));
    }
    Ok(value)
}
