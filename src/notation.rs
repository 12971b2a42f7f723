//! # Cycle notation
//!
//! Reading of the textual cycle form `(abc)(de)`: the cheap up-front check run
//! before any algorithm, and the cycle recovery used by the normalizer.
//!
//! Validation only looks at the outer shape of the text. Interior
//! malformation (an unmatched `)`, an empty cycle, ...) is reported by the
//! multiplier and the normalizer, which walk the text anyway.

use crate::error::PermutationError;

pub const OPEN: char = '(';
pub const CLOSE: char = ')';

/// Checks that `text` looks like cycle notation and returns it trimmed.
///
/// # Errors
///
/// - [`PermutationError::EmptyInput`] if `text` is empty or only whitespace.
/// - [`PermutationError::MissingParenthesis`] if the trimmed text does not
///   start with `(` and end with `)`.
///
/// # Examples
///
/// ```
/// # use cyclenote::notation::validate;
/// # use cyclenote::PermutationError;
/// assert_eq!(validate("  (abc)(de) "), Ok("(abc)(de)"));
/// assert_eq!(validate("   "), Err(PermutationError::EmptyInput));
/// assert_eq!(validate("abc"), Err(PermutationError::MissingParenthesis));
/// ```
pub fn validate(text: &str) -> Result<&str, PermutationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PermutationError::EmptyInput);
    }
    if !trimmed.starts_with(OPEN) || !trimmed.ends_with(CLOSE) {
        return Err(PermutationError::MissingParenthesis);
    }
    Ok(trimmed)
}

/// Recovers the symbol run of every cycle: drops one leading `(`, every `)`,
/// and splits what is left on `(`.
///
/// No balance checking happens here, so malformed text can produce empty
/// runs; `"(ab)()"` gives `["ab", ""]`.
///
/// ```
/// # use cyclenote::notation::split_cycles;
/// assert_eq!(split_cycles("(316)(54)(2)"), vec!["316", "54", "2"]);
/// ```
pub fn split_cycles(text: &str) -> Vec<String> {
    let body = text.strip_prefix(OPEN).unwrap_or(text);
    body.replace(CLOSE, "")
        .split(OPEN)
        .map(str::to_owned)
        .collect()
}
