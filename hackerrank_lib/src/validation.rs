//! Validation rules shared by the smart constructors in [`crate::types`].

use std::sync::OnceLock;

use regex::Regex;

/// Case-insensitive `localpart@domain.tld` pattern. The domain needs at least
/// one dot and the TLD at least two letters.
pub const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

/// Reasons a raw value cannot become a validated domain value.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The field was absent from the source data.
    #[error("{field} is missing")]
    Missing { field: &'static str },
    /// The field was present but empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
    #[error("score must be a finite number, got {0}")]
    NonFiniteScore(f64),
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),
    /// A candidate needs at least one test record.
    #[error("candidate has no test records")]
    NoRecords,
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Rejects the empty string. Whitespace is kept as-is.
pub fn non_empty(input: &str, field: &'static str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Returns true when `input` matches [`EMAIL_PATTERN`].
pub fn is_email(input: &str) -> bool {
    email_regex().is_match(input)
}

/// Rejects empty strings and strings that are not email addresses.
pub fn email(input: &str, field: &'static str) -> Result<(), ValidationError> {
    non_empty(input, field)?;
    if !is_email(input) {
        return Err(ValidationError::InvalidEmail(input.to_string()));
    }
    Ok(())
}

/// Rejects empty strings and strings that are not absolute URLs.
pub fn absolute_url(input: &str, field: &'static str) -> Result<(), ValidationError> {
    non_empty(input, field)?;
    url::Url::parse(input).map_err(|_| ValidationError::InvalidUrl(input.to_string()))?;
    Ok(())
}

/// Unwraps an optional wire field, reporting which field was absent.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
