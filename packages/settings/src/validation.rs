// ABOUTME: Input validation for user settings
// ABOUTME: Sanity checks for a pasted personal API key

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API key cannot contain whitespace")]
    InnerWhitespace,

    #[error("API key contains control characters")]
    ControlCharacters,

    #[error("API key is too long ({0} characters, max 256)")]
    TooLong(usize),
}

/// Longest key we accept; real keys are ~40 characters
pub const MAX_KEY_LENGTH: usize = 256;

/// Validate an already-trimmed, non-empty API key
pub fn validate_api_key(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_control) {
        return Err(ValidationError::ControlCharacters);
    }

    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InnerWhitespace);
    }

    let len = value.chars().count();
    if len > MAX_KEY_LENGTH {
        return Err(ValidationError::TooLong(len));
    }

    Ok(())
}
