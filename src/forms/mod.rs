use thiserror::Error;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

pub mod auth;
pub mod dish;
pub mod employee;
pub mod floor;
pub mod incident;
pub mod order;
pub mod reservation;
pub mod table;

/// Result type returned by the form conversion helpers.
pub type FormResult<T> = Result<T, FormError>;

/// Errors raised while turning a submitted payload into domain data.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A required text field is empty after sanitization.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    /// A field holds a value outside its accepted set.
    #[error("invalid {field} `{value}`")]
    InvalidValue { field: &'static str, value: String },
}

/// Email check applied to the trimmed value, since submitted addresses
/// are trimmed and lowercased before they reach storage.
pub(crate) fn validate_submitted_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Collapse runs of whitespace and strip control characters from a
/// single-line value.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize each line of a multi-line value, trimming blank lines at
/// the edges and collapsing repeated blank lines.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        let is_empty = line.is_empty();
        if is_empty {
            if previous_empty {
                continue;
            }
            previous_empty = true;
            result.push(String::new());
        } else {
            previous_empty = false;
            result.push(line);
        }
    }

    result.join("\n")
}

/// Sanitize an optional text field, treating blank input as absent.
pub(crate) fn sanitize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(sanitize_multiline_text)
        .filter(|text| !text.is_empty())
}
