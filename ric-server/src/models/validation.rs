//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A single required field is blank after trimming
    Required { field: &'static str },

    /// Several fields that must all be present; at least one is blank
    RequiredAll { fields: &'static [&'static str] },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::RequiredAll { fields } => write!(f, "{} are required", fields.join(" and ")),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `value`, rejecting it when nothing is left.
pub(crate) fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
