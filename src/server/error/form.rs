use thiserror::Error;

/// A rejected admin form field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {message}")]
pub struct FormError {
    /// Label of the offending field as shown in the form.
    pub field: String,
    pub message: String,
}

impl FormError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
