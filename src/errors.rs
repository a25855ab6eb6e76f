use thiserror::Error;

/// Returned when a `Projection` is constructed with a degenerate domain:
/// non-positive pixel dimensions, or a zero or negative span on either
/// domain axis.
#[derive(Error, Debug)]
#[error("InvalidDomainError: {message}")]
pub struct InvalidDomainError {
    message: String,
}

impl InvalidDomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
