//! Error types with two reporting tiers.
//!
//! Validation errors come from bad user input and are reported with a
//! short message. Everything else is reported verbosely.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalError {
    /// Invalid month, year, or weekday argument.
    #[error("{0}")]
    Validation(String),

    /// Resolved date falls outside the supported calendar range.
    #[error("date out of range: {year}-{month:02}-01")]
    DateOutOfRange { year: i32, month: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CalError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CalError::Validation(msg.into())
    }

    /// True for errors caused by user input rather than internal failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, CalError::Validation(_))
    }
}
