//! Custom error types for the payout reporter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for payout report operations
#[derive(Error, Debug)]
pub enum PayrollError {
    /// An input source could not be opened or read
    #[error("Cannot read '{path}': {reason}")]
    SourceUnreadable { path: String, reason: String },

    /// A required column is absent from a row
    #[error("Missing required field '{field}' on line {line}")]
    MissingField { field: &'static str, line: usize },

    /// A numeric column holds something that is not a number
    #[error("Invalid number in field '{field}' on line {line}: '{value}'")]
    InvalidNumber {
        field: String,
        value: String,
        line: usize,
    },

    /// A row-level failure, tagged with the input it came from
    #[error("Failed to process {path}")]
    InSource {
        path: String,
        #[source]
        source: Box<PayrollError>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PayrollError {
    /// Create a "source unreadable" error for a path
    pub fn unreadable(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Attach the input path to a row-level error
    pub fn in_source(self, path: impl Into<String>) -> Self {
        Self::InSource {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any source tagging
    pub fn root(&self) -> &PayrollError {
        match self {
            Self::InSource { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this is a missing field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self.root(), Self::MissingField { .. })
    }

    /// Check if this is an invalid number error
    pub fn is_invalid_number(&self) -> bool {
        matches!(self.root(), Self::InvalidNumber { .. })
    }

    /// Check if this is an unreadable source error
    pub fn is_unreadable(&self) -> bool {
        matches!(self.root(), Self::SourceUnreadable { .. })
    }
}

/// Result type alias for payout report operations
pub type PayrollResult<T> = Result<T, PayrollError>;
