//! Error types used throughout datewise

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for datewise
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DateError {
    /// Unparseable input or impossible calendar fields.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// Unit name that matches no [`crate::TimeUnit`].
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// Name missing from the IANA database.
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// Pattern chrono cannot render for the value.
    #[error("Invalid format pattern: {0}")]
    InvalidFormat(String),

    /// Result outside chrono's representable range.
    #[error("Date out of range during {operation}")]
    OutOfRange { operation: String },

    /// Config file missing, unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DateError {
    /// Build an [`DateError::InvalidDate`] from any displayable input.
    pub fn invalid_date(input: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidDate { input: input.to_string(), reason: reason.into() }
    }

    /// Build an [`DateError::OutOfRange`] naming the failed operation.
    pub fn out_of_range(operation: impl Into<String>) -> Self {
        Self::OutOfRange { operation: operation.into() }
    }

    /// Stable label suitable for structured logging fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InvalidDate { .. } => "invalid_date",
            Self::InvalidUnit(_) => "invalid_unit",
            Self::InvalidTimeZone(_) => "invalid_time_zone",
            Self::InvalidFormat(_) => "invalid_format",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Config(_) => "config",
        }
    }
}

/// Result type alias for datewise operations
pub type Result<T> = std::result::Result<T, DateError>;
