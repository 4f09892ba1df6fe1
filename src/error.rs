//! Error types shared across the crate

use thiserror::Error;

/// Errors raised by the validation boundary and by file I/O helpers.
///
/// The projection, scenario, shock, goal and comparison routines are total
/// over validated input and never return this type.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw input field was missing, non-numeric, or out of its domain
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for `InvalidParameter`, `None` otherwise
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
