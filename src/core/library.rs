use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // The requested transition is not allowed from the book's current state,
    // e.g. checking out a book that is already checked out.
    InvalidState {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn invalid_state(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidState { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::InvalidState { message, .. } => { message.as_str() }
            LibraryError::Validation { message, .. } => { message.as_str() }
            LibraryError::Serialization { message } => { message.as_str() }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidState { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for lending operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    CheckedOut,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        *self == BookStatus::Available
    }
}

impl TryFrom<String> for BookStatus {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "Available" => Ok(BookStatus::Available),
            "CheckedOut" => Ok(BookStatus::CheckedOut),
            _ => Err(LibraryError::serialization(
                format!("unknown book status {:?}", s).as_str())),
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::CheckedOut => write!(f, "CheckedOut"),
        }
    }
}
