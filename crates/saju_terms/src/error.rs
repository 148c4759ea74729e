//! Error type for loading the solar-term table.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while building the solar-term index from its data file.
///
/// Any of these aborts the load; the index is never served partially built.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LoadError {
    /// I/O error reading the data file.
    Io(String),
    /// The file is not a valid JSON object of string entries.
    Json(String),
    /// An entry key is not a `YYYY-MM-DD HH:MM` timestamp.
    Timestamp(String),
    /// An entry value is outside the 24-term vocabulary.
    UnknownTerm(String),
    /// The table parsed but contains no entries.
    Empty,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::Timestamp(key) => write!(f, "bad timestamp '{key}'"),
            Self::UnknownTerm(name) => write!(f, "unknown solar term '{name}'"),
            Self::Empty => write!(f, "solar-term table has no entries"),
        }
    }
}

impl Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
