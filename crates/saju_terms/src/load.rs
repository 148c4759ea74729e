//! Loader for the solar-term reference table.
//!
//! The table is a JSON object mapping `YYYY-MM-DD HH:MM` civil timestamps
//! to hangul term names:
//!
//! ```json
//! { "2000-02-04 20:40": "입춘", "2000-02-19 16:33": "우수" }
//! ```
//!
//! All timestamps are civil local time for the region the table was built
//! for; no timezone arithmetic is applied.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::LoadError;
use crate::index::{SolarTermIndex, TermEvent};
use crate::term::SolarTerm;

/// Timestamp layout of the table keys.
const KEY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse the JSON table into events.
///
/// Any malformed entry aborts the parse; a table is loaded whole or not at
/// all.
pub fn parse_terms_json(content: &str) -> Result<Vec<TermEvent>, LoadError> {
    let raw: BTreeMap<String, String> = serde_json::from_str(content)?;
    let mut events = Vec::with_capacity(raw.len());
    for (key, name) in &raw {
        let at = NaiveDateTime::parse_from_str(key, KEY_FORMAT)
            .map_err(|_| LoadError::Timestamp(key.clone()))?;
        let term =
            SolarTerm::from_name(name).ok_or_else(|| LoadError::UnknownTerm(name.clone()))?;
        events.push(TermEvent { at, term });
    }
    Ok(events)
}

impl SolarTermIndex {
    /// Build the index from the JSON table text.
    ///
    /// An entry-free table is rejected: an index that can never answer a
    /// query must not be served.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let events = parse_terms_json(content)?;
        if events.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self::new(events))
    }

    /// Read and build the index from a JSON table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
