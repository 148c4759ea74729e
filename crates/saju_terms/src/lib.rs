//! Solar-term vocabulary, reference-table loader, and the immutable
//! time-ordered index the pillar calculators query.
//!
//! This crate provides:
//! - The 24-term vocabulary in annual order, with the major/mid-month split
//! - A JSON loader for the pre-built term table, rejecting malformed input
//! - `SolarTermIndex`, a sorted read-only index with at-or-before lookup

pub mod error;
pub mod index;
pub mod load;
pub mod term;

pub use error::LoadError;
pub use index::{SolarTermIndex, TermEvent};
pub use load::parse_terms_json;
pub use term::{ALL_TERMS, SolarTerm};
