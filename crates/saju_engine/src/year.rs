//! Year pillar: governed by the most recent start of spring.

use chrono::{Datelike, NaiveDateTime};
use saju_base::Ganji;
use saju_terms::{SolarTerm, SolarTermIndex};

use crate::types::PillarError;

/// Cycle anchor: 1900 is a 庚子 year (index 36).
const ANCHOR_YEAR: i32 = 1900;
const ANCHOR_INDEX: i64 = 36;

/// Year pillar for a birth instant.
///
/// The governing year is the calendar year of the last Ipchun at or before
/// the instant, not the instant's own calendar year; a birth between New
/// Year and Ipchun belongs to the previous sexagenary year.
pub fn year_pillar(instant: NaiveDateTime, terms: &SolarTermIndex) -> Result<Ganji, PillarError> {
    let ipchun = terms
        .last_at_or_before(instant, |t| t == SolarTerm::Ipchun)
        .ok_or(PillarError::DataInsufficient(
            "no start-of-spring event on record at or before the birth instant",
        ))?;
    let governing = ipchun.at.year();
    Ok(Ganji::from_cycle(
        ANCHOR_INDEX + (governing - ANCHOR_YEAR) as i64,
    ))
}
