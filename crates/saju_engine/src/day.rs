//! Day pillar: whole-day count from a fixed epoch anchor.

use chrono::NaiveDate;
use saju_base::Ganji;

/// Epoch anchor for day counting: 1900-01-01, a 甲戌 day (cycle index 10).
///
/// Calibrated against two independent almanac anchors, 1949-10-01 (甲子)
/// and 2000-01-01 (戊午); both agree on index 10 for this date.
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(d) => d,
    None => panic!("bad epoch constant"),
};

const EPOCH_INDEX: i64 = 10;

/// Day pillar for a calendar date.
///
/// Only the civil date participates; time-of-day is discarded. Dates before
/// the epoch wrap backwards through the cycle.
pub fn day_pillar(date: NaiveDate) -> Ganji {
    let days = date.signed_duration_since(EPOCH).num_days();
    Ganji::from_cycle(EPOCH_INDEX + days)
}
