//! Hour pillar: two-hour branch windows plus the five-rats starting stem.

use chrono::{Duration, NaiveDateTime, Timelike};
use saju_base::{ALL_BRANCHES, Branch, Ganji, hour_start_stem};

use crate::dst::to_standard_time;
use crate::util::ganji_at;

/// Hour branch for a civil instant.
///
/// Each branch window spans two hours centred on an even clock hour of
/// standard time; the Ja (Rat) window runs 23:30-01:30. Removing the
/// summer-time advance and then shifting back 30 minutes aligns window
/// edges with whole clock hours, after which `((h + 1) mod 24) / 2` selects
/// the branch.
pub fn hour_branch(instant: NaiveDateTime) -> Branch {
    let aligned = to_standard_time(instant) - Duration::minutes(30);
    let index = ((aligned.hour() + 1) % 24) / 2;
    ALL_BRANCHES[index as usize]
}

/// Hour pillar for a birth instant, keyed off the day pillar's stem.
pub fn hour_pillar(instant: NaiveDateTime, day: Ganji) -> Ganji {
    let branch = hour_branch(instant);
    let start = hour_start_stem(day.stem());
    let stem_index = (start.index() + branch.index()) % 10;
    ganji_at(stem_index, branch.index())
}
