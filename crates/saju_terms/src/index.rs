//! Time-ordered index of solar-term events with at-or-before lookup.

use chrono::NaiveDateTime;

use crate::term::SolarTerm;

/// One dated solar-term event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermEvent {
    /// Civil timestamp of the term's exact instant.
    pub at: NaiveDateTime,
    /// Which of the 24 terms occurs.
    pub term: SolarTerm,
}

/// Immutable index over all known solar-term events.
///
/// Built once at startup, sorted by timestamp, and read-only afterwards, so
/// it can be shared across concurrent lookups without locking.
#[derive(Debug, Clone)]
pub struct SolarTermIndex {
    events: Vec<TermEvent>,
}

impl SolarTermIndex {
    /// Build an index from events in any order; entries are sorted by
    /// timestamp so ordered queries hold.
    pub fn new(mut events: Vec<TermEvent>) -> Self {
        events.sort_by_key(|e| e.at);
        Self { events }
    }

    /// Number of events in the index.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the index holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in timestamp order.
    pub fn events(&self) -> &[TermEvent] {
        &self.events
    }

    /// First and last covered instants, `None` when the index is empty.
    pub fn coverage(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.events.first()?.at, self.events.last()?.at))
    }

    /// Latest event at or before `instant` whose term satisfies `pred`.
    ///
    /// An event exactly at `instant` qualifies. Returns `None` when no
    /// matching event precedes the instant, i.e. the instant is outside the
    /// table's coverage.
    pub fn last_at_or_before(
        &self,
        instant: NaiveDateTime,
        mut pred: impl FnMut(SolarTerm) -> bool,
    ) -> Option<TermEvent> {
        let cut = self.events.partition_point(|e| e.at <= instant);
        self.events[..cut].iter().rev().copied().find(|e| pred(e.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn sample() -> SolarTermIndex {
        // Deliberately unsorted; `new` must sort.
        SolarTermIndex::new(vec![
            TermEvent { at: at(2000, 3, 5, 14, 43), term: SolarTerm::Gyeongchip },
            TermEvent { at: at(2000, 2, 4, 20, 40), term: SolarTerm::Ipchun },
            TermEvent { at: at(2000, 2, 19, 16, 33), term: SolarTerm::Usu },
        ])
    }

    #[test]
    fn sorts_on_construction() {
        let idx = sample();
        let stamps: Vec<_> = idx.events().iter().map(|e| e.at).collect();
        let mut sorted = stamps.clone();
        sorted.sort();
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn coverage_bounds() {
        let idx = sample();
        assert_eq!(
            idx.coverage(),
            Some((at(2000, 2, 4, 20, 40), at(2000, 3, 5, 14, 43)))
        );
        assert_eq!(SolarTermIndex::new(Vec::new()).coverage(), None);
    }

    #[test]
    fn last_at_or_before_picks_latest_match() {
        let idx = sample();
        let hit = idx.last_at_or_before(at(2000, 3, 1, 0, 0), |_| true).unwrap();
        assert_eq!(hit.term, SolarTerm::Usu);
    }

    #[test]
    fn boundary_is_inclusive() {
        let idx = sample();
        let hit = idx
            .last_at_or_before(at(2000, 3, 5, 14, 43), |_| true)
            .unwrap();
        assert_eq!(hit.term, SolarTerm::Gyeongchip);
    }

    #[test]
    fn predicate_skips_nonmatching_events() {
        let idx = sample();
        // Usu (mid-month) is nearest, but only majors qualify here.
        let hit = idx
            .last_at_or_before(at(2000, 3, 1, 0, 0), |t| t.is_major())
            .unwrap();
        assert_eq!(hit.term, SolarTerm::Ipchun);
    }

    #[test]
    fn before_coverage_is_not_found() {
        let idx = sample();
        assert_eq!(idx.last_at_or_before(at(2000, 1, 1, 0, 0), |_| true), None);
    }
}
