//! Four-pillar assembly for one birth instant.

use saju_terms::SolarTermIndex;

use crate::day::day_pillar;
use crate::hour::hour_pillar;
use crate::month::month_pillar;
use crate::types::{BirthMoment, FourPillars, PillarError};
use crate::year::year_pillar;

/// Compute all four pillars for a birth moment.
///
/// The year pillar is resolved first; when it fails, the month slot is
/// marked [`PillarError::YearUnresolved`] without consulting the index,
/// since the month stem is keyed off the year stem. Day and hour pillars
/// never touch the index and resolve regardless.
///
/// The Ja hour window reaches across midnight (23:30-01:30), but the day
/// pillar is read from the unshifted calendar date: a 23:40 birth keeps its
/// civil date's day pillar.
pub fn four_pillars(moment: &BirthMoment, terms: &SolarTermIndex) -> FourPillars {
    let instant = moment.instant();

    let year = year_pillar(instant, terms);
    let month = match year {
        Ok(y) => month_pillar(instant, y, terms),
        Err(_) => Err(PillarError::YearUnresolved),
    };
    let day = day_pillar(moment.date());
    let hour = hour_pillar(instant, day);

    FourPillars {
        year,
        month,
        day: Ok(day),
        hour: Ok(hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use saju_terms::{SolarTerm, SolarTermIndex, TermEvent};

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> BirthMoment {
        BirthMoment::new(
            NaiveDate::from_ymd_opt(y, mo, d).unwrap(),
            NaiveTime::from_hms_opt(h, mi, 0).unwrap(),
        )
    }

    fn index_2000() -> SolarTermIndex {
        let ev = |y, mo, d, h, mi, term| TermEvent {
            at: NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, 0)
                .unwrap(),
            term,
        };
        SolarTermIndex::new(vec![
            ev(2000, 2, 4, 20, 40, SolarTerm::Ipchun),
            ev(2000, 8, 7, 13, 3, SolarTerm::Ipchu),
            ev(2000, 9, 7, 15, 59, SolarTerm::Baekro),
        ])
    }

    #[test]
    fn year_failure_marks_month_unresolved_only() {
        let idx = index_2000();
        let p = four_pillars(&moment(1999, 6, 1, 12, 0), &idx);
        assert!(matches!(p.year, Err(PillarError::DataInsufficient(_))));
        assert_eq!(p.month, Err(PillarError::YearUnresolved));
        assert!(p.day.is_ok());
        assert!(p.hour.is_ok());
    }

    #[test]
    fn repeated_computation_is_identical() {
        let idx = index_2000();
        let m = moment(2000, 9, 22, 16, 12);
        assert_eq!(four_pillars(&m, &idx), four_pillars(&m, &idx));
    }

    #[test]
    fn late_night_birth_keeps_the_civil_day() {
        let idx = index_2000();
        let p = four_pillars(&moment(2000, 9, 22, 23, 40), &idx);
        // Ja hour of the next sexagenary day, but the day pillar stays on
        // the civil date.
        assert_eq!(p.day.unwrap().label(), "癸未");
        assert_eq!(p.hour.unwrap().stem().hanja(), "壬");
    }
}
