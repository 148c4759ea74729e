//! Month pillar: last major term plus the five-tigers starting stem.

use chrono::NaiveDateTime;
use saju_base::{Ganji, month_start_stem};
use saju_terms::SolarTermIndex;

use crate::types::PillarError;
use crate::util::ganji_at;

/// Month pillar for a birth instant and its resolved year pillar.
///
/// The governing month is opened by the most recent major term at or before
/// the instant. Its position in the annual order (Ipchun = 0) advances both
/// the stem, from the five-tigers starting stem of the year, and the
/// branch, from In (Tiger, index 2). The cycle's first month is the Tiger
/// month, not the Rat month.
pub fn month_pillar(
    instant: NaiveDateTime,
    year: Ganji,
    terms: &SolarTermIndex,
) -> Result<Ganji, PillarError> {
    let event = terms
        .last_at_or_before(instant, |t| t.is_major())
        .ok_or(PillarError::DataInsufficient(
            "no major solar term on record at or before the birth instant",
        ))?;
    // Major terms sit at even annual positions; index/2 is the month offset.
    let offset = event.term.index() / 2;

    let start = month_start_stem(year.stem());
    let stem_index = (start.index() + offset) % 10;
    let branch_index = (2 + offset) % 12;
    Ok(ganji_at(stem_index, branch_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_base::SIXTY_GANJI;
    use saju_terms::{SolarTerm, TermEvent};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn ev(y: i32, mo: u32, d: u32, h: u32, mi: u32, term: SolarTerm) -> TermEvent {
        TermEvent { at: at(y, mo, d, h, mi), term }
    }

    // 庚辰 (index 16), the year pillar of 2000.
    fn year_2000() -> Ganji {
        SIXTY_GANJI[16]
    }

    #[test]
    fn september_2000_is_eul_yu() {
        let idx = SolarTermIndex::new(vec![
            ev(2000, 8, 7, 13, 3, SolarTerm::Ipchu),
            ev(2000, 8, 23, 3, 49, SolarTerm::Cheoseo),
            ev(2000, 9, 7, 15, 59, SolarTerm::Baekro),
            ev(2000, 9, 23, 2, 28, SolarTerm::Chubun),
        ]);
        let g = month_pillar(at(2000, 9, 22, 16, 12), year_2000(), &idx).unwrap();
        assert_eq!(g.label(), "乙酉");
    }

    #[test]
    fn mid_month_terms_do_not_open_months() {
        // Cheoseo is nearer to the instant than Ipchu but is not a cusp.
        let idx = SolarTermIndex::new(vec![
            ev(2000, 8, 7, 13, 3, SolarTerm::Ipchu),
            ev(2000, 8, 23, 3, 49, SolarTerm::Cheoseo),
        ]);
        let g = month_pillar(at(2000, 8, 30, 0, 0), year_2000(), &idx).unwrap();
        assert_eq!(g.label(), "甲申");
    }

    #[test]
    fn last_month_of_the_cycle_wraps_to_chuk() {
        // Sohan carries offset 11: branch (2+11) mod 12 = 1 (Ox).
        let idx = SolarTermIndex::new(vec![ev(2000, 1, 6, 9, 1, SolarTerm::Sohan)]);
        // Year pillar of the governing year 1999, 己卯 (index 15).
        let g = month_pillar(at(2000, 1, 15, 10, 0), SIXTY_GANJI[15], &idx).unwrap();
        assert_eq!(g.label(), "丁丑");
    }

    #[test]
    fn no_preceding_major_term_is_data_insufficient() {
        let idx = SolarTermIndex::new(vec![ev(2000, 9, 23, 2, 28, SolarTerm::Chubun)]);
        assert!(matches!(
            month_pillar(at(2000, 9, 22, 16, 12), year_2000(), &idx),
            Err(PillarError::DataInsufficient(_))
        ));
    }
}
