//! Historical Korean daylight-saving intervals.
//!
//! During these periods civil clocks ran one hour ahead of standard time.
//! Birth records carry the civil reading, so hour classification first
//! subtracts the advance to recover standard time. Intervals are half-open:
//! the starting instant is already summer time, the ending instant is not.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Half-open civil interval `[start, end)` with clocks advanced one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

const fn civil(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    match (NaiveDate::from_ymd_opt(y, mo, d), NaiveTime::from_hms_opt(h, mi, 0)) {
        (Some(date), Some(time)) => NaiveDateTime::new(date, time),
        _ => panic!("bad interval constant"),
    }
}

const fn span(start: NaiveDateTime, end: NaiveDateTime) -> DstInterval {
    DstInterval { start, end }
}

/// Summer-time periods observed in Korea: 1948-1960 and 1987-1988.
pub const DST_INTERVALS: [DstInterval; 12] = [
    span(civil(1948, 6, 1, 0, 0), civil(1948, 9, 13, 0, 0)),
    span(civil(1949, 4, 1, 0, 0), civil(1949, 9, 11, 0, 0)),
    span(civil(1950, 4, 1, 0, 0), civil(1950, 9, 11, 0, 0)),
    span(civil(1951, 5, 6, 0, 0), civil(1951, 9, 9, 0, 0)),
    span(civil(1955, 5, 5, 0, 0), civil(1955, 9, 11, 0, 0)),
    span(civil(1956, 5, 20, 0, 0), civil(1956, 9, 30, 0, 0)),
    span(civil(1957, 5, 6, 0, 0), civil(1957, 9, 29, 0, 0)),
    span(civil(1958, 5, 4, 0, 0), civil(1958, 9, 28, 0, 0)),
    span(civil(1959, 5, 3, 0, 0), civil(1959, 9, 20, 0, 0)),
    span(civil(1960, 5, 1, 0, 0), civil(1960, 9, 18, 0, 0)),
    span(civil(1987, 5, 10, 2, 0), civil(1987, 10, 11, 3, 0)),
    span(civil(1988, 5, 8, 2, 0), civil(1988, 10, 9, 3, 0)),
];

/// Whether the civil instant falls inside a summer-time interval.
pub fn is_dst(instant: NaiveDateTime) -> bool {
    DST_INTERVALS
        .iter()
        .any(|iv| iv.start <= instant && instant < iv.end)
}

/// Civil instant with any summer-time advance removed.
pub fn to_standard_time(instant: NaiveDateTime) -> NaiveDateTime {
    if is_dst(instant) {
        instant - Duration::hours(1)
    } else {
        instant
    }
}
