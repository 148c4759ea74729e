//! Input and result types for pillar computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use saju_base::Ganji;

/// Why a pillar could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PillarError {
    /// No qualifying solar-term event precedes the birth instant; the
    /// instant falls outside the loaded table's coverage.
    DataInsufficient(&'static str),
    /// Month pillar skipped because the year pillar was unresolved; the
    /// month stem is keyed off the year stem.
    YearUnresolved,
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataInsufficient(msg) => write!(f, "insufficient term data: {msg}"),
            Self::YearUnresolved => write!(f, "year pillar unresolved"),
        }
    }
}

impl Error for PillarError {}

/// Outcome of a single pillar slot.
pub type PillarOutcome = Result<Ganji, PillarError>;

/// A civil birth date and time-of-day, combined into one instant before any
/// calculation begins. No timezone is attached; all instants are civil
/// local time for the region the reference tables were built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMoment {
    date: NaiveDate,
    time: NaiveTime,
}

impl BirthMoment {
    pub const fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// The calendar date, as written on the birth record.
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The civil time-of-day.
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Date and time combined into one instant.
    pub const fn instant(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }
}

/// The four pillars of one birth instant.
///
/// Slots resolve and fail independently; callers must not assume all four
/// succeed or fail together. Produced fresh per computation, owning no
/// shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    pub year: PillarOutcome,
    pub month: PillarOutcome,
    pub day: PillarOutcome,
    pub hour: PillarOutcome,
}
