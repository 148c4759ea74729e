//! Four Pillars (saju) computation engine.
//!
//! Given a civil birth instant and a loaded solar-term index, this crate
//! derives the sexagenary year, month, day, and hour pillars:
//! - Year: anchored on the last start of spring (Ipchun)
//! - Month: opened by the last major term, stems from the five-tigers rule
//! - Day: whole-day count from the 1900-01-01 epoch anchor
//! - Hour: two-hour branch windows with historical summer-time correction,
//!   stems from the five-rats rule
//!
//! Every computation is pure and bounded; the index is read-only and shared
//! by reference, never held as ambient global state.

pub mod day;
pub mod dst;
pub mod hour;
pub mod month;
pub mod pillars;
pub mod types;
pub(crate) mod util;
pub mod year;

pub use day::day_pillar;
pub use dst::{DST_INTERVALS, DstInterval, is_dst, to_standard_time};
pub use hour::{hour_branch, hour_pillar};
pub use month::month_pillar;
pub use pillars::four_pillars;
pub use types::{BirthMoment, FourPillars, PillarError, PillarOutcome};
pub use year::year_pillar;
