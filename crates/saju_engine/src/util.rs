//! Shared helpers for pillar arithmetic.

use saju_base::Ganji;

/// Cycle pairing for stem/branch indices known to share parity.
///
/// `6s - 5b` is the unique cycle position congruent to `s` mod 10 and `b`
/// mod 12; [`Ganji::from_cycle`] wraps it into range. Callers derive both
/// indices from a common offset, so the parity precondition always holds.
pub(crate) fn ganji_at(stem_index: u8, branch_index: u8) -> Ganji {
    Ganji::from_cycle(6 * stem_index as i64 - 5 * branch_index as i64)
}
