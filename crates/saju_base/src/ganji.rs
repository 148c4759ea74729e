//! The sexagenary cycle (yukgap, 六十甲子): 60 valid stem-branch pairings.
//!
//! Stems repeat with period 10 and branches with period 12, so a pairing
//! only recurs after lcm(10, 12) = 60 steps, and only pairings with equal
//! stem/branch parity ever occur. The cycle below is the authoritative
//! enumeration; positions are not re-derived per call.

use crate::branch::Branch;
use crate::stem::Stem;

/// One pairing of the sexagenary cycle.
///
/// Fields are private so that only the 60 valid pairings can exist;
/// construct via [`Ganji::from_index`], [`Ganji::from_cycle`], or the
/// parity-checked [`Ganji::from_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganji {
    stem: Stem,
    branch: Branch,
}

const fn of(stem: Stem, branch: Branch) -> Ganji {
    Ganji { stem, branch }
}

/// The 60 pairings in cycle order (index 0 = 甲子, index 59 = 癸亥).
pub const SIXTY_GANJI: [Ganji; 60] = [
    of(Stem::Gap, Branch::Ja),
    of(Stem::Eul, Branch::Chuk),
    of(Stem::Byeong, Branch::In),
    of(Stem::Jeong, Branch::Myo),
    of(Stem::Mu, Branch::Jin),
    of(Stem::Gi, Branch::Sa),
    of(Stem::Gyeong, Branch::O),
    of(Stem::Sin, Branch::Mi),
    of(Stem::Im, Branch::Sin),
    of(Stem::Gye, Branch::Yu),
    of(Stem::Gap, Branch::Sul),
    of(Stem::Eul, Branch::Hae),
    of(Stem::Byeong, Branch::Ja),
    of(Stem::Jeong, Branch::Chuk),
    of(Stem::Mu, Branch::In),
    of(Stem::Gi, Branch::Myo),
    of(Stem::Gyeong, Branch::Jin),
    of(Stem::Sin, Branch::Sa),
    of(Stem::Im, Branch::O),
    of(Stem::Gye, Branch::Mi),
    of(Stem::Gap, Branch::Sin),
    of(Stem::Eul, Branch::Yu),
    of(Stem::Byeong, Branch::Sul),
    of(Stem::Jeong, Branch::Hae),
    of(Stem::Mu, Branch::Ja),
    of(Stem::Gi, Branch::Chuk),
    of(Stem::Gyeong, Branch::In),
    of(Stem::Sin, Branch::Myo),
    of(Stem::Im, Branch::Jin),
    of(Stem::Gye, Branch::Sa),
    of(Stem::Gap, Branch::O),
    of(Stem::Eul, Branch::Mi),
    of(Stem::Byeong, Branch::Sin),
    of(Stem::Jeong, Branch::Yu),
    of(Stem::Mu, Branch::Sul),
    of(Stem::Gi, Branch::Hae),
    of(Stem::Gyeong, Branch::Ja),
    of(Stem::Sin, Branch::Chuk),
    of(Stem::Im, Branch::In),
    of(Stem::Gye, Branch::Myo),
    of(Stem::Gap, Branch::Jin),
    of(Stem::Eul, Branch::Sa),
    of(Stem::Byeong, Branch::O),
    of(Stem::Jeong, Branch::Mi),
    of(Stem::Mu, Branch::Sin),
    of(Stem::Gi, Branch::Yu),
    of(Stem::Gyeong, Branch::Sul),
    of(Stem::Sin, Branch::Hae),
    of(Stem::Im, Branch::Ja),
    of(Stem::Gye, Branch::Chuk),
    of(Stem::Gap, Branch::In),
    of(Stem::Eul, Branch::Myo),
    of(Stem::Byeong, Branch::Jin),
    of(Stem::Jeong, Branch::Sa),
    of(Stem::Mu, Branch::O),
    of(Stem::Gi, Branch::Mi),
    of(Stem::Gyeong, Branch::Sin),
    of(Stem::Sin, Branch::Yu),
    of(Stem::Im, Branch::Sul),
    of(Stem::Gye, Branch::Hae),
];

impl Ganji {
    /// Pairing at a 0-based cycle position, `None` when out of range.
    pub const fn from_index(index: u8) -> Option<Ganji> {
        if index < 60 {
            Some(SIXTY_GANJI[index as usize])
        } else {
            None
        }
    }

    /// Pairing for any signed cycle count, wrapping into [0, 60).
    ///
    /// Counts before the cycle origin wrap backwards: `from_cycle(-1)` is
    /// 癸亥 (index 59).
    pub const fn from_cycle(count: i64) -> Ganji {
        SIXTY_GANJI[count.rem_euclid(60) as usize]
    }

    /// Parity-checked construction from a stem and branch.
    ///
    /// Returns `None` when the stem and branch differ in parity; only 60 of
    /// the 120 naive combinations occur in the cycle.
    pub const fn from_pair(stem: Stem, branch: Branch) -> Option<Ganji> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        let i = (6 * stem.index() as i64 - 5 * branch.index() as i64).rem_euclid(60);
        Some(SIXTY_GANJI[i as usize])
    }

    /// 0-based position in the cycle (甲子=0 .. 癸亥=59).
    pub const fn index(self) -> u8 {
        (6 * self.stem.index() as i64 - 5 * self.branch.index() as i64).rem_euclid(60) as u8
    }

    /// The heavenly stem.
    pub const fn stem(self) -> Stem {
        self.stem
    }

    /// The earthly branch.
    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Two-hanja label, e.g. "甲子".
    pub fn label(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::fmt::Display for Ganji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}
