//! The 24 solar terms (jeolgi, 節氣) in annual order.
//!
//! Index 0 is Ipchun (立春, start of spring), which anchors the sexagenary
//! year boundary. Terms at even indices are the 12 "major" terms (jeol)
//! that open the sexagenary months; odd indices are the mid-month terms
//! (jungki), present in the reference tables but unused for month cusps.

/// The 24 solar terms, Ipchun first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baekro,
    Chubun,
    Hanro,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms in annual order (index 0 = Ipchun).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baekro,
    SolarTerm::Chubun,
    SolarTerm::Hanro,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

impl SolarTerm {
    /// 0-based position in the annual order (Ipchun=0 .. Daehan=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Usu => 1,
            Self::Gyeongchip => 2,
            Self::Chunbun => 3,
            Self::Cheongmyeong => 4,
            Self::Gogu => 5,
            Self::Ipha => 6,
            Self::Soman => 7,
            Self::Mangjong => 8,
            Self::Haji => 9,
            Self::Soseo => 10,
            Self::Daeseo => 11,
            Self::Ipchu => 12,
            Self::Cheoseo => 13,
            Self::Baekro => 14,
            Self::Chubun => 15,
            Self::Hanro => 16,
            Self::Sanggang => 17,
            Self::Ipdong => 18,
            Self::Soseol => 19,
            Self::Daeseol => 20,
            Self::Dongji => 21,
            Self::Sohan => 22,
            Self::Daehan => 23,
        }
    }

    /// Term at a 0-based annual position, `None` when out of range.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 24 {
            Some(ALL_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Hangul name as used in the reference data files.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Usu => "우수",
            Self::Gyeongchip => "경칩",
            Self::Chunbun => "춘분",
            Self::Cheongmyeong => "청명",
            Self::Gogu => "곡우",
            Self::Ipha => "입하",
            Self::Soman => "소만",
            Self::Mangjong => "망종",
            Self::Haji => "하지",
            Self::Soseo => "소서",
            Self::Daeseo => "대서",
            Self::Ipchu => "입추",
            Self::Cheoseo => "처서",
            Self::Baekro => "백로",
            Self::Chubun => "추분",
            Self::Hanro => "한로",
            Self::Sanggang => "상강",
            Self::Ipdong => "입동",
            Self::Soseol => "소설",
            Self::Daeseol => "대설",
            Self::Dongji => "동지",
            Self::Sohan => "소한",
            Self::Daehan => "대한",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Usu => "雨水",
            Self::Gyeongchip => "驚蟄",
            Self::Chunbun => "春分",
            Self::Cheongmyeong => "淸明",
            Self::Gogu => "穀雨",
            Self::Ipha => "立夏",
            Self::Soman => "小滿",
            Self::Mangjong => "芒種",
            Self::Haji => "夏至",
            Self::Soseo => "小暑",
            Self::Daeseo => "大暑",
            Self::Ipchu => "立秋",
            Self::Cheoseo => "處暑",
            Self::Baekro => "白露",
            Self::Chubun => "秋分",
            Self::Hanro => "寒露",
            Self::Sanggang => "霜降",
            Self::Ipdong => "立冬",
            Self::Soseol => "小雪",
            Self::Daeseol => "大雪",
            Self::Dongji => "冬至",
            Self::Sohan => "小寒",
            Self::Daehan => "大寒",
        }
    }

    /// Term for a hangul name from the reference data, `None` when the name
    /// is not part of the 24-term vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TERMS.iter().copied().find(|t| t.korean() == name)
    }

    /// Whether this term opens a sexagenary month (jeol).
    pub const fn is_major(self) -> bool {
        self.index() % 2 == 0
    }

    /// Month position for major terms: Ipchun=0 (Tiger month) .. Sohan=11.
    /// `None` for mid-month terms.
    pub const fn month_offset(self) -> Option<u8> {
        if self.is_major() {
            Some(self.index() / 2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_terms_count() {
        assert_eq!(ALL_TERMS.len(), 24);
    }

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn twelve_majors_alternating() {
        let majors: Vec<_> = ALL_TERMS.iter().filter(|t| t.is_major()).collect();
        assert_eq!(majors.len(), 12);
        assert!(SolarTerm::Ipchun.is_major());
        assert!(!SolarTerm::Usu.is_major());
        assert!(SolarTerm::Sohan.is_major());
        assert!(!SolarTerm::Daehan.is_major());
    }

    #[test]
    fn month_offsets_cover_the_year() {
        assert_eq!(SolarTerm::Ipchun.month_offset(), Some(0));
        assert_eq!(SolarTerm::Baekro.month_offset(), Some(7));
        assert_eq!(SolarTerm::Sohan.month_offset(), Some(11));
        assert_eq!(SolarTerm::Chubun.month_offset(), None);
    }

    #[test]
    fn from_name_round_trips() {
        for t in ALL_TERMS {
            assert_eq!(SolarTerm::from_name(t.korean()), Some(t));
        }
        assert_eq!(SolarTerm::from_name("없는절기"), None);
    }
}
