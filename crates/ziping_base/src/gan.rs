//! The ten heavenly stems (tiangan).
//!
//! Each stem carries a fixed (element, polarity) pair; exactly two stems map
//! to each element, one of each polarity. The five combination pairs
//! (stem i with stem i+5) underpin the transformation structures.

use crate::wuxing::{WuXing, YinYang};

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index into ALL_STEMS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Create from a 0-based index.
    pub fn from_index(i: u8) -> Option<Self> {
        if (i as usize) < ALL_STEMS.len() {
            Some(ALL_STEMS[i as usize])
        } else {
            None
        }
    }

    /// Element of the stem.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Jia | Self::Yi => WuXing::Wood,
            Self::Bing | Self::Ding => WuXing::Fire,
            Self::Wu | Self::Ji => WuXing::Earth,
            Self::Geng | Self::Xin => WuXing::Metal,
            Self::Ren | Self::Gui => WuXing::Water,
        }
    }

    /// Polarity of the stem. Even indices are yang, odd are yin.
    pub const fn polarity(self) -> YinYang {
        match self {
            Self::Jia | Self::Bing | Self::Wu | Self::Geng | Self::Ren => YinYang::Yang,
            Self::Yi | Self::Ding | Self::Ji | Self::Xin | Self::Gui => YinYang::Yin,
        }
    }

    /// Combination partner (stem i pairs with stem i+5).
    pub const fn combination_partner(self) -> Stem {
        match self {
            Self::Jia => Self::Ji,
            Self::Yi => Self::Geng,
            Self::Bing => Self::Xin,
            Self::Ding => Self::Ren,
            Self::Wu => Self::Gui,
            Self::Ji => Self::Jia,
            Self::Geng => Self::Yi,
            Self::Xin => Self::Bing,
            Self::Ren => Self::Ding,
            Self::Gui => Self::Wu,
        }
    }

    /// Transformation element produced when this stem combines with its
    /// partner: Jia+Ji→Earth, Yi+Geng→Metal, Bing+Xin→Water, Ding+Ren→Wood,
    /// Wu+Gui→Fire.
    pub const fn transformation_element(self) -> WuXing {
        match self {
            Self::Jia | Self::Ji => WuXing::Earth,
            Self::Yi | Self::Geng => WuXing::Metal,
            Self::Bing | Self::Xin => WuXing::Water,
            Self::Ding | Self::Ren => WuXing::Wood,
            Self::Wu | Self::Gui => WuXing::Fire,
        }
    }
}
