//! The Ten-Gods relation resolver.
//!
//! `relate_elements` classifies how another (element, polarity) pair stands
//! to the Day Master's. Five mutually exclusive cases are checked in fixed
//! priority (same element, other-overcomes-day, day-overcomes-other,
//! other-produces-day, day-produces-other), and each splits into two
//! categories by polarity match. The function is total over the 5×2×5×2
//! domain: exactly one category for every input, never an unknown.
//!
//! Clean-room implementation from the standard Ziping texts.

use crate::gan::Stem;
use crate::wuxing::{WuXing, YinYang};

/// The 10 relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// Same element, same polarity (peer).
    BiJian,
    /// Same element, opposite polarity (rival peer).
    JieCai,
    /// Day produces other, same polarity (eating god).
    ShiShen,
    /// Day produces other, opposite polarity (hurting officer).
    ShangGuan,
    /// Day overcomes other, same polarity (indirect wealth).
    PianCai,
    /// Day overcomes other, opposite polarity (proper wealth).
    ZhengCai,
    /// Other overcomes day, same polarity (seventh killer).
    QiSha,
    /// Other overcomes day, opposite polarity (proper officer).
    ZhengGuan,
    /// Other produces day, same polarity (indirect resource).
    PianYin,
    /// Other produces day, opposite polarity (proper resource).
    ZhengYin,
}

/// All 10 categories.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

/// Five-way grouping of the categories, used by strength and pattern logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGodGroup {
    /// BiJian/JieCai: same element.
    Companion,
    /// ShiShen/ShangGuan: what the day produces.
    Output,
    /// PianCai/ZhengCai: what the day overcomes.
    Wealth,
    /// QiSha/ZhengGuan: what overcomes the day.
    Officer,
    /// PianYin/ZhengYin: what produces the day.
    Resource,
}

impl TenGod {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "BiJian",
            Self::JieCai => "JieCai",
            Self::ShiShen => "ShiShen",
            Self::ShangGuan => "ShangGuan",
            Self::PianCai => "PianCai",
            Self::ZhengCai => "ZhengCai",
            Self::QiSha => "QiSha",
            Self::ZhengGuan => "ZhengGuan",
            Self::PianYin => "PianYin",
            Self::ZhengYin => "ZhengYin",
        }
    }

    /// Chinese name.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// The five-way group this category belongs to.
    pub const fn group(self) -> TenGodGroup {
        match self {
            Self::BiJian | Self::JieCai => TenGodGroup::Companion,
            Self::ShiShen | Self::ShangGuan => TenGodGroup::Output,
            Self::PianCai | Self::ZhengCai => TenGodGroup::Wealth,
            Self::QiSha | Self::ZhengGuan => TenGodGroup::Officer,
            Self::PianYin | Self::ZhengYin => TenGodGroup::Resource,
        }
    }
}

/// Classify another (element, polarity) against the Day Master's.
pub const fn relate_elements(
    day_element: WuXing,
    day_polarity: YinYang,
    other_element: WuXing,
    other_polarity: YinYang,
) -> TenGod {
    let same_polarity = matches!(
        (day_polarity, other_polarity),
        (YinYang::Yang, YinYang::Yang) | (YinYang::Yin, YinYang::Yin)
    );

    if day_element as u8 == other_element as u8 {
        if same_polarity {
            TenGod::BiJian
        } else {
            TenGod::JieCai
        }
    } else if other_element.overcomes() as u8 == day_element as u8 {
        if same_polarity {
            TenGod::QiSha
        } else {
            TenGod::ZhengGuan
        }
    } else if day_element.overcomes() as u8 == other_element as u8 {
        if same_polarity {
            TenGod::PianCai
        } else {
            TenGod::ZhengCai
        }
    } else if other_element.produces() as u8 == day_element as u8 {
        if same_polarity {
            TenGod::PianYin
        } else {
            TenGod::ZhengYin
        }
    } else {
        // day produces other, the only remaining relation
        if same_polarity {
            TenGod::ShiShen
        } else {
            TenGod::ShangGuan
        }
    }
}

/// Classify another stem against the Day Master stem.
pub const fn relate(day_master: Stem, other: Stem) -> TenGod {
    relate_elements(
        day_master.element(),
        day_master.polarity(),
        other.element(),
        other.polarity(),
    )
}
