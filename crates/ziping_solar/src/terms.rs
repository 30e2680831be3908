//! The 24 solar terms.
//!
//! Terms sit at 15° multiples of apparent solar longitude. Indexing starts
//! at Lichun (315°), the boundary that opens both the chart year and the
//! first chart month; the 12 even-indexed terms are the principal terms
//! (jie) that open the 12 chart months.

use ziping_time::CivilDateTime;

/// The 24 solar terms, in chart-year order (Lichun first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SolarTerm {
    Lichun = 0,
    Yushui = 1,
    Jingzhe = 2,
    Chunfen = 3,
    Qingming = 4,
    Guyu = 5,
    Lixia = 6,
    Xiaoman = 7,
    Mangzhong = 8,
    Xiazhi = 9,
    Xiaoshu = 10,
    Dashu = 11,
    Liqiu = 12,
    Chushu = 13,
    Bailu = 14,
    Qiufen = 15,
    Hanlu = 16,
    Shuangjiang = 17,
    Lidong = 18,
    Xiaoxue = 19,
    Daxue = 20,
    Dongzhi = 21,
    Xiaohan = 22,
    Dahan = 23,
}

/// All 24 terms in chart-year order.
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

impl SolarTerm {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lichun => "Lichun",
            Self::Yushui => "Yushui",
            Self::Jingzhe => "Jingzhe",
            Self::Chunfen => "Chunfen",
            Self::Qingming => "Qingming",
            Self::Guyu => "Guyu",
            Self::Lixia => "Lixia",
            Self::Xiaoman => "Xiaoman",
            Self::Mangzhong => "Mangzhong",
            Self::Xiazhi => "Xiazhi",
            Self::Xiaoshu => "Xiaoshu",
            Self::Dashu => "Dashu",
            Self::Liqiu => "Liqiu",
            Self::Chushu => "Chushu",
            Self::Bailu => "Bailu",
            Self::Qiufen => "Qiufen",
            Self::Hanlu => "Hanlu",
            Self::Shuangjiang => "Shuangjiang",
            Self::Lidong => "Lidong",
            Self::Xiaoxue => "Xiaoxue",
            Self::Daxue => "Daxue",
            Self::Dongzhi => "Dongzhi",
            Self::Xiaohan => "Xiaohan",
            Self::Dahan => "Dahan",
        }
    }

    /// Chinese name.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Lichun => "立春",
            Self::Yushui => "雨水",
            Self::Jingzhe => "惊蛰",
            Self::Chunfen => "春分",
            Self::Qingming => "清明",
            Self::Guyu => "谷雨",
            Self::Lixia => "立夏",
            Self::Xiaoman => "小满",
            Self::Mangzhong => "芒种",
            Self::Xiazhi => "夏至",
            Self::Xiaoshu => "小暑",
            Self::Dashu => "大暑",
            Self::Liqiu => "立秋",
            Self::Chushu => "处暑",
            Self::Bailu => "白露",
            Self::Qiufen => "秋分",
            Self::Hanlu => "寒露",
            Self::Shuangjiang => "霜降",
            Self::Lidong => "立冬",
            Self::Xiaoxue => "小雪",
            Self::Daxue => "大雪",
            Self::Dongzhi => "冬至",
            Self::Xiaohan => "小寒",
            Self::Dahan => "大寒",
        }
    }

    /// 0-based index (Lichun = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Create from a 0-based index.
    pub fn from_index(i: u8) -> Option<Self> {
        if (i as usize) < ALL_TERMS.len() {
            Some(ALL_TERMS[i as usize])
        } else {
            None
        }
    }

    /// Apparent solar longitude of the term in degrees.
    pub const fn longitude_deg(self) -> f64 {
        let i = self as u8 as f64;
        let lon = 315.0 + 15.0 * i;
        if lon >= 360.0 { lon - 360.0 } else { lon }
    }

    /// Whether this is a principal term (jie), i.e. a chart-month boundary.
    pub const fn is_principal(self) -> bool {
        (self as u8) % 2 == 0
    }

    /// 0-based chart-month ordinal for principal terms (Lichun=0 … Xiaohan=11).
    pub const fn month_ordinal(self) -> Option<u8> {
        if self.is_principal() {
            Some((self as u8) / 2)
        } else {
            None
        }
    }

    /// Term at a given apparent solar longitude multiple of 15°.
    pub fn from_longitude_deg(lon: f64) -> Option<Self> {
        let norm = lon.rem_euclid(360.0);
        let steps = (norm / 15.0).round();
        if (norm - steps * 15.0).abs() > 1e-6 {
            return None;
        }
        let idx = ((steps as i32 * 15 - 315).rem_euclid(360) / 15) as u8;
        Self::from_index(idx)
    }
}

/// A solar term at an absolute instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// UTC Julian date of the boundary instant.
    pub jd: f64,
}

impl SolarTermEvent {
    /// Boundary instant as a civil date/time.
    pub fn civil(&self) -> CivilDateTime {
        CivilDateTime::from_jd(self.jd)
    }
}
