//! The five elements (wuxing) and yin/yang polarity.
//!
//! The elements form two fixed single-cycle graphs: the production cycle
//! (Wood→Fire→Earth→Metal→Water→Wood) and the destruction cycle
//! (Wood→Earth→Water→Fire→Metal→Wood). Every derived relation in the
//! engine reduces to walks on these two cycles.
//!
//! Clean-room implementation from the standard Ziping texts (Yuanhai Ziping,
//! Sanming Tonghui).

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WuXing {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in production-cycle order.
pub const ALL_ELEMENTS: [WuXing; 5] = [
    WuXing::Wood,
    WuXing::Fire,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Water,
];

impl WuXing {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Mu",
            Self::Fire => "Huo",
            Self::Earth => "Tu",
            Self::Metal => "Jin",
            Self::Water => "Shui",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index into ALL_ELEMENTS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one produces (sheng cycle).
    pub const fn produces(self) -> WuXing {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> WuXing {
        match self {
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
        }
    }

    /// The element this one overcomes (ke cycle).
    pub const fn overcomes(self) -> WuXing {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> WuXing {
        match self {
            Self::Wood => Self::Metal,
            Self::Fire => Self::Water,
            Self::Earth => Self::Wood,
            Self::Metal => Self::Fire,
            Self::Water => Self::Earth,
        }
    }
}

/// Yin/yang polarity attached to stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    /// The opposite polarity.
    pub const fn opposite(self) -> YinYang {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn production_is_single_five_cycle() {
        // Walking produces() from any start visits all 5 elements before returning.
        for start in ALL_ELEMENTS {
            let mut seen = Vec::new();
            let mut cur = start;
            for _ in 0..5 {
                seen.push(cur);
                cur = cur.produces();
            }
            assert_eq!(cur, start);
            seen.sort_by_key(|e| e.index());
            seen.dedup();
            assert_eq!(seen.len(), 5, "production cycle degenerate from {start:?}");
        }
    }

    #[test]
    fn destruction_is_single_five_cycle() {
        for start in ALL_ELEMENTS {
            let mut seen = Vec::new();
            let mut cur = start;
            for _ in 0..5 {
                seen.push(cur);
                cur = cur.overcomes();
            }
            assert_eq!(cur, start);
            seen.sort_by_key(|e| e.index());
            seen.dedup();
            assert_eq!(seen.len(), 5, "destruction cycle degenerate from {start:?}");
        }
    }

    #[test]
    fn produces_inverse_of_produced_by() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.produces().produced_by(), e);
            assert_eq!(e.produced_by().produces(), e);
        }
    }

    #[test]
    fn overcomes_inverse_of_overcome_by() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.overcomes().overcome_by(), e);
            assert_eq!(e.overcome_by().overcomes(), e);
        }
    }

    #[test]
    fn wood_relations() {
        assert_eq!(WuXing::Wood.produces(), WuXing::Fire);
        assert_eq!(WuXing::Wood.overcomes(), WuXing::Earth);
        assert_eq!(WuXing::Wood.overcome_by(), WuXing::Metal);
        assert_eq!(WuXing::Wood.produced_by(), WuXing::Water);
    }

    #[test]
    fn polarity_opposite() {
        assert_eq!(YinYang::Yang.opposite(), YinYang::Yin);
        assert_eq!(YinYang::Yin.opposite(), YinYang::Yang);
    }
}
