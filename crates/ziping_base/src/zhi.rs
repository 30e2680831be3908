//! The twelve earthly branches (dizhi) and their hidden components.
//!
//! Each branch carries a primary element and a weighted list of hidden stems
//! (canggan): a dominant component, and for most branches a secondary and a
//! residual one. Weights are the conventional 0.6/0.3/0.1 split (0.7/0.3 for
//! two-component branches, 1.0 for pure branches) and sum to 1.0 per branch.
//! The branch's own element is expressed only through its hidden components;
//! aggregation code must never count it twice.

use crate::gan::Stem;
use crate::wuxing::WuXing;

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (Zi first).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// A weighted hidden stem inside a branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenComponent {
    pub stem: Stem,
    pub weight: f64,
}

impl Branch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based index into ALL_BRANCHES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Create from a 0-based index.
    pub fn from_index(i: u8) -> Option<Self> {
        if (i as usize) < ALL_BRANCHES.len() {
            Some(ALL_BRANCHES[i as usize])
        } else {
            None
        }
    }

    /// Primary element of the branch (the element of its dominant hidden stem).
    pub const fn element(self) -> WuXing {
        match self {
            Self::Yin | Self::Mao => WuXing::Wood,
            Self::Si | Self::Wu => WuXing::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => WuXing::Earth,
            Self::Shen | Self::You => WuXing::Metal,
            Self::Zi | Self::Hai => WuXing::Water,
        }
    }

    /// Hidden components in dominant-to-residual order.
    ///
    /// Conventional canggan table; weights per branch sum to 1.0.
    pub fn hidden_components(self) -> &'static [HiddenComponent] {
        match self {
            Self::Zi => &[HiddenComponent {
                stem: Stem::Gui,
                weight: 1.0,
            }],
            Self::Chou => &[
                HiddenComponent {
                    stem: Stem::Ji,
                    weight: 0.6,
                },
                HiddenComponent {
                    stem: Stem::Gui,
                    weight: 0.3,
                },
                HiddenComponent {
                    stem: Stem::Xin,
                    weight: 0.1,
                },
            ],
            Self::Yin => &[
                HiddenComponent {
                    stem: Stem::Jia,
                    weight: 0.6,
                },
                HiddenComponent {
                    stem: Stem::Bing,
                    weight: 0.3,
                },
                HiddenComponent {
                    stem: Stem::Wu,
                    weight: 0.1,
                },
            ],
            Self::Mao => &[HiddenComponent {
                stem: Stem::Yi,
                weight: 1.0,
            }],
            Self::Chen => &[
                HiddenComponent {
                    stem: Stem::Wu,
                    weight: 0.6,
                },
                HiddenComponent {
                    stem: Stem::Yi,
                    weight: 0.3,
                },
                HiddenComponent {
                    stem: Stem::Gui,
                    weight: 0.1,
                },
            ],
            Self::Si => &[
                HiddenComponent {
                    stem: Stem::Bing,
                    weight: 0.6,
                },
                HiddenComponent {
                    stem: Stem::Wu,
                    weight: 0.3,
                },
                HiddenComponent {
                    stem: Stem::Geng,
                    weight: 0.1,
                },
            ],
            Self::Wu => &[
                HiddenComponent {
                    stem: Stem::Ding,
                    weight: 0.7,
                },
                HiddenComponent {
                    stem: Stem::Ji,
                    weight: 0.3,
                },
            ],
            Self::Wei => &[
                HiddenComponent {
                    stem: Stem::Ji,
                    weight: 0.6,
                },
                HiddenComponent {
                    stem: Stem::Ding,
                    weight: 0.3,
                },
                HiddenComponent {
                    stem: Stem::Yi,
                    weight: 0.1,
                },
            ],
            Self::Shen => &[
                HiddenComponent {
                    stem: Stem::Geng,
                    weight: 0.6,
                },
                HiddenComponent {
                    stem: Stem::Ren,
                    weight: 0.3,
                },
                HiddenComponent {
                    stem: Stem::Wu,
                    weight: 0.1,
                },
            ],
            Self::You => &[HiddenComponent {
                stem: Stem::Xin,
                weight: 1.0,
            }],
            Self::Xu => &[
                HiddenComponent {
                    stem: Stem::Wu,
                    weight: 0.6,
                },
                HiddenComponent {
                    stem: Stem::Xin,
                    weight: 0.3,
                },
                HiddenComponent {
                    stem: Stem::Ding,
                    weight: 0.1,
                },
            ],
            Self::Hai => &[
                HiddenComponent {
                    stem: Stem::Ren,
                    weight: 0.7,
                },
                HiddenComponent {
                    stem: Stem::Jia,
                    weight: 0.3,
                },
            ],
        }
    }

    /// The dominant hidden stem (highest weight, always first).
    pub fn dominant_hidden(self) -> Stem {
        self.hidden_components()[0].stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), Some(*b));
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn hidden_weights_sum_to_one() {
        for b in ALL_BRANCHES {
            let sum: f64 = b.hidden_components().iter().map(|h| h.weight).sum();
            assert!((sum - 1.0).abs() < 1e-9, "{}: sum={sum}", b.name());
        }
    }

    #[test]
    fn hidden_weights_positive_and_at_most_three() {
        for b in ALL_BRANCHES {
            let hs = b.hidden_components();
            assert!(!hs.is_empty() && hs.len() <= 3, "{}", b.name());
            for h in hs {
                assert!(h.weight > 0.0, "{}", b.name());
            }
        }
    }

    #[test]
    fn dominant_hidden_matches_primary_element() {
        for b in ALL_BRANCHES {
            assert_eq!(
                b.dominant_hidden().element(),
                b.element(),
                "{}: dominant hidden stem must carry the primary element",
                b.name()
            );
        }
    }

    #[test]
    fn dominant_listed_first() {
        for b in ALL_BRANCHES {
            let hs = b.hidden_components();
            for h in &hs[1..] {
                assert!(hs[0].weight >= h.weight, "{}", b.name());
            }
        }
    }

    #[test]
    fn pure_branches() {
        for b in [Branch::Zi, Branch::Mao, Branch::You] {
            assert_eq!(b.hidden_components().len(), 1, "{}", b.name());
        }
    }

    #[test]
    fn you_hides_xin_only() {
        let hs = Branch::You.hidden_components();
        assert_eq!(hs.len(), 1);
        assert_eq!(hs[0].stem, Stem::Xin);
        assert!((hs[0].weight - 1.0).abs() < 1e-12);
    }
}
