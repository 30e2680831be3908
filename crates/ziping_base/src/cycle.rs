//! The sexagenary cycle: 60 ordered (stem, branch) pairs.
//!
//! Index i maps to (Stem[i mod 10], Branch[i mod 12]); only same-parity
//! combinations occur, so 60 of the 120 raw pairs are reachable. The cycle
//! stamps calendar units and drives fortune-period traversal. Also exposes
//! two classical derived tables: the nayin element of each pair and the void
//! (xun-gap) branches of each decade.

use crate::gan::{ALL_STEMS, Stem};
use crate::wuxing::WuXing;
use crate::zhi::{ALL_BRANCHES, Branch};

/// Number of terms in the cycle.
pub const CYCLE_LEN: u8 = 60;

/// Nayin element per pair of cycle entries (index / 2).
static NAYIN_ELEMENTS: [WuXing; 30] = [
    WuXing::Metal,
    WuXing::Fire,
    WuXing::Wood,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Fire,
    WuXing::Water,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Wood,
    WuXing::Water,
    WuXing::Earth,
    WuXing::Fire,
    WuXing::Wood,
    WuXing::Water,
    WuXing::Metal,
    WuXing::Fire,
    WuXing::Wood,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Fire,
    WuXing::Water,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Wood,
    WuXing::Water,
    WuXing::Earth,
    WuXing::Fire,
    WuXing::Wood,
    WuXing::Water,
];

/// (Stem, Branch) pair at a cycle index (taken modulo 60).
pub fn cycle_pair(index: u8) -> (Stem, Branch) {
    let i = (index % CYCLE_LEN) as usize;
    (ALL_STEMS[i % 10], ALL_BRANCHES[i % 12])
}

/// Cycle index of a (stem, branch) pair.
///
/// Returns None for the 60 parity-mismatched pairs that never occur.
pub fn cycle_index(stem: Stem, branch: Branch) -> Option<u8> {
    if stem.index() % 2 != branch.index() % 2 {
        return None;
    }
    let s = stem.index() as i32;
    let b = branch.index() as i32;
    Some(((s * 6 - b * 5).rem_euclid(60)) as u8)
}

/// Step a cycle index by a signed offset with wraparound.
pub fn cycle_step(index: u8, delta: i32) -> u8 {
    ((index as i32 + delta).rem_euclid(CYCLE_LEN as i32)) as u8
}

/// Nayin (melodic) element of a cycle entry.
pub fn nayin_element(index: u8) -> WuXing {
    NAYIN_ELEMENTS[((index % CYCLE_LEN) / 2) as usize]
}

/// The two void branches of the decade (xun) containing a cycle index.
///
/// Each decade pairs 10 stems with 10 of the 12 branches; the two branches
/// left out are the xun gap.
pub fn void_branches(index: u8) -> [Branch; 2] {
    let xun_start = (index % CYCLE_LEN) / 10 * 10;
    let first_branch = xun_start % 12;
    [
        ALL_BRANCHES[((first_branch + 10) % 12) as usize],
        ALL_BRANCHES[((first_branch + 11) % 12) as usize],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_all_sixty() {
        for i in 0..CYCLE_LEN {
            let (s, b) = cycle_pair(i);
            assert_eq!(cycle_index(s, b), Some(i), "index {i}");
        }
    }

    #[test]
    fn parity_mismatch_rejected() {
        assert_eq!(cycle_index(Stem::Jia, Branch::Chou), None);
        assert_eq!(cycle_index(Stem::Yi, Branch::Zi), None);
    }

    #[test]
    fn first_and_last_pairs() {
        assert_eq!(cycle_pair(0), (Stem::Jia, Branch::Zi));
        assert_eq!(cycle_pair(59), (Stem::Gui, Branch::Hai));
    }

    #[test]
    fn ren_wu_is_eighteen() {
        assert_eq!(cycle_index(Stem::Ren, Branch::Wu), Some(18));
    }

    #[test]
    fn step_wraps_forward_and_backward() {
        assert_eq!(cycle_step(59, 1), 0);
        assert_eq!(cycle_step(0, -1), 59);
        assert_eq!(cycle_step(30, 60), 30);
        assert_eq!(cycle_step(5, -12), 53);
    }

    #[test]
    fn nayin_pairs_share_element() {
        for i in (0..CYCLE_LEN).step_by(2) {
            assert_eq!(nayin_element(i), nayin_element(i + 1), "pair at {i}");
        }
    }

    #[test]
    fn nayin_known_entries() {
        // JiaZi/YiChou = sea metal; BingYin/DingMao = furnace fire;
        // GuiHai closes on great-sea water.
        assert_eq!(nayin_element(0), WuXing::Metal);
        assert_eq!(nayin_element(2), WuXing::Fire);
        assert_eq!(nayin_element(59), WuXing::Water);
    }

    #[test]
    fn void_branches_jiazi_decade() {
        // JiaZi decade uses Zi..You, leaving Xu and Hai void.
        assert_eq!(void_branches(0), [Branch::Xu, Branch::Hai]);
        assert_eq!(void_branches(9), [Branch::Xu, Branch::Hai]);
    }

    #[test]
    fn void_branches_jiaxu_decade() {
        // JiaXu decade (10..19) leaves Shen and You void.
        assert_eq!(void_branches(10), [Branch::Shen, Branch::You]);
    }

    #[test]
    fn void_branches_never_in_decade() {
        for i in 0..CYCLE_LEN {
            let voids = void_branches(i);
            let xun_start = i / 10 * 10;
            for k in 0..10 {
                let (_, b) = cycle_pair(xun_start + k);
                assert!(!voids.contains(&b), "index {i}");
            }
        }
    }
}
