//! Static domain tables and pure relational algebra for the four-pillars
//! engine.
//!
//! This crate provides:
//! - The five elements and their production/destruction cycles
//! - The 10 stems and 12 branches with weighted hidden components
//! - The 60-term sexagenary cycle (with nayin and void-branch tables)
//! - The Ten-Gods relation resolver
//!
//! Everything here is immutable constant data and total pure functions; no
//! I/O, no shared state.

pub mod cycle;
pub mod gan;
pub mod ten_gods;
pub mod wuxing;
pub mod zhi;

pub use cycle::{
    CYCLE_LEN, cycle_index, cycle_pair, cycle_step, nayin_element, void_branches,
};
pub use gan::{ALL_STEMS, Stem};
pub use ten_gods::{ALL_TEN_GODS, TenGod, TenGodGroup, relate, relate_elements};
pub use wuxing::{ALL_ELEMENTS, WuXing, YinYang};
pub use zhi::{ALL_BRANCHES, Branch, HiddenComponent};
