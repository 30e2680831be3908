//! Structural pattern classification.
//!
//! An ordered cascade of structure detectors with short-circuit on first
//! match; earlier tiers have strictly higher precedence:
//! 1. transformation structures (stem combination in season)
//! 2. single-element-dominant structures
//! 3. dependency ("follow") structures
//! 4. dual-element structures
//! 5. day-pillar-intrinsic structures
//! 6. the default structure from the month's dominant hidden component
//!
//! Every match then resolves support and purity levels, combined through a
//! fixed decision table into the final verdict. The cascade is total: the
//! default tier always resolves, so `PatternAmbiguous` is an unreachable
//! defect signal, not a flow-control path.

use ziping_base::{ALL_ELEMENTS, Branch, Stem, TenGod, TenGodGroup, WuXing, relate};

use crate::error::ChartError;
use crate::pillar::{ALL_POSITIONS, Chart, PillarPosition};
use crate::strength::{ElementDistribution, element_distribution};

// ---------------------------------------------------------------------------
// Policy constants
// ---------------------------------------------------------------------------

/// Minimum weighted share of the Day Master's element for a
/// single-element-dominant structure.
pub const SINGLE_ELEMENT_MIN_SHARE: f64 = 0.6;
/// Maximum share of the controlling element for a single-element structure.
pub const SINGLE_ELEMENT_MAX_CONTROLLER_SHARE: f64 = 0.1;
/// Maximum combined companion+resource units for a dependency structure
/// (the Day Master's own stem unit is the subject and does not count).
pub const DEPENDENCY_MAX_SUPPORT_UNITS: f64 = 1.0;
/// Minimum units of the dominant opposing group for a dependency structure.
pub const DEPENDENCY_MIN_DOMINANT_UNITS: f64 = 2.0;
/// Minimum joint share of the top two elements for a dual-element structure.
pub const DUAL_ELEMENT_MIN_JOINT_SHARE: f64 = 0.8;
/// Share above which an element counts as present for purity analysis.
pub const PURITY_PRESENCE_SHARE: f64 = 0.05;
/// Share the leading element needs for a pure chart.
pub const PURITY_DOMINANT_SHARE: f64 = 0.35;
/// Leading share below which a conflicted chart reads as scattered.
pub const PURITY_SCATTER_SHARE: f64 = 0.25;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Every nameable structure, across all cascade tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternStructure {
    // Tier 1: transformation structures.
    HuaTu,
    HuaJin,
    HuaShui,
    HuaMu,
    HuaHuo,
    // Tier 2: single-element-dominant structures.
    QuZhi,
    YanShang,
    JiaSe,
    CongGe,
    RunXia,
    // Tier 3: dependency structures.
    CongSha,
    CongCai,
    CongEr,
    // Tier 4: dual-element structures.
    ShuiMuXiangSheng,
    MuHuoTongMing,
    JinShuiXiangHan,
    // Tier 5: day-pillar-intrinsic structures.
    KuiGang,
    RiDe,
    RiGui,
    // Tier 6: the default structures, named after the month category.
    BiJianGe,
    JieCaiGe,
    ShiShenGe,
    ShangGuanGe,
    PianCaiGe,
    ZhengCaiGe,
    QiShaGe,
    ZhengGuanGe,
    PianYinGe,
    ZhengYinGe,
}

impl PatternStructure {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HuaTu => "HuaTu",
            Self::HuaJin => "HuaJin",
            Self::HuaShui => "HuaShui",
            Self::HuaMu => "HuaMu",
            Self::HuaHuo => "HuaHuo",
            Self::QuZhi => "QuZhi",
            Self::YanShang => "YanShang",
            Self::JiaSe => "JiaSe",
            Self::CongGe => "CongGe",
            Self::RunXia => "RunXia",
            Self::CongSha => "CongSha",
            Self::CongCai => "CongCai",
            Self::CongEr => "CongEr",
            Self::ShuiMuXiangSheng => "ShuiMuXiangSheng",
            Self::MuHuoTongMing => "MuHuoTongMing",
            Self::JinShuiXiangHan => "JinShuiXiangHan",
            Self::KuiGang => "KuiGang",
            Self::RiDe => "RiDe",
            Self::RiGui => "RiGui",
            Self::BiJianGe => "BiJianGe",
            Self::JieCaiGe => "JieCaiGe",
            Self::ShiShenGe => "ShiShenGe",
            Self::ShangGuanGe => "ShangGuanGe",
            Self::PianCaiGe => "PianCaiGe",
            Self::ZhengCaiGe => "ZhengCaiGe",
            Self::QiShaGe => "QiShaGe",
            Self::ZhengGuanGe => "ZhengGuanGe",
            Self::PianYinGe => "PianYinGe",
            Self::ZhengYinGe => "ZhengYinGe",
        }
    }
}

/// Does the defining element recur outside the defining pillar?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportEvidence {
    Reinforced,
    Isolated,
}

impl SupportEvidence {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reinforced => "Reinforced",
            Self::Isolated => "Isolated",
        }
    }
}

/// How concentrated the chart's elemental spread is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurityLevel {
    Pure,
    Mixed,
    Scattered,
}

impl PurityLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pure => "Pure",
            Self::Mixed => "Mixed",
            Self::Scattered => "Scattered",
        }
    }
}

/// Final qualitative verdict on the matched structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Established,
    Marginal,
    Broken,
}

impl Verdict {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Established => "Established",
            Self::Marginal => "Marginal",
            Self::Broken => "Broken",
        }
    }
}

/// The sub-condition evidence that justified a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEvidence {
    /// The matched rule, for audit output.
    pub rule: &'static str,
    /// The element that embodies the structure.
    pub defining_element: WuXing,
    /// The pillar the structure hangs off.
    pub defining_position: PillarPosition,
    /// Weighted share of the defining element.
    pub defining_share: f64,
    pub support: SupportEvidence,
    pub purity: PurityLevel,
}

/// Classifier output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternResult {
    pub structure: PatternStructure,
    pub verdict: Verdict,
    pub evidence: PatternEvidence,
}

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

struct Candidate {
    structure: PatternStructure,
    defining_element: WuXing,
    defining_position: PillarPosition,
    rule: &'static str,
}

/// Classify a chart's structure.
pub fn classify(chart: &Chart) -> Result<PatternResult, ChartError> {
    let dist = element_distribution(chart);

    let candidate = match detect_transformation(chart)
        .or_else(|| detect_single_element(chart, &dist))
        .or_else(|| detect_dependency(chart, &dist))
        .or_else(|| detect_dual_element(&dist))
        .or_else(|| detect_day_pillar(chart))
    {
        Some(c) => c,
        None => default_candidate(chart)?,
    };

    let support = support_evidence(chart, &candidate);
    let purity = purity_level(chart, &dist);
    let verdict = verdict_from(support, purity);

    Ok(PatternResult {
        structure: candidate.structure,
        verdict,
        evidence: PatternEvidence {
            rule: candidate.rule,
            defining_element: candidate.defining_element,
            defining_position: candidate.defining_position,
            defining_share: dist.share(candidate.defining_element),
            support,
            purity,
        },
    })
}

/// Tier 1: a combination pair across the day and an adjacent pillar whose
/// transformation element is in season (matches the month branch).
fn detect_transformation(chart: &Chart) -> Option<Candidate> {
    let day = chart.day_master();
    for pos in [PillarPosition::Month, PillarPosition::Hour] {
        if chart.pillar(pos).stem != day.combination_partner() {
            continue;
        }
        let elem = day.transformation_element();
        if chart.month().branch.element() == elem {
            return Some(Candidate {
                structure: transformation_structure(elem),
                defining_element: elem,
                defining_position: PillarPosition::Day,
                rule: "day stem combines with an adjacent stem and the month carries the transformation element",
            });
        }
    }
    None
}

const fn transformation_structure(elem: WuXing) -> PatternStructure {
    match elem {
        WuXing::Earth => PatternStructure::HuaTu,
        WuXing::Metal => PatternStructure::HuaJin,
        WuXing::Water => PatternStructure::HuaShui,
        WuXing::Wood => PatternStructure::HuaMu,
        WuXing::Fire => PatternStructure::HuaHuo,
    }
}

/// Tier 2: the Day Master's element dominates and its controller is absent.
fn detect_single_element(chart: &Chart, dist: &ElementDistribution) -> Option<Candidate> {
    let elem = chart.day_master().element();
    if dist.share(elem) >= SINGLE_ELEMENT_MIN_SHARE
        && dist.share(elem.overcome_by()) < SINGLE_ELEMENT_MAX_CONTROLLER_SHARE
    {
        Some(Candidate {
            structure: single_element_structure(elem),
            defining_element: elem,
            defining_position: PillarPosition::Day,
            rule: "day element holds at least 0.6 of the chart and its controller under 0.1",
        })
    } else {
        None
    }
}

const fn single_element_structure(elem: WuXing) -> PatternStructure {
    match elem {
        WuXing::Wood => PatternStructure::QuZhi,
        WuXing::Fire => PatternStructure::YanShang,
        WuXing::Earth => PatternStructure::JiaSe,
        WuXing::Metal => PatternStructure::CongGe,
        WuXing::Water => PatternStructure::RunXia,
    }
}

/// Tier 3: support is nearly absent and one opposing group dominates.
fn detect_dependency(chart: &Chart, dist: &ElementDistribution) -> Option<Candidate> {
    let elem = chart.day_master().element();
    // The Day Master's own stem unit is the subject of the follow, not
    // support for it.
    let companion = dist.get(elem) - 1.0;
    let resource = dist.get(elem.produced_by());
    if companion + resource > DEPENDENCY_MAX_SUPPORT_UNITS {
        return None;
    }

    let officer = dist.get(elem.overcome_by());
    let wealth = dist.get(elem.overcomes());
    let output = dist.get(elem.produces());

    // Ties resolve officer > wealth > output.
    let (units, structure, defining) = if officer >= wealth && officer >= output {
        (officer, PatternStructure::CongSha, elem.overcome_by())
    } else if wealth >= output {
        (wealth, PatternStructure::CongCai, elem.overcomes())
    } else {
        (output, PatternStructure::CongEr, elem.produces())
    };

    if units >= DEPENDENCY_MIN_DOMINANT_UNITS {
        Some(Candidate {
            structure,
            defining_element: defining,
            defining_position: PillarPosition::Day,
            rule: "companion and resource are nearly absent while one opposing group dominates",
        })
    } else {
        None
    }
}

/// Tier 4: two harmonious elements jointly cover the chart.
fn detect_dual_element(dist: &ElementDistribution) -> Option<Candidate> {
    let mut shares: Vec<(WuXing, f64)> = ALL_ELEMENTS.iter().map(|&e| (e, dist.share(e))).collect();
    shares.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let (first, s1) = shares[0];
    let (second, s2) = shares[1];
    if s1 + s2 < DUAL_ELEMENT_MIN_JOINT_SHARE {
        return None;
    }

    let pair = |a: WuXing, b: WuXing| {
        (first == a && second == b) || (first == b && second == a)
    };
    let (structure, defining) = if pair(WuXing::Water, WuXing::Wood) {
        (PatternStructure::ShuiMuXiangSheng, WuXing::Wood)
    } else if pair(WuXing::Wood, WuXing::Fire) {
        (PatternStructure::MuHuoTongMing, WuXing::Fire)
    } else if pair(WuXing::Metal, WuXing::Water) {
        (PatternStructure::JinShuiXiangHan, WuXing::Water)
    } else {
        return None;
    };

    Some(Candidate {
        structure,
        defining_element: defining,
        defining_position: PillarPosition::Day,
        rule: "two producing elements jointly cover at least 0.8 of the chart",
    })
}

/// Day pillars that form the KuiGang structure.
const KUI_GANG_DAYS: [(Stem, Branch); 4] = [
    (Stem::Wu, Branch::Xu),
    (Stem::Geng, Branch::Chen),
    (Stem::Geng, Branch::Xu),
    (Stem::Ren, Branch::Chen),
];

/// Day pillars that form the RiDe structure.
const RI_DE_DAYS: [(Stem, Branch); 4] = [
    (Stem::Jia, Branch::Yin),
    (Stem::Bing, Branch::Chen),
    (Stem::Wu, Branch::Chen),
    (Stem::Ren, Branch::Xu),
];

/// Day pillars that form the RiGui structure.
const RI_GUI_DAYS: [(Stem, Branch); 4] = [
    (Stem::Ding, Branch::You),
    (Stem::Ding, Branch::Hai),
    (Stem::Gui, Branch::Si),
    (Stem::Gui, Branch::Mao),
];

/// Tier 5: named day pillars with their side conditions. KuiGang precedes
/// RiDe (GengChen sits in both sets).
fn detect_day_pillar(chart: &Chart) -> Option<Candidate> {
    let day = chart.day();
    let key = (day.stem, day.branch);
    let day_master = chart.day_master();
    let other_stems = [
        chart.year().stem,
        chart.month().stem,
        chart.hour().stem,
    ];

    let has_wealth_or_officer = other_stems.iter().any(|&s| {
        matches!(
            relate(day_master, s).group(),
            TenGodGroup::Wealth | TenGodGroup::Officer
        )
    });
    if KUI_GANG_DAYS.contains(&key) && !has_wealth_or_officer {
        return Some(Candidate {
            structure: PatternStructure::KuiGang,
            defining_element: day_master.element(),
            defining_position: PillarPosition::Day,
            rule: "KuiGang day pillar with no visible wealth or officer stem",
        });
    }
    if RI_DE_DAYS.contains(&key) && !has_wealth_or_officer {
        return Some(Candidate {
            structure: PatternStructure::RiDe,
            defining_element: day_master.element(),
            defining_position: PillarPosition::Day,
            rule: "RiDe day pillar with no visible wealth or officer stem",
        });
    }
    let has_qisha = other_stems
        .iter()
        .any(|&s| relate(day_master, s) == TenGod::QiSha);
    if RI_GUI_DAYS.contains(&key) && !has_qisha {
        return Some(Candidate {
            structure: PatternStructure::RiGui,
            defining_element: day_master.element(),
            defining_position: PillarPosition::Day,
            rule: "RiGui day pillar with no visible seventh-killer stem",
        });
    }
    None
}

/// Tier 6: the month's dominant hidden component names the structure.
fn default_candidate(chart: &Chart) -> Result<Candidate, ChartError> {
    let Some(dominant) = chart.month().hidden_components().first() else {
        // Unreachable with the static branch tables; fail loudly, never
        // paper over with a default.
        log::error!(
            "month branch {} has no hidden components",
            chart.month().branch.name()
        );
        return Err(ChartError::PatternAmbiguous(
            "month branch resolved no dominant hidden component",
        ));
    };
    let god = relate(chart.day_master(), dominant.stem);
    Ok(Candidate {
        structure: default_structure(god),
        defining_element: dominant.stem.element(),
        defining_position: PillarPosition::Month,
        rule: "named after the month's dominant hidden component category",
    })
}

const fn default_structure(god: TenGod) -> PatternStructure {
    match god {
        TenGod::BiJian => PatternStructure::BiJianGe,
        TenGod::JieCai => PatternStructure::JieCaiGe,
        TenGod::ShiShen => PatternStructure::ShiShenGe,
        TenGod::ShangGuan => PatternStructure::ShangGuanGe,
        TenGod::PianCai => PatternStructure::PianCaiGe,
        TenGod::ZhengCai => PatternStructure::ZhengCaiGe,
        TenGod::QiSha => PatternStructure::QiShaGe,
        TenGod::ZhengGuan => PatternStructure::ZhengGuanGe,
        TenGod::PianYin => PatternStructure::PianYinGe,
        TenGod::ZhengYin => PatternStructure::ZhengYinGe,
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Does the defining element recur outside the defining pillar, as a stem
/// or a dominant hidden component?
fn support_evidence(chart: &Chart, candidate: &Candidate) -> SupportEvidence {
    let elem = candidate.defining_element;
    for pos in ALL_POSITIONS {
        if pos == candidate.defining_position {
            continue;
        }
        let pillar = chart.pillar(pos);
        if pillar.stem.element() == elem || pillar.branch.dominant_hidden().element() == elem {
            return SupportEvidence::Reinforced;
        }
    }
    SupportEvidence::Isolated
}

/// Elemental concentration of the chart.
fn purity_level(chart: &Chart, dist: &ElementDistribution) -> PurityLevel {
    let mut present = 0;
    let mut max_share: f64 = 0.0;
    for e in ALL_ELEMENTS {
        let s = dist.share(e);
        if s > PURITY_PRESENCE_SHARE {
            present += 1;
        }
        max_share = max_share.max(s);
    }

    // The classic conflicted pairing: officer and output both visible.
    let day_elem = chart.day_master().element();
    let conflicting = dist.share(day_elem.overcome_by()) > PURITY_PRESENCE_SHARE
        && dist.share(day_elem.produces()) > PURITY_PRESENCE_SHARE;

    if max_share >= PURITY_DOMINANT_SHARE && present <= 3 {
        PurityLevel::Pure
    } else if present >= 5 || (max_share < PURITY_SCATTER_SHARE && conflicting) {
        PurityLevel::Scattered
    } else {
        PurityLevel::Mixed
    }
}

/// The fixed support × purity decision table. Never a weighted sum.
pub const fn verdict_from(support: SupportEvidence, purity: PurityLevel) -> Verdict {
    match (support, purity) {
        (SupportEvidence::Reinforced, PurityLevel::Pure) => Verdict::Established,
        (SupportEvidence::Reinforced, PurityLevel::Mixed) => Verdict::Marginal,
        (SupportEvidence::Reinforced, PurityLevel::Scattered) => Verdict::Marginal,
        (SupportEvidence::Isolated, PurityLevel::Pure) => Verdict::Marginal,
        (SupportEvidence::Isolated, PurityLevel::Mixed) => Verdict::Broken,
        (SupportEvidence::Isolated, PurityLevel::Scattered) => Verdict::Broken,
    }
}
