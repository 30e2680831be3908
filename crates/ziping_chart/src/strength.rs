//! Day-Master strength evaluation.
//!
//! Aggregates weighted elemental mass across the chart (one unit per pillar
//! stem, the hidden-component weights per branch) and scores the Day
//! Master's element by supporting vs. pressuring mass. A branch's primary
//! element is expressed only through its hidden components; it is never
//! added a second time.

use ziping_base::{Stem, WuXing, YinYang};

use crate::pillar::Chart;

/// Five-level ordinal strength of the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    ModeratelyWeak,
    Balanced,
    ModeratelyStrong,
    Dominant,
}

impl StrengthLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dominant => "Dominant",
            Self::ModeratelyStrong => "ModeratelyStrong",
            Self::Balanced => "Balanced",
            Self::ModeratelyWeak => "ModeratelyWeak",
            Self::Weak => "Weak",
        }
    }
}

/// Support/pressure ratio thresholds, highest first. Policy constants, not
/// derived.
pub const STRENGTH_THRESHOLDS: [(f64, StrengthLevel); 4] = [
    (1.5, StrengthLevel::Dominant),
    (1.2, StrengthLevel::ModeratelyStrong),
    (0.8, StrengthLevel::Balanced),
    (0.67, StrengthLevel::ModeratelyWeak),
];

/// Weighted elemental mass of a chart. Total mass is always 8.0: one unit
/// per stem plus one unit of hidden weight per branch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementDistribution {
    totals: [f64; 5],
}

impl ElementDistribution {
    /// Accumulate mass for an element.
    pub fn add(&mut self, element: WuXing, weight: f64) {
        self.totals[element.index() as usize] += weight;
    }

    /// Mass of an element.
    pub fn get(&self, element: WuXing) -> f64 {
        self.totals[element.index() as usize]
    }

    /// Total mass across all elements.
    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }

    /// Fraction of total mass carried by an element (0 when the chart is
    /// empty).
    pub fn share(&self, element: WuXing) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.get(element) / total
        } else {
            0.0
        }
    }

    /// Raw per-element totals in element order.
    pub const fn totals(&self) -> &[f64; 5] {
        &self.totals
    }
}

/// The strength report for a chart's Day Master.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthReport {
    pub element: WuXing,
    pub polarity: YinYang,
    pub level: StrengthLevel,
    pub support_score: f64,
    pub pressure_score: f64,
    pub distribution: ElementDistribution,
}

/// Weighted elemental distribution of a chart.
pub fn element_distribution(chart: &Chart) -> ElementDistribution {
    let mut dist = ElementDistribution::default();
    for pillar in chart.pillars() {
        dist.add(pillar.stem.element(), 1.0);
        for hidden in pillar.hidden_components() {
            dist.add(hidden.stem.element(), hidden.weight);
        }
    }
    dist
}

/// Strength of a Day Master against a precomputed distribution.
pub fn strength_from_distribution(day_master: Stem, dist: &ElementDistribution) -> StrengthReport {
    let element = day_master.element();
    let support = dist.get(element) + dist.get(element.produced_by());
    let pressure =
        dist.get(element.produces()) + dist.get(element.overcomes()) + dist.get(element.overcome_by());

    let ratio = if pressure > 0.0 {
        support / pressure
    } else {
        f64::INFINITY
    };

    let mut level = StrengthLevel::Weak;
    for (threshold, l) in STRENGTH_THRESHOLDS {
        if ratio >= threshold {
            level = l;
            break;
        }
    }

    StrengthReport {
        element,
        polarity: day_master.polarity(),
        level,
        support_score: support,
        pressure_score: pressure,
        distribution: *dist,
    }
}

/// Evaluate the Day Master's relative strength.
pub fn evaluate(chart: &Chart) -> StrengthReport {
    let dist = element_distribution(chart);
    strength_from_distribution(chart.day_master(), &dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;
    use ziping_base::{Branch, Stem};

    fn chart(pillars: [(Stem, Branch); 4]) -> Chart {
        Chart::new(
            Pillar::new(pillars[0].0, pillars[0].1),
            Pillar::new(pillars[1].0, pillars[1].1),
            Pillar::new(pillars[2].0, pillars[2].1),
            Pillar::new(pillars[3].0, pillars[3].1),
        )
    }

    #[test]
    fn total_mass_is_eight() {
        let c = chart([
            (Stem::Geng, Branch::Chen),
            (Stem::Ren, Branch::Wu),
            (Stem::Ji, Branch::Hai),
            (Stem::Geng, Branch::Wu),
        ]);
        let dist = element_distribution(&c);
        assert!((dist.total() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn branch_primary_element_not_double_counted() {
        // Hai carries Ren 0.7 + Jia 0.3: exactly 1.0 of hidden mass, no
        // extra unit for the branch's own Water.
        let c = chart([
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::Hai),
        ]);
        let dist = element_distribution(&c);
        // Stems: 4 Wood. Branches: 3×Gui(1.0) + Ren 0.7 = 3.7 Water, Jia 0.3 Wood.
        assert!((dist.get(WuXing::Wood) - 4.3).abs() < 1e-9);
        assert!((dist.get(WuXing::Water) - 3.7).abs() < 1e-9);
    }

    #[test]
    fn support_and_pressure_partition_the_mass() {
        // The two support elements and three pressure elements cover all
        // five, so the scores always sum to the total mass.
        let c = chart([
            (Stem::Geng, Branch::Chen),
            (Stem::Ren, Branch::Wu),
            (Stem::Ji, Branch::Hai),
            (Stem::Geng, Branch::Wu),
        ]);
        let dist = element_distribution(&c);
        for s in [Stem::Jia, Stem::Bing, Stem::Ji, Stem::Xin, Stem::Gui] {
            let report = strength_from_distribution(s, &dist);
            let covered = report.support_score + report.pressure_score;
            assert!((covered - dist.total()).abs() < 1e-9, "{s:?}");
        }
    }

    #[test]
    fn metal_heavy_chart_dominant_for_xin() {
        // Three of four stems metal or metal-producing, metal month branch.
        let c = chart([
            (Stem::Wu, Branch::Xu),
            (Stem::Xin, Branch::You),
            (Stem::Xin, Branch::You),
            (Stem::Geng, Branch::Yin),
        ]);
        let report = evaluate(&c);
        assert_eq!(report.element, WuXing::Metal);
        assert_eq!(report.polarity, YinYang::Yin);
        assert!(report.support_score > report.pressure_score);
        assert!(matches!(
            report.level,
            StrengthLevel::Dominant | StrengthLevel::ModeratelyStrong
        ));
    }

    #[test]
    fn zero_pressure_is_maximal_support() {
        // A pure metal chart leaves Water/Wood/Fire empty for Xin.
        let c = chart([
            (Stem::Xin, Branch::You),
            (Stem::Xin, Branch::You),
            (Stem::Xin, Branch::You),
            (Stem::Xin, Branch::You),
        ]);
        let report = evaluate(&c);
        assert_eq!(report.pressure_score, 0.0);
        assert_eq!(report.level, StrengthLevel::Dominant);
    }

    #[test]
    fn strength_monotone_in_producer_mass() {
        // Increasing the producing element's mass, all else fixed, never
        // lowers the level.
        let day = Stem::Xin; // Metal; producer is Earth
        let mut prev = None;
        for step in 0..40 {
            let mut dist = ElementDistribution::default();
            dist.add(WuXing::Metal, 1.0);
            dist.add(WuXing::Wood, 1.5);
            dist.add(WuXing::Fire, 1.0);
            dist.add(WuXing::Water, 0.5);
            dist.add(WuXing::Earth, step as f64 * 0.2);
            let level = strength_from_distribution(day, &dist).level;
            if let Some(p) = prev {
                assert!(level >= p, "step {step}: {level:?} < {p:?}");
            }
            prev = Some(level);
        }
    }

    #[test]
    fn threshold_boundaries() {
        let day = Stem::Jia; // Wood
        let mk = |support_wood: f64, pressure_metal: f64| {
            let mut dist = ElementDistribution::default();
            dist.add(WuXing::Wood, support_wood);
            dist.add(WuXing::Metal, pressure_metal);
            strength_from_distribution(day, &dist).level
        };
        assert_eq!(mk(1.5, 1.0), StrengthLevel::Dominant);
        assert_eq!(mk(1.2, 1.0), StrengthLevel::ModeratelyStrong);
        assert_eq!(mk(0.8, 1.0), StrengthLevel::Balanced);
        assert_eq!(mk(0.67, 1.0), StrengthLevel::ModeratelyWeak);
        assert_eq!(mk(0.5, 1.0), StrengthLevel::Weak);
    }
}
