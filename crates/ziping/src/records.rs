//! Flat, versioned serialization records.
//!
//! The computation types stay serde-free; these records are the persistence
//! and wire shape. Every record carries an explicit `schema_version` so that
//! policy changes (onset clamp, cascade order) stay detectable downstream.

use serde::{Deserialize, Serialize};

use ziping_chart::{Chart, PatternResult, Pillar, StrengthReport};
use ziping_fortune::FortuneResult;

use crate::analyze::Analysis;

/// Bump when any record layout or embedded policy changes.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarRecord {
    pub stem: String,
    pub branch: String,
}

impl From<Pillar> for PillarRecord {
    fn from(p: Pillar) -> Self {
        Self {
            stem: p.stem.name().to_string(),
            branch: p.branch.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub schema_version: u32,
    pub year: PillarRecord,
    pub month: PillarRecord,
    pub day: PillarRecord,
    pub hour: PillarRecord,
    pub day_master: String,
}

impl From<&Chart> for ChartRecord {
    fn from(chart: &Chart) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            year: chart.year().into(),
            month: chart.month().into(),
            day: chart.day().into(),
            hour: chart.hour().into(),
            day_master: chart.day_master().name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthRecord {
    pub schema_version: u32,
    pub element: String,
    pub polarity: String,
    pub level: String,
    pub support_score: f64,
    pub pressure_score: f64,
    /// Weighted mass per element in Wood/Fire/Earth/Metal/Water order.
    pub distribution: [f64; 5],
}

impl From<&StrengthReport> for StrengthRecord {
    fn from(report: &StrengthReport) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            element: report.element.english_name().to_string(),
            polarity: report.polarity.name().to_string(),
            level: report.level.name().to_string(),
            support_score: report.support_score,
            pressure_score: report.pressure_score,
            distribution: *report.distribution.totals(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub schema_version: u32,
    pub structure: String,
    pub verdict: String,
    pub rule: String,
    pub defining_element: String,
    pub defining_share: f64,
    pub support: String,
    pub purity: String,
}

impl From<&PatternResult> for PatternRecord {
    fn from(result: &PatternResult) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            structure: result.structure.name().to_string(),
            verdict: result.verdict.name().to_string(),
            rule: result.evidence.rule.to_string(),
            defining_element: result.evidence.defining_element.english_name().to_string(),
            defining_share: result.evidence.defining_share,
            support: result.evidence.support.name().to_string(),
            purity: result.evidence.purity.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortunePeriodRecord {
    pub pillar: PillarRecord,
    pub order: u16,
    pub start_age: f64,
    pub end_age: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneRecord {
    pub schema_version: u32,
    pub direction: String,
    pub onset_age: f64,
    /// Provenance: the solar-term boundary the onset was computed from.
    pub boundary_term: String,
    pub boundary_jd: f64,
    pub periods: Vec<FortunePeriodRecord>,
}

impl From<&FortuneResult> for FortuneRecord {
    fn from(result: &FortuneResult) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            direction: result.direction.name().to_string(),
            onset_age: result.onset_age,
            boundary_term: result.boundary.term.name().to_string(),
            boundary_jd: result.boundary.jd,
            periods: result
                .periods
                .iter()
                .map(|p| FortunePeriodRecord {
                    pillar: p.pillar.into(),
                    order: p.order,
                    start_age: p.start_age,
                    end_age: p.end_age,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub schema_version: u32,
    pub chart: ChartRecord,
    pub strength: StrengthRecord,
    pub pattern: PatternRecord,
    pub fortune: FortuneRecord,
}

impl From<&Analysis> for AnalysisRecord {
    fn from(analysis: &Analysis) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            chart: (&analysis.chart).into(),
            strength: (&analysis.strength).into(),
            pattern: (&analysis.pattern).into(),
            fortune: (&analysis.fortune).into(),
        }
    }
}
