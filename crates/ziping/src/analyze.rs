//! The full analysis pipeline: chart, strength, pattern, fortune periods.

use ziping_chart::{
    Chart, PatternResult, StrengthReport, ZiHourPolicy, classify, evaluate, resolve_chart,
};
use ziping_fortune::{DEFAULT_PERIOD_COUNT, FortuneResult, generate};
use ziping_solar::{AnalyticSource, SolarTermSource};
use ziping_time::apply_true_solar_time;

use crate::cache::{AnalysisCache, CacheKey};
use crate::error::ZipingError;
use crate::request::{ChartRequest, FortunePeriodRequest};

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub chart: Chart,
    pub strength: StrengthReport,
    pub pattern: PatternResult,
    pub fortune: FortuneResult,
}

/// Synchronous analyzer over an injected solar source.
///
/// Holds no mutable state; concurrent analyses of different requests are
/// fully independent.
#[derive(Debug, Clone)]
pub struct Analyzer<S: SolarTermSource> {
    source: S,
    zi_policy: ZiHourPolicy,
    periods: u8,
}

impl Default for Analyzer<AnalyticSource> {
    fn default() -> Self {
        Self::with_source(AnalyticSource)
    }
}

impl Analyzer<AnalyticSource> {
    /// Analyzer over the built-in analytic solar source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SolarTermSource> Analyzer<S> {
    /// Analyzer over an injected solar source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            zi_policy: ZiHourPolicy::default(),
            periods: DEFAULT_PERIOD_COUNT,
        }
    }

    /// Select the late-Zi hour policy.
    pub fn zi_policy(mut self, policy: ZiHourPolicy) -> Self {
        self.zi_policy = policy;
        self
    }

    /// Select the fortune-period count (validated at generation time).
    pub fn period_count(mut self, periods: u8) -> Self {
        self.periods = periods;
        self
    }

    /// Run the full pipeline for one request.
    pub fn analyze(&self, request: &ChartRequest) -> Result<Analysis, ZipingError> {
        // Reject malformed input before any correction or search runs.
        request.birth.validate()?;
        let corrected = match request.longitude {
            Some(lon) => apply_true_solar_time(&request.birth, lon)?,
            None => request.birth,
        };

        let chart = resolve_chart(&self.source, &corrected, None, self.zi_policy)?;
        let strength = evaluate(&chart);
        let pattern = classify(&chart)?;
        let fortune = generate(&self.source, &chart, &corrected, request.gender, self.periods)?;

        Ok(Analysis {
            chart,
            strength,
            pattern,
            fortune,
        })
    }

    /// Like [`Analyzer::analyze`], consulting an injected cache first. A hit
    /// returns the complete prior result; a miss computes synchronously and
    /// stores the full result.
    pub fn analyze_cached(
        &self,
        request: &ChartRequest,
        cache: &mut dyn AnalysisCache,
    ) -> Result<Analysis, ZipingError> {
        let key = CacheKey::new(request, self.periods);
        if let Some(hit) = cache.get(&key) {
            return Ok(hit);
        }
        let analysis = self.analyze(request)?;
        cache.put(key, analysis.clone());
        Ok(analysis)
    }

    /// Fortune periods for an already resolved chart.
    pub fn fortune_periods(
        &self,
        request: &FortunePeriodRequest,
    ) -> Result<FortuneResult, ZipingError> {
        Ok(generate(
            &self.source,
            &request.chart,
            &request.birth,
            request.gender,
            request.periods,
        )?)
    }
}
