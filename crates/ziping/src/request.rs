//! Request types consumed from the caller.

use ziping_chart::Chart;
use ziping_fortune::{DEFAULT_PERIOD_COUNT, Gender};
use ziping_time::CivilDateTime;

/// A full-analysis request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRequest {
    /// Birth instant, UTC.
    pub birth: CivilDateTime,
    /// Gender; only the fortune-period direction depends on it.
    pub gender: Gender,
    /// Optional geographic longitude (degrees east, [-180, 180]) for the
    /// true-solar-time correction.
    pub longitude: Option<f64>,
}

impl ChartRequest {
    pub fn new(birth: CivilDateTime, gender: Gender) -> Self {
        Self {
            birth,
            gender,
            longitude: None,
        }
    }

    pub fn with_longitude(mut self, longitude_deg: f64) -> Self {
        self.longitude = Some(longitude_deg);
        self
    }
}

/// A fortune-period request against an already resolved chart.
///
/// `birth` must be the instant the chart was resolved from (after any
/// true-solar-time correction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FortunePeriodRequest {
    pub chart: Chart,
    pub birth: CivilDateTime,
    pub gender: Gender,
    pub periods: u8,
}

impl FortunePeriodRequest {
    pub fn new(chart: Chart, birth: CivilDateTime, gender: Gender) -> Self {
        Self {
            chart,
            birth,
            gender,
            periods: DEFAULT_PERIOD_COUNT,
        }
    }

    pub fn with_periods(mut self, periods: u8) -> Self {
        self.periods = periods;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_request_defaults() {
        let req = ChartRequest::new(CivilDateTime::new(2000, 6, 10, 12, 0, 0.0), Gender::Male);
        assert_eq!(req.longitude, None);
        let req = req.with_longitude(116.4);
        assert_eq!(req.longitude, Some(116.4));
    }

    #[test]
    fn fortune_request_default_period_count() {
        use ziping_base::{Branch, Stem};
        use ziping_chart::Pillar;
        let chart = Chart::new(
            Pillar::new(Stem::Geng, Branch::Chen),
            Pillar::new(Stem::Ren, Branch::Wu),
            Pillar::new(Stem::Ji, Branch::Hai),
            Pillar::new(Stem::Geng, Branch::Wu),
        );
        let req = FortunePeriodRequest::new(
            chart,
            CivilDateTime::new(2000, 6, 10, 12, 0, 0.0),
            Gender::Female,
        );
        assert_eq!(req.periods, DEFAULT_PERIOD_COUNT);
        assert_eq!(req.with_periods(8).periods, 8);
    }
}
