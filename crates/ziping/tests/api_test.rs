//! End-to-end API, record, and cache behavior.

use ziping::{
    AnalysisRecord, Analyzer, ChartRequest, CivilDateTime, FortunePeriodRequest, Gender,
    LruAnalysisCache, NoopCache, SCHEMA_VERSION, ZipingError,
};

fn request() -> ChartRequest {
    ChartRequest::new(CivilDateTime::new(2000, 6, 10, 12, 0, 0.0), Gender::Male)
}

#[test]
fn full_pipeline_end_to_end() {
    let analysis = Analyzer::new().analyze(&request()).unwrap();
    assert_eq!(analysis.chart.to_string(), "GengChen RenWu JiHai GengWu");
    assert_eq!(analysis.fortune.periods.len(), 10);
    assert!((analysis.strength.distribution.total() - 8.0).abs() < 1e-9);
}

#[test]
fn invalid_input_rejected_before_computation() {
    let bad = ChartRequest::new(CivilDateTime::new(2000, 2, 30, 12, 0, 0.0), Gender::Male);
    let err = Analyzer::new().analyze(&bad).unwrap_err();
    assert!(matches!(err, ZipingError::Chart(_)));
}

#[test]
fn invalid_period_count_rejected() {
    let err = Analyzer::new()
        .period_count(13)
        .analyze(&request())
        .unwrap_err();
    assert!(matches!(err, ZipingError::Fortune(_)));
}

#[test]
fn fortune_request_against_resolved_chart() {
    let analyzer = Analyzer::new();
    let analysis = analyzer.analyze(&request()).unwrap();
    let fortune_req = FortunePeriodRequest::new(
        analysis.chart,
        request().birth,
        Gender::Male,
    )
    .with_periods(12);
    let fortune = analyzer.fortune_periods(&fortune_req).unwrap();
    assert_eq!(fortune.periods.len(), 12);
    assert_eq!(fortune.direction, analysis.fortune.direction);
    assert_eq!(fortune.onset_age, analysis.fortune.onset_age);
}

#[test]
fn record_serializes_with_schema_version() {
    let analysis = Analyzer::new().analyze(&request()).unwrap();
    let record = AnalysisRecord::from(&analysis);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"schema_version\":1"));

    let parsed: AnalysisRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.schema_version, SCHEMA_VERSION);
    assert_eq!(parsed, record);
    assert_eq!(parsed.chart.day.stem, "Ji");
    assert_eq!(parsed.fortune.periods.len(), 10);
}

#[test]
fn cache_hit_returns_identical_result() {
    let analyzer = Analyzer::new();
    let mut cache = LruAnalysisCache::new(16);

    let first = analyzer.analyze_cached(&request(), &mut cache).unwrap();
    assert_eq!(cache.len(), 1);
    let second = analyzer.analyze_cached(&request(), &mut cache).unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_distinguishes_gender() {
    let analyzer = Analyzer::new();
    let mut cache = LruAnalysisCache::new(16);
    analyzer.analyze_cached(&request(), &mut cache).unwrap();

    let female = ChartRequest::new(request().birth, Gender::Female);
    let result = analyzer.analyze_cached(&female, &mut cache).unwrap();
    assert_eq!(cache.len(), 2);
    // Same chart, opposite fortune direction.
    assert_eq!(result.chart.to_string(), "GengChen RenWu JiHai GengWu");
    assert_ne!(
        result.fortune.direction,
        analyzer.analyze(&request()).unwrap().fortune.direction
    );
}

#[test]
fn cache_evicts_by_recency() {
    let analyzer = Analyzer::new();
    let mut cache = LruAnalysisCache::new(2);
    for day in [10u32, 11, 12] {
        let req = ChartRequest::new(CivilDateTime::new(2000, 6, day, 12, 0, 0.0), Gender::Male);
        analyzer.analyze_cached(&req, &mut cache).unwrap();
    }
    assert_eq!(cache.len(), 2);
}

#[test]
fn noop_cache_always_recomputes() {
    let analyzer = Analyzer::new();
    let mut cache = NoopCache;
    let a = analyzer.analyze_cached(&request(), &mut cache).unwrap();
    let b = analyzer.analyze_cached(&request(), &mut cache).unwrap();
    assert_eq!(a, b);
}

#[test]
fn longitude_correction_flows_through_the_pipeline() {
    let analyzer = Analyzer::new();
    let plain = analyzer.analyze(&request()).unwrap();
    let shifted = analyzer
        .analyze(&request().with_longitude(150.0))
        .unwrap();
    // +600 minutes of mean solar time moves the hour pillar.
    assert_ne!(plain.chart.hour(), shifted.chart.hour());
}
